//! The game currently attached to the page

use game_core::StopHandle;

/// Host resource that must be released when its game ends
pub trait Detach {
    fn detach(&mut self);
}

/// A running game's stop signal plus whatever it hooked into the page
pub struct Session<L: Detach> {
    stop: StopHandle,
    listener: L,
}

impl<L: Detach> Session<L> {
    pub fn new(stop: StopHandle, listener: L) -> Self {
        Self { stop, listener }
    }

    /// Stop the loop after its current tick and unhook from the page
    pub fn end(mut self) {
        self.stop.stop();
        self.listener.detach();
    }
}

/// At most one live session per page
pub struct SessionSlot<L: Detach> {
    current: Option<Session<L>>,
}

impl<L: Detach> SessionSlot<L> {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Install `session`, ending whatever ran before it
    pub fn replace(&mut self, session: Session<L>) {
        self.end();
        self.current = Some(session);
    }

    /// End the current session; returns false if there was none
    pub fn end(&mut self) -> bool {
        match self.current.take() {
            Some(session) => {
                session.end();
                true
            }
            None => false,
        }
    }

    /// Drop the session if its loop already stopped on its own
    pub fn release_if_stopped(&mut self) {
        if self.current.as_ref().is_some_and(|s| s.stop.is_stopped()) {
            self.end();
        }
    }
}

impl<L: Detach> Default for SessionSlot<L> {
    fn default() -> Self {
        Self::new()
    }
}
