//! Frame-coupled loop driver
//!
//! One tick = one simulation step followed by one render. The host calls
//! [`GameLoop::tick`] from its display refresh callback and asks for another
//! callback only while it returns [`LoopControl::Continue`], so ticks never
//! overlap.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::render::Surface;
use crate::{GameRng, RandomSource, Simulation};

/// Cloneable stop signal shared between the loop and whoever ends it
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Request exactly one more frame
    Continue,
    /// Do not reschedule
    Stop,
}

pub struct GameLoop<R: RandomSource = GameRng> {
    sim: Simulation<R>,
    stop: StopHandle,
}

impl<R: RandomSource> GameLoop<R> {
    pub fn new(sim: Simulation<R>) -> Self {
        Self {
            sim,
            stop: StopHandle::new(),
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn simulation(&self) -> &Simulation<R> {
        &self.sim
    }

    /// First paint, before any tick runs
    pub fn start<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.sim.render(surface);
    }

    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> LoopControl {
        if self.stop.is_stopped() {
            return LoopControl::Stop;
        }

        self.sim.step();
        self.sim.render(surface);

        if self.stop.is_stopped() {
            log::info!("loop stopped after tick {}", self.sim.tick());
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    }

    /// Run up to `n` ticks; returns how many actually ran
    pub fn run_ticks<S: Surface + ?Sized>(&mut self, n: u64, surface: &mut S) -> u64 {
        let mut ran = 0;
        while ran < n && !self.stop.is_stopped() {
            self.tick(surface);
            ran += 1;
        }
        ran
    }
}
