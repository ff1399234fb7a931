use std::sync::atomic::{AtomicU32, Ordering};

use crate::Side;

/// Source of the coin flips that pick the ball's serve direction
pub trait RandomSource {
    fn coin_flip(&mut self) -> bool;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl RandomSource for GameRng {
    fn coin_flip(&mut self) -> bool {
        use rand::Rng;
        self.0.gen_bool(0.5)
    }
}

/// Replays a fixed sequence of flips, wrapping around at the end.
/// An empty script always answers `true`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    flips: Vec<bool>,
    next: usize,
}

impl ScriptedRng {
    pub fn new(flips: impl IntoIterator<Item = bool>) -> Self {
        Self {
            flips: flips.into_iter().collect(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedRng {
    fn coin_flip(&mut self) -> bool {
        if self.flips.is_empty() {
            return true;
        }
        let flip = self.flips[self.next % self.flips.len()];
        self.next += 1;
        flip
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Side>,
    pub ball_reset: Option<Side>, // Side whose paddle missed
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = None;
        self.ball_reset = None;
    }
}

const EMPTY_SLOT: u32 = u32::MAX; // NaN bit pattern, NaN writes are rejected

/// Latest pointer y (surface-local), written by the input collaborator and
/// taken once per tick. Last write wins; nothing is queued.
#[derive(Debug)]
pub struct PointerSlot {
    bits: AtomicU32,
}

impl PointerSlot {
    pub fn new() -> Self {
        Self {
            bits: AtomicU32::new(EMPTY_SLOT),
        }
    }

    /// Overwrite whatever is pending. NaN positions are ignored.
    pub fn store(&self, y: f32) {
        if y.is_nan() {
            return;
        }
        self.bits.store(y.to_bits(), Ordering::Release);
    }

    /// Remove and return the pending position, if any
    pub fn take(&self) -> Option<f32> {
        let bits = self.bits.swap(EMPTY_SLOT, Ordering::AcqRel);
        (bits != EMPTY_SLOT).then(|| f32::from_bits(bits))
    }

    pub fn is_empty(&self) -> bool {
        self.bits.load(Ordering::Acquire) == EMPTY_SLOT
    }
}

impl Default for PointerSlot {
    fn default() -> Self {
        Self::new()
    }
}
