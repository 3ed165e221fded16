//! Sources of random market shocks.
//!
//! The simulator never touches a global RNG; it draws from a
//! [`PriceShockSource`] so ticks can be replayed deterministically.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::MAX_TICK_CHANGE;

pub trait PriceShockSource: Send {
    /// Fractional price change for one position, in
    /// `[-MAX_TICK_CHANGE, MAX_TICK_CHANGE]`.
    fn next_change(&mut self) -> f64;

    /// `true` with the given probability.
    fn next_disconnect(&mut self, probability: f64) -> bool;
}

/// Uniform shocks drawn from a standard RNG.
pub struct RandomShockSource {
    rng: StdRng,
}

impl RandomShockSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl PriceShockSource for RandomShockSource {
    fn next_change(&mut self) -> f64 {
        self.rng.gen_range(-MAX_TICK_CHANGE..=MAX_TICK_CHANGE)
    }

    fn next_disconnect(&mut self, probability: f64) -> bool {
        if !probability.is_finite() || probability <= 0.0 {
            return false;
        }
        self.rng.gen_bool(probability.min(1.0))
    }
}

/// Replays fixed sequences, cycling when exhausted. Empty sequences yield
/// no change and no disconnect.
#[derive(Debug, Clone, Default)]
pub struct FixedShockSource {
    changes: Vec<f64>,
    disconnects: Vec<bool>,
    change_idx: usize,
    disconnect_idx: usize,
}

impl FixedShockSource {
    pub fn new(changes: Vec<f64>, disconnects: Vec<bool>) -> Self {
        Self {
            changes,
            disconnects,
            change_idx: 0,
            disconnect_idx: 0,
        }
    }

    pub fn constant(change: f64) -> Self {
        Self::new(vec![change], Vec::new())
    }
}

impl PriceShockSource for FixedShockSource {
    fn next_change(&mut self) -> f64 {
        if self.changes.is_empty() {
            return 0.0;
        }
        let value = self.changes[self.change_idx % self.changes.len()];
        self.change_idx += 1;
        value
    }

    fn next_disconnect(&mut self, _probability: f64) -> bool {
        if self.disconnects.is_empty() {
            return false;
        }
        let value = self.disconnects[self.disconnect_idx % self.disconnects.len()];
        self.disconnect_idx += 1;
        value
    }
}
