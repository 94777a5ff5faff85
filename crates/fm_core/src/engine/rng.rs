//! Randomness capability injected into the match controller.
//!
//! Every match owns its own source. Production code uses a seeded
//! [`ChaCha8Rng`]; tests can feed fixed draws to force a particular branch.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The two kinds of draw the engine needs.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Deterministic per-match generator.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Replays a fixed list of draws, for forcing engine branches in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedDraws {
    units: std::collections::VecDeque<f64>,
    indices: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedDraws {
    pub(crate) fn new(units: &[f64], indices: &[usize]) -> Self {
        Self { units: units.iter().copied().collect(), indices: indices.iter().copied().collect() }
    }

    /// Draws that never trigger an event.
    pub(crate) fn quiet() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl RandomSource for ScriptedDraws {
    // An exhausted script keeps returning 0.99, which is above any sane event rate.
    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.99)
    }

    fn index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % len
    }
}
