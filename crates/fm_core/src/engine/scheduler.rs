use super::rng::RandomSource;
use crate::models::{Possession, Side};

/// Decides whether a minute produces an event and who is attacking.
#[derive(Debug, Clone, Copy)]
pub struct EventScheduler {
    event_rate: f64,
}

impl EventScheduler {
    pub fn new(event_rate: f64) -> Self {
        Self { event_rate }
    }

    /// Draws the trigger and, if it fires, the attacking side.
    ///
    /// The second draw is only taken when the first one triggers.
    pub fn schedule<R: RandomSource>(&self, possession: &Possession, rng: &mut R) -> Option<Side> {
        if !self.is_triggered(rng.unit()) {
            return None;
        }
        Some(attacking_side(rng.unit(), possession))
    }

    pub fn is_triggered(&self, draw: f64) -> bool {
        draw < self.event_rate
    }
}

/// Home attacks iff `draw < possession.home / 100`.
pub fn attacking_side(draw: f64, possession: &Possession) -> Side {
    if draw < possession.share(Side::Home) / 100.0 {
        Side::Home
    } else {
        Side::Away
    }
}
