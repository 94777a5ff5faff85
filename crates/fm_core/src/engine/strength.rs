//! Team strength.
//!
//! A team's composite strength is the mean of its players' composite
//! attribute scores. It weights both the possession split and the shot and
//! defense quality draws.

use std::fmt;
use std::sync::Arc;

use crate::models::{TacticalSetup, Team};

/// Mean over players of `(attack + defense + stamina + speed + technique) / 5`.
///
/// An empty roster has strength 0.
pub fn composite_strength(team: &Team) -> f64 {
    if team.players.is_empty() {
        return 0.0;
    }
    let total: f64 = team.players.iter().map(|p| p.attributes.composite()).sum();
    total / team.players.len() as f64
}

/// Hook for letting tactics adjust a team's base strength.
pub trait StrengthModifier: Send + Sync {
    fn adjust(&self, base: f64, tactics: Option<&TacticalSetup>) -> f64;
}

/// Leaves strength untouched; tactics do not influence the odds.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityModifier;

impl StrengthModifier for IdentityModifier {
    fn adjust(&self, base: f64, _tactics: Option<&TacticalSetup>) -> f64 {
        base
    }
}

/// Composite strength followed by the configured modifier.
#[derive(Clone)]
pub struct StrengthCalculator {
    modifier: Arc<dyn StrengthModifier>,
}

impl Default for StrengthCalculator {
    fn default() -> Self {
        Self::new(Arc::new(IdentityModifier))
    }
}

impl fmt::Debug for StrengthCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrengthCalculator").finish_non_exhaustive()
    }
}

impl StrengthCalculator {
    pub fn new(modifier: Arc<dyn StrengthModifier>) -> Self {
        Self { modifier }
    }

    pub fn strength(&self, team: &Team, tactics: Option<&TacticalSetup>) -> f64 {
        let base = composite_strength(team);
        let adjusted = self.modifier.adjust(base, tactics);
        if adjusted.is_finite() && adjusted >= 0.0 {
            adjusted
        } else {
            log::warn!(
                "Strength modifier returned {} for {} (base {:.2}), using 0",
                adjusted,
                team.name,
                base
            );
            0.0
        }
    }
}
