use std::fmt;

use serde::{Deserialize, Serialize};

use super::{MatchEvent, Side};

/// Possession split in percent. `home + away == 100.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Possession {
    pub home: f64,
    pub away: f64,
}

impl Default for Possession {
    fn default() -> Self {
        Self::even()
    }
}

impl Possession {
    pub const fn even() -> Self {
        Self { home: 50.0, away: 50.0 }
    }

    /// Builds the split from the home share; away is the complement.
    pub fn from_home(home: f64) -> Self {
        Self { home, away: 100.0 - home }
    }

    pub fn share(&self, side: Side) -> f64 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    pub fn total(&self) -> f64 {
        self.home + self.away
    }
}

impl fmt::Display for Possession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}% - {:.1}%", self.home, self.away)
    }
}

/// Shots that did not become goals, per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShotCounts {
    pub home: u16,
    pub away: u16,
}

impl ShotCounts {
    pub fn get(&self, side: Side) -> u16 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    pub(crate) fn increment(&mut self, side: Side) {
        match side {
            Side::Home => self.home += 1,
            Side::Away => self.away += 1,
        }
    }
}

/// Aggregate statistics handed out at full time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MatchStatistics {
    pub possession: Possession,
    pub shots: ShotCounts,
}

/// Final output of a completed match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_score: u16,
    pub away_score: u16,
    pub events: Vec<MatchEvent>,
    pub statistics: MatchStatistics,
}

impl MatchResult {
    pub fn score(&self) -> (u16, u16) {
        (self.home_score, self.away_score)
    }

    /// Winning side, `None` for a draw.
    pub fn winner(&self) -> Option<Side> {
        match self.home_score.cmp(&self.away_score) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn goals(&self) -> impl Iterator<Item = &MatchEvent> {
        self.events.iter().filter(|e| e.is_goal())
    }
}
