use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Player, Team};

/// Which side of the fixture a team plays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    pub fn is_home(self) -> bool {
        matches!(self, Side::Home)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => f.write_str("home"),
            Side::Away => f.write_str("away"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Goal,
    Shot,
}

/// How a shot that did not go in ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotOutcome {
    Saved,
    Missed,
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Saved => f.write_str("saved"),
            ShotOutcome::Missed => f.write_str("missed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventDetails {
    /// Score after the goal, formatted "H-A".
    Goal { score: String },
    Shot { outcome: ShotOutcome },
}

/// One entry of the match log. At most one is produced per minute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub minute: u8,
    pub event_type: EventType,
    pub side: Side,
    pub player_id: u32,
    pub player_name: String,
    pub team_id: u32,
    pub team_name: String,
    pub details: EventDetails,
}

impl MatchEvent {
    pub fn goal(minute: u8, side: Side, team: &Team, scorer: &Player, score: (u16, u16)) -> Self {
        Self {
            minute,
            event_type: EventType::Goal,
            side,
            player_id: scorer.id,
            player_name: scorer.name.clone(),
            team_id: team.id,
            team_name: team.name.clone(),
            details: EventDetails::Goal { score: format!("{}-{}", score.0, score.1) },
        }
    }

    pub fn shot(minute: u8, side: Side, team: &Team, shooter: &Player, outcome: ShotOutcome) -> Self {
        Self {
            minute,
            event_type: EventType::Shot,
            side,
            player_id: shooter.id,
            player_name: shooter.name.clone(),
            team_id: team.id,
            team_name: team.name.clone(),
            details: EventDetails::Shot { outcome },
        }
    }

    pub fn is_goal(&self) -> bool {
        self.event_type == EventType::Goal
    }

    pub fn shot_outcome(&self) -> Option<ShotOutcome> {
        match &self.details {
            EventDetails::Shot { outcome } => Some(*outcome),
            EventDetails::Goal { .. } => None,
        }
    }
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            EventDetails::Goal { score } => write!(f, "{}' GOAL! {}", self.minute, score),
            EventDetails::Shot { outcome } => write!(f, "{}' Shot {}", self.minute, outcome),
        }
    }
}
