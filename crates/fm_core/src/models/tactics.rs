use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Team;
use crate::error::{MatchError, Result};

/// Formations offered by the tactics board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Formation {
    #[default]
    #[serde(rename = "4-4-2")]
    F442,
    #[serde(rename = "4-4-2 Diamond")]
    F442Diamond,
    #[serde(rename = "4-3-3")]
    F433,
    #[serde(rename = "4-3-3 Holding")]
    F433Holding,
    #[serde(rename = "4-2-3-1")]
    F4231,
    #[serde(rename = "3-5-2")]
    F352,
    #[serde(rename = "3-4-3")]
    F343,
    #[serde(rename = "5-3-2")]
    F532,
    #[serde(rename = "4-5-1")]
    F451,
    #[serde(rename = "4-1-4-1")]
    F4141,
}

impl Formation {
    pub const ALL: [Formation; 10] = [
        Formation::F442,
        Formation::F442Diamond,
        Formation::F433,
        Formation::F433Holding,
        Formation::F4231,
        Formation::F352,
        Formation::F343,
        Formation::F532,
        Formation::F451,
        Formation::F4141,
    ];

    /// Canonical label (e.g. "4-3-3 Holding").
    pub fn code(&self) -> &'static str {
        match self {
            Formation::F442 => "4-4-2",
            Formation::F442Diamond => "4-4-2 Diamond",
            Formation::F433 => "4-3-3",
            Formation::F433Holding => "4-3-3 Holding",
            Formation::F4231 => "4-2-3-1",
            Formation::F352 => "3-5-2",
            Formation::F343 => "3-4-3",
            Formation::F532 => "5-3-2",
            Formation::F451 => "4-5-1",
            Formation::F4141 => "4-1-4-1",
        }
    }

    /// Returns (defenders, midfielders, forwards). Always sums to 10.
    pub fn lines(&self) -> (u8, u8, u8) {
        match self {
            Formation::F442 | Formation::F442Diamond => (4, 4, 2),
            Formation::F433 | Formation::F433Holding => (4, 3, 3),
            Formation::F4231 => (4, 5, 1), // 2 DM + 3 AM
            Formation::F352 => (3, 5, 2),
            Formation::F343 => (3, 4, 3),
            Formation::F532 => (5, 3, 2),
            Formation::F451 => (4, 5, 1),
            Formation::F4141 => (4, 5, 1),
        }
    }

    pub fn from_code(code: &str) -> Option<Formation> {
        Formation::ALL.into_iter().find(|f| f.code() == code.trim())
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

/// Player role on the tactics board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Goalkeeper")]
    Goalkeeper,
    #[serde(rename = "Sweeper Keeper")]
    SweeperKeeper,
    #[serde(rename = "Centre-Back")]
    CentreBack,
    #[serde(rename = "Full-Back")]
    FullBack,
    #[serde(rename = "Wing-Back")]
    WingBack,
    #[serde(rename = "Ball-Playing Defender")]
    BallPlayingDefender,
    #[serde(rename = "Libero")]
    Libero,
    #[serde(rename = "Central Midfielder")]
    CentralMidfielder,
    #[serde(rename = "Defensive Midfielder")]
    DefensiveMidfielder,
    #[serde(rename = "Attacking Midfielder")]
    AttackingMidfielder,
    #[serde(rename = "Box-to-Box")]
    BoxToBox,
    #[serde(rename = "Deep-Lying Playmaker")]
    DeepLyingPlaymaker,
    #[serde(rename = "Wide Midfielder")]
    WideMidfielder,
    #[serde(rename = "Winger")]
    Winger,
    #[serde(rename = "Target Man")]
    TargetMan,
    #[serde(rename = "Poacher")]
    Poacher,
    #[serde(rename = "Complete Forward")]
    CompleteForward,
    #[serde(rename = "False Nine")]
    FalseNine,
    #[serde(rename = "Inside Forward")]
    InsideForward,
    #[serde(rename = "Advanced Forward")]
    AdvancedForward,
}

impl Role {
    pub fn group(&self) -> PositionGroup {
        match self {
            Role::Goalkeeper | Role::SweeperKeeper => PositionGroup::Goalkeeper,
            Role::CentreBack
            | Role::FullBack
            | Role::WingBack
            | Role::BallPlayingDefender
            | Role::Libero => PositionGroup::Defender,
            Role::CentralMidfielder
            | Role::DefensiveMidfielder
            | Role::AttackingMidfielder
            | Role::BoxToBox
            | Role::DeepLyingPlaymaker
            | Role::WideMidfielder
            | Role::Winger => PositionGroup::Midfielder,
            Role::TargetMan
            | Role::Poacher
            | Role::CompleteForward
            | Role::FalseNine
            | Role::InsideForward
            | Role::AdvancedForward => PositionGroup::Forward,
        }
    }
}

/// Saved tactics for one side: a formation plus role assignments keyed by player id.
///
/// The base engine accepts this but does not weight strength by it; see
/// [`crate::engine::StrengthModifier`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TacticalSetup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub formation: Formation,
    #[serde(default)]
    pub player_roles: BTreeMap<u32, Role>,
}

impl TacticalSetup {
    pub fn new(name: impl Into<String>, formation: Formation) -> Self {
        Self { name: name.into(), formation, player_roles: BTreeMap::new() }
    }

    pub fn with_role(mut self, player_id: u32, role: Role) -> Self {
        self.player_roles.insert(player_id, role);
        self
    }

    pub fn role_of(&self, player_id: u32) -> Option<Role> {
        self.player_roles.get(&player_id).copied()
    }

    /// Every role assignment must point at a player of `team`.
    pub fn validate(&self, team: &Team) -> Result<()> {
        for player_id in self.player_roles.keys() {
            if team.player(*player_id).is_none() {
                return Err(MatchError::InvalidTactics {
                    team: team.name.clone(),
                    reason: format!("role assigned to unknown player {}", player_id),
                });
            }
        }
        Ok(())
    }
}
