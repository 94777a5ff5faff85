use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Player;
use crate::error::{MatchError, Result};

/// Read-only team snapshot. Roster order does not affect strength.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(id: u32, name: impl Into<String>, players: Vec<Player>) -> Self {
        Self { id, name: name.into(), players }
    }

    /// Structural checks run before kick-off.
    ///
    /// An empty roster is allowed: it plays with zero strength.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(MatchError::InvalidTeam {
                team: format!("#{}", self.id),
                reason: "team name must not be empty".to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(self.players.len());
        for player in &self.players {
            if !seen.insert(player.id) {
                return Err(MatchError::InvalidPlayer {
                    team: self.name.clone(),
                    player_id: player.id,
                    reason: "duplicate player id".to_string(),
                });
            }
            player.validate(&self.name)?;
        }

        Ok(())
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
