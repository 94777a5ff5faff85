use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// Upper bound for every player attribute.
pub const ATTRIBUTE_MAX: u8 = 100;

/// Read-only player snapshot handed to the engine for one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    #[serde(flatten)]
    pub attributes: PlayerAttributes,
}

/// The five rated attributes, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    pub attack: u8,
    pub defense: u8,
    pub stamina: u8,
    pub speed: u8,
    pub technique: u8,
}

impl Default for PlayerAttributes {
    fn default() -> Self {
        Self { attack: 50, defense: 50, stamina: 50, speed: 50, technique: 50 }
    }
}

impl PlayerAttributes {
    pub fn uniform(value: u8) -> Self {
        Self { attack: value, defense: value, stamina: value, speed: value, technique: value }
    }

    /// Unweighted mean of the five attributes.
    pub fn composite(&self) -> f64 {
        let sum = self.attack as u32
            + self.defense as u32
            + self.stamina as u32
            + self.speed as u32
            + self.technique as u32;
        sum as f64 / 5.0
    }

    fn named(&self) -> [(&'static str, u8); 5] {
        [
            ("attack", self.attack),
            ("defense", self.defense),
            ("stamina", self.stamina),
            ("speed", self.speed),
            ("technique", self.technique),
        ]
    }
}

impl Player {
    pub fn new(id: u32, name: impl Into<String>, attributes: PlayerAttributes) -> Self {
        Self { id, name: name.into(), attributes }
    }

    pub fn validate(&self, team: &str) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(MatchError::InvalidPlayer {
                team: team.to_string(),
                player_id: self.id,
                reason: "player name must not be empty".to_string(),
            });
        }

        for (attribute, value) in self.attributes.named() {
            if value > ATTRIBUTE_MAX {
                return Err(MatchError::InvalidAttribute {
                    player_id: self.id,
                    attribute,
                    value,
                    max: ATTRIBUTE_MAX,
                });
            }
        }

        Ok(())
    }
}
