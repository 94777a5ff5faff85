use thiserror::Error;

/// Input or configuration rejected before a match starts.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid team {team}: {reason}")]
    InvalidTeam { team: String, reason: String },

    #[error("Invalid player {player_id} in team {team}: {reason}")]
    InvalidPlayer { team: String, player_id: u32, reason: String },

    #[error("Attribute {attribute} of player {player_id} out of range: {value} (max {max})")]
    InvalidAttribute { player_id: u32, attribute: &'static str, value: u8, max: u8 },

    #[error("Invalid tactics for team {team}: {reason}")]
    InvalidTactics { team: String, reason: String },

    #[error("Invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("Unsupported schema version: {0}")]
    UnsupportedSchema(u8),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            MatchError::Deserialization(err.to_string())
        } else {
            MatchError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
