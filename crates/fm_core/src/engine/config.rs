//! Engine tuning parameters.
//!
//! Defaults reproduce the reference match model: a 10% chance of an event per
//! minute, the "half defense" save threshold and a 90 minute match.

use std::{env, fs};

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

pub const ENGINE_CONFIG_PATH_ENV: &str = "FM_ENGINE_CONFIG_PATH";

pub const DEFAULT_EVENT_RATE: f64 = 0.10;
pub const DEFAULT_SAVE_RATIO: f64 = 0.5;
pub const DEFAULT_MATCH_MINUTES: u8 = 90;
pub const MAX_MATCH_MINUTES: u8 = 120;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Probability that a given minute produces an event (default: 0.10)
    pub event_rate: f64,
    /// A failed shot counts as saved when it beats this fraction of the defense draw (default: 0.5)
    pub save_ratio: f64,
    /// Minute at which the match is over (default: 90)
    pub match_minutes: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            event_rate: DEFAULT_EVENT_RATE,
            save_ratio: DEFAULT_SAVE_RATIO,
            match_minutes: DEFAULT_MATCH_MINUTES,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file named by `FM_ENGINE_CONFIG_PATH`, or the defaults when unset.
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(ENGINE_CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::from_file(path)
    }

    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MatchError::InvalidConfig(format!("failed to read {}: {}", path.display(), e))
        })?;
        log::debug!("Loaded engine config from {}", path.display());
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.event_rate) {
            return Err(MatchError::InvalidConfig(format!(
                "event_rate must be within 0..=1, got {}",
                self.event_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.save_ratio) {
            return Err(MatchError::InvalidConfig(format!(
                "save_ratio must be within 0..=1, got {}",
                self.save_ratio
            )));
        }
        if self.match_minutes == 0 || self.match_minutes > MAX_MATCH_MINUTES {
            return Err(MatchError::InvalidConfig(format!(
                "match_minutes must be within 1..={}, got {}",
                MAX_MATCH_MINUTES, self.match_minutes
            )));
        }
        Ok(())
    }
}
