//! Finished-match records and where they are kept.
//!
//! The engine never touches storage itself; callers hand a [`MatchRecord`]
//! to a [`MatchHistory`] after full time.

mod error;

pub use error::HistoryError;

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{MatchEvent, MatchResult, MatchStatistics, Team};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_id: Uuid,
    pub played_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub home_team_id: u32,
    pub home_team_name: String,
    pub away_team_id: u32,
    pub away_team_name: String,
    pub home_score: u16,
    pub away_score: u16,
    pub statistics: MatchStatistics,
    pub events: Vec<MatchEvent>,
}

impl MatchRecord {
    pub fn new(home: &Team, away: &Team, result: MatchResult, seed: Option<u64>) -> Self {
        Self {
            match_id: Uuid::new_v4(),
            played_at: Utc::now(),
            seed,
            home_team_id: home.id,
            home_team_name: home.name.clone(),
            away_team_id: away.id,
            away_team_name: away.name.clone(),
            home_score: result.home_score,
            away_score: result.away_score,
            statistics: result.statistics,
            events: result.events,
        }
    }

    /// One-line summary, e.g. "Real Madrid 2 - 1 Bayern Munich".
    pub fn headline(&self) -> String {
        format!(
            "{} {} - {} {}",
            self.home_team_name, self.home_score, self.away_score, self.away_team_name
        )
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

pub trait MatchHistory {
    fn record(&mut self, record: &MatchRecord) -> Result<(), HistoryError>;

    /// All records in the order they were stored.
    fn all(&self) -> Result<Vec<MatchRecord>, HistoryError>;

    fn for_team(&self, team_id: u32) -> Result<Vec<MatchRecord>, HistoryError> {
        Ok(self.all()?.into_iter().filter(|r| r.involves(team_id)).collect())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryHistory {
    records: Vec<MatchRecord>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchHistory for InMemoryHistory {
    fn record(&mut self, record: &MatchRecord) -> Result<(), HistoryError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn all(&self) -> Result<Vec<MatchRecord>, HistoryError> {
        Ok(self.records.clone())
    }
}

/// Append-only file with one JSON record per line.
#[derive(Debug, Clone)]
pub struct JsonLinesHistory {
    path: PathBuf,
}

impl JsonLinesHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MatchHistory for JsonLinesHistory {
    fn record(&mut self, record: &MatchRecord) -> Result<(), HistoryError> {
        let line = serde_json::to_string(record)?;
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}", line)?;
        log::info!("Recorded {} to {:?}", record.headline(), self.path);
        Ok(())
    }

    fn all(&self) -> Result<Vec<MatchRecord>, HistoryError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut records = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line)
                .map_err(|e| HistoryError::Corrupted { line: idx + 1, reason: e.to_string() })?;
            records.push(record);
        }
        log::debug!("Loaded {} records from {:?}", records.len(), self.path);
        Ok(records)
    }
}
