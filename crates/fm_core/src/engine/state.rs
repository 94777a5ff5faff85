//! Mutable match accumulator.
//!
//! Only the controller mutates this; everything outside sees it read-only.

use serde::Serialize;

use crate::models::{MatchEvent, MatchStatistics, Possession, ShotCounts, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    NotStarted,
    InProgress,
    Finished,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchState {
    minute: u8,
    match_minutes: u8,
    home_score: u16,
    away_score: u16,
    possession: Possession,
    shots: ShotCounts,
    events: Vec<MatchEvent>,
}

impl MatchState {
    pub fn new(match_minutes: u8) -> Self {
        Self {
            minute: 0,
            match_minutes,
            home_score: 0,
            away_score: 0,
            possession: Possession::even(),
            shots: ShotCounts::default(),
            events: Vec::new(),
        }
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn match_minutes(&self) -> u8 {
        self.match_minutes
    }

    pub fn phase(&self) -> MatchPhase {
        if self.minute == 0 {
            MatchPhase::NotStarted
        } else if self.minute >= self.match_minutes {
            MatchPhase::Finished
        } else {
            MatchPhase::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase() == MatchPhase::Finished
    }

    pub fn score(&self) -> (u16, u16) {
        (self.home_score, self.away_score)
    }

    pub fn possession(&self) -> Possession {
        self.possession
    }

    pub fn shots(&self) -> ShotCounts {
        self.shots
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn statistics(&self) -> MatchStatistics {
        MatchStatistics { possession: self.possession, shots: self.shots }
    }

    pub(crate) fn advance_minute(&mut self) -> u8 {
        debug_assert!(!self.is_finished(), "minute advanced past full time");
        self.minute += 1;
        self.minute
    }

    pub(crate) fn set_possession(&mut self, possession: Possession) {
        debug_assert!(
            (possession.total() - 100.0).abs() < 1e-6,
            "possession must sum to 100, got {}",
            possession.total()
        );
        self.possession = possession;
    }

    /// Adds a goal and returns the score after it.
    pub(crate) fn record_goal(&mut self, side: Side) -> (u16, u16) {
        match side {
            Side::Home => self.home_score += 1,
            Side::Away => self.away_score += 1,
        }
        self.score()
    }

    pub(crate) fn record_shot(&mut self, side: Side) {
        self.shots.increment(side);
    }

    pub(crate) fn push_event(&mut self, event: MatchEvent) {
        debug_assert_eq!(event.minute, self.minute, "event logged outside its minute");
        debug_assert!(
            self.events.last().map_or(true, |last| last.minute < event.minute),
            "at most one event per minute, in order"
        );
        self.events.push(event);
    }

    pub(crate) fn take_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }
}
