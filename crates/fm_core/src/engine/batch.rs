//! Many independent matches of one fixture, run in parallel.
//!
//! Matches share nothing mutable: every seed gets its own controller and
//! generator, so results are identical to running the seeds one by one.

use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;

use super::controller::{MatchController, MatchPlan};
use super::strength::{IdentityModifier, StrengthModifier};
use crate::error::Result;
use crate::models::{MatchResult, Side};

#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub seed: u64,
    pub result: MatchResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// One entry per seed, in the order the seeds were given.
    pub outcomes: Vec<BatchOutcome>,
    pub home_wins: usize,
    pub draws: usize,
    pub away_wins: usize,
    pub avg_home_goals: f64,
    pub avg_away_goals: f64,
    pub avg_home_shots: f64,
    pub avg_away_shots: f64,
}

impl BatchSummary {
    fn from_outcomes(outcomes: Vec<BatchOutcome>) -> Self {
        let n = outcomes.len().max(1) as f64;
        let mut summary = BatchSummary {
            outcomes: Vec::new(),
            home_wins: 0,
            draws: 0,
            away_wins: 0,
            avg_home_goals: 0.0,
            avg_away_goals: 0.0,
            avg_home_shots: 0.0,
            avg_away_shots: 0.0,
        };

        for outcome in &outcomes {
            let result = &outcome.result;
            match result.winner() {
                Some(Side::Home) => summary.home_wins += 1,
                Some(Side::Away) => summary.away_wins += 1,
                None => summary.draws += 1,
            }
            summary.avg_home_goals += result.home_score as f64;
            summary.avg_away_goals += result.away_score as f64;
            summary.avg_home_shots += result.statistics.shots.home as f64;
            summary.avg_away_shots += result.statistics.shots.away as f64;
        }

        summary.avg_home_goals /= n;
        summary.avg_away_goals /= n;
        summary.avg_home_shots /= n;
        summary.avg_away_shots /= n;
        summary.outcomes = outcomes;
        summary
    }

    pub fn matches(&self) -> usize {
        self.outcomes.len()
    }
}

pub fn simulate_batch(plan: &MatchPlan, seeds: &[u64]) -> Result<BatchSummary> {
    simulate_batch_with_modifier(plan, seeds, Arc::new(IdentityModifier))
}

pub fn simulate_batch_with_modifier(
    plan: &MatchPlan,
    seeds: &[u64],
    modifier: Arc<dyn StrengthModifier>,
) -> Result<BatchSummary> {
    plan.validate()?;
    log::info!(
        "Simulating {} matches: {} vs {}",
        seeds.len(),
        plan.home_team.name,
        plan.away_team.name
    );

    let outcomes = seeds
        .par_iter()
        .map(|&seed| {
            let mut controller =
                MatchController::seeded(plan.clone(), seed)?.with_modifier(modifier.clone());
            controller.run_to_completion();
            Ok(BatchOutcome { seed, result: controller.into_result() })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(BatchSummary::from_outcomes(outcomes))
}

/// `count` consecutive seeds starting at `base_seed`.
pub fn seed_range(base_seed: u64, count: usize) -> Vec<u64> {
    (0..count as u64).map(|i| base_seed.wrapping_add(i)).collect()
}
