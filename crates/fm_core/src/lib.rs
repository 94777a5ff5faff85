//! # fm_core - Minute-by-minute Football Match Engine
//!
//! Turns two read-only team snapshots (and optional tactics) into a 90 minute
//! match: a final score, a chronological event log and possession/shot
//! statistics.
//!
//! ## Features
//! - Deterministic simulation (same seed = same result)
//! - Step mode (one minute per call) and full-match mode backed by the same tick
//! - Injected randomness and pluggable tactics modifier
//! - JSON API, parallel batch runs and a JSON-lines result history

pub mod api;
pub mod data;
pub mod engine;
pub mod error;
pub mod history;
pub mod models;

pub use api::{simulate_match_json, MatchRequest, MatchResponse};
pub use engine::{
    simulate_batch, BatchSummary, EngineConfig, MatchController, MatchPhase, MatchPlan,
    RandomSource, StrengthModifier, TickReport,
};
pub use error::{MatchError, Result};
pub use history::{HistoryError, InMemoryHistory, JsonLinesHistory, MatchHistory, MatchRecord};
pub use models::{
    EventType, Formation, MatchEvent, MatchResult, MatchStatistics, Player, PlayerAttributes,
    Possession, Role, ShotOutcome, Side, TacticalSetup, Team,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    fn sha256_hex(bytes: &[u8]) -> String {
        let digest = Sha256::digest(bytes);
        digest.iter().map(|b| format!("{:02x}", b)).collect()
    }

    fn request_json(seed: u64) -> String {
        let request = MatchRequest::new(seed, data::real_madrid(), data::bayern_munich());
        serde_json::to_string(&request).unwrap()
    }

    #[test]
    fn test_response_json_determinism_sha256() {
        let h1 = sha256_hex(simulate_match_json(&request_json(123456)).unwrap().as_bytes());
        let h2 = sha256_hex(simulate_match_json(&request_json(123456)).unwrap().as_bytes());
        assert_eq!(h1, h2, "Same seed should produce identical response JSON");
    }

    #[test]
    fn test_different_seeds_diverge() {
        let logs: Vec<String> = (0..10)
            .map(|seed| {
                let mut request: MatchRequest = serde_json::from_str(&request_json(seed)).unwrap();
                request.config = Some(EngineConfig { event_rate: 0.5, ..EngineConfig::default() });
                let response = api::simulate_request(request).unwrap();
                serde_json::to_string(&response.events).unwrap()
            })
            .collect();
        let distinct: std::collections::HashSet<&String> = logs.iter().collect();
        assert!(distinct.len() > 1, "ten seeds should not all produce the same log");
    }

    #[test]
    fn test_match_simulation_realistic_output() {
        let plan = MatchPlan::new(data::manchester_united(), data::real_madrid());
        let summary = simulate_batch(&plan, &engine::seed_range(0, 200)).unwrap();

        let events_per_match = summary
            .outcomes
            .iter()
            .map(|o| o.result.events.len())
            .sum::<usize>() as f64
            / summary.matches() as f64;
        let avg_possession = summary
            .outcomes
            .iter()
            .map(|o| o.result.statistics.possession.home)
            .sum::<f64>()
            / summary.matches() as f64;

        // 10% per minute over 90 minutes
        assert!((6.0..=12.0).contains(&events_per_match), "events per match: {}", events_per_match);
        // 77.7 vs 78.0
        assert!((avg_possession - 49.9).abs() < 0.1, "home possession: {}", avg_possession);
        // Near-equal strengths: roughly half of all attacks score.
        let goals = summary.avg_home_goals + summary.avg_away_goals;
        assert!((3.0..=6.0).contains(&goals), "goals per match: {}", goals);
    }
}
