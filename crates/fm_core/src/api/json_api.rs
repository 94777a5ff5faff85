use serde::{Deserialize, Serialize};

use crate::engine::{EngineConfig, MatchController, MatchPlan};
use crate::error::{MatchError, Result};
use crate::models::{MatchEvent, MatchResult, MatchStatistics, TacticalSetup, Team};

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub home_team: Team,
    pub away_team: Team,
    #[serde(default)]
    pub home_tactics: Option<TacticalSetup>,
    #[serde(default)]
    pub away_tactics: Option<TacticalSetup>,
    /// Omitted fields fall back to the engine defaults.
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

impl MatchRequest {
    pub fn new(seed: u64, home_team: Team, away_team: Team) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            seed,
            home_team,
            away_team,
            home_tactics: None,
            away_tactics: None,
            config: None,
        }
    }

    pub fn into_plan(self) -> Result<MatchPlan> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(MatchError::UnsupportedSchema(self.schema_version));
        }
        let plan = MatchPlan::new(self.home_team, self.away_team)
            .with_tactics(self.home_tactics, self.away_tactics)
            .with_config(self.config.unwrap_or_default());
        plan.validate()?;
        Ok(plan)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub home_score: u16,
    pub away_score: u16,
    pub events: Vec<MatchEvent>,
    pub statistics: MatchStatistics,
}

impl MatchResponse {
    fn from_result(seed: u64, result: MatchResult) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            seed,
            home_score: result.home_score,
            away_score: result.away_score,
            events: result.events,
            statistics: result.statistics,
        }
    }
}

pub fn simulate_request(request: MatchRequest) -> Result<MatchResponse> {
    let seed = request.seed;
    let plan = request.into_plan()?;
    let mut controller = MatchController::seeded(plan, seed)?;
    controller.run_to_completion();
    Ok(MatchResponse::from_result(seed, controller.into_result()))
}

/// Full match from a JSON request string to a JSON response string.
pub fn simulate_match_json(request_json: &str) -> Result<String> {
    let request: MatchRequest = serde_json::from_str(request_json)?;
    let response = simulate_request(request)?;
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(seed: u64) -> serde_json::Value {
        json!({
            "schema_version": 1,
            "seed": seed,
            "home_team": {
                "id": 1,
                "name": "Manchester United",
                "players": [
                    {"id": 1, "name": "Marcus Rashford", "attack": 85, "defense": 45, "stamina": 80, "speed": 90, "technique": 82},
                    {"id": 2, "name": "Bruno Fernandes", "attack": 82, "defense": 65, "stamina": 85, "speed": 75, "technique": 88}
                ]
            },
            "away_team": {
                "id": 2,
                "name": "Real Madrid",
                "players": [
                    {"id": 3, "name": "Vinicius Jr", "attack": 88, "defense": 40, "stamina": 85, "speed": 95, "technique": 87},
                    {"id": 4, "name": "Toni Kroos", "attack": 78, "defense": 72, "stamina": 80, "speed": 65, "technique": 90}
                ]
            },
            "home_tactics": {
                "name": "Counter",
                "formation": "4-2-3-1",
                "player_roles": {"1": "Inside Forward", "2": "Attacking Midfielder"}
            }
        })
    }

    #[test]
    fn test_basic_simulation() {
        let response = simulate_match_json(&request(42).to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["seed"], 42);
        assert!(parsed["home_score"].is_number());
        assert!(parsed["events"].is_array());
        let home = parsed["statistics"]["possession"]["home"].as_f64().unwrap();
        let away = parsed["statistics"]["possession"]["away"].as_f64().unwrap();
        assert!((home + away - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_determinism() {
        let text = request(999).to_string();
        assert_eq!(simulate_match_json(&text).unwrap(), simulate_match_json(&text).unwrap());
    }

    #[test]
    fn test_unsupported_schema() {
        let mut req = request(1);
        req["schema_version"] = json!(2);
        assert!(matches!(simulate_match_json(&req.to_string()), Err(MatchError::UnsupportedSchema(2))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(simulate_match_json("{\"seed\": 1"), Err(MatchError::Deserialization(_))));
    }

    #[test]
    fn test_out_of_range_attribute_rejected() {
        let mut req = request(1);
        req["away_team"]["players"][0]["speed"] = json!(140);
        assert!(matches!(
            simulate_match_json(&req.to_string()),
            Err(MatchError::InvalidAttribute { player_id: 3, .. })
        ));
    }

    #[test]
    fn test_config_override() {
        let mut req = request(7);
        req["config"] = json!({"event_rate": 1.0});
        let response: MatchResponse = serde_json::from_str(&simulate_match_json(&req.to_string()).unwrap()).unwrap();
        assert_eq!(response.events.len(), 90);
    }
}
