//! Built-in demo squads.

use crate::models::{Player, PlayerAttributes, Team};

fn player(id: u32, name: &str, attack: u8, defense: u8, stamina: u8, speed: u8, technique: u8) -> Player {
    Player::new(id, name, PlayerAttributes { attack, defense, stamina, speed, technique })
}

pub fn manchester_united() -> Team {
    Team::new(
        1,
        "Manchester United",
        vec![
            player(1, "Marcus Rashford", 85, 45, 80, 90, 82),
            player(2, "Bruno Fernandes", 82, 65, 85, 75, 88),
        ],
    )
}

pub fn real_madrid() -> Team {
    Team::new(
        2,
        "Real Madrid",
        vec![
            player(3, "Vinicius Jr", 88, 40, 85, 95, 87),
            player(4, "Toni Kroos", 78, 72, 80, 65, 90),
        ],
    )
}

pub fn bayern_munich() -> Team {
    Team::new(
        3,
        "Bayern Munich",
        vec![
            player(5, "Harry Kane", 90, 45, 82, 75, 85),
            player(6, "Joshua Kimmich", 80, 85, 88, 78, 86),
        ],
    )
}

pub fn sample_teams() -> Vec<Team> {
    vec![manchester_united(), real_madrid(), bayern_munich()]
}

/// Case-insensitive lookup by team name.
pub fn sample_team(name: &str) -> Option<Team> {
    let wanted = name.trim().to_lowercase();
    sample_teams().into_iter().find(|t| t.name.to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::composite_strength;

    #[test]
    fn test_sample_teams_validate() {
        for team in sample_teams() {
            assert!(team.validate().is_ok(), "{} should be valid", team.name);
            assert_eq!(team.players.len(), 2);
        }
    }

    #[test]
    fn test_player_ids_unique_across_samples() {
        let mut ids: Vec<u32> = sample_teams().iter().flat_map(|t| t.players.iter().map(|p| p.id)).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(sample_team("real madrid").map(|t| t.id), Some(2));
        assert!(sample_team("Arsenal").is_none());
    }

    #[test]
    fn test_bayern_is_strongest() {
        // Man Utd 77.7, Real 78.0, Bayern 79.4
        let strengths: Vec<f64> = sample_teams().iter().map(composite_strength).collect();
        assert!(strengths[2] > strengths[1] && strengths[1] > strengths[0]);
    }
}
