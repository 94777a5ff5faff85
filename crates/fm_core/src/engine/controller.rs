//! Minute-by-minute match driver.
//!
//! [`MatchController::tick`] simulates exactly one minute. Full-match runs
//! ([`MatchController::run_to_completion`]) just tick until full time, so a
//! stepped match and a batch match with the same seed produce identical output.

use std::sync::Arc;

use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use super::config::EngineConfig;
use super::outcome::{OutcomeResolver, Resolution};
use super::possession;
use super::rng::{seeded_rng, RandomSource};
use super::scheduler::EventScheduler;
use super::state::{MatchPhase, MatchState};
use super::strength::{StrengthCalculator, StrengthModifier};
use crate::error::Result;
use crate::models::{MatchEvent, MatchResult, Possession, ShotOutcome, Side, TacticalSetup, Team};

/// Everything a match needs before kick-off.
#[derive(Debug, Clone)]
pub struct MatchPlan {
    pub home_team: Team,
    pub away_team: Team,
    pub home_tactics: Option<TacticalSetup>,
    pub away_tactics: Option<TacticalSetup>,
    pub config: EngineConfig,
}

impl MatchPlan {
    pub fn new(home_team: Team, away_team: Team) -> Self {
        Self {
            home_team,
            away_team,
            home_tactics: None,
            away_tactics: None,
            config: EngineConfig::default(),
        }
    }

    pub fn with_tactics(mut self, home: Option<TacticalSetup>, away: Option<TacticalSetup>) -> Self {
        self.home_tactics = home;
        self.away_tactics = away;
        self
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Rejects malformed input so nothing is discovered mid-match.
    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;
        self.home_team.validate()?;
        self.away_team.validate()?;
        if let Some(tactics) = &self.home_tactics {
            tactics.validate(&self.home_team)?;
        }
        if let Some(tactics) = &self.away_tactics {
            tactics.validate(&self.away_team)?;
        }
        Ok(())
    }

    fn team(&self, side: Side) -> &Team {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    fn tactics(&self, side: Side) -> Option<&TacticalSetup> {
        match side {
            Side::Home => self.home_tactics.as_ref(),
            Side::Away => self.away_tactics.as_ref(),
        }
    }
}

/// Snapshot exposed after every tick for incremental display or persistence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickReport {
    pub minute: u8,
    pub phase: MatchPhase,
    pub score: (u16, u16),
    pub possession: Possession,
    pub event: Option<MatchEvent>,
}

pub struct MatchController<R = ChaCha8Rng> {
    plan: MatchPlan,
    strength: StrengthCalculator,
    scheduler: EventScheduler,
    resolver: OutcomeResolver,
    state: MatchState,
    rng: R,
}

impl MatchController<ChaCha8Rng> {
    /// Controller with its own ChaCha8 generator seeded from `seed`.
    pub fn seeded(plan: MatchPlan, seed: u64) -> Result<Self> {
        Self::new(plan, seeded_rng(seed))
    }
}

impl<R: RandomSource> MatchController<R> {
    pub fn new(plan: MatchPlan, rng: R) -> Result<Self> {
        plan.validate()?;
        let config = &plan.config;
        Ok(Self {
            strength: StrengthCalculator::default(),
            scheduler: EventScheduler::new(config.event_rate),
            resolver: OutcomeResolver::new(config.save_ratio),
            state: MatchState::new(config.match_minutes),
            plan,
            rng,
        })
    }

    pub fn with_modifier(mut self, modifier: Arc<dyn StrengthModifier>) -> Self {
        self.strength = StrengthCalculator::new(modifier);
        self
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn plan(&self) -> &MatchPlan {
        &self.plan
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Simulates one minute. After full time this changes nothing and reports no event.
    pub fn tick(&mut self) -> TickReport {
        if self.state.is_finished() {
            log::warn!("tick() called after full time (minute {}), ignoring", self.state.minute());
            return self.report(None);
        }

        let minute = self.state.advance_minute();
        if minute == 1 {
            log::info!(
                "Kick-off: {} vs {} ({} minutes)",
                self.plan.home_team.name,
                self.plan.away_team.name,
                self.state.match_minutes()
            );
        }

        let home_strength = self.strength_of(Side::Home);
        let away_strength = self.strength_of(Side::Away);
        let split = possession::allocate(home_strength, away_strength);
        self.state.set_possession(split);
        log::trace!(
            "minute {}: strength {:.2}/{:.2}, possession {}",
            minute,
            home_strength,
            away_strength,
            split
        );

        let event = match self.scheduler.schedule(&split, &mut self.rng) {
            Some(side) => {
                let (attack, defense) = match side {
                    Side::Home => (home_strength, away_strength),
                    Side::Away => (away_strength, home_strength),
                };
                self.resolve_attack(minute, side, attack, defense)
            }
            None => None,
        };

        if let Some(event) = &event {
            self.state.push_event(event.clone());
        }

        if self.state.is_finished() {
            let (home, away) = self.state.score();
            log::info!(
                "Full time: {} {} - {} {} (possession {}, shots {}-{})",
                self.plan.home_team.name,
                home,
                away,
                self.plan.away_team.name,
                self.state.possession(),
                self.state.shots().home,
                self.state.shots().away
            );
        }

        self.report(event)
    }

    /// Ticks until full time and returns the final result.
    ///
    /// The controller stays usable afterwards; further ticks are no-ops.
    pub fn run_to_completion(&mut self) -> MatchResult {
        while !self.state.is_finished() {
            self.tick();
        }
        self.result()
    }

    /// Result built from the current state.
    pub fn result(&self) -> MatchResult {
        let (home_score, away_score) = self.state.score();
        MatchResult {
            home_score,
            away_score,
            events: self.state.events().to_vec(),
            statistics: self.state.statistics(),
        }
    }

    /// Consumes the controller, moving the event log out instead of cloning it.
    pub fn into_result(mut self) -> MatchResult {
        let (home_score, away_score) = self.state.score();
        let statistics = self.state.statistics();
        MatchResult { home_score, away_score, events: self.state.take_events(), statistics }
    }

    fn strength_of(&self, side: Side) -> f64 {
        self.strength.strength(self.plan.team(side), self.plan.tactics(side))
    }

    fn resolve_attack(&mut self, minute: u8, side: Side, attack: f64, defense: f64) -> Option<MatchEvent> {
        let team = self.plan.team(side);
        if team.players.is_empty() {
            log::warn!(
                "minute {}: {} attack has nobody to shoot, no event recorded",
                minute,
                team.name
            );
            return None;
        }

        let (draw, resolution) = self.resolver.resolve(attack, defense, &mut self.rng);
        let actor = &team.players[self.rng.index(team.players.len())];

        let event = match resolution {
            Resolution::Goal => {
                let score = self.state.record_goal(side);
                MatchEvent::goal(minute, side, team, actor, score)
            }
            Resolution::Saved | Resolution::Missed => {
                self.state.record_shot(side);
                let outcome = if resolution == Resolution::Saved {
                    ShotOutcome::Saved
                } else {
                    ShotOutcome::Missed
                };
                MatchEvent::shot(minute, side, team, actor, outcome)
            }
        };

        log::debug!(
            "{} ({} {}, shot {:.2} vs defense {:.2})",
            event,
            event.player_name,
            event.team_name,
            draw.shot_quality,
            draw.defense_quality
        );
        Some(event)
    }

    fn report(&self, event: Option<MatchEvent>) -> TickReport {
        TickReport {
            minute: self.state.minute(),
            phase: self.state.phase(),
            score: self.state.score(),
            possession: self.state.possession(),
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::DEFAULT_MATCH_MINUTES;
    use crate::engine::rng::ScriptedDraws;
    use crate::models::{EventDetails, EventType, Formation, Player, PlayerAttributes};

    fn team(id: u32, name: &str, value: u8, size: u32) -> Team {
        let players = (0..size)
            .map(|i| Player::new(id * 100 + i, format!("{} {}", name, i), PlayerAttributes::uniform(value)))
            .collect();
        Team::new(id, name, players)
    }

    fn plan(home_value: u8, away_value: u8) -> MatchPlan {
        MatchPlan::new(team(1, "Home FC", home_value, 11), team(2, "Away United", away_value, 11))
    }

    #[test]
    fn test_first_minute_forced_home_goal() {
        // trigger, home attacks, q1 = 0.9, q2 = 0.3, scorer index 4
        let draws = ScriptedDraws::new(&[0.05, 0.1, 0.9, 0.3], &[4]);
        let mut controller = MatchController::new(plan(80, 40), draws).unwrap();

        let report = controller.tick();
        assert_eq!(report.minute, 1);
        assert_eq!(report.score, (1, 0));
        assert!((report.possession.home - 66.666_666).abs() < 1e-4);

        let event = report.event.expect("goal expected");
        assert_eq!(event.event_type, EventType::Goal);
        assert_eq!(event.details, EventDetails::Goal { score: "1-0".to_string() });
        assert_eq!(event.player_id, 104);
        assert_eq!(event.team_name, "Home FC");
        assert_eq!(controller.state().shots().home, 0);
    }

    #[test]
    fn test_forced_saved_and_missed_shots() {
        // Equal strengths (50): minute 1 saved (25 vs 40 -> 25 > 20), minute 2 missed (10 vs 40).
        let draws = ScriptedDraws::new(&[0.0, 0.9, 0.5, 0.8, 0.0, 0.9, 0.2, 0.8], &[0, 1]);
        let mut controller = MatchController::new(plan(50, 50), draws).unwrap();

        let first = controller.tick().event.unwrap();
        assert_eq!(first.side, Side::Away);
        assert_eq!(first.shot_outcome(), Some(ShotOutcome::Saved));

        let second = controller.tick().event.unwrap();
        assert_eq!(second.shot_outcome(), Some(ShotOutcome::Missed));
        assert_eq!(second.player_id, 201);

        assert_eq!(controller.state().shots().away, 2);
        assert_eq!(controller.state().score(), (0, 0));
    }

    #[test]
    fn test_away_goal_score_string() {
        let draws = ScriptedDraws::new(&[0.0, 0.99, 0.9, 0.1], &[0]);
        let mut controller = MatchController::new(plan(60, 60), draws).unwrap();
        let event = controller.tick().event.unwrap();
        assert_eq!(event.to_string(), "1' GOAL! 0-1");
    }

    #[test]
    fn test_quiet_match_runs_to_ninety() {
        let mut controller = MatchController::new(plan(70, 70), ScriptedDraws::quiet()).unwrap();
        let result = controller.run_to_completion();

        assert_eq!(controller.state().minute(), DEFAULT_MATCH_MINUTES);
        assert_eq!(controller.state().phase(), MatchPhase::Finished);
        assert!(result.events.is_empty());
        assert_eq!(result.score(), (0, 0));
    }

    #[test]
    fn test_tick_after_full_time_is_noop() {
        let mut controller = MatchController::seeded(plan(75, 65), 11).unwrap();
        let result = controller.run_to_completion();

        let report = controller.tick();
        assert_eq!(report.minute, 90);
        assert_eq!(report.phase, MatchPhase::Finished);
        assert!(report.event.is_none());
        assert_eq!(controller.result(), result);
    }

    #[test]
    fn test_minute_advances_by_one() {
        let mut controller = MatchController::seeded(plan(75, 65), 5).unwrap();
        assert_eq!(controller.state().phase(), MatchPhase::NotStarted);
        for expected in 1..=90u8 {
            let report = controller.tick();
            assert_eq!(report.minute, expected);
            let expected_phase = if expected == 90 { MatchPhase::Finished } else { MatchPhase::InProgress };
            assert_eq!(report.phase, expected_phase);
        }
    }

    #[test]
    fn test_invariants_hold_every_tick() {
        for seed in 0..25u64 {
            let mut controller = MatchController::seeded(plan(82, 47), seed).unwrap();
            let mut prev_score = (0, 0);
            let mut prev_shots = controller.state().shots();

            while !controller.is_finished() {
                let report = controller.tick();
                assert!((report.possession.total() - 100.0).abs() < 1e-9);
                assert!(report.score.0 >= prev_score.0 && report.score.1 >= prev_score.1);
                let shots = controller.state().shots();
                assert!(shots.home >= prev_shots.home && shots.away >= prev_shots.away);
                prev_score = report.score;
                prev_shots = shots;
            }

            let result = controller.result();
            assert!(result.events.len() <= 90);
            let goals = result.goals().count() as u16;
            assert_eq!(goals, result.home_score + result.away_score);
            let shot_events = result.events.len() as u16 - goals;
            assert_eq!(shot_events, result.statistics.shots.home + result.statistics.shots.away);
        }
    }

    #[test]
    fn test_events_chronological_and_within_match() {
        let mut controller = MatchController::seeded(plan(90, 30), 77).unwrap();
        let result = controller.run_to_completion();
        for pair in result.events.windows(2) {
            assert!(pair[0].minute < pair[1].minute);
        }
        assert!(result.events.iter().all(|e| (1..=90).contains(&e.minute)));
    }

    #[test]
    fn test_same_seed_same_match() {
        let a = MatchController::seeded(plan(78, 74), 999).unwrap().run_to_completion();
        let b = MatchController::seeded(plan(78, 74), 999).unwrap().run_to_completion();
        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }

    #[test]
    fn test_stepwise_equals_batch() {
        let batch = MatchController::seeded(plan(70, 68), 31337).unwrap().run_to_completion();

        let mut stepped = MatchController::seeded(plan(70, 68), 31337).unwrap();
        let mut log = Vec::new();
        for _ in 0..90 {
            if let Some(event) = stepped.tick().event {
                log.push(event);
            }
        }
        assert_eq!(log, batch.events);
        assert_eq!(stepped.into_result(), batch);
    }

    #[test]
    fn test_both_rosters_empty() {
        let empty = MatchPlan::new(Team::new(1, "Nobody", Vec::new()), Team::new(2, "Nobody Else", Vec::new()));
        let mut controller = MatchController::seeded(empty, 3).unwrap();
        let result = controller.run_to_completion();

        assert_eq!(result.statistics.possession, Possession::even());
        assert!(result.events.is_empty());
        assert_eq!(result.score(), (0, 0));
    }

    #[test]
    fn test_one_roster_empty_only_other_side_attacks() {
        let lopsided = MatchPlan::new(team(1, "Home FC", 70, 11), Team::new(2, "Walkover", Vec::new()))
            .with_config(EngineConfig { event_rate: 1.0, ..EngineConfig::default() });
        let result = MatchController::seeded(lopsided, 8).unwrap().run_to_completion();

        assert_eq!(result.statistics.possession.home, 100.0);
        assert_eq!(result.events.len(), 90);
        assert!(result.events.iter().all(|e| e.side == Side::Home));
        // Any positive shot beats a zero defense draw.
        assert_eq!(result.away_score, 0);
    }

    #[test]
    fn test_one_roster_empty_possession_stays_in_range() {
        // mean composite 82.30000000000001, where 100 * x / x rounds above 100
        let home = Team::new(
            1,
            "Home FC",
            vec![
                Player::new(1, "Left", PlayerAttributes { attack: 80, defense: 70, stamina: 76, speed: 75, technique: 75 }),
                Player::new(2, "Right", PlayerAttributes { attack: 90, defense: 89, stamina: 89, speed: 90, technique: 89 }),
            ],
        );
        let mut controller =
            MatchController::seeded(MatchPlan::new(home, Team::new(2, "Walkover", Vec::new())), 0).unwrap();

        let report = controller.tick();
        assert_eq!(report.possession.home, 100.0);
        assert_eq!(report.possession.away, 0.0);
        assert_eq!(report.possession.to_string(), "100.0% - 0.0%");
    }

    struct Overflow;
    impl StrengthModifier for Overflow {
        fn adjust(&self, base: f64, _tactics: Option<&TacticalSetup>) -> f64 {
            if base > 0.0 {
                f64::MAX
            } else {
                base
            }
        }
    }

    #[test]
    fn test_huge_modifier_output_keeps_possession_valid() {
        let lopsided = MatchPlan::new(team(1, "Home FC", 70, 11), Team::new(2, "Walkover", Vec::new()));
        let mut controller = MatchController::seeded(lopsided, 5).unwrap().with_modifier(Arc::new(Overflow));
        let result = controller.run_to_completion();
        assert_eq!(result.statistics.possession.home, 100.0);
        assert_eq!(result.statistics.possession.away, 0.0);

        // both sides at f64::MAX overflow the sum
        let mut controller = MatchController::seeded(plan(70, 70), 5).unwrap().with_modifier(Arc::new(Overflow));
        let result = controller.run_to_completion();
        assert_eq!(result.statistics.possession, Possession::even());
    }

    #[test]
    fn test_invalid_plan_rejected() {
        let mut bad = plan(70, 70);
        bad.away_team.players[0].attributes.attack = 150;
        assert!(MatchController::seeded(bad, 1).is_err());

        let bad_tactics = plan(70, 70)
            .with_tactics(Some(TacticalSetup::new("x", Formation::F442).with_role(999, crate::models::Role::Poacher)), None);
        assert!(MatchController::seeded(bad_tactics, 1).is_err());
    }

    #[test]
    fn test_custom_match_length() {
        let short = plan(70, 70).with_config(EngineConfig { match_minutes: 45, ..EngineConfig::default() });
        let mut controller = MatchController::seeded(short, 4).unwrap();
        assert_eq!(controller.state().match_minutes(), 45);
        controller.run_to_completion();
        assert_eq!(controller.state().minute(), 45);
    }

    struct HomeBoost;
    impl StrengthModifier for HomeBoost {
        fn adjust(&self, base: f64, tactics: Option<&TacticalSetup>) -> f64 {
            match tactics {
                Some(t) if t.formation == Formation::F433 => base * 3.0,
                _ => base,
            }
        }
    }

    #[test]
    fn test_modifier_shifts_possession() {
        let tactics = TacticalSetup::new("High press", Formation::F433);
        let boosted = plan(60, 60).with_tactics(Some(tactics), None);
        let mut controller = MatchController::seeded(boosted, 2).unwrap().with_modifier(Arc::new(HomeBoost));
        let report = controller.tick();
        assert!((report.possession.home - 75.0).abs() < 1e-9);
    }
}
