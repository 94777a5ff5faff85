//! Match simulation engine.
//!
//! Per tick: strength of both sides -> possession split -> event trigger and
//! attacking side -> shot resolution -> state update.

pub mod batch;
pub mod config;
pub mod controller;
pub mod outcome;
pub mod possession;
pub mod rng;
pub mod scheduler;
pub mod state;
pub mod strength;

pub use batch::{seed_range, simulate_batch, simulate_batch_with_modifier, BatchOutcome, BatchSummary};
pub use config::{EngineConfig, ENGINE_CONFIG_PATH_ENV};
pub use controller::{MatchController, MatchPlan, TickReport};
pub use outcome::{OutcomeResolver, Resolution, ShotDraw};
pub use possession::allocate as allocate_possession;
pub use rng::{seeded_rng, RandomSource};
pub use scheduler::{attacking_side, EventScheduler};
pub use state::{MatchPhase, MatchState};
pub use strength::{composite_strength, IdentityModifier, StrengthCalculator, StrengthModifier};
