pub mod events;
pub mod match_result;
pub mod player;
pub mod tactics;
pub mod team;

pub use events::{EventDetails, EventType, MatchEvent, ShotOutcome, Side};
pub use match_result::{MatchResult, MatchStatistics, Possession, ShotCounts};
pub use player::{Player, PlayerAttributes, ATTRIBUTE_MAX};
pub use tactics::{Formation, PositionGroup, Role, TacticalSetup};
pub use team::Team;
