pub mod sample;

pub use sample::{bayern_munich, manchester_united, real_madrid, sample_team, sample_teams};
