//! Configuration errors
//!
//! The tick loop itself never fails; a bad layout is rejected up front.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("gap height {gap} must be smaller than playfield height {playfield}")]
    GapTooLarge { gap: f32, playfield: f32 },
    #[error("the bird does not fit inside the playfield at its starting position")]
    EntityOutOfPlayfield,
    #[error("spawn interval must be at least one tick")]
    ZeroSpawnInterval,
    #[error("could not read configuration file")]
    Io(#[from] std::io::Error),
    #[error("could not parse configuration")]
    Parse(#[from] serde_json::Error),
}
