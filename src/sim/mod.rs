//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick counts only, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod collision;
pub mod controller;
pub mod obstacles;
pub mod physics;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use controller::GameController;
pub use snapshot::{BirdView, FrameSnapshot, ObstacleView};
pub use state::{Bird, CrashCause, GameEvent, GamePhase, GameState, Obstacle, ObstacleRole};
pub use tick::tick;
