//! Flappy Pipes - a single-screen arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `config`: Validated gameplay constants
//! - `clock`: Fixed timestep accumulator for frame-driven hosts
//! - `autopilot`: Demo bot used by the headless runner

pub mod autopilot;
pub mod clock;
pub mod config;
pub mod error;
pub mod sim;

pub use clock::FixedStepper;
pub use config::SimConfig;
pub use error::ConfigError;
pub use sim::{FrameSnapshot, GameController, GameEvent, GamePhase, GameState};

/// Game configuration constants
pub mod consts {
    /// Simulation rate (one tick per animation frame)
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 360.0;
    pub const PLAYFIELD_HEIGHT: f32 = 640.0;

    /// Bird sprite size, bird flies at a fixed column
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 24.0;
    pub const BIRD_X: f32 = PLAYFIELD_WIDTH / 8.0;

    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a flap (negative is up)
    pub const JUMP_IMPULSE: f32 = -10.0;

    /// Pipe sprite size
    pub const PIPE_WIDTH: f32 = 64.0;
    pub const PIPE_HEIGHT: f32 = 512.0;
    /// Leftward pipe speed (units/tick)
    pub const PIPE_SPEED: f32 = 4.0;
    /// Vertical opening between an upper and lower pipe
    pub const GAP_HEIGHT: f32 = 150.0;
    /// One pipe pair every 1.5 seconds
    pub const SPAWN_INTERVAL_TICKS: u32 = 90;
}
