//! Gameplay configuration
//!
//! Every tunable number the simulation reads. Defaults match the classic
//! 360x640 board; hosts may override fields from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Simulation constants, validated once before a run starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Bird ===
    pub bird_x: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    /// Added to velocity every tick
    pub gravity: f32,
    /// Velocity assigned on flap (negative is up)
    pub jump_impulse: f32,

    // === Pipes ===
    pub pipe_width: f32,
    pub pipe_height: f32,
    pub pipe_speed: f32,
    pub gap_height: f32,
    /// Ticks between pair spawns
    pub spawn_interval_ticks: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            bird_x: BIRD_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,

            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            pipe_speed: PIPE_SPEED,
            gap_height: GAP_HEIGHT,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
        }
    }
}

impl SimConfig {
    /// Parse a JSON object; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject layouts the simulation cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("bird_x", self.bird_x),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("pipe_speed", self.pipe_speed),
            ("gap_height", self.gap_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.gap_height >= self.playfield_height {
            return Err(ConfigError::GapTooLarge {
                gap: self.gap_height,
                playfield: self.playfield_height,
            });
        }

        let start_y = self.start_y();
        if self.bird_x < 0.0
            || self.bird_x + self.bird_width > self.playfield_width
            || start_y > self.max_bird_y()
        {
            return Err(ConfigError::EntityOutOfPlayfield);
        }

        if self.spawn_interval_ticks == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }

        Ok(())
    }

    /// Bird y at the start of every run
    pub fn start_y(&self) -> f32 {
        self.playfield_height / 2.0
    }

    /// Largest bird y still inside the playfield
    pub fn max_bird_y(&self) -> f32 {
        self.playfield_height - self.bird_height
    }

    /// Exclusive upper bound for a random gap top
    pub fn gap_span(&self) -> f32 {
        self.playfield_height - self.gap_height
    }
}
