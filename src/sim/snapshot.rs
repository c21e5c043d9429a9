//! Read-only frame view for renderers
//!
//! Everything a drawing sink needs for one frame, without exposing the
//! mutable state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState, ObstacleRole};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirdView {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel_y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub pair_id: u32,
    pub role: ObstacleRole,
    pub pos: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub score: u32,
    pub terminal: bool,
    pub paused: bool,
    pub bird: BirdView,
    pub obstacles: Vec<ObstacleView>,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            tick: state.time_ticks,
            score: state.score,
            terminal: state.is_terminal(),
            paused: state.phase == GamePhase::Paused,
            bird: BirdView {
                pos: state.bird.pos,
                size: state.bird.size,
                vel_y: state.bird.vel_y,
            },
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    pair_id: o.pair_id,
                    role: o.role,
                    pos: o.pos,
                    size: o.size,
                })
                .collect(),
        }
    }
}
