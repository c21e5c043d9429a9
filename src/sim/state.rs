//! Game state and core simulation types
//!
//! Plain data. The physics, obstacle and collision steps enforce the
//! invariants; nothing here validates.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::config::SimConfig;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bird is flying, pipes scroll
    Running,
    /// Frozen mid-run, resumes on unpause
    Paused,
    /// Run ended (terminal until reset)
    GameOver,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Bird left the top or bottom of the playfield
    OutOfBounds,
    /// Bird box overlapped a pipe
    Obstacle { pair_id: u32 },
}

/// Things a host may want to react to (sounds, flashes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Flapped,
    PairSpawned { pair_id: u32, gap_top: f32 },
    Scored { score: u32 },
    Crashed { cause: CrashCause },
}

/// The player's bird
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner; x never changes during a run
    pub pos: Vec2,
    /// Vertical velocity (units/tick, positive is down)
    pub vel_y: f32,
    pub size: Vec2,
}

impl Bird {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            pos: Vec2::new(config.bird_x, config.start_y()),
            vel_y: 0.0,
            size: Vec2::new(config.bird_width, config.bird_height),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Which half of a pipe pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleRole {
    /// Hangs from above, bottom edge at the gap top
    Upper,
    /// Rises from below, top edge at the gap bottom
    Lower,
}

/// A single pipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Shared by both pipes of a pair
    pub pair_id: u32,
    pub role: ObstacleRole,
    /// Top-left corner; only x changes after spawn
    pub pos: Vec2,
    pub size: Vec2,
    /// Set once when the pipe is scored
    pub passed: bool,
}

impl Obstacle {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Fully past the left edge of the playfield
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.right_edge() < 0.0
    }
}

/// Complete run state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Pipe pairs that scrolled off the left edge
    pub score: u32,
    pub phase: GamePhase,
    pub bird: Bird,
    /// Active pipes in spawn order (also left-to-right)
    pub obstacles: Vec<Obstacle>,
    /// Ticks simulated this run
    pub time_ticks: u64,
    /// Ticks since the last pair spawned
    pub spawn_timer: u32,
    /// Why the run ended, if it has
    pub crash: Option<CrashCause>,
    /// Pending events for the host
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_pair_id: u32,
}

impl GameState {
    /// Fresh run: bird centered vertically, at rest, no pipes
    pub fn new(config: &SimConfig) -> Self {
        Self {
            score: 0,
            phase: GamePhase::Running,
            bird: Bird::new(config),
            obstacles: Vec::new(),
            time_ticks: 0,
            spawn_timer: 0,
            crash: None,
            events: Vec::new(),
            next_pair_id: 1,
        }
    }

    /// Allocate an id for a new pipe pair
    pub fn next_pair_id(&mut self) -> u32 {
        let id = self.next_pair_id;
        self.next_pair_id += 1;
        id
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// End the run. Only the first cause is recorded.
    pub fn end_run(&mut self, cause: CrashCause) {
        if self.is_terminal() {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.crash = Some(cause);
        self.events.push(GameEvent::Crashed { cause });
        log::info!(
            "Game over after {} ticks: {:?}, score {}",
            self.time_ticks,
            cause,
            self.score
        );
    }
}
