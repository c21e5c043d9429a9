//! Demo bot
//!
//! Keeps the bird's bottom edge just above the floor of the next gap. Used
//! by the headless runner and as an idle/attract mode for hosts.
//!
//! A flap from rest lifts the bird ~95 units, which fits inside a 150 unit
//! gap with the margin below. Flapping every tick while under the floor
//! climbs ~9.5 units/tick, enough to reach a gap on the far side of the
//! playfield before the next pipe arrives.

use crate::config::SimConfig;
use crate::sim::{CrashCause, GameController, GameEvent, GamePhase, GameState, ObstacleRole};

/// Clearance kept above the lower pipe
const FLOOR_MARGIN: f32 = 4.0;

/// Top of the gap of the first pair the bird has not yet flown past
pub fn next_gap_top(state: &GameState) -> Option<f32> {
    state
        .obstacles
        .iter()
        .filter(|o| o.role == ObstacleRole::Upper)
        .find(|o| o.right_edge() >= state.bird.pos.x)
        .map(|o| o.bounds().max.y)
}

/// Lowest the bird's bottom edge should sink before flapping
pub fn target_floor(state: &GameState, config: &SimConfig) -> f32 {
    match next_gap_top(state) {
        Some(gap_top) => gap_top + config.gap_height - FLOOR_MARGIN,
        // No pipes yet: hold a bit below the middle
        None => config.playfield_height * 0.6,
    }
}

/// Flap when the bird would sink below the target floor next tick
pub fn should_flap(state: &GameState, config: &SimConfig) -> bool {
    if state.phase != GamePhase::Running {
        return false;
    }
    let bird = &state.bird;
    let next_bottom = bird.pos.y + bird.size.y + bird.vel_y + config.gravity;
    next_bottom > target_floor(state, config)
}

/// Outcome of one autopilot run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeResult {
    pub score: u32,
    pub ticks: u64,
    pub crash: Option<CrashCause>,
}

/// Let the bot play until the run ends, pauses, or `max_ticks` is reached
pub fn run_episode(game: &mut GameController, max_ticks: u64) -> EpisodeResult {
    while game.phase() == GamePhase::Running && game.state().time_ticks < max_ticks {
        if should_flap(game.state(), game.config()) {
            game.jump();
        }
        game.tick();

        for event in game.drain_events() {
            match event {
                GameEvent::Scored { score } => log::debug!("Score: {}", score),
                GameEvent::Crashed {
                    cause: CrashCause::Obstacle { pair_id },
                } => log::info!("Hit pipe pair {}", pair_id),
                GameEvent::Crashed {
                    cause: CrashCause::OutOfBounds,
                } => log::info!("Flew out of the playfield"),
                GameEvent::Flapped | GameEvent::PairSpawned { .. } => {}
            }
        }
    }

    EpisodeResult {
        score: game.score(),
        ticks: game.state().time_ticks,
        crash: game.state().crash,
    }
}
