//! Fixed timestep simulation tick
//!
//! One call advances the run by one animation frame.

use rand::Rng;

use super::state::{GamePhase, GameState};
use super::{collision, obstacles, physics};
use crate::config::SimConfig;

/// Advance the game state by one tick.
///
/// Order: bird physics, pipe scroll/prune/score, pipe spawn, collision.
/// A run that ends during physics skips the rest of the tick.
pub fn tick<R: Rng>(state: &mut GameState, config: &SimConfig, rng: &mut R) {
    // Don't tick if paused or game over
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    physics::advance(state, config);
    if state.is_terminal() {
        return;
    }

    obstacles::advance_and_prune(state, config);
    obstacles::maybe_spawn(state, config, rng);
    collision::check(state);
}
