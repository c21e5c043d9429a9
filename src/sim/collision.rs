//! Bird vs pipe collision detection
//!
//! Both shapes are axis-aligned boxes, so the test is a plain AABB overlap.
//! Touching edges do not count as a hit.

use super::state::{CrashCause, GameState};

/// First pipe pair the bird overlaps, if any
pub fn first_hit(state: &GameState) -> Option<u32> {
    let bird = state.bird.bounds();
    state
        .obstacles
        .iter()
        .find(|obstacle| bird.overlaps(&obstacle.bounds()))
        .map(|obstacle| obstacle.pair_id)
}

/// End the run if the bird overlaps any pipe. Returns true on a hit.
pub fn check(state: &mut GameState) -> bool {
    match first_hit(state) {
        Some(pair_id) => {
            state.end_run(CrashCause::Obstacle { pair_id });
            true
        }
        None => false,
    }
}
