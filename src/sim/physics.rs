//! Bird motion
//!
//! Semi-implicit Euler in tick units: velocity first, then position.

use super::state::{CrashCause, GameState};
use crate::config::SimConfig;

/// Apply one tick of gravity to the bird and end the run if it left the
/// playfield. Position is not clamped, so a renderer sees the final
/// out-of-bounds frame.
pub fn advance(state: &mut GameState, config: &SimConfig) {
    let bird = &mut state.bird;
    bird.vel_y += config.gravity;
    bird.pos.y += bird.vel_y;

    if bird.pos.y < 0.0 || bird.pos.y > config.max_bird_y() {
        state.end_run(CrashCause::OutOfBounds);
    }
}

/// Replace the bird's vertical velocity with the flap impulse
pub fn flap(state: &mut GameState, config: &SimConfig) {
    state.bird.vel_y = config.jump_impulse;
}
