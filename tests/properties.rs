//! Property tests for the simulation invariants

use flappy_pipes::sim::ObstacleRole;
use flappy_pipes::{GameController, SimConfig};
use proptest::prelude::*;

fn no_spawn_config() -> SimConfig {
    SimConfig {
        spawn_interval_ticks: 1_000_000,
        ..Default::default()
    }
}

proptest! {
    #[test]
    fn velocity_grows_by_gravity_each_tick(ticks in 0u32..30) {
        let mut game = GameController::with_seed(no_spawn_config(), 1).unwrap();
        for _ in 0..ticks {
            game.tick();
        }
        prop_assert!(!game.is_terminal());
        prop_assert_eq!(game.state().bird.vel_y, ticks as f32 * game.config().gravity);
    }

    #[test]
    fn jump_always_sets_impulse(prior in -200.0f32..200.0, ticks in 0u32..10) {
        let mut game = GameController::with_seed(no_spawn_config(), 1).unwrap();
        for _ in 0..ticks {
            game.tick();
        }
        game.state_mut().bird.vel_y = prior;
        game.jump();
        prop_assert_eq!(game.state().bird.vel_y, game.config().jump_impulse);
    }

    #[test]
    fn score_never_decreases(seed in any::<u64>(), inputs in prop::collection::vec(any::<bool>(), 1..600)) {
        let config = SimConfig { spawn_interval_ticks: 20, ..Default::default() };
        let mut game = GameController::with_seed(config, seed).unwrap();
        let mut last = 0;
        for flap in inputs {
            if flap {
                game.jump();
            }
            game.tick();
            prop_assert!(game.score() >= last);
            last = game.score();
        }
    }

    #[test]
    fn terminal_state_is_frozen(seed in any::<u64>(), extra in 1usize..100) {
        let mut game = GameController::with_seed(SimConfig::default(), seed).unwrap();
        while !game.is_terminal() {
            game.tick();
        }
        let frozen = game.snapshot();
        for i in 0..extra {
            if i % 2 == 0 {
                game.jump();
            }
            game.tick();
        }
        prop_assert_eq!(game.snapshot(), frozen);
    }

    #[test]
    fn pairs_share_column_and_gap(seed in any::<u64>(), ticks in 1u32..400) {
        let config = SimConfig {
            gravity: 0.0,
            gap_height: 600.0,
            spawn_interval_ticks: 7,
            ..Default::default()
        };
        let mut game = GameController::with_seed(config, seed).unwrap();
        for _ in 0..ticks {
            game.tick();
        }
        let obstacles = &game.state().obstacles;
        prop_assert_eq!(obstacles.len() % 2, 0);
        for pair in obstacles.chunks(2) {
            prop_assert_eq!(pair[0].role, ObstacleRole::Upper);
            prop_assert_eq!(pair[1].role, ObstacleRole::Lower);
            prop_assert_eq!(pair[0].pair_id, pair[1].pair_id);
            prop_assert_eq!(pair[0].pos.x, pair[1].pos.x);
            prop_assert_eq!(pair[1].pos.y - pair[0].bounds().max.y, game.config().gap_height);
        }
        // Spawn order is left-to-right order
        for w in obstacles.windows(2) {
            prop_assert!(w[0].pos.x <= w[1].pos.x);
        }
    }

    #[test]
    fn reset_restores_start(seed in any::<u64>(), ticks in 0u32..300) {
        let mut game = GameController::with_seed(SimConfig::default(), seed).unwrap();
        let start = game.snapshot();
        for i in 0..ticks {
            if i % 15 == 0 {
                game.jump();
            }
            game.tick();
        }
        game.reset();
        prop_assert_eq!(game.snapshot(), start);
    }
}
