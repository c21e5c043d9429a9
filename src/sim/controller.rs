//! Game controller
//!
//! Owns the run state, configuration and RNG. The host drives it with
//! `tick()` (or `advance(dt)`) and forwards the jump key to `press()`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::physics;
use super::snapshot::FrameSnapshot;
use super::state::{GameEvent, GamePhase, GameState};
use super::tick::tick;
use crate::clock::FixedStepper;
use crate::config::SimConfig;
use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct GameController {
    config: SimConfig,
    state: GameState,
    rng: Pcg32,
    seed: u64,
    stepper: FixedStepper,
}

impl GameController {
    /// New controller with a random seed
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let seed = rand::rng().random();
        Self::with_seed(config, seed)
    }

    /// New controller with a fixed seed (reproducible runs)
    pub fn with_seed(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config);
        log::info!("Game initialized with seed: {}", seed);
        Ok(Self {
            config,
            state,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            stepper: FixedStepper::default(),
        })
    }

    /// Run one simulation tick. No-op unless running.
    pub fn tick(&mut self) {
        tick(&mut self.state, &self.config, &mut self.rng);
    }

    /// Feed wall-clock frame time; runs the ticks that are due and returns
    /// how many advanced the run (0 while paused or after game over)
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let due = self.stepper.accumulate(frame_dt);
        let before = self.state.time_ticks;
        for _ in 0..due {
            self.tick();
        }
        (self.state.time_ticks - before) as u32
    }

    /// Fraction of a tick carried over by `advance`, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.stepper.alpha()
    }

    /// Flap. Every call while running resets velocity to the impulse.
    pub fn jump(&mut self) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        physics::flap(&mut self.state, &self.config);
        self.state.events.push(GameEvent::Flapped);
    }

    /// Start a fresh run from any phase. The RNG stream carries on, so the
    /// next run gets new gaps. Undrained events survive the reset.
    pub fn reset(&mut self) {
        let pending = std::mem::take(&mut self.state.events);
        self.state = GameState::new(&self.config);
        self.state.events = pending;
        self.stepper.clear();
        log::info!("Game restarted");
    }

    /// Start a fresh run with a new seed
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.reset();
        log::info!("Game restarted with seed: {}", seed);
    }

    /// The single game button: flap while running, restart after game over
    pub fn press(&mut self) {
        match self.state.phase {
            GamePhase::Running => self.jump(),
            GamePhase::GameOver => self.reset(),
            GamePhase::Paused => {}
        }
    }

    /// Running <-> Paused. Ignored after game over.
    pub fn toggle_pause(&mut self) {
        self.state.phase = match self.state.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            GamePhase::GameOver => return,
        };
        self.stepper.clear();
        log::info!("Phase: {:?}", self.state.phase);
    }

    /// Take all events raised since the last call.
    ///
    /// Events queue until drained, so hosts should call this once per frame.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for hosts and tests that stage scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }
}
