//! Flappy Pipes headless runner
//!
//! Plays one run with the autopilot and reports the result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use flappy_pipes::{GameController, SimConfig, autopilot};

/// Default cap: five minutes of play at 60 ticks/s
const DEFAULT_MAX_TICKS: u64 = 5 * 60 * 60;

#[derive(Parser, Debug)]
#[command(name = "flappy-pipes")]
#[command(about = "Play a headless Flappy Pipes run with the demo autopilot")]
struct Options {
    /// RNG seed for pipe gaps (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many ticks even if the bird is still alive
    #[arg(long, default_value_t = DEFAULT_MAX_TICKS)]
    max_ticks: u64,
    /// Print the final frame snapshot as JSON
    #[arg(long)]
    json: bool,
    /// JSON file overriding gameplay constants
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<()> {
    env_logger::init();
    let options = Options::parse();

    let config = match &options.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SimConfig::default(),
    };
    let mut game = match options.seed {
        Some(seed) => GameController::with_seed(config, seed),
        None => GameController::new(config),
    }
    .context("invalid configuration")?;

    log::info!("Flappy Pipes (headless) starting, seed {}", game.seed());
    let result = autopilot::run_episode(&mut game, options.max_ticks);

    if options.json {
        let json = serde_json::to_string(&game.snapshot()).context("serialize snapshot")?;
        println!("{}", json);
    } else {
        let outcome = if result.crash.is_some() {
            "Game Over"
        } else {
            "Time up"
        };
        println!(
            "{}: score {} after {} ticks (seed {})",
            outcome,
            result.score,
            result.ticks,
            game.seed()
        );
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly on the web
}
