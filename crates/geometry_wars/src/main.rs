//! Headless runner
//!
//! Usage: `geometry_wars [FRAMES] [--paced]`
//!
//! Loads `user_config.toml`, falling back to `resources/config.toml`, then
//! plays the given number of frames (default 3600) with the autopilot.
//! `--paced` holds the configured frame rate instead of running flat out.

use std::path::Path;
use std::process::ExitCode;

use geometry_wars::{
    AutopilotInput, GameError, GameLoop, GameSettings, HeadlessSurface, RunSummary, Simulation,
};
use vector_engine::config::ConfigStore;
use vector_engine::foundation::logging;

const USER_CONFIG: &str = "user_config.toml";
const DEFAULT_CONFIG: &str = "resources/config.toml";
const DEFAULT_FRAMES: u64 = 3600;

/// Whether the user file was skipped in favour of the defaults
fn used_default_config(config: &ConfigStore) -> bool {
    config.source() != Some(Path::new(USER_CONFIG))
}

fn run(frames: u64, paced: bool) -> Result<RunSummary, GameError> {
    let config = ConfigStore::load_with_fallback(USER_CONFIG, DEFAULT_CONFIG)?;
    let settings = GameSettings::from_config(&config)?;
    logging::init(&settings.log_level);
    if used_default_config(&config) {
        log::warn!("{} unavailable, running with {}", USER_CONFIG, DEFAULT_CONFIG);
    } else if let Some(source) = config.source() {
        log::info!("Configuration loaded from {}", source.display());
    }
    log::info!("Starting Geometry Wars for {} frames", frames);
    let simulation = Simulation::new(config)?;

    let mut surface = HeadlessSurface::new(settings.width, settings.height);
    if paced {
        surface = surface.with_frame_rate(settings.framerate);
    }
    let input = AutopilotInput::new(settings.play_field());
    GameLoop::new(simulation, surface, input)
        .with_frame_limit(frames)
        .run()
}

fn main() -> ExitCode {
    let mut frames = DEFAULT_FRAMES;
    let mut paced = false;
    for arg in std::env::args().skip(1) {
        if arg == "--paced" {
            paced = true;
        } else if let Ok(count) = arg.parse() {
            frames = count;
        } else {
            eprintln!("Usage: geometry_wars [FRAMES] [--paced]");
            return ExitCode::FAILURE;
        }
    }

    match run(frames, paced) {
        Ok(summary) => {
            log::info!(
                "Finished {} frames: score {}, {} lives left",
                summary.frames,
                summary.score,
                summary.lives
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            logging::init("error");
            log::error!("Geometry Wars failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
