//! Motion sentinel: stay still in front of the camera or get caught moving.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use motion_sentinel::{
    app::{MotionSentinelApp, SessionOutcome},
    config::Config,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Camera index to use
    #[arg(long)]
    cam: Option<i32>,

    /// Haar cascade XML file for face detection
    #[arg(long)]
    cascade: Option<PathBuf>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// End the session the first time movement is detected
    #[arg(long)]
    halt_on_movement: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "info" };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(level));

    info!("Motion Sentinel");

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Config::from_file(path).with_context(|| format!("Failed to load config {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(cam) = args.cam {
        config.capture.camera_index = cam;
    }
    if let Some(cascade) = args.cascade {
        config.detector.cascade_path = cascade;
    }
    if args.halt_on_movement {
        config.game.halt_on_movement = true;
    }

    let mut app = MotionSentinelApp::new(config).context("Failed to initialize")?;
    let summary = app.run()?;

    match summary.outcome {
        SessionOutcome::QuitRequested => Ok(ExitCode::SUCCESS),
        SessionOutcome::CaughtMoving => {
            warn!("You moved! You are dead.");
            Ok(ExitCode::FAILURE)
        }
    }
}
