//! Binary entrypoint for the slideshow viewer.
//!
//! Delegates all logic to the library crate; no local modules here.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use slideshow::playlist::Playlist;
use slideshow::scan::collect_images;
use slideshow::viewer::{self, ViewerOptions};

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "slideshow", about = "Full-screen image slideshow viewer")]
struct Cli {
    /// Image files or directories to show (defaults to the current directory)
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// How long each image stays on screen
    #[arg(long, value_name = "DURATION", default_value = "4s", value_parser = humantime::parse_duration)]
    interval: Duration,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("slideshow={level}").parse().unwrap())
        .add_directive("wgpu=warn".parse().unwrap())
        .add_directive("winit=warn".parse().unwrap());
    fmt().with_env_filter(filter).with_target(true).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = if cli.paths.is_empty() {
        vec![env::current_dir().context("failed to resolve current directory")?]
    } else {
        cli.paths
    };

    let images = collect_images(&paths);
    info!(count = images.len(), "collected images");

    let playlist = Playlist::new(images);
    viewer::run(playlist, ViewerOptions { interval: cli.interval })
}
