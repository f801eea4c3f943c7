use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use bulwark_app::session;
use bulwark_app::settings::Settings;

/// Run a headless BULWARK game and print how it ended.
#[derive(Debug, Parser)]
#[command(name = "bulwark", version, about)]
struct Args {
    /// YAML settings file, layered over the built-in defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the host's random draws.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many frames.
    #[arg(short, long)]
    frames: Option<u64>,

    /// Let the built-in defender play.
    #[arg(short, long)]
    autopilot: bool,

    /// Write the final snapshot as JSON.
    #[arg(short = 'o', long)]
    snapshot_out: Option<PathBuf>,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json")) {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref()).context("loading settings")?;
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if let Some(frames) = args.frames {
        settings.max_frames = frames;
    }
    settings.autopilot |= args.autopilot;
    if args.snapshot_out.is_some() {
        settings.snapshot_out = args.snapshot_out;
    }
    settings.validate().context("invalid settings")?;

    let report = session::run(&settings)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
