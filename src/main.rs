use std::path::PathBuf;

use clap::Parser;
use grid_snake::app::App;
use grid_snake::config::GRID;
use grid_snake::error::Result;
use grid_snake::game::Session;
use grid_snake::logging;
use grid_snake::scheduler::{Clock, Schedule, SystemClock};
use grid_snake::settings::{Settings, load_settings, settings_path};
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Game tick interval in milliseconds.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file (JSON). Defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file. Defaults to the platform data directory.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::init(
        &cli.log_file.clone().unwrap_or_else(logging::log_path),
        level,
    )?;

    let settings = resolve_settings(&cli)?;
    info!("starting with {settings:?}");

    install_panic_hook();
    run(settings)
}

fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let path = cli.config.clone().unwrap_or_else(settings_path);
    let mut settings = load_settings(&path)?;

    if let Some(tick_ms) = cli.tick_ms {
        settings.tick_interval_ms = tick_ms;
    }
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }

    Ok(settings.validate()?)
}

fn run(settings: Settings) -> Result<()> {
    let clock = SystemClock;
    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let session = Session::new(GRID, rng, clock.now());
    let schedule = Schedule::new(settings.tick_interval(), settings.clock_interval());
    let mut app = App::new(session, schedule, clock);

    let mut terminal = TerminalSession::enter()?;
    app.run(&mut terminal)?;

    Ok(())
}
