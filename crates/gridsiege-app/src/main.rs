use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gridsiege_app::core::config::GameConfig;
use gridsiege_app::game_loop::{self, LoopOptions};
use gridsiege_app::state::DEFAULT_KEY_HOLD_MS;

#[derive(Parser)]
#[command(name = "gridsiege", about = "Grid survival game for the terminal", version)]
struct Cli {
    /// RNG seed; overrides the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON tuning file; missing fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log destination (the terminal itself is owned by the game)
    #[arg(long, default_value = "gridsiege.log")]
    log_file: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Hold window for movement keys when the terminal has no key-release events (ms)
    #[arg(long, default_value_t = DEFAULT_KEY_HOLD_MS)]
    key_hold_ms: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file, cli.verbose)?;

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    tracing::info!(seed = config.seed, "starting gridsiege");

    game_loop::run(
        config,
        LoopOptions {
            key_hold_ms: cli.key_hold_ms,
        },
    )
}

fn init_logging(path: &Path, verbose: bool) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<GameConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    let config = GameConfig::from_json(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}
