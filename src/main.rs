use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use block_snake::game::GameConfig;
use block_snake::modes::HumanMode;
use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "block_snake")]
#[command(version, about = "Snake on a 100x100 block grid")]
struct Cli {
    /// Milliseconds between simulation ticks
    #[arg(long, default_value = "25")]
    tick_ms: u64,

    /// Seed for fruit placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write a debug log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file)
        .context("Failed to initialize logger")?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The terminal belongs to the game, so logs only ever go to a file
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = GameConfig::with_tick_interval(Duration::from_millis(cli.tick_ms.max(1)));

    let mut human_mode = match cli.seed {
        Some(seed) => HumanMode::with_seed(config, seed),
        None => HumanMode::new(config),
    };
    human_mode.run().await?;

    Ok(())
}
