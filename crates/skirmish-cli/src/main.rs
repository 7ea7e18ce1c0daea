//! Headless runner: plays one match between two built-in controllers and
//! prints the final score.

mod pacer;
mod sink;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use skirmish_core::{ControllerKind, DeviceState, MatchConfig, MatchSummary, Simulation};
use tracing::info;

use crate::pacer::FramePacer;
use crate::sink::LogSink;

#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Run a two-player skirmish match without a window")]
struct Cli {
    /// JSON match configuration; missing fields use the defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the AI controllers
    #[arg(long)]
    seed: Option<u64>,
    /// Score that ends the match
    #[arg(long)]
    target_score: Option<u32>,
    /// Controller for the first actor: idle, random or heuristic
    #[arg(long, default_value_t = ControllerKind::Heuristic)]
    p1: ControllerKind,
    /// Controller for the second actor: idle, random or heuristic
    #[arg(long, default_value_t = ControllerKind::Heuristic)]
    p2: ControllerKind,
    /// Run as fast as possible instead of capping at 60 ticks per second
    #[arg(long)]
    fast: bool,
    /// Stop after this many ticks even without a winner
    #[arg(long, default_value_t = 216_000)]
    max_ticks: u64,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn load_config(path: Option<&Path>) -> Result<MatchConfig> {
    let Some(path) = path else {
        return Ok(MatchConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config: {}", path.display()))
}

fn print_summary(summary: &MatchSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    for (index, score) in summary.scores.iter().enumerate() {
        println!("Player {}: {score}", index + 1);
    }
    match summary.winner {
        Some(winner) => println!("Winner: Player {}", winner.index() + 1),
        None => println!("No winner after {} ticks", summary.ticks),
    }
    Ok(())
}

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(target) = cli.target_score {
        config.target_score = target;
    }

    let mut sim = Simulation::from_controllers(&config, [cli.p1, cli.p2])
        .context("failed to set up match")?;
    info!(
        p1 = %cli.p1,
        p2 = %cli.p2,
        seed = config.seed,
        target = config.target_score,
        paced = !cli.fast,
        "match started"
    );

    let mut pacer = (!cli.fast).then(|| FramePacer::new(60));
    let summary = sim.run_until_finished(
        &mut LogSink::default(),
        &DeviceState::default(),
        Some(cli.max_ticks),
        |_| {
            if let Some(pacer) = pacer.as_mut() {
                pacer.wait();
            }
        },
    )?;

    print_summary(&summary, cli.json)
}
