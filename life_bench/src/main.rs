// main.rs - Benchmark harness: runs a fixed number of generations and times them

use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use log::info;
use serde::Serialize;

use tiled_life::config::{self, LifeConfig};
use tiled_life::{EngineKind, Life};

#[derive(Parser, Debug)]
#[command(name = "life_bench", version, about = "Times the Game of Life update engines")]
struct Args {
    /// Grid width in cells (multiple of the tile size)
    #[arg(long, default_value_t = config::DEFAULT_WIDTH)]
    width: usize,

    /// Grid height in cells (multiple of the tile size)
    #[arg(long, default_value_t = config::DEFAULT_HEIGHT)]
    height: usize,

    /// Side of a work tile
    #[arg(short, long, default_value_t = config::DEFAULT_TILE_SIZE)]
    tile_size: usize,

    /// Percent chance that a cell starts alive
    #[arg(short, long, default_value_t = config::DEFAULT_CHANCE_OF_LIFE)]
    chance: u8,

    /// Generations per engine
    #[arg(short, long, default_value_t = config::DEFAULT_PASSES)]
    passes: usize,

    /// Engine to time; both when omitted
    #[arg(short, long)]
    engine: Option<EngineKind>,

    /// RNG seed, so every engine starts from the same grid
    #[arg(short, long, default_value_t = 0x5EED)]
    seed: u64,

    /// Print the report as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Run {
    engine: EngineKind,
    elapsed_ms: u128,
    generations_per_sec: f64,
    final_population: usize,
}

#[derive(Debug, Serialize)]
struct Report {
    config: LifeConfig,
    runs: Vec<Run>,
}

fn time_engine(config: &LifeConfig) -> anyhow::Result<Run> {
    let mut life = Life::seeded(config).context("Failed to set up grid")?;
    info!("{}: {} passes from population {}", config.engine, config.passes, life.population());

    let start = Instant::now();
    for _ in 0..config.passes {
        life.advance()
            .with_context(|| format!("{} pass {} failed", config.engine, life.generation() + 1))?;
    }
    let elapsed = start.elapsed();

    Ok(Run {
        engine: config.engine,
        elapsed_ms: elapsed.as_millis(),
        generations_per_sec: rate(config.passes, elapsed),
        final_population: life.population(),
    })
}

fn rate(passes: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 { passes as f64 / secs } else { f64::INFINITY }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let base = LifeConfig {
        width: args.width,
        height: args.height,
        tile_size: args.tile_size,
        chance_of_life: args.chance,
        passes: args.passes,
        seed: Some(args.seed),
        ..Default::default()
    };
    base.validate().context("Invalid benchmark configuration")?;

    let engines = match args.engine {
        Some(kind) => vec![kind],
        None => EngineKind::ALL.to_vec(),
    };

    let mut runs = Vec::with_capacity(engines.len());
    for engine in engines {
        let config = LifeConfig { engine, ..base.clone() };
        let run = time_engine(&config)?;
        info!(
            "{}: {} ms ({:.1} gen/s), final population {}",
            run.engine, run.elapsed_ms, run.generations_per_sec, run.final_population
        );
        runs.push(run);
    }

    // Same seed, same rule: every engine must land on the same population
    if let Some(first) = runs.first() {
        if runs.iter().any(|run| run.final_population != first.final_population) {
            anyhow::bail!("Engines disagree on the final population: {:?}", runs);
        }
    }

    if args.json {
        let report = Report { config: base, runs };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
