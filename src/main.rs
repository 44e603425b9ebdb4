// main.rs - Interactive viewer for the tiled Game of Life engines

use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use egui::Color32;
use log::info;
use rand::rngs::StdRng;

use tiled_life::config::{self, LifeConfig};
use tiled_life::{EngineKind, Life, seed};

mod ui;

/// Conway's Game of Life on data-parallel update engines
#[derive(Parser, Debug)]
#[command(name = "tiled_life", version, about)]
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

    /// Milliseconds between generations
    #[arg(short, long, default_value_t = config::DEFAULT_STEP_INTERVAL.as_millis() as u64)]
    interval_ms: u64,

    /// Update engine: naive or tiled
    #[arg(short, long, default_value_t = EngineKind::Tiled)]
    engine: EngineKind,

    /// RNG seed for the initial grid
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn into_config(self) -> LifeConfig {
        LifeConfig {
            width: self.width,
            height: self.height,
            tile_size: self.tile_size,
            chance_of_life: self.chance,
            step_interval: Duration::from_millis(self.interval_ms),
            engine: self.engine,
            seed: self.seed,
            ..Default::default()
        }
    }
}

/// Viewer state around the engine driver.
pub struct LifeApp {
    pub life: Life,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub chance_of_life: u8,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub show_gridlines: bool,
    pub show_tiles: bool,
    pub selected_pattern: usize,
    pub last_error: Option<String>,
    rng: StdRng,
}

impl LifeApp {
    fn new(config: &LifeConfig) -> anyhow::Result<Self> {
        let mut rng = seed::seeded_rng(config.seed);
        let mut life = Life::new(config).context("Invalid life configuration")?;
        life.randomize(config.chance_of_life, &mut rng)?;

        Ok(Self {
            life,
            is_running: false,
            last_update: Instant::now(),
            update_interval: config.step_interval,
            chance_of_life: config.chance_of_life,
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
            show_gridlines: true,
            show_tiles: true,
            selected_pattern: 0,
            last_error: None,
            rng,
        })
    }

    /// Runs one generation; a failed pass pauses the simulation.
    pub fn step(&mut self) {
        if let Err(err) = self.life.advance() {
            log::error!("Generation {} failed: {}", self.life.generation() + 1, err);
            self.last_error = Some(err.to_string());
            self.is_running = false;
        } else if self.life.is_cycling() {
            self.is_running = false;
        }
    }

    pub fn randomize(&mut self) {
        if let Err(err) = self.life.randomize(self.chance_of_life, &mut self.rng) {
            self.last_error = Some(err.to_string());
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = Args::parse().into_config();
    info!("Starting viewer with {:?}", config);
    let app = LifeApp::new(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 1000.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tiled Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|err| anyhow::anyhow!("Viewer exited with error: {err}"))
}
