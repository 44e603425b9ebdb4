// life.rs - Generation driver: a grid, an engine, and a generation counter

use std::sync::Arc;

use log::{info, warn};
use rand::Rng;
use tokio::runtime::Runtime;

use crate::config::LifeConfig;
use crate::engine::{self, EngineKind, UpdateEngine};
use crate::error::Result;
use crate::grid::{Grid, GridView};
use crate::patterns::Pattern;
use crate::seed;

/// Number of recent generation hashes kept for cycle detection.
const HISTORY_LEN: usize = 10;

pub struct Life {
    grid: Grid,
    engine: Box<dyn UpdateEngine>,
    runtime: Arc<Runtime>,
    generation: u64,

    grid_history: [u64; HISTORY_LEN],
    history_count: usize,
    cycle_detected: bool,
}

impl Life {
    /// All-dead grid sized by `config`.
    pub fn new(config: &LifeConfig) -> Result<Self> {
        let partition = config.validate()?;
        let runtime = engine::worker_runtime()?;
        let engine = engine::build(config.engine, runtime.clone());

        let (group_rows, group_cols) = partition.groups_per_axis();
        info!(
            "{}x{} grid, {} engine, {}x{} groups of {} workers",
            config.width,
            config.height,
            config.engine,
            group_rows,
            group_cols,
            partition.workers_per_group()
        );

        Ok(Self {
            grid: Grid::new(config.width, config.height, config.tile_size)?,
            engine,
            runtime,
            generation: 0,
            grid_history: [0; HISTORY_LEN],
            history_count: 0,
            cycle_detected: false,
        })
    }

    /// Grid seeded from `config.chance_of_life` and `config.seed`.
    pub fn seeded(config: &LifeConfig) -> Result<Self> {
        let mut life = Self::new(config)?;
        life.randomize(config.chance_of_life, &mut seed::seeded_rng(config.seed))?;
        Ok(life)
    }

    /// Runs exactly one generation.
    pub fn advance(&mut self) -> Result<()> {
        self.grid.advance(self.engine.as_ref())?;
        self.generation += 1;

        if self.check_for_cycle() && !self.cycle_detected {
            warn!("generation {} repeats a recent state", self.generation);
            self.cycle_detected = true;
        }
        Ok(())
    }

    pub fn current_grid(&self) -> GridView<'_> {
        self.grid.view()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.view().population()
    }

    pub fn engine_kind(&self) -> EngineKind {
        self.engine.kind()
    }

    /// Switches engines between generations, reusing the worker runtime.
    pub fn set_engine(&mut self, kind: EngineKind) {
        if kind != self.engine.kind() {
            self.engine = engine::build(kind, self.runtime.clone());
        }
    }

    /// True once the grid has revisited one of its recent states.
    pub fn is_cycling(&self) -> bool {
        self.cycle_detected
    }

    /// Loads `cells` as a new generation 0.
    pub fn load(&mut self, cells: Vec<bool>) -> Result<()> {
        self.grid.load(cells)?;
        self.restart();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.restart();
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, chance_of_life: u8, rng: &mut R) -> Result<()> {
        let cells = seed::random_cells(self.grid.width(), self.grid.height(), chance_of_life, rng)?;
        self.load(cells)
    }

    /// Clears the grid and centres `pattern` on it.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        self.grid.clear();
        let origin = pattern.centered_origin(self.grid.width(), self.grid.height());
        pattern.stamp(&mut self.grid, origin);
        self.restart();
    }

    pub fn toggle(&mut self, row: usize, col: usize) {
        self.grid.toggle(row, col);
        self.reset_history();
    }

    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.grid.state_hash();
        if self.grid_history[..self.history_count.min(HISTORY_LEN)].contains(&current_hash) {
            return true;
        }
        self.grid_history[self.history_count % HISTORY_LEN] = current_hash;
        self.history_count += 1;
        false
    }

    fn restart(&mut self) {
        self.generation = 0;
        self.reset_history();
    }

    fn reset_history(&mut self) {
        self.grid_history = [0; HISTORY_LEN];
        self.history_count = 0;
        self.cycle_detected = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{BLINKER, GLIDER};

    fn small_config(engine: EngineKind) -> LifeConfig {
        LifeConfig { width: 16, height: 16, tile_size: 4, engine, ..Default::default() }
    }

    #[test_log::test]
    fn counts_generations() {
        let mut life = Life::new(&small_config(EngineKind::Tiled)).unwrap();
        life.advance().unwrap();
        life.advance().unwrap();
        assert_eq!(life.generation(), 2);

        life.clear();
        assert_eq!(life.generation(), 0);
    }

    #[test_log::test]
    fn blinker_is_detected_as_cycle() {
        let mut life = Life::new(&small_config(EngineKind::Naive)).unwrap();
        life.apply_pattern(&BLINKER);

        life.advance().unwrap();
        assert!(!life.is_cycling());
        life.advance().unwrap();
        assert!(!life.is_cycling());
        // Generation 3 equals generation 1
        life.advance().unwrap();
        assert!(life.is_cycling());
    }

    #[test_log::test]
    fn empty_grid_cycles_immediately() {
        let mut life = Life::new(&small_config(EngineKind::Tiled)).unwrap();
        life.advance().unwrap();
        life.advance().unwrap();
        assert!(life.is_cycling());
        assert_eq!(life.population(), 0);
    }

    #[test_log::test]
    fn glider_is_not_a_cycle_while_moving() {
        let mut life = Life::new(&small_config(EngineKind::Tiled)).unwrap();
        life.apply_pattern(&GLIDER);
        for _ in 0..8 {
            life.advance().unwrap();
        }
        assert!(!life.is_cycling());
        assert_eq!(life.population(), 5);
    }

    #[test_log::test]
    fn switching_engines_keeps_state() {
        let mut life = Life::new(&small_config(EngineKind::Naive)).unwrap();
        life.apply_pattern(&GLIDER);
        life.advance().unwrap();

        life.set_engine(EngineKind::Tiled);
        assert_eq!(life.engine_kind(), EngineKind::Tiled);
        life.advance().unwrap();
        assert_eq!(life.generation(), 2);
        assert_eq!(life.population(), 5);
    }

    #[test_log::test]
    fn seeded_life_is_reproducible() {
        let config = LifeConfig { seed: Some(99), ..small_config(EngineKind::Tiled) };
        let a = Life::seeded(&config).unwrap();
        let b = Life::seeded(&config).unwrap();
        assert_eq!(a.current_grid().cells(), b.current_grid().cells());
    }

    #[test_log::test]
    fn toggle_edits_current_generation() {
        let mut life = Life::new(&small_config(EngineKind::Naive)).unwrap();
        life.toggle(5, 6);
        assert!(life.current_grid().get(5, 6));
        assert_eq!(life.population(), 1);
    }

    #[test_log::test]
    fn rejects_invalid_config() {
        let config = LifeConfig { width: 18, ..small_config(EngineKind::Tiled) };
        assert!(Life::new(&config).is_err());
    }
}
