// config.rs - Startup configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::engine::EngineKind;
use crate::error::{LifeError, Result};
use crate::partition::Partition;

pub const DEFAULT_WIDTH: usize = 160;
pub const DEFAULT_HEIGHT: usize = 160;
pub const DEFAULT_TILE_SIZE: usize = 16;
pub const DEFAULT_CHANCE_OF_LIFE: u8 = 25;
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(25);
pub const DEFAULT_PASSES: usize = 500;

/// Everything fixed at startup. Violations are reported by [`LifeConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeConfig {
    /// Grid width in cells, a multiple of `tile_size`.
    pub width: usize,
    /// Grid height in cells, a multiple of `tile_size`.
    pub height: usize,
    /// Side of a work tile.
    pub tile_size: usize,
    /// Percent chance that a seeded cell starts alive.
    pub chance_of_life: u8,
    /// Delay between displayed generations.
    pub step_interval: Duration,
    /// Generations run by the benchmark.
    pub passes: usize,
    pub engine: EngineKind,
    /// Seed for reproducible random grids; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tile_size: DEFAULT_TILE_SIZE,
            chance_of_life: DEFAULT_CHANCE_OF_LIFE,
            step_interval: DEFAULT_STEP_INTERVAL,
            passes: DEFAULT_PASSES,
            engine: EngineKind::default(),
            seed: None,
        }
    }
}

impl LifeConfig {
    /// Checks every startup constraint and returns the resulting tiling.
    pub fn validate(&self) -> Result<Partition> {
        if self.chance_of_life > 100 {
            return Err(LifeError::InvalidChance(self.chance_of_life));
        }
        Partition::new(self.width, self.height, self.tile_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn defaults_are_valid() {
        let partition = LifeConfig::default().validate().unwrap();
        assert_eq!(partition.group_count(), 100);
    }

    #[test_log::test]
    fn rejects_out_of_range_chance() {
        let config = LifeConfig { chance_of_life: 101, ..Default::default() };
        assert!(matches!(config.validate(), Err(LifeError::InvalidChance(101))));

        let config = LifeConfig { chance_of_life: 100, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test_log::test]
    fn rejects_partial_tiles() {
        let config = LifeConfig { width: 150, ..Default::default() };
        assert!(matches!(config.validate(), Err(LifeError::PartialTile { width: 150, .. })));
    }
}
