// lib.rs - Conway's Game of Life on a double-buffered grid
//
// Two interchangeable update engines compute each generation in parallel:
// a naive one reading neighbours straight from the snapshot, and a tiled one
// staging halo-padded tiles into a local buffer first.

pub mod config;   // Startup configuration
pub mod engine;   // Naive and tiled update engines
pub mod error;    // LifeError
pub mod grid;     // Double-buffered cell matrix
pub mod life;     // Generation driver
pub mod partition; // Tile / work group geometry
pub mod patterns; // Named seed patterns
pub mod rule;     // B3/S23 neighbour rule
pub mod seed;     // Random initial state

pub use config::LifeConfig;
pub use engine::{EngineKind, NaiveEngine, TiledEngine, UpdateEngine};
pub use error::{LifeError, Result};
pub use grid::{Grid, GridView, Snapshot};
pub use life::Life;
pub use partition::Partition;
