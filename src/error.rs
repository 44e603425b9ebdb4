// error.rs - Error types for the life engine

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LifeError>;

/// Everything that can stop the engine from running.
///
/// Apart from [`LifeError::Task`], these are configuration problems that
/// surface once at startup.
#[derive(Error, Debug)]
pub enum LifeError {
    /// A grid with no cells along one axis.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    /// Tile size of zero.
    #[error("tile size must be positive")]
    ZeroTileSize,

    /// Grid dimensions that would leave a partial tile.
    #[error("grid {width}x{height} is not a multiple of tile size {tile_size}")]
    PartialTile {
        width: usize,
        height: usize,
        tile_size: usize,
    },

    /// Grid dimensions whose cell count does not fit in `usize`.
    #[error("grid {width}x{height} has too many cells")]
    GridTooLarge { width: usize, height: usize },

    /// Seeding probability outside 0..=100 percent.
    #[error("chance of life must be within 0..=100 percent, got {0}")]
    InvalidChance(u8),

    /// A cell matrix that does not match the grid it is loaded into.
    #[error("expected {expected} cells, got {actual}")]
    CellCount { expected: usize, actual: usize },

    /// Unrecognised engine name.
    #[error("unknown engine '{0}', expected 'naive' or 'tiled'")]
    UnknownEngine(String),

    /// The worker runtime could not be started.
    #[error("failed to start worker runtime: {0}")]
    Runtime(#[from] std::io::Error),

    /// A worker task died mid-pass; the generation was not committed.
    #[error("update task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
