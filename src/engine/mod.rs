// mod.rs - Generation update engines
//
// Both engines fan a pass out over a tokio runtime and block until every
// task has returned, so at most one pass is ever in flight. Tasks only read
// the shared snapshot and each one returns a disjoint piece of the next
// generation, which the caller scatters into the next buffer.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::runtime::{Builder, Runtime};

use crate::error::{LifeError, Result};
use crate::grid::Snapshot;
use crate::partition::Partition;

mod naive;
mod tiled;

pub use naive::NaiveEngine;
pub use tiled::TiledEngine;

/// Computes the next generation from a snapshot.
pub trait UpdateEngine: Send {
    fn kind(&self) -> EngineKind;

    /// Overwrites every cell of `next` with the generation following `snapshot`.
    fn step(&self, snapshot: &Snapshot, partition: &Partition, next: &mut [bool]) -> Result<()>;
}

/// Which update strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Every cell reads its 8 neighbours from the snapshot.
    Naive,
    /// Work groups stage halo-padded tiles before computing.
    #[default]
    Tiled,
}

impl EngineKind {
    pub const ALL: [EngineKind; 2] = [EngineKind::Naive, EngineKind::Tiled];
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Naive => f.write_str("naive"),
            EngineKind::Tiled => f.write_str("tiled"),
        }
    }
}

impl FromStr for EngineKind {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" => Ok(EngineKind::Naive),
            "tiled" => Ok(EngineKind::Tiled),
            other => Err(LifeError::UnknownEngine(other.to_string())),
        }
    }
}

/// Starts the multi-threaded runtime that executes update passes.
pub fn worker_runtime() -> Result<Arc<Runtime>> {
    let runtime = Builder::new_multi_thread()
        .thread_name("life-worker")
        .build()?;
    Ok(Arc::new(runtime))
}

/// Builds an engine of the given kind on a shared runtime.
pub fn build(kind: EngineKind, runtime: Arc<Runtime>) -> Box<dyn UpdateEngine> {
    match kind {
        EngineKind::Naive => Box::new(NaiveEngine::with_runtime(runtime)),
        EngineKind::Tiled => Box::new(TiledEngine::with_runtime(runtime)),
    }
}
