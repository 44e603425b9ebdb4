// naive.rs - One coroutine per row, neighbours read straight from the snapshot

use std::sync::Arc;

use log::info;
use tokio::runtime::Runtime;

use super::{EngineKind, UpdateEngine, worker_runtime};
use crate::error::Result;
use crate::grid::Snapshot;
use crate::partition::Partition;
use crate::rule::next_state;

/// Row task: computes every cell of `row_index` from the snapshot.
async fn process_row(row_index: usize, snapshot: Snapshot) -> (usize, Vec<bool>) {
    let row_result = (0..snapshot.width())
        .map(|col| {
            let count = snapshot.live_neighbors(row_index, col);
            next_state(snapshot.get(row_index, col), count)
        })
        .collect();
    (row_index, row_result)
}

/// Direct update: each cell re-reads its 8 neighbours from shared memory.
pub struct NaiveEngine {
    runtime: Arc<Runtime>,
}

impl NaiveEngine {
    /// Engine with its own worker runtime.
    pub fn new() -> Result<Self> {
        Ok(Self::with_runtime(worker_runtime()?))
    }

    pub fn with_runtime(runtime: Arc<Runtime>) -> Self {
        info!("naive engine ready ({} worker threads)", runtime.metrics().num_workers());
        Self { runtime }
    }
}

impl UpdateEngine for NaiveEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Naive
    }

    fn step(&self, snapshot: &Snapshot, _partition: &Partition, next: &mut [bool]) -> Result<()> {
        let width = snapshot.width();

        self.runtime.block_on(async {
            // Spawn every row at once; they only share the read-only snapshot
            let handles: Vec<_> = (0..snapshot.height())
                .map(|row| tokio::spawn(process_row(row, snapshot.clone())))
                .collect();

            for handle in handles {
                let (row_index, completed_row) = handle.await?;
                next[row_index * width..(row_index + 1) * width].copy_from_slice(&completed_row);
            }
            Ok(())
        })
    }
}
