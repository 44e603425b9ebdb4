// tiled.rs - Work groups stage a halo-padded tile locally, then compute from it
//
// Each group owns one T x T tile. Its (T + 2) x (T + 2) work items first copy
// one snapshot cell each into the group's staging buffer (load phase); only
// once the whole buffer is staged do the interior items count neighbours and
// produce the tile's next state (compute phase). Halo items write nothing.

use std::sync::Arc;

use log::info;
use tokio::runtime::Runtime;

use super::{EngineKind, UpdateEngine, worker_runtime};
use crate::error::Result;
use crate::grid::Snapshot;
use crate::partition::{HALO, Partition};
use crate::rule::{self, next_state};

/// Local staging buffer of one work group.
struct HaloTile {
    side: usize,
    cells: Vec<bool>,
}

impl HaloTile {
    /// Load phase. Work item `(local_row, local_col)` stages the snapshot cell at
    /// `origin + local - 1`; items that land outside the grid stage a dead cell.
    fn load(snapshot: &Snapshot, origin: (usize, usize), side: usize) -> Self {
        let mut cells = vec![false; side * side];

        for local_row in 0..side {
            for local_col in 0..side {
                let global_row = (origin.0 + local_row).checked_sub(HALO);
                let global_col = (origin.1 + local_col).checked_sub(HALO);

                cells[local_row * side + local_col] = match (global_row, global_col) {
                    (Some(row), Some(col)) if row < snapshot.height() && col < snapshot.width() => {
                        snapshot.get(row, col)
                    }
                    _ => false,
                };
            }
        }

        Self { side, cells }
    }

    #[inline]
    fn get(&self, local_row: usize, local_col: usize) -> bool {
        self.cells[local_row * self.side + local_col]
    }

    fn is_interior(&self, local_row: usize, local_col: usize) -> bool {
        let last = self.side - HALO;
        (HALO..last).contains(&local_row) && (HALO..last).contains(&local_col)
    }

    /// Compute phase. Returns the tile's next state, row-major, `T * T` cells.
    fn compute(&self) -> Vec<bool> {
        let tile_size = self.side - 2 * HALO;
        let mut tile = vec![false; tile_size * tile_size];

        for local_row in 0..self.side {
            for local_col in 0..self.side {
                if !self.is_interior(local_row, local_col) {
                    continue;
                }
                // Interior items always have all 8 neighbours staged
                let count = rule::live_neighbors(|d_row, d_col| {
                    self.get(
                        local_row.wrapping_add_signed(d_row),
                        local_col.wrapping_add_signed(d_col),
                    )
                });
                tile[(local_row - HALO) * tile_size + (local_col - HALO)] =
                    next_state(self.get(local_row, local_col), count);
            }
        }
        tile
    }
}

/// Group task: both phases for one tile, in order.
async fn process_group(
    origin: (usize, usize),
    snapshot: Snapshot,
    side: usize,
) -> ((usize, usize), Vec<bool>) {
    let staged = HaloTile::load(&snapshot, origin, side);
    (origin, staged.compute())
}

/// Tiled update: one task per work group, neighbours read from the staged tile.
pub struct TiledEngine {
    runtime: Arc<Runtime>,
}

impl TiledEngine {
    /// Engine with its own worker runtime.
    pub fn new() -> Result<Self> {
        Ok(Self::with_runtime(worker_runtime()?))
    }

    pub fn with_runtime(runtime: Arc<Runtime>) -> Self {
        info!("tiled engine ready ({} worker threads)", runtime.metrics().num_workers());
        Self { runtime }
    }
}

impl UpdateEngine for TiledEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Tiled
    }

    fn step(&self, snapshot: &Snapshot, partition: &Partition, next: &mut [bool]) -> Result<()> {
        let width = snapshot.width();
        let tile_size = partition.tile_size();
        let side = partition.group_side();

        self.runtime.block_on(async {
            let handles: Vec<_> = partition
                .groups()
                .map(|(group_row, group_col)| {
                    let origin = partition.tile_origin(group_row, group_col);
                    tokio::spawn(process_group(origin, snapshot.clone(), side))
                })
                .collect();

            for handle in handles {
                let ((origin_row, origin_col), tile) = handle.await?;
                for (tile_row, cells) in tile.chunks_exact(tile_size).enumerate() {
                    let start = (origin_row + tile_row) * width + origin_col;
                    next[start..start + tile_size].copy_from_slice(cells);
                }
            }
            Ok(())
        })
    }
}
