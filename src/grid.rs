// grid.rs - Double-buffered cell matrix for Conway's Game of Life
//
// Cells are stored row-major, index = row * width + col. The snapshot is the
// read-only state of the current generation; the next buffer is only ever
// written by an update engine and becomes the snapshot once a pass completes.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use log::debug;

use crate::engine::UpdateEngine;
use crate::error::{LifeError, Result};
use crate::partition::Partition;
use crate::rule;

/// Read-only state of the grid at the start of a generation.
///
/// Clones share the cell storage, so worker tasks can each hold one for the
/// duration of a pass.
#[derive(Debug, Clone)]
pub struct Snapshot {
    cells: Arc<Vec<bool>>,
    width: usize,
    height: usize,
}

impl Snapshot {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.width + col]
    }

    /// State of the cell at `(row + d_row, col + d_col)`. Cells outside the
    /// grid are dead.
    #[inline]
    pub fn get_offset(&self, row: usize, col: usize, d_row: isize, d_col: isize) -> bool {
        match (row.checked_add_signed(d_row), col.checked_add_signed(d_col)) {
            (Some(r), Some(c)) if r < self.height && c < self.width => self.get(r, c),
            _ => false,
        }
    }

    /// Live neighbours of `(row, col)` read straight from the snapshot.
    #[inline]
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        rule::live_neighbors(|d_row, d_col| self.get_offset(row, col, d_row, d_col))
    }
}

/// Borrowed read accessors over the current generation.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    cells: &'a [bool],
    width: usize,
    height: usize,
    tile_size: usize,
}

impl<'a> GridView<'a> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.width + col]
    }

    pub fn row(&self, row: usize) -> &'a [bool] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &'a [bool] {
        self.cells
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell, row-major.
    pub fn live_cells(self) -> impl Iterator<Item = (usize, usize)> + 'a {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(index, _)| (index / width, index % width))
    }
}

/// The cell matrix and its two buffers.
pub struct Grid {
    partition: Partition,
    snapshot: Snapshot,
    next: Vec<bool>,
}

impl Grid {
    /// An all-dead grid. Dimensions must be multiples of `tile_size`.
    pub fn new(width: usize, height: usize, tile_size: usize) -> Result<Self> {
        let partition = Partition::new(width, height, tile_size)?;
        let cells = vec![false; partition.cell_count()];
        Self::with_partition(partition, width, height, cells)
    }

    /// A grid whose generation 0 is `cells` (row-major, `width * height` long).
    pub fn from_cells(
        width: usize,
        height: usize,
        tile_size: usize,
        cells: Vec<bool>,
    ) -> Result<Self> {
        let partition = Partition::new(width, height, tile_size)?;
        Self::with_partition(partition, width, height, cells)
    }

    fn with_partition(
        partition: Partition,
        width: usize,
        height: usize,
        cells: Vec<bool>,
    ) -> Result<Self> {
        check_len(partition.cell_count(), &cells)?;

        Ok(Self {
            partition,
            snapshot: Snapshot { cells: Arc::new(cells), width, height },
            next: vec![false; partition.cell_count()],
        })
    }

    pub fn width(&self) -> usize {
        self.snapshot.width
    }

    pub fn height(&self) -> usize {
        self.snapshot.height
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn view(&self) -> GridView<'_> {
        GridView {
            cells: &self.snapshot.cells,
            width: self.snapshot.width,
            height: self.snapshot.height,
            tile_size: self.partition.tile_size(),
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Replaces the current generation wholesale.
    pub fn load(&mut self, cells: Vec<bool>) -> Result<()> {
        check_len(self.snapshot.cells.len(), &cells)?;
        self.snapshot.cells = Arc::new(cells);
        Ok(())
    }

    pub fn clear(&mut self) {
        let len = self.snapshot.cells.len();
        self.snapshot.cells = Arc::new(vec![false; len]);
    }

    /// Sets one cell of the current generation. Out-of-grid positions are ignored.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        if row < self.height() && col < self.width() {
            let width = self.width();
            Arc::make_mut(&mut self.snapshot.cells)[row * width + col] = alive;
        }
    }

    pub fn toggle(&mut self, row: usize, col: usize) {
        if row < self.height() && col < self.width() {
            let alive = self.snapshot.get(row, col);
            self.set(row, col, !alive);
        }
    }

    /// Runs one full generation with `engine` and swaps the buffers.
    ///
    /// If the engine fails the snapshot is left untouched: the generation
    /// did not happen.
    pub fn advance(&mut self, engine: &dyn UpdateEngine) -> Result<()> {
        engine.step(&self.snapshot, &self.partition, &mut self.next)?;

        let next = std::mem::take(&mut self.next);
        let previous = std::mem::replace(&mut self.snapshot.cells, Arc::new(next));
        // Worker tasks have dropped their clones by now; recycle the old buffer.
        self.next = Arc::try_unwrap(previous).unwrap_or_else(|shared| shared.as_ref().clone());

        debug!("{} pass committed on {}x{} grid", engine.kind(), self.width(), self.height());
        Ok(())
    }

    /// Hash of the current generation, used for cycle detection.
    pub fn state_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.snapshot.cells.hash(&mut hasher);
        hasher.finish()
    }
}

fn check_len(expected: usize, cells: &[bool]) -> Result<()> {
    if cells.len() != expected {
        return Err(LifeError::CellCount { expected, actual: cells.len() });
    }
    Ok(())
}
