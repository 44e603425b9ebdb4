// partition.rs - Work group geometry for the tiled engine
//
// A grid of `width x height` cells is cut into square tiles of `tile_size`
// cells. Each tile is handled by one work group whose shape includes a
// one-cell halo on every side, so a group stages `(T + 2) x (T + 2)` cells.

use crate::error::{LifeError, Result};

/// Width of the halo ring around each tile.
pub const HALO: usize = 1;

/// Tiling of a grid into work groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    tile_size: usize,
    group_rows: usize,
    group_cols: usize,
    cell_count: usize,
}

impl Partition {
    /// Validates the dimensions and computes the group counts per axis.
    ///
    /// Partial tiles are not supported: both dimensions must be exact
    /// multiples of `tile_size`.
    pub fn new(width: usize, height: usize, tile_size: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::EmptyGrid { width, height });
        }
        if tile_size == 0 {
            return Err(LifeError::ZeroTileSize);
        }
        if width % tile_size != 0 || height % tile_size != 0 {
            return Err(LifeError::PartialTile { width, height, tile_size });
        }
        let cell_count = width
            .checked_mul(height)
            .ok_or(LifeError::GridTooLarge { width, height })?;

        Ok(Self {
            tile_size,
            group_rows: height.div_ceil(tile_size),
            group_cols: width.div_ceil(tile_size),
            cell_count,
        })
    }

    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Cells in the whole grid, `width * height`.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Number of groups along (rows, cols).
    pub fn groups_per_axis(&self) -> (usize, usize) {
        (self.group_rows, self.group_cols)
    }

    pub fn group_count(&self) -> usize {
        self.group_rows * self.group_cols
    }

    /// Side of the halo-inclusive staging square.
    pub fn group_side(&self) -> usize {
        self.tile_size + 2 * HALO
    }

    /// Worker shape of a group, halo included.
    pub fn group_shape(&self) -> (usize, usize) {
        (self.group_side(), self.group_side())
    }

    /// Workers per group: one per staged cell.
    pub fn workers_per_group(&self) -> usize {
        self.group_side() * self.group_side()
    }

    /// Top-left grid cell of the tile owned by group `(group_row, group_col)`.
    pub fn tile_origin(&self, group_row: usize, group_col: usize) -> (usize, usize) {
        (group_row * self.tile_size, group_col * self.tile_size)
    }

    /// All group indices in row-major order.
    pub fn groups(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.group_rows).flat_map(move |row| (0..self.group_cols).map(move |col| (row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn reference_geometry() {
        let partition = Partition::new(160, 160, 16).unwrap();
        assert_eq!(partition.groups_per_axis(), (10, 10));
        assert_eq!(partition.group_count(), 100);
        assert_eq!(partition.group_shape(), (18, 18));
        assert_eq!(partition.workers_per_group(), 324);
        assert_eq!(partition.cell_count(), 25_600);
    }

    #[test_log::test]
    fn rectangular_grids_count_groups_per_axis() {
        let partition = Partition::new(64, 32, 8).unwrap();
        // Rows follow the height, columns the width
        assert_eq!(partition.groups_per_axis(), (4, 8));
        assert_eq!(partition.tile_origin(3, 7), (24, 56));
        assert_eq!(partition.groups().count(), 32);
        assert_eq!(partition.groups().last(), Some((3, 7)));
    }

    #[test_log::test]
    fn rejects_partial_tiles() {
        let err = Partition::new(100, 96, 16).unwrap_err();
        assert!(matches!(err, LifeError::PartialTile { width: 100, height: 96, tile_size: 16 }));
        assert!(Partition::new(96, 100, 16).is_err());
    }

    #[test_log::test]
    fn rejects_zero_sizes() {
        assert!(matches!(Partition::new(0, 16, 4), Err(LifeError::EmptyGrid { .. })));
        assert!(matches!(Partition::new(16, 0, 4), Err(LifeError::EmptyGrid { .. })));
        assert!(matches!(Partition::new(16, 16, 0), Err(LifeError::ZeroTileSize)));
    }

    #[test_log::test]
    fn rejects_cell_count_overflow() {
        let side = 1 << (usize::BITS / 2);
        assert!(matches!(
            Partition::new(side, side, 1),
            Err(LifeError::GridTooLarge { width, height }) if width == side && height == side
        ));
        assert!(matches!(
            Partition::new(usize::MAX, 2, 1),
            Err(LifeError::GridTooLarge { .. })
        ));
        assert_eq!(Partition::new(side, 1, 1).unwrap().cell_count(), side);
    }

    #[test_log::test]
    fn single_tile_grid() {
        let partition = Partition::new(5, 5, 5).unwrap();
        assert_eq!(partition.groups().collect::<Vec<_>>(), vec![(0, 0)]);
        assert_eq!(partition.tile_origin(0, 0), (0, 0));
    }
}
