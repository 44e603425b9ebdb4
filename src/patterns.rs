// patterns.rs - Named seed patterns

use crate::grid::Grid;

/// A named seed pattern, cells given as (row, col) offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const PATTERNS: &[Pattern] = &[
    GLIDER,
    BLINKER,
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 24),
            (1, 22), (1, 24),
            (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
            (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35),
            (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
            (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22), (5, 24),
            (6, 10), (6, 16), (6, 24),
            (7, 11), (7, 15),
            (8, 12), (8, 13),
        ],
    },
];

impl Pattern {
    /// Bounding box as (rows, cols).
    pub fn size(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(rows, cols), &(row, col)| {
            (rows.max(row + 1), cols.max(col + 1))
        })
    }

    /// Origin that centres the pattern on a `width x height` grid.
    pub fn centered_origin(&self, width: usize, height: usize) -> (usize, usize) {
        let (rows, cols) = self.size();
        (height.saturating_sub(rows) / 2, width.saturating_sub(cols) / 2)
    }

    /// Grid coordinates of the pattern placed at `origin`.
    pub fn cells_at(&self, origin: (usize, usize)) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().map(move |&(row, col)| (origin.0 + row, origin.1 + col))
    }

    /// Writes the pattern's live cells into `grid`; cells falling outside are dropped.
    pub fn stamp(&self, grid: &mut Grid, origin: (usize, usize)) {
        for (row, col) in self.cells_at(origin) {
            grid.set(row, col, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn bounding_boxes() {
        assert_eq!(GLIDER.size(), (3, 3));
        assert_eq!(BLINKER.size(), (1, 3));
        let gun = PATTERNS.iter().find(|p| p.name == "Gosper Glider Gun").unwrap();
        assert_eq!(gun.size(), (9, 36));
        assert_eq!(gun.cells.len(), 36);
    }

    #[test_log::test]
    fn centred_blinker() {
        assert_eq!(BLINKER.centered_origin(16, 16), (7, 6));
        // Patterns larger than the grid start at the corner
        assert_eq!(PATTERNS[6].centered_origin(16, 16), (3, 0));
    }

    #[test_log::test]
    fn stamp_clips_to_grid() {
        let mut grid = Grid::new(4, 4, 2).unwrap();
        GLIDER.stamp(&mut grid, (2, 2));
        // Only (2, 3) fits; (3, 4), (4, 2), (4, 3), (4, 4) are outside
        assert_eq!(grid.view().live_cells().collect::<Vec<_>>(), vec![(2, 3)]);
    }

    #[test_log::test]
    fn pattern_cells_are_unique() {
        for pattern in PATTERNS {
            let mut cells = pattern.cells.to_vec();
            cells.sort();
            cells.dedup();
            assert_eq!(cells.len(), pattern.cells.len(), "{} repeats a cell", pattern.name);
        }
    }
}
