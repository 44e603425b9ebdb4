// engine_equivalence.rs - Property tests for the update engines
//
// The tiled engine agrees with the naive engine and with a plain sequential
// reference on arbitrary grids.
//
// Strategy:
// 1. Generate a tile size, a tile count per axis and a random cell matrix
// 2. Step the same snapshot with both engines
// 3. Assert both next buffers equal the sequential reference

use std::sync::Arc;

use proptest::prelude::*;
use tiled_life::engine::{self, EngineKind};
use tiled_life::rule::{NEIGHBOR_OFFSETS, next_state};
use tiled_life::Grid;
use tokio::runtime::Runtime;

/// Sequential reference: out-of-grid neighbours are dead.
fn reference_step(cells: &[bool], width: usize, height: usize) -> Vec<bool> {
    let mut next = vec![false; cells.len()];
    for row in 0..height {
        for col in 0..width {
            let mut count = 0;
            for &(d_row, d_col) in &NEIGHBOR_OFFSETS {
                let r = row as isize + d_row;
                let c = col as isize + d_col;
                if r >= 0 && c >= 0 && (r as usize) < height && (c as usize) < width {
                    count += cells[r as usize * width + c as usize] as u8;
                }
            }
            next[row * width + col] = next_state(cells[row * width + col], count);
        }
    }
    next
}

fn step_with(
    kind: EngineKind,
    runtime: &Arc<Runtime>,
    grid_cells: &[bool],
    width: usize,
    height: usize,
    tile_size: usize,
) -> Vec<bool> {
    let mut grid = Grid::from_cells(width, height, tile_size, grid_cells.to_vec()).unwrap();
    let engine = engine::build(kind, runtime.clone());
    grid.advance(engine.as_ref()).unwrap();
    grid.view().cells().to_vec()
}

/// (tile_size, width, height, cells)
fn grids() -> impl Strategy<Value = (usize, usize, usize, Vec<bool>)> {
    (1usize..=6, 1usize..=4, 1usize..=4).prop_flat_map(|(tile_size, tiles_x, tiles_y)| {
        let (width, height) = (tile_size * tiles_x, tile_size * tiles_y);
        (
            Just(tile_size),
            Just(width),
            Just(height),
            prop::collection::vec(any::<bool>(), width * height),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn engines_match_reference((tile_size, width, height, cells) in grids()) {
        let runtime = engine::worker_runtime().unwrap();
        let expected = reference_step(&cells, width, height);

        let naive = step_with(EngineKind::Naive, &runtime, &cells, width, height, tile_size);
        let tiled = step_with(EngineKind::Tiled, &runtime, &cells, width, height, tile_size);

        prop_assert_eq!(&naive, &expected);
        prop_assert_eq!(&tiled, &expected);
    }

    #[test]
    fn engines_agree_over_many_generations((tile_size, width, height, cells) in grids()) {
        let runtime = engine::worker_runtime().unwrap();
        let naive_engine = engine::build(EngineKind::Naive, runtime.clone());
        let tiled_engine = engine::build(EngineKind::Tiled, runtime.clone());

        let mut naive = Grid::from_cells(width, height, tile_size, cells.clone()).unwrap();
        let mut tiled = Grid::from_cells(width, height, tile_size, cells).unwrap();

        for _ in 0..8 {
            naive.advance(naive_engine.as_ref()).unwrap();
            tiled.advance(tiled_engine.as_ref()).unwrap();
            prop_assert_eq!(naive.view().cells(), tiled.view().cells());
        }
    }
}
