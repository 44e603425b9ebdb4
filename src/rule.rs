// rule.rs - Conway's B3/S23 neighbour rule

/// Offsets of the 8 neighbours as (row, col) deltas.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Next state of a cell from its current state and live-neighbour count.
#[inline]
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 0..=1) => false, // Underpopulation
        (_, 4..)      => false, // Overpopulation
        (_, 3)        => true,  // Birth or survival
        (alive, _)    => alive, // Two neighbours: unchanged
    }
}

/// Counts the neighbours for which `is_alive(d_row, d_col)` holds.
#[inline]
pub fn live_neighbors(is_alive: impl Fn(isize, isize) -> bool) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(d_row, d_col)| is_alive(d_row, d_col))
        .count() as u8
}
