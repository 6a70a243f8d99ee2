//! # Rule engine
//!
//! Conway's update rule as pure functions over a single grid snapshot.
//! Neither function mutates anything: `step` in the buffer module reads
//! the visible grid through these and writes the staging grid, so the
//! grid being written is never observed here.

use crate::grid::{Cell, Grid};

/// Relative offsets of the 8 Moore-neighborhood cells.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count the live cells in the Moore neighborhood of `(row, col)`.
///
/// Neighbors outside the grid contribute 0; a corner cell therefore has
/// at most 3 countable neighbors. Pure function of one grid snapshot.
pub fn count_live_neighbors(grid: &Grid, row: i32, col: i32) -> u8 {
    let mut count = 0;
    for (row_offset, col_offset) in NEIGHBOR_OFFSETS {
        if let Some(cell) = grid.get(row + row_offset, col + col_offset) {
            if cell.is_live() {
                count += 1;
            }
        }
    }
    count
}

/// Next-generation state for a cell with the given live-neighbor count.
///
/// The full rule table: a live cell survives with 2 or 3 live neighbors,
/// a dead cell is born with exactly 3, and every other combination is
/// dead. Total over every `(state, count)` pair, no history, no
/// randomness.
pub fn next_state(current: Cell, live_neighbors: u8) -> Cell {
    match (current, live_neighbors) {
        (Cell::Live, 2) | (Cell::Live, 3) => Cell::Live,
        (Cell::Dead, 3) => Cell::Live,
        _ => Cell::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table_is_exhaustive() {
        // Survival band for live cells
        assert_eq!(next_state(Cell::Live, 0), Cell::Dead);
        assert_eq!(next_state(Cell::Live, 1), Cell::Dead);
        assert_eq!(next_state(Cell::Live, 2), Cell::Live);
        assert_eq!(next_state(Cell::Live, 3), Cell::Live);
        for n in 4..=8 {
            assert_eq!(next_state(Cell::Live, n), Cell::Dead);
        }
        // Birth only at exactly 3
        for n in 0..=8 {
            let expected = if n == 3 { Cell::Live } else { Cell::Dead };
            assert_eq!(next_state(Cell::Dead, n), expected);
        }
    }

    #[test]
    fn test_neighbor_count_center() {
        let mut grid = Grid::new(5, 5);
        for (row, col) in [(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)] {
            grid.set(row, col, Cell::Live);
        }
        assert_eq!(count_live_neighbors(&grid, 2, 2), 8);
    }

    #[test]
    fn test_neighbor_count_never_leaves_grid() {
        // A live corner cell is visible to exactly its 3 in-grid neighbors.
        let mut grid = Grid::new(5, 5);
        grid.set(0, 0, Cell::Live);
        assert_eq!(count_live_neighbors(&grid, 0, 1), 1);
        assert_eq!(count_live_neighbors(&grid, 1, 0), 1);
        assert_eq!(count_live_neighbors(&grid, 1, 1), 1);
        assert_eq!(count_live_neighbors(&grid, 0, 2), 0);
        assert_eq!(count_live_neighbors(&grid, 2, 2), 0);
        // And the corner itself never counts the outside as live.
        assert_eq!(count_live_neighbors(&grid, 0, 0), 0);
    }

    #[test]
    fn test_neighbor_count_excludes_center() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, Cell::Live);
        assert_eq!(count_live_neighbors(&grid, 1, 1), 0);
    }
}
