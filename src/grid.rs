//! # Cell grid
//!
//! Fixed-size 2D cell store with bounds-checked accessors. Grid dimensions
//! are derived from the canvas pixel size and the current cell size, so a
//! grid is always recreated rather than resized in place when the cell
//! size changes.
//!
//! Addressing is `(row, col)` with `row` indexing height and `col`
//! indexing width. Coordinates are signed so that neighbor arithmetic at
//! the edges never underflows; anything outside
//! `[0, height) x [0, width)` is an explicit out-of-range case, never a
//! wraparound.

use crate::error::{Error, Result};

/// State of a single grid cell. Cells carry no other attributes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Live,
}

impl Cell {
    /// Whether this cell counts toward a neighbor total.
    pub fn is_live(self) -> bool {
        self == Cell::Live
    }
}

/// A rectangular grid of cells with fixed dimensions in cell units.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell dead.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; (width as usize) * (height as usize)],
        }
    }

    /// Create a grid sized for a canvas, one cell per `cell_size` pixel
    /// square. Dimensions floor-divide, so a partial trailing row or
    /// column of pixels simply goes unused.
    pub fn for_canvas(canvas_width: u32, canvas_height: u32, cell_size: u32) -> Self {
        Self::new(canvas_width / cell_size, canvas_height / cell_size)
    }

    /// Grid width in cell units.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cell units.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True iff `(row, col)` addresses a cell inside this grid.
    pub fn is_valid(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as u32) < self.height && (col as u32) < self.width
    }

    /// Read the cell at `(row, col)`, or `None` when the address is out
    /// of range.
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        if self.is_valid(row, col) {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Checked read for callers that want the out-of-range case as an
    /// error rather than a sentinel.
    pub fn cell(&self, row: i32, col: i32) -> Result<Cell> {
        self.get(row, col).ok_or(Error::OutOfBounds {
            row,
            col,
            width: self.width,
            height: self.height,
        })
    }

    /// Write the cell at `(row, col)`. Out-of-range writes are silently
    /// ignored: pattern stamps that overlap a grid edge must drop their
    /// outside offsets without failing.
    pub fn set(&mut self, row: i32, col: i32, value: Cell) {
        if self.is_valid(row, col) {
            let index = self.index(row, col);
            self.cells[index] = value;
        }
    }

    /// Reset every cell to dead, keeping dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Number of live cells currently in the grid.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_live()).count()
    }

    fn index(&self, row: i32, col: i32) -> usize {
        (row as usize) * (self.width as usize) + (col as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_dead() {
        let grid = Grid::new(10, 6);
        for row in 0..6 {
            for col in 0..10 {
                assert_eq!(grid.get(row, col), Some(Cell::Dead));
            }
        }
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_for_canvas_floors_dimensions() {
        let grid = Grid::for_canvas(805, 600, 8);
        assert_eq!(grid.width(), 100);
        assert_eq!(grid.height(), 75);
    }

    #[test]
    fn test_is_valid_bounds() {
        let grid = Grid::new(5, 3);
        assert!(grid.is_valid(0, 0));
        assert!(grid.is_valid(2, 4));
        assert!(!grid.is_valid(-1, 0));
        assert!(!grid.is_valid(0, -1));
        assert!(!grid.is_valid(3, 0));
        assert!(!grid.is_valid(0, 5));
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let grid = Grid::new(4, 4);
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 4), None);
        assert_eq!(grid.get(-1, -1), None);
    }

    #[test]
    fn test_cell_out_of_range_is_error() {
        let grid = Grid::new(4, 4);
        assert!(matches!(
            grid.cell(7, 2),
            Err(crate::error::Error::OutOfBounds { row: 7, col: 2, .. })
        ));
        assert!(matches!(grid.cell(1, 2), Ok(Cell::Dead)));
    }

    #[test]
    fn test_set_round_trips() {
        let mut grid = Grid::new(4, 4);
        grid.set(2, 3, Cell::Live);
        assert_eq!(grid.get(2, 3), Some(Cell::Live));
        grid.set(2, 3, Cell::Dead);
        assert_eq!(grid.get(2, 3), Some(Cell::Dead));
    }

    #[test]
    fn test_set_out_of_range_is_ignored() {
        let mut grid = Grid::new(4, 4);
        grid.set(-1, 0, Cell::Live);
        grid.set(0, 17, Cell::Live);
        grid.set(4, 4, Cell::Live);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_clear_keeps_dimensions() {
        let mut grid = Grid::new(6, 2);
        grid.set(1, 5, Cell::Live);
        grid.clear();
        assert_eq!(grid.width(), 6);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.live_count(), 0);
    }
}
