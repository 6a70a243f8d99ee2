//! # Double-buffer controller
//!
//! Owns the two grids that make generation updates correct: `visible` is
//! the grid the renderer draws and the rule engine reads, `staging` is
//! the grid the rule engine writes. After a full pass the two labels
//! swap in O(1); cells are never copied between them. Reads for a new
//! generation therefore never observe partially-updated state.

use crate::grid::{Cell, Grid};
use crate::patterns::Pattern;
use crate::rules::{count_live_neighbors, next_state};

/// The `{visible, staging}` grid pair plus a generation counter.
///
/// No other component mutates the grids directly; stamping, stepping,
/// and resetting all go through this controller.
pub struct DoubleBuffer {
    visible: Grid,
    staging: Grid,
    generation: u64,
}

impl DoubleBuffer {
    /// Allocate both grids at the given dimensions, all cells dead.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            visible: Grid::new(width, height),
            staging: Grid::new(width, height),
            generation: 0,
        }
    }

    /// Advance one generation.
    ///
    /// Every staging cell is computed from the visible snapshot, then the
    /// grids swap labels. On return `visible` holds the new generation and
    /// `staging` holds the prior one, to be overwritten by the next step.
    pub fn step(&mut self) {
        let height = self.visible.height() as i32;
        let width = self.visible.width() as i32;
        for row in 0..height {
            for col in 0..width {
                let current = self
                    .visible
                    .get(row, col)
                    .unwrap_or(Cell::Dead);
                let neighbors = count_live_neighbors(&self.visible, row, col);
                self.staging.set(row, col, next_state(current, neighbors));
            }
        }
        std::mem::swap(&mut self.visible, &mut self.staging);
        self.generation += 1;
    }

    /// Reallocate both grids at new dimensions with every cell dead and
    /// the generation counter back at zero.
    pub fn reset(&mut self, width: u32, height: u32) {
        self.visible = Grid::new(width, height);
        self.staging = Grid::new(width, height);
        self.generation = 0;
    }

    /// Write a pattern's live cells at the given origin into BOTH grids.
    ///
    /// Writing both means a stamp survives the next swap even when no
    /// step has run in between to repopulate staging from visible.
    /// Offsets that land outside the grid are dropped silently.
    pub fn stamp(&mut self, origin_row: i32, origin_col: i32, pattern: &Pattern) {
        for &(dx, dy) in pattern.offsets() {
            let row = origin_row + dy;
            let col = origin_col + dx;
            self.visible.set(row, col, Cell::Live);
            self.staging.set(row, col, Cell::Live);
        }
    }

    /// Read-only view of the grid currently on screen.
    pub fn visible(&self) -> &Grid {
        &self.visible
    }

    /// Generations stepped since the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
