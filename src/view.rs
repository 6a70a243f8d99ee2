//! # View state
//!
//! Canvas dimensions and the current cell pixel size. The cell size only
//! moves by doubling or halving between [`MIN_CELL_SIZE`] and
//! [`MAX_CELL_SIZE`], and grid dimensions derive from it by floor
//! division, so every size change implies reallocating the grid pair.

/// Smallest cell edge in pixels; cells map one-to-one onto pixels.
pub const MIN_CELL_SIZE: u32 = 1;

/// Largest cell edge in pixels.
pub const MAX_CELL_SIZE: u32 = 128;

/// Zoom factor: cell size multiplies or divides by this per step.
pub const CELL_SIZE_FACTOR: u32 = 2;

use crate::error::{Error, Result};

/// Current zoom level and the canvas it projects onto.
#[derive(Clone, Copy, Debug)]
pub struct ViewState {
    canvas_width: u32,
    canvas_height: u32,
    cell_size: u32,
}

impl ViewState {
    /// View over a canvas of the given pixel dimensions, starting fully
    /// zoomed out (one pixel per cell).
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            cell_size: MIN_CELL_SIZE,
        }
    }

    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Current cell edge length in pixels.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Grid width implied by the current cell size.
    pub fn grid_width(&self) -> u32 {
        self.canvas_width / self.cell_size
    }

    /// Grid height implied by the current cell size.
    pub fn grid_height(&self) -> u32 {
        self.canvas_height / self.cell_size
    }

    /// Double the cell size. Returns true when the size changed, so the
    /// caller knows the grid pair must be reallocated.
    pub fn zoom_in(&mut self) -> bool {
        if self.cell_size < MAX_CELL_SIZE {
            self.cell_size *= CELL_SIZE_FACTOR;
            true
        } else {
            false
        }
    }

    /// Halve the cell size. Returns true when the size changed.
    pub fn zoom_out(&mut self) -> bool {
        if self.cell_size > MIN_CELL_SIZE {
            self.cell_size /= CELL_SIZE_FACTOR;
            true
        } else {
            false
        }
    }

    /// Set the cell size exactly, rejecting anything outside the bounds
    /// or not reachable by doubling from the minimum. Returns whether the
    /// size actually changed.
    pub fn set_cell_size(&mut self, size: u32) -> Result<bool> {
        if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&size) || !size.is_power_of_two() {
            return Err(Error::InvalidCellSize(size));
        }
        let changed = self.cell_size != size;
        self.cell_size = size;
        Ok(changed)
    }
}
