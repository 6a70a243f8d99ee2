//! # Rendering
//!
//! Pure output stage: draws the visible grid onto a [`DrawingSurface`]
//! and never mutates game state. Each frame clears the surface, draws
//! grid lines when cells are large enough to make them legible, fills a
//! box per live cell, and writes the two status labels.

pub mod surface;

pub use surface::{DrawingSurface, Rgb};

use crate::grid::Grid;
use crate::view::ViewState;

/// Cell size below which grid lines are skipped; tighter spacing turns
/// the whole canvas into line noise.
pub const GRID_LINE_RENDER_THRESHOLD: u32 = 8;

/// Fill color for live cells.
pub const LIVE_COLOR: Rgb = Rgb::new(0xFF, 0x00, 0x00);

/// Stroke color for grid lines.
pub const GRID_LINE_COLOR: Rgb = Rgb::new(0xCC, 0xCC, 0xCC);

/// Color for the status labels.
pub const TEXT_COLOR: Rgb = Rgb::new(0x77, 0x77, 0xCC);

/// Screen position of the frame-rate label.
const FPS_LABEL_POS: (u32, u32) = (20, 450);

/// Screen position of the cell-size label.
const CELL_SIZE_LABEL_POS: (u32, u32) = (20, 480);

/// Draws frames of the simulation. Holds only colors, no game state.
pub struct Renderer {
    live_color: Rgb,
    grid_line_color: Rgb,
    text_color: Rgb,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            live_color: LIVE_COLOR,
            grid_line_color: GRID_LINE_COLOR,
            text_color: TEXT_COLOR,
        }
    }

    /// Draw one full frame of `grid` through `surface`.
    ///
    /// # Arguments
    /// * `view` - Canvas dimensions and current cell size
    /// * `grid` - The visible grid to draw
    /// * `rate` - Target frame rate shown in the status label
    /// * `surface` - Host drawing target
    pub fn render(
        &self,
        view: &ViewState,
        grid: &Grid,
        rate: u32,
        surface: &mut dyn DrawingSurface,
    ) {
        let cell = view.cell_size();
        surface.clear(view.canvas_width(), view.canvas_height());

        if cell >= GRID_LINE_RENDER_THRESHOLD {
            self.draw_grid_lines(view, surface);
        }
        self.draw_live_cells(grid, cell, surface);
        self.draw_labels(rate, cell, surface);
    }

    fn draw_grid_lines(&self, view: &ViewState, surface: &mut dyn DrawingSurface) {
        let cell = view.cell_size();
        let width = view.canvas_width();
        let height = view.canvas_height();

        let mut y = cell;
        while y < height {
            surface.draw_line(0, y, width, y, self.grid_line_color);
            y += cell;
        }
        let mut x = cell;
        while x < width {
            surface.draw_line(x, 0, x, height, self.grid_line_color);
            x += cell;
        }
    }

    fn draw_live_cells(&self, grid: &Grid, cell_size: u32, surface: &mut dyn DrawingSurface) {
        for row in 0..grid.height() as i32 {
            for col in 0..grid.width() as i32 {
                if grid.get(row, col).is_some_and(|cell| cell.is_live()) {
                    let x = col as u32 * cell_size;
                    let y = row as u32 * cell_size;
                    surface.fill_rect(x, y, cell_size, cell_size, self.live_color);
                }
            }
        }
    }

    fn draw_labels(&self, rate: u32, cell_size: u32, surface: &mut dyn DrawingSurface) {
        let (fps_x, fps_y) = FPS_LABEL_POS;
        surface.draw_text(&format!("FPS: {}", rate), fps_x, fps_y, self.text_color);
        let (cell_x, cell_y) = CELL_SIZE_LABEL_POS;
        surface.draw_text(
            &format!("Cell Length: {}", cell_size),
            cell_x,
            cell_y,
            self.text_color,
        );
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    /// Surface double that records every call for assertion.
    #[derive(Default)]
    pub struct RecordingSurface {
        pub commands: Vec<DrawCommand>,
    }

    #[derive(PartialEq, Eq, Debug)]
    pub enum DrawCommand {
        Clear(u32, u32),
        FillRect(u32, u32, u32, u32, Rgb),
        DrawLine(u32, u32, u32, u32, Rgb),
        DrawText(String, u32, u32, Rgb),
    }

    impl DrawingSurface for RecordingSurface {
        fn clear(&mut self, width: u32, height: u32) {
            self.commands.push(DrawCommand::Clear(width, height));
        }

        fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb) {
            self.commands
                .push(DrawCommand::FillRect(x, y, width, height, color));
        }

        fn draw_line(&mut self, x1: u32, y1: u32, x2: u32, y2: u32, color: Rgb) {
            self.commands
                .push(DrawCommand::DrawLine(x1, y1, x2, y2, color));
        }

        fn draw_text(&mut self, text: &str, x: u32, y: u32, color: Rgb) {
            self.commands
                .push(DrawCommand::DrawText(text.to_string(), x, y, color));
        }
    }

    fn view_with_cell_size(canvas: u32, cell_size: u32) -> ViewState {
        let mut view = ViewState::new(canvas, canvas);
        while view.cell_size() < cell_size {
            assert!(view.zoom_in());
        }
        view
    }

    #[test]
    fn test_frame_starts_with_clear() {
        let view = ViewState::new(64, 64);
        let grid = Grid::for_canvas(64, 64, view.cell_size());
        let mut surface = RecordingSurface::default();
        Renderer::new().render(&view, &grid, 33, &mut surface);
        assert_eq!(surface.commands[0], DrawCommand::Clear(64, 64));
    }

    #[test]
    fn test_small_cells_skip_grid_lines() {
        let view = view_with_cell_size(64, 4);
        let grid = Grid::for_canvas(64, 64, 4);
        let mut surface = RecordingSurface::default();
        Renderer::new().render(&view, &grid, 33, &mut surface);
        assert!(!surface
            .commands
            .iter()
            .any(|command| matches!(command, DrawCommand::DrawLine(..))));
    }

    #[test]
    fn test_large_cells_draw_grid_lines() {
        let view = view_with_cell_size(32, 8);
        let grid = Grid::for_canvas(32, 32, 8);
        let mut surface = RecordingSurface::default();
        Renderer::new().render(&view, &grid, 33, &mut surface);
        // 3 horizontal + 3 vertical interior lines on a 32px canvas.
        let lines: Vec<_> = surface
            .commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::DrawLine(..)))
            .collect();
        assert_eq!(lines.len(), 6);
        assert!(lines.contains(&&DrawCommand::DrawLine(0, 8, 32, 8, GRID_LINE_COLOR)));
        assert!(lines.contains(&&DrawCommand::DrawLine(24, 0, 24, 32, GRID_LINE_COLOR)));
    }

    #[test]
    fn test_live_cells_fill_scaled_boxes() {
        let view = view_with_cell_size(32, 8);
        let mut grid = Grid::for_canvas(32, 32, 8);
        grid.set(1, 2, Cell::Live);
        let mut surface = RecordingSurface::default();
        Renderer::new().render(&view, &grid, 33, &mut surface);
        assert!(surface
            .commands
            .contains(&DrawCommand::FillRect(16, 8, 8, 8, LIVE_COLOR)));
    }

    #[test]
    fn test_labels_show_rate_and_cell_size() {
        let view = view_with_cell_size(512, 16);
        let grid = Grid::for_canvas(512, 512, 16);
        let mut surface = RecordingSurface::default();
        Renderer::new().render(&view, &grid, 12, &mut surface);
        assert!(surface.commands.contains(&DrawCommand::DrawText(
            "FPS: 12".to_string(),
            20,
            450,
            TEXT_COLOR
        )));
        assert!(surface.commands.contains(&DrawCommand::DrawText(
            "Cell Length: 16".to_string(),
            20,
            480,
            TEXT_COLOR
        )));
    }
}
