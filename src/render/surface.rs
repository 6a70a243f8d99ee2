//! # Drawing surface abstraction
//!
//! The core never talks to a concrete canvas. The host supplies
//! something that can clear itself, fill rectangles, draw lines, and draw
//! text; the renderer issues those calls and nothing else. The surface
//! performs no game logic.

/// 8-bit RGB color passed through to the surface unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Abstract 2D raster target. Coordinates are pixels with the origin at
/// the top-left corner.
pub trait DrawingSurface {
    /// Erase the full `width x height` pixel area.
    fn clear(&mut self, width: u32, height: u32);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb);

    /// Draw a one-pixel line between two points.
    fn draw_line(&mut self, x1: u32, y1: u32, x2: u32, y2: u32, color: Rgb);

    /// Draw a text label with its baseline at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: u32, y: u32, color: Rgb);
}
