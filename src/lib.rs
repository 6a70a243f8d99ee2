// src/lib.rs
//! Seawolf
//!
//! A Conway's Game of Life simulation core: a fixed-size cell grid, the
//! B3/S23 update rule, a double-buffered step controller, a cancellable
//! frame-rate scheduler, and a renderer that draws onto any host-supplied
//! 2D drawing surface.

pub mod error;
pub mod grid;
pub mod patterns;
pub mod prelude;
pub mod render;
pub mod rules;
pub mod simulation;
pub mod view;

// Re-export main types for convenience
pub use error::Error;
pub use simulation::session::LifeSession;

/// Canvas dimensions the original simulation shipped with.
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

/// Creates a session over the default canvas size
pub fn default() -> LifeSession {
    LifeSession::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
}
