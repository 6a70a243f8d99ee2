//! # Seawolf Prelude
//!
//! Convenient single import for the common types of the simulation core.
//!
//! ## Usage
//!
//! ```rust
//! use seawolf::prelude::*;
//!
//! let session = seawolf::default();
//! assert!(!session.is_running());
//! ```

// Re-export the session and its control surface
pub use crate::simulation::session::{ControlAction, LifeSession};
pub use crate::simulation::{DoubleBuffer, RunState, Scheduler};

// Re-export the data model
pub use crate::grid::{Cell, Grid};
pub use crate::patterns::{Pattern, PatternLibrary};
pub use crate::view::ViewState;

// Re-export the rendering seam
pub use crate::render::{DrawingSurface, Renderer, Rgb};

// Re-export error handling
pub use crate::error::{Error, Result};

// Re-export common standard library types
pub use std::time::{Duration, Instant};
