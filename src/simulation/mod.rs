//! # Simulation system
//!
//! The double-buffered update core and the machinery that drives it: the
//! grid-pair controller, the cooperative step scheduler, and the session
//! object the host interacts with.

pub mod buffer;
pub mod scheduler;
pub mod session;

pub use buffer::DoubleBuffer;
pub use scheduler::{RunState, Scheduler};
pub use session::{ControlAction, LifeSession};
