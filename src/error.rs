//! # Error types
//!
//! Error taxonomy for the simulation core. Grid reads report out-of-range
//! addresses, boundary setters reject out-of-range rates and cell sizes
//! before they can reach the step loop, and pattern decoding failures are
//! surfaced at load time only.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A checked read addressed a cell outside the current grid dimensions.
    /// Writes never produce this; out-of-range writes are silently ignored.
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: i32,
        col: i32,
        width: u32,
        height: u32,
    },

    /// Requested frame rate falls outside the supported range.
    #[error("frame rate {0} is outside the supported range")]
    InvalidRate(u32),

    /// Requested cell size falls outside the supported range, or is not
    /// reachable by doubling/halving from the minimum.
    #[error("cell size {0}px is outside the supported range")]
    InvalidCellSize(u32),

    /// A pattern bitmap could not be decoded.
    #[error("failed to decode pattern image '{name}'")]
    PatternDecode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    /// A stamp request referenced a pattern name that was never loaded.
    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),
}

pub type Result<T> = std::result::Result<T, Error>;
