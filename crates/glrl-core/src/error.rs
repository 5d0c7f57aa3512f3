//! Error types for glrl-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// glrl core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image size (no axes, or a zero-length axis)
    #[error("invalid image size: {0:?}")]
    InvalidDimension(Vec<usize>),

    /// Number of axes differs between two objects
    #[error("dimension mismatch: expected {expected} axes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Buffer length does not match the image size
    #[error("data length {actual} doesn't match size {size:?} ({expected} samples)")]
    DataLength {
        size: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    /// Index out of bounds on one axis
    #[error("index out of bounds on axis {axis}: {index} >= {len}")]
    IndexOutOfBounds {
        axis: usize,
        index: usize,
        len: usize,
    },

    /// Region does not fit inside the image
    #[error("region {start:?}+{size:?} exceeds image size {bounds:?}")]
    RegionOutOfBounds {
        start: Vec<usize>,
        size: Vec<usize>,
        bounds: Vec<usize>,
    },

    /// Spacing is not finite and strictly positive
    #[error("invalid spacing on axis {axis}: {value}")]
    InvalidSpacing { axis: usize, value: f64 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for glrl core operations
pub type Result<T> = std::result::Result<T, Error>;
