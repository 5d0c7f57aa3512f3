//! Error types for glrl-texture
//!
//! Every variant except `Core` is a configuration error: all of them are
//! raised while validating options or building a filter, before any voxel
//! is processed.

use glrl_core::Geometry;
use thiserror::Error;

/// Errors that can occur while configuring run-length texture analysis
#[derive(Debug, Error)]
pub enum TextureError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glrl_core::Error),

    /// Offset is zero or has the wrong number of components
    #[error("invalid offset {offset:?}: {reason}")]
    InvalidOffset {
        /// Offending offset as given
        offset: Vec<i64>,
        /// What is wrong with it
        reason: &'static str,
    },

    /// Range bounds are not finite or not strictly increasing
    #[error("invalid {name} range [{min}, {max}]")]
    InvalidRange {
        /// Which range ("intensity" or "distance")
        name: &'static str,
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// Mask or output geometry differs from the image geometry
    #[error("geometry mismatch: expected {expected:?}, got {actual:?}")]
    GeometryMismatch {
        /// Geometry of the intensity image
        expected: Geometry,
        /// Geometry that was supplied
        actual: Geometry,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for texture operations
pub type TextureResult<T> = Result<T, TextureError>;
