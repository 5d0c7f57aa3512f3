//! glrl-texture - Per-voxel gray-level run-length texture features
//!
//! This crate computes, for every voxel of an N-dimensional integer image,
//! up to ten run-length texture features of the voxel's neighborhood,
//! averaged over a set of directions and optionally restricted by a mask:
//!
//! - [`offset`] - Direction canonicalization and offset sets
//! - [`digitize`] - Intensity and run-distance binning
//! - [`neighborhood`] - Digitized image and bounds-checked windows
//! - [`histogram`] - Run-length histogram of one window along one direction
//! - [`features`] - The ten features and their averaging
//! - [`options`] - Validated configuration
//! - [`filter`] - Per-voxel computation and whole-image drivers
//!
//! With the `parallel` feature, [`RunLengthTextureFilter::run_parallel`]
//! spreads voxels over the rayon thread pool.

pub mod digitize;
mod error;
pub mod features;
pub mod filter;
pub mod histogram;
pub mod neighborhood;
pub mod offset;
pub mod options;

pub use error::{TextureError, TextureResult};

// Re-export commonly used items
pub use digitize::Digitizer;
pub use features::{NUM_FEATURES, RunLengthFeature, RunLengthFeatures};
pub use filter::{RunLengthTextureFilter, run_length_texture_features};
pub use histogram::RunLengthHistogram;
pub use neighborhood::{DigitizedImage, Neighborhood};
pub use offset::{Offset, OffsetSet, canonicalize};
pub use options::{Radius, TextureOptions, TextureParams};
