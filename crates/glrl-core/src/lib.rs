//! glrl Core - Basic data structures for run-length texture analysis
//!
//! This crate provides the data structures shared by the glrl crates:
//!
//! - [`Image`] / [`ImageView`] - N-dimensional integer sample grid (owned / borrowed)
//! - [`Geometry`] - Grid size, physical spacing and strides
//! - [`Region`] - Index boxes used to partition work
//! - [`FeatureMap`] - Multi-component floating-point output grid
//! - [`Sample`] - Integer sample types accepted as intensities

pub mod error;
pub mod feature_map;
pub mod image;
pub mod region;
pub mod sample;

pub use error::{Error, Result};
pub use feature_map::FeatureMap;
pub use image::{Geometry, Image, ImageView};
pub use region::{Region, RegionIndices};
pub use sample::Sample;
