//! glrl - Gray-level run-length texture features for Rust
//!
//! Computes, for every voxel of an N-dimensional integer image, the ten
//! classic run-length texture features of its rectangular neighborhood,
//! optionally restricted by a mask.
//!
//! # Overview
//!
//! - N-dimensional images with physical spacing ([`Image`], [`Geometry`])
//! - Rectangular regions and their iteration order ([`Region`])
//! - Multi-component feature maps ([`FeatureMap`])
//! - Run-length histograms and features ([`texture`])
//!
//! # Example
//!
//! ```
//! use glrl::{Geometry, Image};
//! use glrl::texture::{Radius, RunLengthFeature, TextureOptions};
//!
//! let geometry = Geometry::new(vec![6, 6]).unwrap();
//! let image = Image::new_with_value(geometry, 3u8);
//! let options = TextureOptions {
//!     radius: Radius::Uniform(1),
//!     bins_per_axis: 4,
//!     intensity_range: Some((0u8, 7u8)),
//!     distance_range: Some((0.5, 4.5)),
//!     offsets: Some(vec![vec![1, 0]]),
//!     ..Default::default()
//! };
//! let map = glrl::texture::run_length_texture_features(image.view(), None, &options).unwrap();
//! let lre = map.component_index(RunLengthFeature::LongRunEmphasis.short_name()).unwrap();
//! assert_eq!(map.get(&[2, 2]).unwrap()[lre], 9.0);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use glrl_core::*;

// Re-export the texture crate as a module to keep its names apart
pub use glrl_texture as texture;
