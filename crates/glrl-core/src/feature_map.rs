//! FeatureMap - multi-component floating-point output grid
//!
//! A `FeatureMap` shares the geometry of the image it was computed from and
//! stores a fixed number of named `f64` components per voxel.
//!
//! # Memory Layout
//!
//! Components of one voxel are contiguous: component `k` of the voxel at
//! linear offset `v` is at `data[v * components + k]`.

use crate::error::{Error, Result};
use crate::image::Geometry;

/// Per-voxel vector image
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMap {
    geometry: Geometry,
    names: Vec<String>,
    data: Vec<f64>,
}

impl FeatureMap {
    /// Create a zero-filled map with one component per name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `names` is empty.
    pub fn new(geometry: Geometry, names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(Error::InvalidParameter(
                "feature map needs at least one component".into(),
            ));
        }
        let data = vec![0.0; geometry.num_voxels() * names.len()];
        Ok(FeatureMap {
            geometry,
            names,
            data,
        })
    }

    /// Map geometry
    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Number of components per voxel
    #[inline]
    pub fn components(&self) -> usize {
        self.names.len()
    }

    /// Component names, in storage order
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Raw data, voxel-major
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Mutable raw data, voxel-major
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Components of the voxel at `index`.
    pub fn get(&self, index: &[usize]) -> Result<&[f64]> {
        let lin = self.geometry.linear_index(index)?;
        Ok(self.voxel(lin))
    }

    /// Components of the voxel at a linear offset.
    ///
    /// # Panics
    ///
    /// Panics if `linear` is not below the voxel count.
    #[inline]
    pub fn voxel(&self, linear: usize) -> &[f64] {
        let n = self.components();
        &self.data[linear * n..(linear + 1) * n]
    }

    /// Mutable components of the voxel at a linear offset.
    ///
    /// # Panics
    ///
    /// Panics if `linear` is not below the voxel count.
    #[inline]
    pub fn voxel_mut(&mut self, linear: usize) -> &mut [f64] {
        let n = self.components();
        &mut self.data[linear * n..(linear + 1) * n]
    }

    /// Extract one component as a scalar plane in memory order.
    pub fn component(&self, k: usize) -> Result<Vec<f64>> {
        let n = self.components();
        if k >= n {
            return Err(Error::IndexOutOfBounds {
                axis: 0,
                index: k,
                len: n,
            });
        }
        Ok(self.data.iter().skip(k).step_by(n).copied().collect())
    }

    /// Position of the component called `name`, if any.
    pub fn component_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}
