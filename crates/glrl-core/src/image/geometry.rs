//! Image geometry: size, physical spacing and memory strides
//!
//! Index vectors are ordered `[x, y, z, ...]` and axis 0 varies fastest in
//! memory, so the sample at index `i` lives at `Σ i[a] * stride[a]` with
//! `stride[0] = 1`.

use crate::error::{Error, Result};
use crate::region::Region;

/// Size and spacing of an N-dimensional grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    /// Number of samples along each axis
    size: Vec<usize>,
    /// Physical distance between adjacent samples along each axis
    spacing: Vec<f64>,
    /// Linear distance between adjacent samples along each axis
    strides: Vec<usize>,
}

impl Geometry {
    /// Create a geometry with unit spacing on every axis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if there are no axes or any axis
    /// has zero length.
    pub fn new(size: Vec<usize>) -> Result<Self> {
        let spacing = vec![1.0; size.len()];
        Self::with_spacing(size, spacing)
    }

    /// Create a geometry with explicit per-axis spacing.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if there are no axes or an axis is empty
    /// - [`Error::DimensionMismatch`] if `spacing` has a different length
    /// - [`Error::InvalidSpacing`] if a spacing is not finite and positive
    pub fn with_spacing(size: Vec<usize>, spacing: Vec<f64>) -> Result<Self> {
        if size.is_empty() || size.contains(&0) {
            return Err(Error::InvalidDimension(size));
        }
        if spacing.len() != size.len() {
            return Err(Error::DimensionMismatch {
                expected: size.len(),
                actual: spacing.len(),
            });
        }
        for (axis, &value) in spacing.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidSpacing { axis, value });
            }
        }

        let mut strides = Vec::with_capacity(size.len());
        let mut stride = 1usize;
        for &len in &size {
            strides.push(stride);
            stride = stride
                .checked_mul(len)
                .ok_or_else(|| Error::InvalidParameter(format!("size {size:?} overflows usize")))?;
        }

        Ok(Geometry {
            size,
            spacing,
            strides,
        })
    }

    /// Number of axes
    #[inline]
    pub fn ndim(&self) -> usize {
        self.size.len()
    }

    /// Number of samples along each axis
    #[inline]
    pub fn size(&self) -> &[usize] {
        &self.size
    }

    /// Physical spacing along each axis
    #[inline]
    pub fn spacing(&self) -> &[f64] {
        &self.spacing
    }

    /// Linear strides along each axis
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Total number of samples
    #[inline]
    pub fn num_voxels(&self) -> usize {
        self.size.iter().product()
    }

    /// The region covering the whole grid.
    pub fn region(&self) -> Region {
        Region::from_size(self.size.clone())
    }

    /// Linear offset of an index, with bounds checking.
    pub fn linear_index(&self, index: &[usize]) -> Result<usize> {
        if index.len() != self.ndim() {
            return Err(Error::DimensionMismatch {
                expected: self.ndim(),
                actual: index.len(),
            });
        }
        for (axis, (&i, &len)) in index.iter().zip(&self.size).enumerate() {
            if i >= len {
                return Err(Error::IndexOutOfBounds {
                    axis,
                    index: i,
                    len,
                });
            }
        }
        Ok(self.linear_index_unchecked(index))
    }

    /// Linear offset of an index, without bounds checking.
    #[inline]
    pub fn linear_index_unchecked(&self, index: &[usize]) -> usize {
        index.iter().zip(&self.strides).map(|(&i, &s)| i * s).sum()
    }

    /// Index vector of a linear offset.
    pub fn index_of(&self, mut linear: usize) -> Vec<usize> {
        let mut index = vec![0; self.ndim()];
        for (axis, &len) in self.size.iter().enumerate() {
            index[axis] = linear % len;
            linear /= len;
        }
        index
    }

    /// Check whether a signed index falls inside the grid.
    #[inline]
    pub fn contains(&self, index: &[i64]) -> bool {
        index.len() == self.ndim()
            && index
                .iter()
                .zip(&self.size)
                .all(|(&i, &len)| i >= 0 && (i as u64) < len as u64)
    }

    /// Check that `region` lies entirely inside the grid.
    pub fn check_region(&self, region: &Region) -> Result<()> {
        if region.ndim() != self.ndim() {
            return Err(Error::DimensionMismatch {
                expected: self.ndim(),
                actual: region.ndim(),
            });
        }
        let fits = region
            .start()
            .iter()
            .zip(region.size())
            .zip(&self.size)
            .all(|((&s, &n), &len)| s.checked_add(n).is_some_and(|end| end <= len));
        if !fits {
            return Err(Error::RegionOutOfBounds {
                start: region.start().to_vec(),
                size: region.size().to_vec(),
                bounds: self.size.clone(),
            });
        }
        Ok(())
    }
}
