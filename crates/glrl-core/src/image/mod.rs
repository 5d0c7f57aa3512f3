//! Image - N-dimensional integer sample grid
//!
//! [`Image`] owns its samples and geometry. Algorithms never take an
//! `Image` by value; they borrow an [`ImageView`], a read-only window onto
//! any sample buffer that matches a [`Geometry`].
//!
//! # Examples
//!
//! ```
//! use glrl_core::{Geometry, Image};
//!
//! let geometry = Geometry::new(vec![4, 3]).unwrap();
//! let mut image = Image::new_with_value(geometry, 0u8);
//! image.set(&[1, 2], 7).unwrap();
//! assert_eq!(image.get(&[1, 2]).unwrap(), 7);
//! assert_eq!(image.view().get(&[1, 2]), Some(7));
//! ```

mod geometry;

pub use geometry::Geometry;

use crate::error::{Error, Result};

/// Owned N-dimensional image
///
/// # Memory Layout
///
/// Data is stored with axis 0 varying fastest and no padding; see
/// [`Geometry`] for the index-to-offset mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    geometry: Geometry,
    data: Vec<T>,
}

impl<T: Copy> Image<T> {
    /// Create an image with every sample set to `value`.
    pub fn new_with_value(geometry: Geometry, value: T) -> Self {
        let data = vec![value; geometry.num_voxels()];
        Image { geometry, data }
    }

    /// Create an image from raw samples in memory order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLength`] if `data` does not hold exactly one
    /// sample per voxel.
    pub fn from_data(geometry: Geometry, data: Vec<T>) -> Result<Self> {
        check_len(&geometry, data.len())?;
        Ok(Image { geometry, data })
    }

    /// Create an image by evaluating `f` at every index.
    pub fn from_fn(geometry: Geometry, mut f: impl FnMut(&[usize]) -> T) -> Self {
        let data = geometry.region().indices().map(|idx| f(&idx)).collect();
        Image { geometry, data }
    }

    /// Image geometry
    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Samples in memory order
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable samples in memory order
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get the sample at `index`.
    pub fn get(&self, index: &[usize]) -> Result<T> {
        let lin = self.geometry.linear_index(index)?;
        Ok(self.data[lin])
    }

    /// Set the sample at `index`.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<()> {
        let lin = self.geometry.linear_index(index)?;
        self.data[lin] = value;
        Ok(())
    }

    /// Set every sample to `value`.
    pub fn set_all(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Borrow a read-only view of this image.
    #[inline]
    pub fn view(&self) -> ImageView<'_, T> {
        ImageView {
            geometry: &self.geometry,
            data: &self.data,
        }
    }
}

/// Borrowed read-only view of an N-dimensional sample buffer
///
/// Views are `Copy` and never own or mutate what they point at.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a, T> {
    geometry: &'a Geometry,
    data: &'a [T],
}

impl<'a, T: Copy> ImageView<'a, T> {
    /// Wrap an external buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLength`] if `data` does not match `geometry`.
    pub fn new(geometry: &'a Geometry, data: &'a [T]) -> Result<Self> {
        check_len(geometry, data.len())?;
        Ok(ImageView { geometry, data })
    }

    /// View geometry
    #[inline]
    pub fn geometry(&self) -> &'a Geometry {
        self.geometry
    }

    /// Samples in memory order
    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Get the sample at `index`, or `None` if it is outside the grid.
    #[inline]
    pub fn get(&self, index: &[usize]) -> Option<T> {
        self.geometry
            .linear_index(index)
            .ok()
            .map(|lin| self.data[lin])
    }

    /// Get the sample at a linear offset.
    ///
    /// # Panics
    ///
    /// Panics if `linear` is not below the voxel count.
    #[inline]
    pub fn get_linear(&self, linear: usize) -> T {
        self.data[linear]
    }
}

fn check_len(geometry: &Geometry, len: usize) -> Result<()> {
    let expected = geometry.num_voxels();
    if len != expected {
        return Err(Error::DataLength {
            size: geometry.size().to_vec(),
            expected,
            actual: len,
        });
    }
    Ok(())
}
