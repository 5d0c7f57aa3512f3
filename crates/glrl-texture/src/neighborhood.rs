//! Digitized image and neighborhood windows
//!
//! The intensity image is digitized once, with the mask folded in, before
//! any voxel is processed. A [`Neighborhood`] is then a bounds-checked,
//! read-only window of that digitized image around one center voxel.

use crate::digitize::Digitizer;
use glrl_core::{Geometry, ImageView, Region, Sample};

/// Intensity bins of a whole image, `None` where the voxel is not eligible.
#[derive(Debug, Clone)]
pub struct DigitizedImage {
    geometry: Geometry,
    bins: Vec<Option<u32>>,
}

impl DigitizedImage {
    /// Digitize `image`, marking voxels whose mask sample differs from
    /// `inside` as ineligible.
    ///
    /// The mask must share the image geometry; callers check this first.
    pub fn new<T: Sample>(
        image: ImageView<'_, T>,
        mask: Option<ImageView<'_, T>>,
        inside: T,
        digitizer: &Digitizer,
    ) -> Self {
        let bins = match mask {
            Some(mask) => image
                .data()
                .iter()
                .zip(mask.data())
                .map(|(&v, &m)| (m == inside).then(|| digitizer.bin(v.to_f64()) as u32))
                .collect(),
            None => image
                .data()
                .iter()
                .map(|&v| Some(digitizer.bin(v.to_f64()) as u32))
                .collect(),
        };
        DigitizedImage {
            geometry: image.geometry().clone(),
            bins,
        }
    }

    /// Image geometry
    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Bin of the voxel at a linear offset, `None` if not eligible.
    ///
    /// # Panics
    ///
    /// Panics if `linear` is not below the voxel count.
    #[inline]
    pub fn bin_at(&self, linear: usize) -> Option<u32> {
        self.bins[linear]
    }

    /// Bin of the voxel at `index`, `None` if outside or not eligible.
    pub fn bin(&self, index: &[usize]) -> Option<u32> {
        let lin = self.geometry.linear_index(index).ok()?;
        self.bins[lin]
    }

    /// Number of eligible voxels in the whole image
    pub fn eligible_count(&self) -> usize {
        self.bins.iter().filter(|b| b.is_some()).count()
    }
}

/// Window `[center - r, center + r]` of a digitized image, clipped to the
/// image bounds.
#[derive(Debug, Clone)]
pub struct Neighborhood<'a> {
    image: &'a DigitizedImage,
    center: Vec<usize>,
    window: Region,
    /// First index of the window on each axis
    lower: Vec<i64>,
    /// Last index of the window on each axis (inclusive)
    upper: Vec<i64>,
}

impl<'a> Neighborhood<'a> {
    /// Create the window of radius `radius` around `center`.
    ///
    /// `center` must lie inside the image and `radius` must have one entry
    /// per axis.
    pub fn new(image: &'a DigitizedImage, center: &[usize], radius: &[usize]) -> Self {
        let window = Region::around(center, radius, image.geometry().size());
        let lower = window.start().iter().map(|&s| s as i64).collect();
        let upper = window
            .start()
            .iter()
            .zip(window.size())
            .map(|(&s, &n)| (s + n) as i64 - 1)
            .collect();
        Neighborhood {
            image,
            center: center.to_vec(),
            window,
            lower,
            upper,
        }
    }

    /// Center voxel
    #[inline]
    pub fn center(&self) -> &[usize] {
        &self.center
    }

    /// The window as a region in image coordinates.
    #[inline]
    pub fn region(&self) -> &Region {
        &self.window
    }

    /// True if the absolute index lies inside the window.
    #[inline]
    pub fn contains(&self, index: &[i64]) -> bool {
        index
            .iter()
            .zip(self.lower.iter().zip(&self.upper))
            .all(|(&i, (&l, &u))| i >= l && i <= u)
    }

    /// Bin at an absolute index, `None` if outside the window or not eligible.
    #[inline]
    pub fn bin_at(&self, index: &[i64]) -> Option<u32> {
        if !self.contains(index) {
            return None;
        }
        let lin: usize = index
            .iter()
            .zip(self.image.geometry().strides())
            .map(|(&i, &s)| i as usize * s)
            .sum();
        self.image.bin_at(lin)
    }

    /// Bin at an offset from the center, `None` if outside or not eligible.
    pub fn bin_at_offset(&self, offset: &[i64]) -> Option<u32> {
        let index: Vec<i64> = self
            .center
            .iter()
            .zip(offset)
            .map(|(&c, &o)| (c as i64).checked_add(o))
            .collect::<Option<_>>()?;
        self.bin_at(&index)
    }

    /// True if the voxel at an offset from the center is inside the window
    /// and eligible.
    #[inline]
    pub fn is_eligible(&self, offset: &[i64]) -> bool {
        self.bin_at_offset(offset).is_some()
    }

    /// Number of eligible voxels in the window
    pub fn eligible_count(&self) -> usize {
        self.window
            .indices()
            .filter(|idx| {
                let lin = self.image.geometry().linear_index_unchecked(idx);
                self.image.bin_at(lin).is_some()
            })
            .count()
    }
}
