//! N-dimensional index boxes
//!
//! A [`Region`] is the unit hosts use to partition work: each region is
//! processed independently and regions produced by [`Region::split`] are
//! pairwise disjoint.

use crate::error::{Error, Result};

/// Axis-aligned box of indices `[start, start + size)` on every axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    start: Vec<usize>,
    size: Vec<usize>,
}

impl Region {
    /// Create a region from its first index and its extent.
    ///
    /// A zero extent on any axis gives an empty region.
    pub fn new(start: Vec<usize>, size: Vec<usize>) -> Result<Self> {
        if start.len() != size.len() {
            return Err(Error::DimensionMismatch {
                expected: start.len(),
                actual: size.len(),
            });
        }
        Ok(Region { start, size })
    }

    /// Region starting at the origin.
    pub fn from_size(size: Vec<usize>) -> Self {
        Region {
            start: vec![0; size.len()],
            size,
        }
    }

    /// Box `[center - radius, center + radius]` clipped to `[0, bounds)`.
    ///
    /// All three slices are read axis by axis; extra entries in the longer
    /// ones are ignored.
    pub fn around(center: &[usize], radius: &[usize], bounds: &[usize]) -> Self {
        let (start, size) = center
            .iter()
            .zip(radius)
            .zip(bounds)
            .map(|((&c, &r), &n)| {
                let lo = c.saturating_sub(r).min(n);
                let hi = c.saturating_add(r).saturating_add(1).min(n);
                (lo, hi.saturating_sub(lo))
            })
            .unzip();
        Region { start, size }
    }

    /// Number of axes
    #[inline]
    pub fn ndim(&self) -> usize {
        self.size.len()
    }

    /// First index
    #[inline]
    pub fn start(&self) -> &[usize] {
        &self.start
    }

    /// Extent along each axis
    #[inline]
    pub fn size(&self) -> &[usize] {
        &self.size
    }

    /// Number of indices in the region
    pub fn num_voxels(&self) -> usize {
        self.size.iter().product()
    }

    /// True if the region holds no index
    pub fn is_empty(&self) -> bool {
        self.size.is_empty() || self.size.contains(&0)
    }

    /// Iterate over every index, axis 0 fastest.
    pub fn indices(&self) -> RegionIndices<'_> {
        let next = if self.is_empty() {
            None
        } else {
            Some(self.start.clone())
        };
        RegionIndices { region: self, next }
    }

    /// Split into at most `parts` contiguous slabs along the last axis.
    ///
    /// Slabs differ in thickness by at most one and together cover the
    /// region exactly once. Empty regions and `parts == 0` give no slabs.
    pub fn split(&self, parts: usize) -> Vec<Region> {
        if self.is_empty() || parts == 0 {
            return Vec::new();
        }
        let last = self.ndim() - 1;
        let extent = self.size[last];
        let parts = parts.min(extent);
        let base = extent / parts;
        let extra = extent % parts;

        let mut slabs = Vec::with_capacity(parts);
        let mut offset = self.start[last];
        for p in 0..parts {
            let thickness = base + usize::from(p < extra);
            let mut start = self.start.clone();
            let mut size = self.size.clone();
            start[last] = offset;
            size[last] = thickness;
            slabs.push(Region { start, size });
            offset += thickness;
        }
        slabs
    }
}

/// Iterator over the indices of a [`Region`].
pub struct RegionIndices<'a> {
    region: &'a Region,
    next: Option<Vec<usize>>,
}

impl Iterator for RegionIndices<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;

        // Odometer increment
        let mut following = current.clone();
        for axis in 0..following.len() {
            following[axis] += 1;
            if following[axis] < self.region.start[axis] + self.region.size[axis] {
                self.next = Some(following);
                break;
            }
            following[axis] = self.region.start[axis];
        }

        Some(current)
    }
}
