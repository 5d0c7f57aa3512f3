//! Run-length texture configuration
//!
//! [`TextureOptions`] is the user-facing, partially specified configuration.
//! [`TextureOptions::validate`] resolves every default for a given image
//! dimension and checks every numeric constraint, producing an immutable
//! [`TextureParams`] that is shared read-only by all voxel computations.

use crate::digitize::Digitizer;
use crate::features::RunLengthFeature;
use crate::offset::OffsetSet;
use crate::{TextureError, TextureResult};
use glrl_core::Sample;
use log::debug;

/// Default neighborhood radius on every axis
pub const DEFAULT_RADIUS: usize = 2;

/// Default number of bins on both histogram axes
pub const DEFAULT_BINS_PER_AXIS: u32 = 256;

/// Neighborhood radius
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Radius {
    /// Same radius on every axis
    Uniform(usize),
    /// One radius per axis, axis 0 first
    PerAxis(Vec<usize>),
}

impl Default for Radius {
    fn default() -> Self {
        Radius::Uniform(DEFAULT_RADIUS)
    }
}

impl Radius {
    /// Per-axis radius for an `ndim`-dimensional image.
    pub fn resolve(&self, ndim: usize) -> TextureResult<Vec<usize>> {
        match self {
            Radius::Uniform(r) => Ok(vec![*r; ndim]),
            Radius::PerAxis(r) if r.len() == ndim => Ok(r.clone()),
            Radius::PerAxis(r) => Err(TextureError::InvalidParameters(format!(
                "radius {:?} has {} entries for a {}-dimensional image",
                r,
                r.len(),
                ndim
            ))),
        }
    }
}

/// Options for per-voxel run-length texture features
///
/// # Examples
///
/// ```
/// use glrl_texture::{RunLengthFeature, TextureOptions};
///
/// let options = TextureOptions::<u8> {
///     bins_per_axis: 16,
///     distance_range: Some((0.0, 8.0)),
///     features: vec![RunLengthFeature::ShortRunEmphasis],
///     ..Default::default()
/// };
/// let params = options.validate(2).unwrap();
/// assert_eq!(params.offsets().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct TextureOptions<T> {
    /// Neighborhood radius (default 2 on every axis)
    pub radius: Radius,
    /// Direction offsets; `None` selects the default set for the dimension
    pub offsets: Option<Vec<Vec<i64>>>,
    /// Number of bins on the intensity and run-length axes (default 256)
    pub bins_per_axis: u32,
    /// Intensity range `[min, max]`; `None` selects the sample type's range
    pub intensity_range: Option<(T, T)>,
    /// Run distance range `[min, max]`; `None` selects `[f64::MIN, f64::MAX]`
    pub distance_range: Option<(f64, f64)>,
    /// Mask value marking participating voxels (default 1)
    pub inside_value: T,
    /// Features to emit, in output order (default all ten)
    pub features: Vec<RunLengthFeature>,
}

impl<T: Sample> Default for TextureOptions<T> {
    fn default() -> Self {
        TextureOptions {
            radius: Radius::default(),
            offsets: None,
            bins_per_axis: DEFAULT_BINS_PER_AXIS,
            intensity_range: None,
            distance_range: None,
            inside_value: T::ONE,
            features: RunLengthFeature::ALL.to_vec(),
        }
    }
}

impl<T: Sample> TextureOptions<T> {
    /// Resolve defaults and check constraints for an `ndim`-dimensional image.
    ///
    /// # Errors
    ///
    /// - [`TextureError::InvalidOffset`] for a zero offset or one with the
    ///   wrong number of components
    /// - [`TextureError::InvalidRange`] for a non-finite or empty range
    /// - [`TextureError::InvalidParameters`] for a radius of the wrong
    ///   length, zero bins, no offsets, no features or duplicated features
    pub fn validate(&self, ndim: usize) -> TextureResult<TextureParams<T>> {
        if ndim == 0 {
            return Err(TextureError::InvalidParameters(
                "image must have at least one axis".into(),
            ));
        }

        let radius = self.radius.resolve(ndim)?;

        let offsets = match &self.offsets {
            None => OffsetSet::default_for(ndim),
            Some(list) => OffsetSet::from_vectors(ndim, list.iter().map(Vec::as_slice))?,
        };
        if offsets.is_empty() {
            return Err(TextureError::InvalidParameters(
                "offset list is empty".into(),
            ));
        }

        let bins = self.bins_per_axis as usize;
        let (min, max) = self.intensity_range.unwrap_or((T::MIN, T::MAX));
        if min >= max {
            return Err(TextureError::InvalidRange {
                name: "intensity",
                min: min.to_f64(),
                max: max.to_f64(),
            });
        }
        let intensity = Digitizer::new("intensity", min.to_f64(), max.to_f64(), bins)?;

        let (dmin, dmax) = self.distance_range.unwrap_or((f64::MIN, f64::MAX));
        let distance = Digitizer::new("distance", dmin, dmax, bins)?;

        if self.features.is_empty() {
            return Err(TextureError::InvalidParameters(
                "no feature requested".into(),
            ));
        }
        for (k, f) in self.features.iter().enumerate() {
            if self.features[..k].contains(f) {
                return Err(TextureError::InvalidParameters(format!(
                    "feature {} requested twice",
                    f.short_name()
                )));
            }
        }

        debug!(
            "run-length texture: radius {:?}, {} offsets, {} bins, intensity [{}, {}], distance [{}, {}]",
            radius,
            offsets.len(),
            bins,
            intensity.min(),
            intensity.max(),
            distance.min(),
            distance.max()
        );

        Ok(TextureParams {
            radius,
            offsets,
            intensity_range: (min, max),
            intensity,
            distance,
            inside_value: self.inside_value,
            features: self.features.clone(),
        })
    }
}

/// Validated, immutable run-length texture configuration.
#[derive(Debug, Clone)]
pub struct TextureParams<T> {
    radius: Vec<usize>,
    offsets: OffsetSet,
    intensity_range: (T, T),
    intensity: Digitizer,
    distance: Digitizer,
    inside_value: T,
    features: Vec<RunLengthFeature>,
}

impl<T: Sample> TextureParams<T> {
    /// Number of axes this configuration was validated for
    #[inline]
    pub fn ndim(&self) -> usize {
        self.radius.len()
    }

    /// Per-axis neighborhood radius
    #[inline]
    pub fn radius(&self) -> &[usize] {
        &self.radius
    }

    /// Canonical offsets
    #[inline]
    pub fn offsets(&self) -> &OffsetSet {
        &self.offsets
    }

    /// Number of bins per histogram axis
    #[inline]
    pub fn bins_per_axis(&self) -> usize {
        self.intensity.bins()
    }

    /// Intensity range as given in sample units
    #[inline]
    pub fn intensity_range(&self) -> (T, T) {
        self.intensity_range
    }

    /// Intensity digitizer
    #[inline]
    pub fn intensity(&self) -> &Digitizer {
        &self.intensity
    }

    /// Run distance digitizer
    #[inline]
    pub fn distance(&self) -> &Digitizer {
        &self.distance
    }

    /// Mask value marking participating voxels
    #[inline]
    pub fn inside_value(&self) -> T {
        self.inside_value
    }

    /// Features to emit, in output order
    #[inline]
    pub fn features(&self) -> &[RunLengthFeature] {
        &self.features
    }
}
