//! Per-voxel run-length texture features
//!
//! [`RunLengthTextureFilter`] holds everything read during a pass: the
//! digitized image (mask folded in), the offsets with their physical step
//! lengths and the distance digitizer. It is built once, is immutable, and
//! [`RunLengthTextureFilter::compute_voxel`] is a pure function of the voxel
//! index, so disjoint voxels may be computed from any number of threads.
//!
//! For every eligible voxel and every offset, the runs of the voxel's
//! neighborhood are histogrammed and turned into features; the output is the
//! mean over the offsets that produced at least one run. Voxels that are not
//! eligible, and voxels whose every histogram is empty, get all-zero
//! features.

use crate::features::{RunLengthFeature, RunLengthFeatures};
use crate::histogram::RunLengthHistogram;
use crate::neighborhood::{DigitizedImage, Neighborhood};
use crate::offset::Offset;
use crate::options::{TextureOptions, TextureParams};
use crate::{Digitizer, TextureError, TextureResult};
use glrl_core::{FeatureMap, Geometry, ImageView, Region, Sample};
use log::debug;

/// Run-length texture feature filter over one image.
#[derive(Debug, Clone)]
pub struct RunLengthTextureFilter {
    digitized: DigitizedImage,
    radius: Vec<usize>,
    /// Offsets paired with their physical step length
    offsets: Vec<(Offset, f64)>,
    distance: Digitizer,
    features: Vec<RunLengthFeature>,
}

impl RunLengthTextureFilter {
    /// Prepare a filter for `image`, optionally restricted by `mask`.
    ///
    /// # Errors
    ///
    /// - [`TextureError::InvalidParameters`] if `params` was validated for
    ///   another dimension
    /// - [`TextureError::GeometryMismatch`] if the mask geometry differs
    ///   from the image geometry
    pub fn new<T: Sample>(
        image: ImageView<'_, T>,
        mask: Option<ImageView<'_, T>>,
        params: &TextureParams<T>,
    ) -> TextureResult<Self> {
        let geometry = image.geometry();
        if params.ndim() != geometry.ndim() {
            return Err(TextureError::InvalidParameters(format!(
                "parameters are for {} axes, image has {}",
                params.ndim(),
                geometry.ndim()
            )));
        }
        if let Some(mask) = &mask {
            check_geometry(geometry, mask.geometry())?;
        }

        let digitized =
            DigitizedImage::new(image, mask, params.inside_value(), params.intensity());
        let offsets = params
            .offsets()
            .iter()
            .map(|o| (o.clone(), o.step_length(geometry.spacing())))
            .collect();

        Ok(RunLengthTextureFilter {
            digitized,
            radius: params.radius().to_vec(),
            offsets,
            distance: *params.distance(),
            features: params.features().to_vec(),
        })
    }

    /// Validate `options` for `image` and prepare a filter.
    pub fn with_options<T: Sample>(
        image: ImageView<'_, T>,
        mask: Option<ImageView<'_, T>>,
        options: &TextureOptions<T>,
    ) -> TextureResult<Self> {
        let params = options.validate(image.geometry().ndim())?;
        Self::new(image, mask, &params)
    }

    /// Geometry of the input image and of the output map
    #[inline]
    pub fn geometry(&self) -> &Geometry {
        self.digitized.geometry()
    }

    /// Features written by the drivers, in output order
    #[inline]
    pub fn features(&self) -> &[RunLengthFeature] {
        &self.features
    }

    /// Output component names
    pub fn feature_names(&self) -> Vec<String> {
        self.features
            .iter()
            .map(|f| f.short_name().to_string())
            .collect()
    }

    /// The neighborhood of `index`.
    ///
    /// `index` must lie inside the image.
    pub fn neighborhood(&self, index: &[usize]) -> Neighborhood<'_> {
        Neighborhood::new(&self.digitized, index, &self.radius)
    }

    /// Histograms of the neighborhood of `index`, one per offset.
    ///
    /// `index` must lie inside the image.
    pub fn histograms(&self, index: &[usize]) -> Vec<RunLengthHistogram> {
        let hood = self.neighborhood(index);
        self.offsets
            .iter()
            .map(|(o, step)| RunLengthHistogram::build(&hood, o, &self.distance, *step))
            .collect()
    }

    /// All ten features of the voxel at `index`.
    ///
    /// # Errors
    ///
    /// Returns a core error if `index` is outside the image.
    pub fn compute_voxel(&self, index: &[usize]) -> TextureResult<RunLengthFeatures> {
        self.geometry().linear_index(index)?;
        Ok(self.features_at(index))
    }

    fn features_at(&self, index: &[usize]) -> RunLengthFeatures {
        let lin = self.geometry().linear_index_unchecked(index);
        if self.digitized.bin_at(lin).is_none() {
            return RunLengthFeatures::zero();
        }
        let hood = self.neighborhood(index);
        RunLengthFeatures::mean(self.offsets.iter().filter_map(|(o, step)| {
            let hist = RunLengthHistogram::build(&hood, o, &self.distance, *step);
            RunLengthFeatures::from_histogram(&hist)
        }))
    }

    fn write_voxel(&self, index: &[usize], slot: &mut [f64]) {
        let values = self.features_at(index);
        for (dst, &f) in slot.iter_mut().zip(&self.features) {
            *dst = values[f];
        }
    }

    /// Fill `out` for every voxel of `region`.
    ///
    /// Voxels of `out` outside `region` are left untouched, so disjoint
    /// regions can be filled one after another or by separate workers
    /// writing into separate maps.
    ///
    /// # Errors
    ///
    /// - [`TextureError::GeometryMismatch`] if `out` has another geometry
    /// - [`TextureError::InvalidParameters`] if `out` has another component
    ///   layout
    /// - a core error if `region` does not fit in the image
    pub fn compute_region(&self, region: &Region, out: &mut FeatureMap) -> TextureResult<()> {
        check_geometry(self.geometry(), out.geometry())?;
        if out.names() != self.feature_names().as_slice() {
            return Err(TextureError::InvalidParameters(format!(
                "output components {:?} differ from requested features {:?}",
                out.names(),
                self.feature_names()
            )));
        }
        self.geometry().check_region(region)?;

        for idx in region.indices() {
            let lin = self.geometry().linear_index_unchecked(&idx);
            self.write_voxel(&idx, out.voxel_mut(lin));
        }
        Ok(())
    }

    /// Allocate an all-zero output map matching this filter.
    pub fn new_output(&self) -> TextureResult<FeatureMap> {
        Ok(FeatureMap::new(self.geometry().clone(), self.feature_names())?)
    }

    /// Compute the whole feature map on the calling thread.
    pub fn run(&self) -> TextureResult<FeatureMap> {
        debug!(
            "run-length texture: {} voxels ({} eligible), {} offsets, sequential",
            self.geometry().num_voxels(),
            self.digitized.eligible_count(),
            self.offsets.len()
        );
        let mut out = self.new_output()?;
        let region = self.geometry().region();
        self.compute_region(&region, &mut out)?;
        Ok(out)
    }

    /// Compute the whole feature map with rayon.
    ///
    /// Produces exactly the same map as [`run`](Self::run).
    #[cfg(feature = "parallel")]
    pub fn run_parallel(&self) -> TextureResult<FeatureMap> {
        use rayon::prelude::*;

        debug!(
            "run-length texture: {} voxels ({} eligible), {} offsets, parallel",
            self.geometry().num_voxels(),
            self.digitized.eligible_count(),
            self.offsets.len()
        );
        let mut out = self.new_output()?;
        let n = out.components();
        out.data_mut()
            .par_chunks_mut(n)
            .enumerate()
            .for_each(|(lin, slot)| {
                let idx = self.geometry().index_of(lin);
                self.write_voxel(&idx, slot);
            });
        Ok(out)
    }
}

fn check_geometry(expected: &Geometry, actual: &Geometry) -> TextureResult<()> {
    if expected != actual {
        return Err(TextureError::GeometryMismatch {
            expected: expected.clone(),
            actual: actual.clone(),
        });
    }
    Ok(())
}

/// Compute per-voxel run-length texture features of `image`.
///
/// Convenience wrapper validating `options`, building a
/// [`RunLengthTextureFilter`] and running it sequentially.
///
/// # Examples
///
/// ```
/// use glrl_core::{Geometry, Image};
/// use glrl_texture::{TextureOptions, run_length_texture_features};
///
/// let geometry = Geometry::new(vec![8, 8]).unwrap();
/// let image = Image::from_fn(geometry, |idx| (idx[0] / 2) as u8);
/// let options = TextureOptions {
///     radius: glrl_texture::Radius::Uniform(1),
///     bins_per_axis: 8,
///     intensity_range: Some((0u8, 3u8)),
///     distance_range: Some((0.0, 4.0)),
///     ..Default::default()
/// };
/// let map = run_length_texture_features(image.view(), None, &options).unwrap();
/// assert_eq!(map.components(), 10);
/// ```
pub fn run_length_texture_features<T: Sample>(
    image: ImageView<'_, T>,
    mask: Option<ImageView<'_, T>>,
    options: &TextureOptions<T>,
) -> TextureResult<FeatureMap> {
    RunLengthTextureFilter::with_options(image, mask, options)?.run()
}
