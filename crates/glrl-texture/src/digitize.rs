//! Mapping real values to histogram bins
//!
//! # Bin convention
//!
//! For a range `[min, max]` split into `n` bins of width `w = (max - min) / n`,
//! bin `k` covers the half-open interval `[min + k·w, min + (k+1)·w)`. The
//! last bin is closed and also holds `max`. Values below `min` clamp to bin 0
//! and values above `max` clamp to bin `n - 1`.

use crate::{TextureError, TextureResult};

/// Linear digitizer over a closed range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Digitizer {
    min: f64,
    max: f64,
    bins: usize,
    /// `min / 2`
    half_min: f64,
    /// `max / 2 - min / 2`; halved so `[f64::MIN, f64::MAX]` stays finite
    half_span: f64,
}

impl Digitizer {
    /// Create a digitizer for `[min, max]` with `bins` bins.
    ///
    /// `name` only labels errors.
    ///
    /// # Errors
    ///
    /// - [`TextureError::InvalidRange`] if a bound is not finite or
    ///   `min >= max`
    /// - [`TextureError::InvalidParameters`] if `bins` is zero
    pub fn new(name: &'static str, min: f64, max: f64, bins: usize) -> TextureResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(TextureError::InvalidRange { name, min, max });
        }
        if bins == 0 {
            return Err(TextureError::InvalidParameters(
                "number of bins per axis must be positive".into(),
            ));
        }
        let half_min = min * 0.5;
        Ok(Digitizer {
            min,
            max,
            bins,
            half_min,
            half_span: max * 0.5 - half_min,
        })
    }

    /// Lower bound of the range
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the range
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Number of bins
    #[inline]
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Bin index of `value`, clamped to `[0, bins)`.
    #[inline]
    pub fn bin(&self, value: f64) -> usize {
        let position = (value * 0.5 - self.half_min) / self.half_span * self.bins as f64;
        if position.is_nan() || position <= 0.0 {
            return 0;
        }
        (position as usize).min(self.bins - 1)
    }
}

/// Physical length of a run of `run_length` voxels along a direction whose
/// single step measures `step`.
#[inline]
pub fn run_distance(run_length: usize, step: f64) -> f64 {
    run_length as f64 * step
}
