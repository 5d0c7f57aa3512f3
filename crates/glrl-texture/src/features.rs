//! Run-length texture features
//!
//! Each feature is a weighted sum over the histogram cells divided by the
//! number of runs `Nr`. Bin `i` of the intensity axis stands for the gray
//! level `g_i = i + 1` and bin `j` of the run-length axis for the run length
//! `r_j = j + 1`, so no weight divides by zero.
//!
//! # References
//!
//! - M. M. Galloway, "Texture analysis using gray level run lengths",
//!   Computer Graphics and Image Processing 4:172-179, 1975.
//! - A. Chu, C. M. Sehgal and J. F. Greenleaf, "Use of gray value
//!   distribution of run lengths for texture analysis", Pattern Recognition
//!   Letters 11:415-420, 1990.
//! - B. R. Dasarathy and E. B. Holder, "Image characterizations based on
//!   joint gray level-run length distributions", Pattern Recognition Letters
//!   12:497-502, 1991.

use crate::histogram::RunLengthHistogram;
use std::collections::BTreeMap;
use std::ops::Index;

/// Number of run-length features
pub const NUM_FEATURES: usize = 10;

/// One run-length texture feature.
///
/// Every sum is divided by the run count Nr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunLengthFeature {
    /// SRE, `Σ H/r²`
    ShortRunEmphasis,
    /// LRE, `Σ H·r²`
    LongRunEmphasis,
    /// GLN, `Σ_i (Σ_j H)²`
    GrayLevelNonuniformity,
    /// RLN, `Σ_j (Σ_i H)²`
    RunLengthNonuniformity,
    /// LGRE, `Σ H/g²`
    LowGrayLevelRunEmphasis,
    /// HGRE, `Σ H·g²`
    HighGrayLevelRunEmphasis,
    /// SRLGE, `Σ H/(g²·r²)`
    ShortRunLowGrayLevelEmphasis,
    /// SRHGE, `Σ H·g²/r²`
    ShortRunHighGrayLevelEmphasis,
    /// LRLGE, `Σ H·r²/g²`
    LongRunLowGrayLevelEmphasis,
    /// LRHGE, `Σ H·g²·r²`
    LongRunHighGrayLevelEmphasis,
}

impl RunLengthFeature {
    /// All features, in storage order
    pub const ALL: [RunLengthFeature; NUM_FEATURES] = [
        RunLengthFeature::ShortRunEmphasis,
        RunLengthFeature::LongRunEmphasis,
        RunLengthFeature::GrayLevelNonuniformity,
        RunLengthFeature::RunLengthNonuniformity,
        RunLengthFeature::LowGrayLevelRunEmphasis,
        RunLengthFeature::HighGrayLevelRunEmphasis,
        RunLengthFeature::ShortRunLowGrayLevelEmphasis,
        RunLengthFeature::ShortRunHighGrayLevelEmphasis,
        RunLengthFeature::LongRunLowGrayLevelEmphasis,
        RunLengthFeature::LongRunHighGrayLevelEmphasis,
    ];

    /// Position in [`RunLengthFeatures`] storage
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Abbreviation used for output component names
    pub fn short_name(self) -> &'static str {
        match self {
            RunLengthFeature::ShortRunEmphasis => "SRE",
            RunLengthFeature::LongRunEmphasis => "LRE",
            RunLengthFeature::GrayLevelNonuniformity => "GLN",
            RunLengthFeature::RunLengthNonuniformity => "RLN",
            RunLengthFeature::LowGrayLevelRunEmphasis => "LGRE",
            RunLengthFeature::HighGrayLevelRunEmphasis => "HGRE",
            RunLengthFeature::ShortRunLowGrayLevelEmphasis => "SRLGE",
            RunLengthFeature::ShortRunHighGrayLevelEmphasis => "SRHGE",
            RunLengthFeature::LongRunLowGrayLevelEmphasis => "LRLGE",
            RunLengthFeature::LongRunHighGrayLevelEmphasis => "LRHGE",
        }
    }

    /// Descriptive name
    pub fn name(self) -> &'static str {
        match self {
            RunLengthFeature::ShortRunEmphasis => "short run emphasis",
            RunLengthFeature::LongRunEmphasis => "long run emphasis",
            RunLengthFeature::GrayLevelNonuniformity => "gray level nonuniformity",
            RunLengthFeature::RunLengthNonuniformity => "run length nonuniformity",
            RunLengthFeature::LowGrayLevelRunEmphasis => "low gray level run emphasis",
            RunLengthFeature::HighGrayLevelRunEmphasis => "high gray level run emphasis",
            RunLengthFeature::ShortRunLowGrayLevelEmphasis => "short run low gray level emphasis",
            RunLengthFeature::ShortRunHighGrayLevelEmphasis => "short run high gray level emphasis",
            RunLengthFeature::LongRunLowGrayLevelEmphasis => "long run low gray level emphasis",
            RunLengthFeature::LongRunHighGrayLevelEmphasis => "long run high gray level emphasis",
        }
    }
}

/// The ten features of one voxel (or one histogram).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunLengthFeatures {
    values: [f64; NUM_FEATURES],
}

impl RunLengthFeatures {
    /// All-zero features, emitted for voxels with no runs.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Wrap raw values in storage order.
    pub fn from_values(values: [f64; NUM_FEATURES]) -> Self {
        RunLengthFeatures { values }
    }

    /// Features of one histogram, or `None` if it holds no run.
    pub fn from_histogram(hist: &RunLengthHistogram) -> Option<Self> {
        if hist.is_empty() {
            return None;
        }

        let mut v = [0.0f64; NUM_FEATURES];
        // Marginals over occupied bins only; bins per axis may be huge
        let mut by_level: BTreeMap<usize, u64> = BTreeMap::new();
        let mut by_length: BTreeMap<usize, u64> = BTreeMap::new();
        for ((i, j), count) in hist.cells() {
            *by_level.entry(i).or_insert(0) += count;
            *by_length.entry(j).or_insert(0) += count;

            let n = count as f64;
            let g = (i + 1) as f64;
            let r = (j + 1) as f64;
            let g2 = g * g;
            let r2 = r * r;

            v[RunLengthFeature::ShortRunEmphasis.index()] += n / r2;
            v[RunLengthFeature::LongRunEmphasis.index()] += n * r2;
            v[RunLengthFeature::LowGrayLevelRunEmphasis.index()] += n / g2;
            v[RunLengthFeature::HighGrayLevelRunEmphasis.index()] += n * g2;
            v[RunLengthFeature::ShortRunLowGrayLevelEmphasis.index()] += n / (g2 * r2);
            v[RunLengthFeature::ShortRunHighGrayLevelEmphasis.index()] += n * g2 / r2;
            v[RunLengthFeature::LongRunLowGrayLevelEmphasis.index()] += n * r2 / g2;
            v[RunLengthFeature::LongRunHighGrayLevelEmphasis.index()] += n * g2 * r2;
        }

        v[RunLengthFeature::GrayLevelNonuniformity.index()] =
            by_level.values().map(|&m| (m as f64) * (m as f64)).sum();
        v[RunLengthFeature::RunLengthNonuniformity.index()] =
            by_length.values().map(|&m| (m as f64) * (m as f64)).sum();

        let nr = hist.total_runs() as f64;
        for x in &mut v {
            *x /= nr;
        }
        Some(RunLengthFeatures { values: v })
    }

    /// Component-wise mean, or all zeros for an empty input.
    pub fn mean<I>(features: I) -> Self
    where
        I: IntoIterator<Item = RunLengthFeatures>,
    {
        let mut sum = [0.0f64; NUM_FEATURES];
        let mut count = 0usize;
        for f in features {
            for (s, x) in sum.iter_mut().zip(f.values) {
                *s += x;
            }
            count += 1;
        }
        if count > 0 {
            for s in &mut sum {
                *s /= count as f64;
            }
        }
        RunLengthFeatures { values: sum }
    }

    /// Value of one feature
    #[inline]
    pub fn get(&self, feature: RunLengthFeature) -> f64 {
        self.values[feature.index()]
    }

    /// All values in storage order
    #[inline]
    pub fn values(&self) -> &[f64; NUM_FEATURES] {
        &self.values
    }

    /// True if every value is zero
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&x| x == 0.0)
    }
}

impl Index<RunLengthFeature> for RunLengthFeatures {
    type Output = f64;

    fn index(&self, feature: RunLengthFeature) -> &f64 {
        &self.values[feature.index()]
    }
}
