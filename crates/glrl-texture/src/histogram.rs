//! Run-length histogram construction
//!
//! For one neighborhood and one canonical offset `o`, every maximal run of
//! eligible, same-bin voxels along `o` inside the window is counted once,
//! from its first voxel (the one whose predecessor `p - o` is outside the
//! window, not eligible, or in another bin). A run stops at the first voxel
//! that leaves the window, is not eligible, or changes bin; masked voxels in
//! the middle of a line therefore split it into separate runs.
//!
//! # References
//!
//! M. M. Galloway, "Texture analysis using gray level run lengths",
//! Computer Graphics and Image Processing 4:172-179, 1975.

use crate::digitize::{Digitizer, run_distance};
use crate::neighborhood::Neighborhood;
use crate::offset::Offset;
use std::collections::BTreeMap;

/// Joint histogram of (intensity bin, run-length bin) run counts.
///
/// Stored sparsely: a window holds far fewer runs than `bins²` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLengthHistogram {
    bins: usize,
    counts: BTreeMap<(usize, usize), u64>,
    /// Nr
    total_runs: u64,
    /// Np
    eligible_voxels: u64,
}

impl RunLengthHistogram {
    /// Create an empty `bins × bins` histogram.
    pub fn new(bins: usize) -> Self {
        RunLengthHistogram {
            bins,
            counts: BTreeMap::new(),
            total_runs: 0,
            eligible_voxels: 0,
        }
    }

    /// Count the runs of `neighborhood` along `offset`.
    ///
    /// `step` is the physical length of one step along `offset`; run lengths
    /// are digitized as `length * step` with `distance`.
    pub fn build(
        neighborhood: &Neighborhood<'_>,
        offset: &Offset,
        distance: &Digitizer,
        step: f64,
    ) -> Self {
        let mut hist = RunLengthHistogram::new(distance.bins());
        let o = offset.components();
        let ndim = o.len();
        let mut p = vec![0i64; ndim];
        let mut cursor = vec![0i64; ndim];

        for idx in neighborhood.region().indices() {
            for (dst, &i) in p.iter_mut().zip(&idx) {
                *dst = i as i64;
            }
            let Some(bin) = neighborhood.bin_at(&p) else {
                continue;
            };
            hist.eligible_voxels += 1;

            // Not a run start if the predecessor continues the same run
            cursor.copy_from_slice(&p);
            if retreat(&mut cursor, o) && neighborhood.bin_at(&cursor) == Some(bin) {
                continue;
            }

            let mut length = 1usize;
            cursor.copy_from_slice(&p);
            while advance(&mut cursor, o) && neighborhood.bin_at(&cursor) == Some(bin) {
                length += 1;
            }

            let run_bin = distance.bin(run_distance(length, step));
            hist.increment(bin as usize, run_bin);
        }

        hist
    }

    /// Add one run to cell `(intensity_bin, run_bin)`.
    ///
    /// Both indices are clamped to the last bin.
    pub fn increment(&mut self, intensity_bin: usize, run_bin: usize) {
        let last = self.bins.saturating_sub(1);
        let key = (intensity_bin.min(last), run_bin.min(last));
        *self.counts.entry(key).or_insert(0) += 1;
        self.total_runs += 1;
    }

    /// Number of bins per axis
    #[inline]
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Count in cell `(intensity_bin, run_bin)`.
    pub fn get(&self, intensity_bin: usize, run_bin: usize) -> u64 {
        self.counts
            .get(&(intensity_bin, run_bin))
            .copied()
            .unwrap_or(0)
    }

    /// Non-zero cells as `((intensity_bin, run_bin), count)`, in row order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), u64)> + '_ {
        self.counts.iter().map(|(&k, &v)| (k, v))
    }

    /// Total number of runs, Nr
    #[inline]
    pub fn total_runs(&self) -> u64 {
        self.total_runs
    }

    /// Number of eligible voxels in the window, Np
    #[inline]
    pub fn eligible_voxels(&self) -> u64 {
        self.eligible_voxels
    }

    /// True if no run was counted
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_runs == 0
    }

    /// Sum of all cells; always equal to [`total_runs`](Self::total_runs).
    pub fn count_sum(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Run counts per intensity bin, `Σ_j H[i][j]`.
    ///
    /// Dense: allocates one entry per bin.
    pub fn intensity_marginal(&self) -> Vec<u64> {
        let mut marginal = vec![0; self.bins];
        for (&(i, _), &c) in &self.counts {
            marginal[i] += c;
        }
        marginal
    }

    /// Run counts per run-length bin, `Σ_i H[i][j]`.
    ///
    /// Dense: allocates one entry per bin.
    pub fn run_length_marginal(&self) -> Vec<u64> {
        let mut marginal = vec![0; self.bins];
        for (&(_, j), &c) in &self.counts {
            marginal[j] += c;
        }
        marginal
    }

    /// Run percentage `Nr / Np`, or 0 for an empty window.
    pub fn run_percentage(&self) -> f64 {
        if self.eligible_voxels == 0 {
            return 0.0;
        }
        self.total_runs as f64 / self.eligible_voxels as f64
    }
}

/// `cursor += o`; `false` if a component leaves the `i64` range.
fn advance(cursor: &mut [i64], o: &[i64]) -> bool {
    for (c, &d) in cursor.iter_mut().zip(o) {
        match c.checked_add(d) {
            Some(v) => *c = v,
            None => return false,
        }
    }
    true
}

/// `cursor -= o`; `false` if a component leaves the `i64` range.
fn retreat(cursor: &mut [i64], o: &[i64]) -> bool {
    for (c, &d) in cursor.iter_mut().zip(o) {
        match c.checked_sub(d) {
            Some(v) => *c = v,
            None => return false,
        }
    }
    true
}
