//! Direction offsets
//!
//! A run along `o` and the same run along `-o` are one run, so every offset
//! is stored in canonical form: its last non-zero component is positive.
//! Runs are then counted once, from the endpoint that comes first along the
//! canonical direction.

use crate::{TextureError, TextureResult};

/// Canonicalize a direction vector.
///
/// Negates the vector if its highest-order (last) non-zero component is
/// negative. `canonicalize(o) == canonicalize(-o)` and the operation is
/// idempotent.
///
/// # Errors
///
/// Returns [`TextureError::InvalidOffset`] for the zero vector, or when the
/// vector must be negated and holds `i64::MIN`.
pub fn canonicalize(offset: &[i64]) -> TextureResult<Vec<i64>> {
    match offset.iter().rev().find(|&&c| c != 0) {
        None => Err(TextureError::InvalidOffset {
            offset: offset.to_vec(),
            reason: "zero vector",
        }),
        Some(&c) if c < 0 => offset
            .iter()
            .map(|&c| c.checked_neg())
            .collect::<Option<Vec<i64>>>()
            .ok_or_else(|| TextureError::InvalidOffset {
                offset: offset.to_vec(),
                reason: "component cannot be negated",
            }),
        Some(_) => Ok(offset.to_vec()),
    }
}

/// A canonical, non-zero direction vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Offset(Vec<i64>);

impl Offset {
    /// Canonicalize `components` into an offset.
    pub fn new(components: &[i64]) -> TextureResult<Self> {
        canonicalize(components).map(Offset)
    }

    /// Components, axis 0 first
    #[inline]
    pub fn components(&self) -> &[i64] {
        &self.0
    }

    /// Number of axes
    #[inline]
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Physical length of one step, `‖o∘s‖`.
    pub fn step_length(&self, spacing: &[f64]) -> f64 {
        self.0
            .iter()
            .zip(spacing)
            .map(|(&c, &s)| {
                let d = c as f64 * s;
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }
}

/// Ordered set of canonical offsets with no antiparallel duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetSet {
    ndim: usize,
    offsets: Vec<Offset>,
}

impl OffsetSet {
    /// Create an empty set for `ndim`-dimensional offsets.
    pub fn new(ndim: usize) -> Self {
        OffsetSet {
            ndim,
            offsets: Vec::new(),
        }
    }

    /// The default set: every neighbor in `{-1,0,1}^N` that precedes the
    /// origin in memory order, canonicalized.
    ///
    /// Gives `(3^N - 1) / 2` offsets; in 2D these are the canonical forms
    /// of `(-1,-1)`, `(0,-1)`, `(1,-1)` and `(-1,0)`.
    pub fn default_for(ndim: usize) -> Self {
        let mut set = OffsetSet::new(ndim);
        let center = (3usize.pow(ndim as u32) - 1) / 2;
        for k in 0..center {
            let mut rest = k;
            let mut components = Vec::with_capacity(ndim);
            for _ in 0..ndim {
                components.push((rest % 3) as i64 - 1);
                rest /= 3;
            }
            // k precedes the origin, so the vector is never zero
            if let Ok(canonical) = canonicalize(&components) {
                set.offsets.push(Offset(canonical));
            }
        }
        set
    }

    /// Build a set from raw vectors, in order.
    pub fn from_vectors<'a, I>(ndim: usize, vectors: I) -> TextureResult<Self>
    where
        I: IntoIterator<Item = &'a [i64]>,
    {
        let mut set = OffsetSet::new(ndim);
        for v in vectors {
            set.insert(v)?;
        }
        Ok(set)
    }

    /// Canonicalize and insert an offset.
    ///
    /// Returns `false` if the offset (or its reverse) was already present.
    ///
    /// # Errors
    ///
    /// Returns [`TextureError::InvalidOffset`] for a zero vector or a vector
    /// with the wrong number of components.
    pub fn insert(&mut self, components: &[i64]) -> TextureResult<bool> {
        if components.len() != self.ndim {
            return Err(TextureError::InvalidOffset {
                offset: components.to_vec(),
                reason: "component count differs from image dimension",
            });
        }
        let offset = Offset::new(components)?;
        if self.offsets.contains(&offset) {
            return Ok(false);
        }
        self.offsets.push(offset);
        Ok(true)
    }

    /// Number of axes
    #[inline]
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Number of offsets
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// True if the set holds no offset
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Iterate over offsets in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Offset> {
        self.offsets.iter()
    }
}

impl<'a> IntoIterator for &'a OffsetSet {
    type Item = &'a Offset;
    type IntoIter = std::slice::Iter<'a, Offset>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
