//! Deterministic synthetic inputs for texture tests
//!
//! Every builder takes the grid size as `[x, y, ...]` and unit spacing
//! unless stated otherwise.

use crate::TestResult;
use glrl_core::{Geometry, Image, Region, Sample};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Checkerboard: `high` where the index sum is odd, `low` elsewhere.
pub fn checkerboard<T: Sample>(size: &[usize], low: T, high: T) -> TestResult<Image<T>> {
    let geometry = Geometry::new(size.to_vec())?;
    Ok(Image::from_fn(geometry, |idx| {
        if idx.iter().sum::<usize>() % 2 == 1 {
            high
        } else {
            low
        }
    }))
}

/// Constant image.
pub fn uniform<T: Sample>(size: &[usize], value: T) -> TestResult<Image<T>> {
    let geometry = Geometry::new(size.to_vec())?;
    Ok(Image::new_with_value(geometry, value))
}

/// Bands of width `period` across `axis`, alternating `low` and `high`.
pub fn stripes<T: Sample>(
    size: &[usize],
    axis: usize,
    period: usize,
    low: T,
    high: T,
) -> TestResult<Image<T>> {
    let geometry = Geometry::new(size.to_vec())?;
    let period = period.max(1);
    Ok(Image::from_fn(geometry, |idx| {
        if (idx[axis] / period) % 2 == 1 {
            high
        } else {
            low
        }
    }))
}

/// Uniformly random levels in `[0, levels)` from a fixed seed.
pub fn random_levels(size: &[usize], levels: u16, seed: u64) -> TestResult<Image<u16>> {
    let geometry = Geometry::new(size.to_vec())?;
    let mut rng = StdRng::seed_from_u64(seed);
    let levels = levels.max(1);
    Ok(Image::from_fn(geometry, |_| rng.random_range(0..levels)))
}

/// Mask with `inside` over `region` and `outside` elsewhere.
pub fn region_mask<T: Sample>(
    size: &[usize],
    region: &Region,
    inside: T,
    outside: T,
) -> TestResult<Image<T>> {
    let geometry = Geometry::new(size.to_vec())?;
    geometry.check_region(region)?;
    let start = region.start();
    let extent = region.size();
    Ok(Image::from_fn(geometry, |idx| {
        let hit = idx
            .iter()
            .zip(start.iter().zip(extent))
            .all(|(&i, (&s, &n))| i >= s && i < s + n);
        if hit { inside } else { outside }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_pattern() {
        let img = checkerboard(&[3, 3], 0u8, 1u8).unwrap();
        assert_eq!(img.data(), &[0, 1, 0, 1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_stripes_pattern() {
        let img = stripes(&[4, 2], 0, 2, 5i32, 9i32).unwrap();
        assert_eq!(img.data(), &[5, 5, 9, 9, 5, 5, 9, 9]);
    }

    #[test]
    fn test_random_levels_deterministic() {
        let a = random_levels(&[8, 8], 4, 42).unwrap();
        let b = random_levels(&[8, 8], 4, 42).unwrap();
        assert_eq!(a, b);
        assert!(a.data().iter().all(|&v| v < 4));
    }

    #[test]
    fn test_region_mask() {
        let r = Region::new(vec![1, 1], vec![2, 1]).unwrap();
        let mask = region_mask(&[4, 3], &r, 1u8, 0u8).unwrap();
        assert_eq!(mask.data(), &[0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0]);
        let too_big = Region::new(vec![3, 0], vec![2, 1]).unwrap();
        assert!(region_mask(&[4, 3], &too_big, 1u8, 0u8).is_err());
    }
}
