//! Uniform neighborhood regression test
//!
//! On a constant image, each line of the window along the offset is a single
//! run spanning the full window diameter. Short run emphasis is then at its
//! minimum and long run emphasis at its maximum compared with any image
//! that breaks those lines into shorter runs.

use glrl_core::{Geometry, Image};
use glrl_test::{RegParams, synthetic};
use glrl_texture::{Radius, RunLengthFeature, RunLengthTextureFilter, TextureOptions};

/// Radius 2, five bins. Intensity bins are two levels wide so level 1 lands
/// in bin 0 and level 3 in bin 1; a run of `L` voxels lands in run-length
/// bin `L - 1`.
fn options(offset: Vec<i64>) -> TextureOptions<u8> {
    TextureOptions {
        radius: Radius::Uniform(2),
        offsets: Some(vec![offset]),
        bins_per_axis: 5,
        intensity_range: Some((0, 10)),
        distance_range: Some((0.5, 5.5)),
        ..Default::default()
    }
}

#[test]
fn uniform_reg_full_diameter_run() {
    let mut rp = RegParams::new("uniform_diameter");

    let img = synthetic::uniform(&[7, 7], 1u8).expect("uniform");
    let filter = RunLengthTextureFilter::with_options(img.view(), None, &options(vec![1, 0]))
        .expect("filter");

    let hist = &filter.histograms(&[3, 3])[0];
    // Five rows, each one run of length 5 in intensity bin 0
    rp.compare_values(5.0, hist.total_runs() as f64, 0.0);
    rp.compare_values(5.0, hist.get(0, 4) as f64, 0.0);
    rp.compare_values(25.0, hist.eligible_voxels() as f64, 0.0);

    let f = filter.compute_voxel(&[3, 3]).expect("compute_voxel");
    rp.compare_values(1.0 / 25.0, f[RunLengthFeature::ShortRunEmphasis], 1e-12);
    rp.compare_values(25.0, f[RunLengthFeature::LongRunEmphasis], 1e-12);
    rp.compare_values(5.0, f[RunLengthFeature::GrayLevelNonuniformity], 1e-12);
    rp.compare_values(5.0, f[RunLengthFeature::RunLengthNonuniformity], 1e-12);

    // Same along y; the window is symmetric
    let filter = RunLengthTextureFilter::with_options(img.view(), None, &options(vec![0, -1]))
        .expect("filter");
    let g = filter.compute_voxel(&[3, 3]).expect("compute_voxel");
    rp.compare_vectors(f.values(), g.values(), 1e-12);

    assert!(rp.cleanup(), "uniform_diameter regression test failed");
}

#[test]
fn uniform_reg_extremes_against_shorter_runs() {
    let mut rp = RegParams::new("uniform_extremes");

    let uniform = synthetic::uniform(&[7, 7], 1u8).expect("uniform");
    let opts = options(vec![1, 0]);
    let base = RunLengthTextureFilter::with_options(uniform.view(), None, &opts)
        .expect("filter")
        .compute_voxel(&[3, 3])
        .expect("compute_voxel");

    // Same window, lines broken into shorter runs by bands along x
    for period in [1usize, 2, 3] {
        let striped = synthetic::stripes(&[7, 7], 0, period, 1u8, 3u8).expect("stripes");
        let f = RunLengthTextureFilter::with_options(striped.view(), None, &opts)
            .expect("filter")
            .compute_voxel(&[3, 3])
            .expect("compute_voxel");
        let sre_larger = f[RunLengthFeature::ShortRunEmphasis]
            > base[RunLengthFeature::ShortRunEmphasis];
        let lre_smaller = f[RunLengthFeature::LongRunEmphasis]
            < base[RunLengthFeature::LongRunEmphasis];
        rp.compare_values(1.0, f64::from(u8::from(sre_larger)), 0.0);
        rp.compare_values(1.0, f64::from(u8::from(lre_smaller)), 0.0);
    }

    assert!(rp.cleanup(), "uniform_extremes regression test failed");
}

#[test]
fn uniform_reg_anisotropic_spacing() {
    let mut rp = RegParams::new("uniform_spacing");

    // Spacing 2 along y doubles the physical length of vertical runs
    let geometry = Geometry::with_spacing(vec![5, 5], vec![1.0, 2.0]).expect("geometry");
    let img = Image::new_with_value(geometry, 3u8);
    let opts = TextureOptions {
        radius: Radius::PerAxis(vec![0, 1]),
        offsets: Some(vec![vec![0, 1]]),
        bins_per_axis: 8,
        intensity_range: Some((0, 7)),
        distance_range: Some((0.5, 8.5)),
        ..Default::default()
    };
    let filter = RunLengthTextureFilter::with_options(img.view(), None, &opts).expect("filter");

    // One run of 3 voxels, physical length 6 -> bin 5 (r = 6)
    let hist = &filter.histograms(&[2, 2])[0];
    rp.compare_values(1.0, hist.total_runs() as f64, 0.0);
    rp.compare_values(1.0, hist.get(3, 5) as f64, 0.0);

    let f = filter.compute_voxel(&[2, 2]).expect("compute_voxel");
    rp.compare_values(36.0, f[RunLengthFeature::LongRunEmphasis], 1e-12);
    rp.compare_values(16.0 * 36.0, f[RunLengthFeature::LongRunHighGrayLevelEmphasis], 1e-9);

    assert!(rp.cleanup(), "uniform_spacing regression test failed");
}

#[test]
fn uniform_reg_many_bins() {
    let mut rp = RegParams::new("uniform_many_bins");

    // Per-histogram work depends on the runs present, not on the bin count
    let img = synthetic::uniform(&[5, 5], 1u8).expect("uniform");
    let opts = TextureOptions {
        radius: Radius::Uniform(2),
        offsets: Some(vec![vec![1, 0]]),
        bins_per_axis: u32::MAX,
        ..Default::default()
    };
    let filter = RunLengthTextureFilter::with_options(img.view(), None, &opts).expect("filter");

    let hist = &filter.histograms(&[2, 2])[0];
    rp.compare_values(5.0, hist.total_runs() as f64, 0.0);
    rp.compare_values(1.0, hist.cells().count() as f64, 0.0);

    let f = filter.compute_voxel(&[2, 2]).expect("compute_voxel");
    rp.compare_values(5.0, f[RunLengthFeature::GrayLevelNonuniformity], 1e-12);
    rp.compare_values(5.0, f[RunLengthFeature::RunLengthNonuniformity], 1e-12);

    assert!(rp.cleanup(), "uniform_many_bins regression test failed");
}
