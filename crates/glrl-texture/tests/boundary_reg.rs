//! Digitization boundary regression test
//!
//! Bins are half-open on the left, the last bin is closed, and samples
//! outside the intensity range are clamped to the first or last bin.
//! Offsets far larger than any window still give one run per voxel.

use glrl_core::{Geometry, Image};
use glrl_test::RegParams;
use glrl_texture::{
    DigitizedImage, Radius, RunLengthFeature, RunLengthTextureFilter, TextureError,
    TextureOptions, run_length_texture_features,
};

#[test]
fn boundary_reg_intensity_bins() {
    let mut rp = RegParams::new("boundary_intensity");

    // Range [10, 20] in two bins: [10, 15) and [15, 20]
    let samples: Vec<u8> = vec![0, 9, 10, 14, 15, 20, 21, 255];
    let expected = [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0];
    let geometry = Geometry::new(vec![samples.len()]).expect("geometry");
    let img = Image::from_data(geometry, samples).expect("image");

    let opts = TextureOptions {
        radius: Radius::Uniform(1),
        bins_per_axis: 2,
        intensity_range: Some((10u8, 20u8)),
        distance_range: Some((0.5, 2.5)),
        ..Default::default()
    };
    let params = opts.validate(1).expect("validate");
    let digitized = DigitizedImage::new(img.view(), None, 10u8, params.intensity());

    for (lin, &want) in expected.iter().enumerate() {
        let bin = digitized.bin_at(lin).map(f64::from).unwrap_or(-1.0);
        rp.compare_values(want, bin, 0.0);
    }
    rp.compare_values(8.0, digitized.eligible_count() as f64, 0.0);

    assert!(rp.cleanup(), "boundary_intensity regression test failed");
}

#[test]
fn boundary_reg_clamped_samples_form_runs() {
    let mut rp = RegParams::new("boundary_runs");

    // Four bins of width 2.5: 0, 9 and 10 share bin 0; 18, 200 and 255 share bin 3
    let samples: Vec<u8> = vec![0, 9, 10, 18, 200, 255];
    let geometry = Geometry::new(vec![samples.len()]).expect("geometry");
    let img = Image::from_data(geometry, samples).expect("image");

    let opts = TextureOptions {
        radius: Radius::Uniform(3),
        bins_per_axis: 4,
        intensity_range: Some((10u8, 20u8)),
        distance_range: Some((0.5, 4.5)),
        ..Default::default()
    };
    let filter = RunLengthTextureFilter::with_options(img.view(), None, &opts).expect("filter");

    // Window of voxel 2 is [0, 5]: runs of 3 in bin 0 and 3 in bin 3
    let hist = &filter.histograms(&[2])[0];
    rp.compare_values(2.0, hist.total_runs() as f64, 0.0);
    rp.compare_values(1.0, hist.get(0, 2) as f64, 0.0);
    rp.compare_values(1.0, hist.get(3, 2) as f64, 0.0);

    let f = filter.compute_voxel(&[2]).expect("compute_voxel");
    rp.compare_values(9.0, f[RunLengthFeature::LongRunEmphasis], 1e-12);
    rp.compare_values((1.0 + 16.0) / 2.0, f[RunLengthFeature::HighGrayLevelRunEmphasis], 1e-12);

    assert!(rp.cleanup(), "boundary_runs regression test failed");
}

#[test]
fn boundary_reg_extreme_offsets() {
    let mut rp = RegParams::new("boundary_offsets");

    let img = Image::new_with_value(Geometry::new(vec![5, 5]).expect("geometry"), 1u8);
    let opts = TextureOptions {
        offsets: Some(vec![vec![i64::MAX, 0]]),
        ..Default::default()
    };
    let map = run_length_texture_features(img.view(), None, &opts).expect("features");

    // Each of the 25 window voxels is a run of length 1 at one level
    let values = map.get(&[2, 2]).expect("get");
    rp.compare_values(25.0, values[RunLengthFeature::GrayLevelNonuniformity.index()], 1e-12);
    rp.compare_values(25.0, values[RunLengthFeature::RunLengthNonuniformity.index()], 1e-12);

    // Negating i64::MIN would overflow, so the offset is rejected up front
    let opts = TextureOptions::<u8> {
        offsets: Some(vec![vec![i64::MIN, 0]]),
        ..Default::default()
    };
    let rejected = matches!(opts.validate(2), Err(TextureError::InvalidOffset { .. }));
    rp.compare_values(1.0, f64::from(u8::from(rejected)), 0.0);

    assert!(rp.cleanup(), "boundary_offsets regression test failed");
}
