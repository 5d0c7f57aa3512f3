//! Checkerboard regression test
//!
//! Alternating 0/1 samples, radius 1, single offset (1,0), two bins and
//! intensity range [0,1]: every run has length 1, so all histogram mass sits
//! in run-length bin 0 and the nonuniformities follow from the counts of
//! each level in the window.

use glrl_core::Region;
use glrl_test::{RegParams, synthetic};
use glrl_texture::{
    Radius, RunLengthFeature, RunLengthTextureFilter, TextureOptions,
};

fn options() -> TextureOptions<u8> {
    TextureOptions {
        radius: Radius::Uniform(1),
        offsets: Some(vec![vec![1, 0]]),
        bins_per_axis: 2,
        intensity_range: Some((0, 1)),
        // Bins [0.5,1.5) [1.5,2.5]: length-1 runs fall in bin 0
        distance_range: Some((0.5, 2.5)),
        ..Default::default()
    }
}

#[test]
fn checkerboard_reg_histograms() {
    let mut rp = RegParams::new("checkerboard_hist");

    let img = synthetic::checkerboard(&[6, 5], 0u8, 1u8).expect("checkerboard");
    let filter = RunLengthTextureFilter::with_options(img.view(), None, &options())
        .expect("filter");

    for idx in img.geometry().region().indices() {
        let hists = filter.histograms(&idx);
        rp.compare_values(1.0, hists.len() as f64, 0.0);
        let hist = &hists[0];
        let np = filter.neighborhood(&idx).eligible_count() as f64;
        // Every voxel starts its own run
        rp.compare_values(np, hist.total_runs() as f64, 0.0);
        rp.compare_values(hist.total_runs() as f64, hist.count_sum() as f64, 0.0);
        rp.compare_values(
            hist.total_runs() as f64,
            hist.run_length_marginal()[0] as f64,
            0.0,
        );
    }

    assert!(rp.cleanup(), "checkerboard_hist regression test failed");
}

#[test]
fn checkerboard_reg_features() {
    let mut rp = RegParams::new("checkerboard_features");

    let img = synthetic::checkerboard(&[5, 5], 0u8, 1u8).expect("checkerboard");
    let filter = RunLengthTextureFilter::with_options(img.view(), None, &options())
        .expect("filter");

    // Interior: 3x3 window with 5 of one level and 4 of the other; Nr = 9
    for center in [[2usize, 2], [1, 2], [3, 3]] {
        let f = filter.compute_voxel(&center).expect("compute_voxel");
        rp.compare_values(
            41.0 / 9.0,
            f[RunLengthFeature::GrayLevelNonuniformity],
            1e-12,
        );
        rp.compare_values(9.0, f[RunLengthFeature::RunLengthNonuniformity], 1e-12);
        rp.compare_values(1.0, f[RunLengthFeature::ShortRunEmphasis], 1e-12);
        rp.compare_values(1.0, f[RunLengthFeature::LongRunEmphasis], 1e-12);
    }

    // Corner: 2x2 window, two of each level; Nr = 4
    let f = filter.compute_voxel(&[0, 0]).expect("corner");
    rp.compare_values(2.0, f[RunLengthFeature::GrayLevelNonuniformity], 1e-12);
    rp.compare_values(4.0, f[RunLengthFeature::RunLengthNonuniformity], 1e-12);

    // Edge: 3x2 window, three of each level; Nr = 6
    let f = filter.compute_voxel(&[1, 0]).expect("edge");
    rp.compare_values(3.0, f[RunLengthFeature::GrayLevelNonuniformity], 1e-12);
    rp.compare_values(6.0, f[RunLengthFeature::RunLengthNonuniformity], 1e-12);

    // Gray emphasis: level 0 -> g = 1, level 1 -> g = 2.
    // Center (2,2) holds 0: five runs with g = 1 and four with g = 2
    let f = filter.compute_voxel(&[2, 2]).expect("center");
    rp.compare_values(
        (5.0 + 4.0 * 4.0) / 9.0,
        f[RunLengthFeature::HighGrayLevelRunEmphasis],
        1e-12,
    );
    rp.compare_values(
        (5.0 + 4.0 / 4.0) / 9.0,
        f[RunLengthFeature::LowGrayLevelRunEmphasis],
        1e-12,
    );

    assert!(rp.cleanup(), "checkerboard_features regression test failed");
}

#[test]
fn checkerboard_reg_region_partition() {
    let mut rp = RegParams::new("checkerboard_region");

    let img = synthetic::checkerboard(&[7, 6], 0u8, 1u8).expect("checkerboard");
    let filter = RunLengthTextureFilter::with_options(img.view(), None, &options())
        .expect("filter");

    let whole = filter.run().expect("run");

    // Same map when the host fills disjoint slabs one by one
    let mut pieced = filter.new_output().expect("new_output");
    for slab in filter.geometry().region().split(4) {
        filter.compute_region(&slab, &mut pieced).expect("compute_region");
    }
    rp.compare_feature_maps(&whole, &pieced, 0.0);

    // A region leaves voxels outside it untouched
    let mut partial = filter.new_output().expect("new_output");
    let region = Region::new(vec![2, 2], vec![2, 2]).expect("region");
    filter.compute_region(&region, &mut partial).expect("compute_region");
    let outside = partial.get(&[0, 0]).expect("get");
    rp.compare_values(0.0, outside.iter().map(|v| v.abs()).sum(), 0.0);
    let inside = partial.get(&[2, 2]).expect("get");
    rp.compare_vectors(whole.get(&[2, 2]).expect("get"), inside, 0.0);

    assert!(rp.cleanup(), "checkerboard_region regression test failed");
}
