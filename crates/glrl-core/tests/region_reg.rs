//! Region regression test
//!
//! Region iteration must follow memory order (axis 0 fastest) and the
//! slabs produced by `Region::split` must cover a grid exactly once.

use glrl_core::{Geometry, Image, Region};
use glrl_test::{RegParams, synthetic};

#[test]
fn region_reg_memory_order() {
    let mut rp = RegParams::new("region_order");

    let geometry = Geometry::new(vec![4, 3, 2]).expect("geometry");
    for (expected, idx) in geometry.region().indices().enumerate() {
        let lin = geometry.linear_index(&idx).expect("linear_index");
        rp.compare_values(expected as f64, lin as f64, 0.0);
        rp.compare_vectors(
            &idx.iter().map(|&i| i as f64).collect::<Vec<_>>(),
            &geometry.index_of(lin).iter().map(|&i| i as f64).collect::<Vec<_>>(),
            0.0,
        );
    }

    // from_fn visits indices in the same order as the buffer
    let img = Image::from_fn(geometry.clone(), |idx| {
        (idx[0] + 4 * idx[1] + 12 * idx[2]) as u32
    });
    for (lin, &v) in img.data().iter().enumerate() {
        rp.compare_values(lin as f64, f64::from(v), 0.0);
    }

    assert!(rp.cleanup(), "region_order regression test failed");
}

#[test]
fn region_reg_split_cover() {
    let mut rp = RegParams::new("region_split");

    let geometry = Geometry::new(vec![5, 4, 7]).expect("geometry");
    for parts in [1usize, 2, 3, 7, 12] {
        let mut hits = vec![0u32; geometry.num_voxels()];
        let slabs = geometry.region().split(parts);
        rp.compare_values(parts.min(7) as f64, slabs.len() as f64, 0.0);
        for slab in &slabs {
            geometry.check_region(slab).expect("slab inside grid");
            for idx in slab.indices() {
                hits[geometry.linear_index_unchecked(&idx)] += 1;
            }
        }
        let all_once = hits.iter().all(|&h| h == 1);
        rp.compare_values(1.0, f64::from(u8::from(all_once)), 0.0);
    }

    assert!(rp.cleanup(), "region_split regression test failed");
}

#[test]
fn region_reg_windows() {
    let mut rp = RegParams::new("region_windows");

    // A window clipped at the border keeps only in-grid voxels
    let size = [6usize, 5];
    let window = Region::around(&[5, 0], &[2, 2], &size);
    let mask = synthetic::region_mask(&size, &window, 1u8, 0u8).expect("mask");
    let inside = mask.data().iter().filter(|&&m| m == 1).count();
    rp.compare_values(9.0, inside as f64, 0.0);
    rp.compare_values(9.0, window.num_voxels() as f64, 0.0);
    rp.compare_vectors(&[3.0, 0.0], &window.start().iter().map(|&s| s as f64).collect::<Vec<_>>(), 0.0);

    assert!(rp.cleanup(), "region_windows regression test failed");
}
