use std::sync::Arc;

use approx::assert_relative_eq;
use proptest::prelude::*;

use crv_core::Tolerance;
use crv_geometry::{sort_by_radius, Circle, CurveSet, Ellipse, Helix};
use crv_reduce::{chunk_ranges, compare_sums, sum_parallel, sum_sequential, ReduceConfig};

fn sorted_circles(radii: &[f64]) -> Vec<Arc<Circle>> {
    let mut view: Vec<Arc<Circle>> = radii
        .iter()
        .map(|&r| Arc::new(Circle::new(r).unwrap()))
        .collect();
    sort_by_radius(&mut view);
    view
}

#[test]
fn test_three_circles_end_to_end() {
    let mut set = CurveSet::new();
    set.push(Helix::new(10.0, 2.0).unwrap());
    set.push(Circle::new(1.0).unwrap());
    set.push(Ellipse::new(7.0, 8.0).unwrap());
    set.push(Circle::new(3.0).unwrap());
    set.push(Circle::new(2.0).unwrap());

    let mut circles = set.filter::<Circle>();
    sort_by_radius(&mut circles);

    assert_eq!(sum_sequential(&circles), 6.0);
    assert_eq!(sum_parallel(&circles, 2), 6.0);
}

#[test]
fn test_large_random_like_view() {
    let radii: Vec<f64> = (0..250_000)
        .map(|i| ((i as f64).mul_add(0.618_033_988_75, 0.5).fract()) * 1000.0)
        .collect();
    let view = sorted_circles(&radii);
    let sums = compare_sums(&view, &ReduceConfig::new(8));

    assert_eq!(sums.chunks, 8);
    assert!(sums.agree(Tolerance::default()));
    assert_relative_eq!(sums.sequential, sums.parallel, max_relative = 1e-9);
}

#[test]
fn test_hardware_config_agrees() {
    let view = sorted_circles(&[5.0, 0.25, 3.5, 0.0, 9.75]);
    let config = ReduceConfig::default();
    assert_eq!(sum_parallel(&view, config.workers), 18.5);
}

proptest! {
    #[test]
    fn parallel_agrees_with_sequential(
        radii in prop::collection::vec(0.0f64..1000.0, 0..2000),
        workers in 1usize..64,
    ) {
        let view = sorted_circles(&radii);
        let sequential = sum_sequential(&view);
        let parallel = sum_parallel(&view, workers);
        prop_assert!(
            Tolerance::default().relative_eq(sequential, parallel),
            "sequential={} parallel={} workers={}", sequential, parallel, workers
        );
    }

    #[test]
    fn single_worker_is_exact(radii in prop::collection::vec(0.0f64..1000.0, 0..500)) {
        let view = sorted_circles(&radii);
        prop_assert_eq!(sum_parallel(&view, 1).to_bits(), sum_sequential(&view).to_bits());
    }

    #[test]
    fn chunks_cover_input_in_order(len in 0usize..5000, workers in 1usize..128) {
        let ranges = chunk_ranges(len, workers);
        prop_assert!(ranges.len() <= workers);
        prop_assert!(ranges.iter().all(|r| !r.is_empty()));

        let mut next = 0;
        for r in &ranges {
            prop_assert_eq!(r.start, next);
            next = r.end;
        }
        prop_assert_eq!(next, len);
    }
}
