// Host-side tests for piecewise-linear interpolation.

use folio_core::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn clamps_below_first_and_above_last() {
    let set = BreakpointSet::new(&[0.2, 0.4, 0.8], &[3.0, 7.0, -1.0]).unwrap();
    for p in [-5.0, -0.1, 0.0, 0.1, 0.2] {
        assert!(approx(set.sample(p), 3.0), "p={p}");
    }
    for p in [0.8, 0.9, 1.0, 2.5] {
        assert!(approx(set.sample(p), -1.0), "p={p}");
    }
}

#[test]
fn interpolates_linearly_inside_intervals() {
    let set = BreakpointSet::new(&[0.0, 0.5, 1.0], &[0.0, 10.0, 30.0]).unwrap();
    assert!(approx(set.sample(0.25), 5.0));
    assert!(approx(set.sample(0.5), 10.0));
    assert!(approx(set.sample(0.75), 20.0));
}

#[test]
fn increasing_values_give_non_decreasing_curve() {
    let set = BreakpointSet::new(&[0.0, 0.1, 0.45, 0.5, 0.9], &[0.0, 0.2, 0.3, 0.9, 1.0]).unwrap();
    let mut prev = set.sample(-0.1);
    for i in 0..=120 {
        let p = -0.1 + i as f32 * 0.01;
        let v = set.sample(p);
        assert!(v >= prev - 1e-6, "curve decreased at p={p}: {prev} -> {v}");
        prev = v;
    }
}

#[test]
fn equal_adjacent_progress_returns_later_value() {
    let set = BreakpointSet::new(&[0.0, 0.5, 0.5, 1.0], &[0.0, 0.2, 0.8, 1.0]).unwrap();
    let v = set.sample(0.5);
    assert!(v.is_finite());
    assert!(approx(v, 0.8));
    // just before the jump still interpolates the first interval
    assert!(set.sample(0.4999) < 0.21);
}

#[test]
fn degenerate_set_at_the_edges_is_finite() {
    let set = BreakpointSet::new(&[0.3, 0.3], &[1.0, 5.0]).unwrap();
    assert!(approx(set.sample(0.3), 5.0));
    assert!(approx(set.sample(0.29), 1.0));
    assert!(approx(set.sample(0.31), 5.0));
}

#[test]
fn nan_query_returns_first_value() {
    let set = BreakpointSet::new(&[0.0, 1.0], &[4.0, 8.0]).unwrap();
    assert!(approx(set.sample(f32::NAN), 4.0));
}

#[test]
fn constant_ignores_progress() {
    let set = BreakpointSet::constant(0.7);
    assert!(approx(set.sample(0.0), 0.7));
    assert!(approx(set.sample(1.0), 0.7));
    assert!(approx(set.first_value(), set.last_value()));
}

#[test]
fn construction_rejects_bad_input() {
    assert_eq!(
        BreakpointSet::new(&[], &[]).unwrap_err(),
        ChoreoError::EmptyBreakpoints
    );
    assert_eq!(
        BreakpointSet::new(&[0.0, 1.0], &[1.0]).unwrap_err(),
        ChoreoError::LengthMismatch {
            progress: 2,
            values: 1
        }
    );
    assert!(matches!(
        BreakpointSet::new(&[0.0, f32::NAN], &[1.0, 2.0]),
        Err(ChoreoError::NonFinite { index: 1 })
    ));
    assert!(matches!(
        BreakpointSet::new(&[0.0, 0.6, 0.5], &[1.0, 2.0, 3.0]),
        Err(ChoreoError::Unsorted { index: 2, .. })
    ));
}

#[test]
fn free_interpolate_handles_empty_slice() {
    assert_eq!(interpolate(&[], 0.5), 0.0);
}
