// File: crates/scope-core/tests/ticks.rs
// Purpose: Validate nice-number rounding and column-scan tick placement.

use scope_core::{nice_number, Axis};

#[test]
fn nice_number_examples() {
    assert!((nice_number(7.0) - 5.0).abs() < 1e-9);
    assert!((nice_number(0.03) - 0.01).abs() < 1e-9);
    assert!((nice_number(42.0) - 10.0).abs() < 1e-9);
    assert!((nice_number(0.7) - 0.5).abs() < 1e-9);
}

#[test]
fn ticks_strictly_increasing_in_pixels() {
    let axis = Axis::new(0.0, 100.0, 800, false);
    for ticks in [axis.grid_ticks(), axis.label_ticks()] {
        assert!(!ticks.is_empty());
        for pair in ticks.windows(2) {
            assert!(
                pair[1].pixel > pair[0].pixel,
                "tick pixels must be strictly increasing: {} then {}",
                pair[0].pixel,
                pair[1].pixel
            );
        }
    }
}

#[test]
fn endpoints_are_excluded() {
    let axis = Axis::new(0.0, 100.0, 700, false);
    for tick in axis.grid_ticks().iter().chain(axis.label_ticks()) {
        assert!(tick.units > axis.min());
        assert!(tick.units < axis.max());
    }
}

#[test]
fn grid_set_is_denser_than_label_set() {
    let axis = Axis::new(-50.0, 50.0, 1000, false);
    assert!(axis.grid_ticks().len() > axis.label_ticks().len());
}

#[test]
fn no_adjacent_column_collisions() {
    // A ratio chosen to stress rounding: ticks must still never land on
    // adjacent pixel columns.
    let axis = Axis::new(0.0, 0.37, 533, false);
    for pair in axis.grid_ticks().windows(2) {
        assert!(pair[1].pixel - pair[0].pixel > 1);
    }
}

#[test]
fn label_precision_follows_span() {
    let fine = Axis::new(0.0, 0.05, 400, false);
    for tick in fine.label_ticks() {
        let label = tick.label();
        let decimals = label.split('.').nth(1).map(str::len).unwrap_or(0);
        assert_eq!(decimals, 3, "span 0.05 labels carry 3 decimals, got {label}");
    }

    let coarse = Axis::new(0.0, 500.0, 400, false);
    for tick in coarse.label_ticks() {
        assert!(!tick.label().contains('.'));
    }
}

#[test]
fn ticks_regenerate_on_rescale() {
    let mut axis = Axis::new(0.0, 10.0, 800, false);
    let before: Vec<f64> = axis.label_ticks().iter().map(|t| t.units).collect();
    axis.set_bounds(0.0, 1000.0);
    let after: Vec<f64> = axis.label_ticks().iter().map(|t| t.units).collect();
    assert_ne!(before, after);
}
