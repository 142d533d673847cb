// File: crates/scope-core/tests/axis.rs
// Purpose: Validate axis invariants, pixel round-trips and zoom behavior.

use scope_core::Axis;

#[test]
fn unit_to_pixel_midpoint() {
    let axis = Axis::new(-10.0, 10.0, 100, false);
    assert_eq!(axis.to_pixel(0.0), 50);
}

#[test]
fn round_trip_endpoints() {
    let axis = Axis::new(2.0, 8.0, 300, false);
    assert_eq!(axis.to_pixel(2.0), 0);
    assert_eq!(axis.to_pixel(8.0), 300);
}

#[test]
fn inverted_endpoints_complement() {
    let axis = Axis::new(2.0, 8.0, 300, true);
    assert_eq!(axis.to_pixel(2.0), 300);
    assert_eq!(axis.to_pixel(8.0), 0);
    // complementary identity against the non-inverted axis
    let plain = Axis::new(2.0, 8.0, 300, false);
    for unit in [2.0, 3.5, 5.0, 7.9] {
        assert_eq!(axis.to_pixel(unit), 300 - plain.to_pixel(unit));
    }
}

#[test]
fn off_screen_units_are_not_clipped() {
    let axis = Axis::new(0.0, 10.0, 100, false);
    assert!(axis.to_pixel(-5.0) < 0);
    assert!(axis.to_pixel(25.0) > 100);
}

#[test]
fn invariants_survive_public_mutation() {
    let mut axis = Axis::new(0.0, 1.0, 200, false);

    axis.resize(0);
    assert!(axis.pixel_size() >= 1);
    axis.resize(-50);
    assert!(axis.pixel_size() >= 1);

    // zoom with a non-positive fraction is rejected
    let (min, max) = (axis.min(), axis.max());
    axis.zoom(0.0);
    axis.zoom(-3.0);
    axis.zoom(f64::NAN);
    assert_eq!((axis.min(), axis.max()), (min, max));

    axis.zoom(4.0);
    assert!(axis.min() < axis.max());
}

#[test]
fn scale_factors_track_bounds() {
    let mut axis = Axis::new(0.0, 10.0, 100, false);
    assert!((axis.units_per_pixel() - 0.1).abs() < 1e-12);
    assert!((axis.pixels_per_unit() - 10.0).abs() < 1e-12);

    axis.set_bounds(0.0, 20.0);
    assert!((axis.units_per_pixel() - 0.2).abs() < 1e-12);
    assert!((axis.pixels_per_unit() - 5.0).abs() < 1e-12);
}

#[test]
fn zoom_in_then_out_restores_bounds() {
    let mut axis = Axis::new(-3.0, 7.0, 640, false);
    axis.zoom(2.5);
    axis.zoom(1.0 / 2.5);
    assert!((axis.min() - -3.0).abs() < 1e-9);
    assert!((axis.max() - 7.0).abs() < 1e-9);
}

#[test]
fn zoom_preserves_center() {
    let mut axis = Axis::new(2.0, 6.0, 640, false);
    let center = axis.center();
    axis.zoom(3.0);
    assert!((axis.center() - center).abs() < 1e-12);
    assert!((axis.span() - 4.0 / 3.0).abs() < 1e-12);
}
