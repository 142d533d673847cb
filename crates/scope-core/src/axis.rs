// File: crates/scope-core/src/axis.rs
// Summary: One dimension's bounds, pixel extent, scale factors and tick caches.

use crate::ticks::{self, Tick};

/// Pixels between labeled ticks that the adaptive step aims for.
const TICK_PITCH_PX: i32 = 70;
/// Gridlines per labeled tick.
const GRID_PER_LABEL: i32 = 5;

/// Maps one dimension of an unbounded data space onto a fixed pixel extent.
///
/// Bounds are private; every mutation funnels through a set-then-recompute
/// entry point so the reciprocal scale factors and the cached tick sets can
/// never go stale relative to the bounds.
#[derive(Clone, Debug)]
pub struct Axis {
    min: f64,
    max: f64,
    pixel_size: i32,
    inverted: bool,
    pixels_per_unit: f64,
    units_per_pixel: f64,
    grid_ticks: Vec<Tick>,
    label_ticks: Vec<Tick>,
}

impl Axis {
    /// Create an axis over `[min, max]` with the given pixel extent.
    /// Degenerate bounds fall back to `[0, 1]`; the extent is clamped to 1.
    pub fn new(min: f64, max: f64, pixel_size: i32, inverted: bool) -> Self {
        let (min, max) = if valid_bounds(min, max) { (min, max) } else { (0.0, 1.0) };
        let mut axis = Self {
            min,
            max,
            pixel_size: pixel_size.max(1),
            inverted,
            pixels_per_unit: 0.0,
            units_per_pixel: 0.0,
            grid_ticks: Vec::new(),
            label_ticks: Vec::new(),
        };
        axis.rescale();
        axis
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        (self.max + self.min) / 2.0
    }

    pub fn pixel_size(&self) -> i32 {
        self.pixel_size
    }

    pub fn inverted(&self) -> bool {
        self.inverted
    }

    pub fn units_per_pixel(&self) -> f64 {
        self.units_per_pixel
    }

    pub fn pixels_per_unit(&self) -> f64 {
        self.pixels_per_unit
    }

    /// Dense, unlabeled ticks backing the gridlines.
    pub fn grid_ticks(&self) -> &[Tick] {
        &self.grid_ticks
    }

    /// Sparse ticks that carry labels.
    pub fn label_ticks(&self) -> &[Tick] {
        &self.label_ticks
    }

    /// Replace the bounds. Non-finite values or `min >= max` are rejected
    /// as a no-op. Returns whether the axis actually changed.
    pub fn set_bounds(&mut self, min: f64, max: f64) -> bool {
        if !valid_bounds(min, max) {
            return false;
        }
        if min == self.min && max == self.max {
            return false;
        }
        self.min = min;
        self.max = max;
        self.rescale();
        true
    }

    /// Set the pixel extent, clamped to at least one pixel.
    pub fn resize(&mut self, pixel_size: i32) {
        let pixel_size = pixel_size.max(1);
        if pixel_size == self.pixel_size {
            return;
        }
        self.pixel_size = pixel_size;
        self.rescale();
    }

    /// Shrink the span by `fraction` (>1 zooms in, <1 zooms out), keeping
    /// the center fixed. Non-positive or non-finite fractions are rejected.
    pub fn zoom(&mut self, fraction: f64) {
        if !fraction.is_finite() || fraction <= 0.0 {
            return;
        }
        let center = self.center();
        let half = self.span() / fraction / 2.0;
        self.min = center - half;
        self.max = center + half;
        self.rescale();
    }

    /// Data unit -> pixel. The result may lie outside `[0, pixel_size)` for
    /// off-screen units; callers must not assume clipping.
    pub fn to_pixel(&self, unit: f64) -> i32 {
        let px = ((unit - self.min) * self.pixels_per_unit).round() as i32;
        if self.inverted {
            self.pixel_size - px
        } else {
            px
        }
    }

    /// Data unit at the left edge of pixel column `col`, ignoring inversion.
    /// Columns are scanned in ascending-unit order by tick generation and
    /// the decimator.
    pub fn column_unit(&self, col: i32) -> f64 {
        self.min + col as f64 * self.units_per_pixel
    }

    /// Recompute the reciprocal scale factors and regenerate both tick
    /// caches. Called by every mutating entry point.
    fn rescale(&mut self) {
        let span = self.span();
        self.pixels_per_unit = self.pixel_size as f64 / span;
        self.units_per_pixel = span / self.pixel_size as f64;
        let base = (self.pixel_size / TICK_PITCH_PX).max(1);
        self.grid_ticks = ticks::generate(self, base * GRID_PER_LABEL);
        self.label_ticks = ticks::generate(self, base);
    }
}

fn valid_bounds(min: f64, max: f64) -> bool {
    min.is_finite() && max.is_finite() && min < max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_construction_falls_back() {
        let a = Axis::new(5.0, 5.0, 0, false);
        assert!(a.min() < a.max());
        assert_eq!(a.pixel_size(), 1);
    }

    #[test]
    fn rejected_bounds_keep_state() {
        let mut a = Axis::new(-1.0, 1.0, 100, false);
        assert!(!a.set_bounds(2.0, 2.0));
        assert!(!a.set_bounds(f64::NAN, 1.0));
        assert_eq!(a.min(), -1.0);
        assert_eq!(a.max(), 1.0);
    }
}
