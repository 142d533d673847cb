// File: crates/scope-core/src/gesture.rs
// Summary: Frozen axis snapshots and the pan/zoom gesture math.

use crate::axis::Axis;
use crate::types::Bounds;

/// Frozen copy of one axis' state, taken at gesture start.
#[derive(Clone, Copy, Debug)]
pub struct AxisSnapshot {
    pub min: f64,
    pub max: f64,
    pub span: f64,
    pub center: f64,
    pub units_per_pixel: f64,
}

impl AxisSnapshot {
    fn capture(axis: &Axis) -> Self {
        Self {
            min: axis.min(),
            max: axis.max(),
            span: axis.span(),
            center: axis.center(),
            units_per_pixel: axis.units_per_pixel(),
        }
    }
}

/// Immutable capture of both axes plus the anchor pointer position.
///
/// New bounds are a pure function of the snapshot and the current pointer
/// pixel; the live axes are never read during a gesture, so applying the
/// result is always relative to the gesture's starting state.
#[derive(Clone, Copy, Debug)]
pub struct GestureSnapshot {
    pub x: AxisSnapshot,
    pub y: AxisSnapshot,
    pub anchor_x: i32,
    pub anchor_y: i32,
}

impl GestureSnapshot {
    pub fn capture(x_axis: &Axis, y_axis: &Axis, anchor_x: i32, anchor_y: i32) -> Self {
        Self {
            x: AxisSnapshot::capture(x_axis),
            y: AxisSnapshot::capture(y_axis),
            anchor_x,
            anchor_y,
        }
    }

    /// Linear translation: each bound shifts by the pointer delta scaled by
    /// the snapshot's units-per-pixel. Span unchanged. The Y delta is
    /// negated relative to X because screen Y grows downward.
    pub fn pan(&self, current_x: i32, current_y: i32) -> Bounds {
        let dx = (self.anchor_x - current_x) as f64 * self.x.units_per_pixel;
        let dy = (current_y - self.anchor_y) as f64 * self.y.units_per_pixel;
        Bounds {
            x1: self.x.min + dx,
            x2: self.x.max + dx,
            y1: self.y.min + dy,
            y2: self.y.max + dy,
        }
    }

    /// Continuous, reversible, center-preserving zoom.
    ///
    /// Per axis: `d` is the pointer delta in data units (X grows rightward,
    /// Y grows as the pointer moves up), `frac = d / (|d| + span)` saturates
    /// smoothly in (-1, 1), and the new span is `span / 10^frac` centered on
    /// the snapshot's original center. X and Y are independent, so dragging
    /// diagonally zooms asymmetrically.
    pub fn zoom(&self, current_x: i32, current_y: i32) -> Bounds {
        let dx = (current_x - self.anchor_x) as f64 * self.x.units_per_pixel;
        let dy = (self.anchor_y - current_y) as f64 * self.y.units_per_pixel;
        let (x1, x2) = zoom_axis(&self.x, dx);
        let (y1, y2) = zoom_axis(&self.y, dy);
        Bounds { x1, x2, y1, y2 }
    }
}

fn zoom_axis(snapshot: &AxisSnapshot, d: f64) -> (f64, f64) {
    let frac = d / (d.abs() + snapshot.span);
    let half = snapshot.span / 10f64.powf(frac) / 2.0;
    (snapshot.center - half, snapshot.center + half)
}

/// Tagged gesture state: at most one gesture is active at a time, matching
/// the start/end/move host API.
#[derive(Clone, Copy, Debug)]
pub enum Gesture {
    Idle,
    Panning(GestureSnapshot),
    Zooming(GestureSnapshot),
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }
}
