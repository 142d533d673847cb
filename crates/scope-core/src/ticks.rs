// File: crates/scope-core/src/ticks.rs
// Summary: Nice-number sequence and column-scan tick placement.

use crate::axis::Axis;

/// One axis tick, derived entirely from its owning axis at generation time.
/// Discarded and regenerated on every rescale.
#[derive(Clone, Copy, Debug)]
pub struct Tick {
    /// Position in data units.
    pub units: f64,
    /// Position in pixels along the axis (inversion already applied).
    pub pixel: i32,
    /// Axis span when this tick was generated; drives label precision.
    pub span_at_gen: f64,
}

impl Tick {
    /// Format the tick value with precision appropriate for the axis span
    /// at generation time.
    pub fn label(&self) -> String {
        format!("{:.*}", decimals_for_span(self.span_at_gen), self.units)
    }
}

/// Decimal places for tick labels as a function of the axis span.
pub fn decimals_for_span(span: f64) -> usize {
    if span < 0.01 {
        4
    } else if span < 0.1 {
        3
    } else if span < 1.0 {
        2
    } else if span < 10.0 {
        1
    } else {
        0
    }
}

const NICE_UPPER: f64 = 1e12;
const NICE_LOWER: f64 = 1e-12;

/// Round a positive value down to the nearest member of the sequence
/// {..., 1000, 500, 100, 50, 10, 5, 1, 0.5, 0.1, ...} (alternating /2, /5
/// from a large upper bound down to a small epsilon).
pub fn nice_number(target: f64) -> f64 {
    let mut value = NICE_UPPER;
    if !target.is_finite() || target >= value {
        return value;
    }
    let mut halve = true;
    while value > target && value > NICE_LOWER {
        value /= if halve { 2.0 } else { 5.0 };
        halve = !halve;
    }
    value
}

/// Place ticks by scanning pixel columns left to right.
///
/// A tick is emitted when the column's bucket index `floor(units/step)`
/// changes from the previous column and the tick value lies strictly inside
/// the open interval (min, max). Scanning columns instead of walking an
/// arithmetic sequence guarantees no two ticks land on adjacent pixel
/// columns, whatever the step/size ratio.
pub(crate) fn generate(axis: &Axis, target: i32) -> Vec<Tick> {
    let span = axis.span();
    let step = nice_number(span / target.max(1) as f64 * 1.5);
    let mut ticks = Vec::new();
    let mut prev = bucket(axis.column_unit(0), step);
    for col in 1..axis.pixel_size() {
        let b = bucket(axis.column_unit(col), step);
        if b != prev {
            let units = b as f64 * step;
            if units > axis.min() && units < axis.max() {
                ticks.push(Tick {
                    units,
                    pixel: axis.to_pixel(units),
                    span_at_gen: span,
                });
            }
            prev = b;
        }
    }
    ticks
}

#[inline]
fn bucket(units: f64, step: f64) -> i64 {
    (units / step).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_number_rounds_down() {
        assert!((nice_number(7.0) - 5.0).abs() < 1e-9);
        assert!((nice_number(0.03) - 0.01).abs() < 1e-9);
        assert!((nice_number(1.0) - 1.0).abs() < 1e-9);
        assert!((nice_number(499.0) - 100.0).abs() < 1e-9);
        assert!((nice_number(500.0) - 500.0).abs() < 1e-9);
    }

    #[test]
    fn decimals_follow_span() {
        assert_eq!(decimals_for_span(0.005), 4);
        assert_eq!(decimals_for_span(0.05), 3);
        assert_eq!(decimals_for_span(0.5), 2);
        assert_eq!(decimals_for_span(5.0), 1);
        assert_eq!(decimals_for_span(50.0), 0);
    }
}
