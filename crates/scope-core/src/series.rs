// File: crates/scope-core/src/series.rs
// Summary: Series model for evenly spaced signals and explicit point pairs.

use skia_safe as skia;

/// Stroke styling for one series. The color is always concrete here; the
/// theme-accent default is resolved once at the plot call boundary.
#[derive(Clone, Copy, Debug)]
pub struct LineStyle {
    pub width: f32,
    pub color: skia::Color,
}

impl LineStyle {
    pub fn new(color: skia::Color) -> Self {
        Self { width: 1.0, color }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width.max(0.1);
        self
    }
}

#[derive(Clone, Debug)]
pub enum SeriesData {
    /// Evenly spaced samples; sample `i` sits at `i * spacing` data units
    /// (before the X offset). Eligible for envelope decimation.
    Signal { samples: Vec<f64>, spacing: f64 },
    /// Explicit coordinate pairs; always rendered as a direct polyline.
    Points { xs: Vec<f64>, ys: Vec<f64> },
}

/// One plotted series. Append-only: the engine never mutates a stored
/// series, and the whole collection is discarded on clear.
#[derive(Clone, Debug)]
pub struct Series {
    pub data: SeriesData,
    pub offset_x: f64,
    pub offset_y: f64,
    pub style: LineStyle,
}

impl Series {
    /// An evenly spaced signal. Non-positive or non-finite spacing falls
    /// back to 1.0 (one data unit per sample).
    pub fn signal(samples: Vec<f64>, spacing: f64, style: LineStyle) -> Self {
        let spacing = if spacing.is_finite() && spacing > 0.0 { spacing } else { 1.0 };
        Self {
            data: SeriesData::Signal { samples, spacing },
            offset_x: 0.0,
            offset_y: 0.0,
            style,
        }
    }

    /// Explicit point pairs. Mismatched lengths truncate to the shorter
    /// array; this is documented degraded behavior, not an error.
    pub fn points(mut xs: Vec<f64>, mut ys: Vec<f64>, style: LineStyle) -> Self {
        let n = xs.len().min(ys.len());
        xs.truncate(n);
        ys.truncate(n);
        Self {
            data: SeriesData::Points { xs, ys },
            offset_x: 0.0,
            offset_y: 0.0,
            style,
        }
    }

    pub fn with_offsets(mut self, offset_x: f64, offset_y: f64) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// Number of stored data points.
    pub fn len(&self) -> usize {
        match &self.data {
            SeriesData::Signal { samples, .. } => samples.len(),
            SeriesData::Points { xs, .. } => xs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> LineStyle {
        LineStyle::new(skia::Color::from_argb(255, 64, 160, 255))
    }

    #[test]
    fn mismatched_pairs_truncate_to_shorter() {
        let s = Series::points(vec![0.0, 1.0, 2.0], vec![5.0, 6.0], style());
        assert_eq!(s.len(), 2);
        match &s.data {
            SeriesData::Points { xs, ys } => {
                assert_eq!(xs, &[0.0, 1.0]);
                assert_eq!(ys, &[5.0, 6.0]);
            }
            _ => panic!("expected point data"),
        }
    }

    #[test]
    fn bad_spacing_falls_back() {
        let s = Series::signal(vec![1.0, 2.0], 0.0, style());
        match &s.data {
            SeriesData::Signal { spacing, .. } => assert_eq!(*spacing, 1.0),
            _ => panic!("expected signal data"),
        }
    }
}
