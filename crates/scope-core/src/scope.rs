// File: crates/scope-core/src/scope.rs
// Summary: Viewport compositor: owns the axes, series and layers; single point of interactive control.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::warn;
use skia_safe as skia;

use crate::axis::Axis;
use crate::error::ScopeError;
use crate::gesture::{Gesture, GestureSnapshot};
use crate::layers::LayerStack;
use crate::render;
use crate::series::{LineStyle, Series};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::Bounds;

/// Timing of the most recent data-layer redraw, for the optional
/// performance annotation.
#[derive(Clone, Copy, Debug)]
pub struct FrameStats {
    pub duration: Duration,
    pub points: usize,
}

/// The single point of interactive control.
///
/// Owns both axes exclusively; gestures operate on immutable snapshots, so
/// an in-flight gesture is never affected by the live axes changing under
/// it. Everything runs synchronously on the calling thread.
pub struct Scope {
    x_axis: Axis,
    y_axis: Axis,
    series: Vec<Series>,
    theme: Theme,
    shaper: TextShaper,
    layers: LayerStack,
    gesture: Gesture,
    in_redraw: bool,
    benchmark: bool,
    last_frame: Option<FrameStats>,
}

impl Scope {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Self::with_theme(width, height, Theme::dark())
    }

    pub fn with_theme(width: i32, height: i32, theme: Theme) -> Result<Self> {
        let width = width.max(1);
        let height = height.max(1);
        let mut scope = Self {
            x_axis: Axis::new(0.0, 10.0, width, false),
            y_axis: Axis::new(-1.0, 1.0, height, true),
            series: Vec::new(),
            theme,
            shaper: TextShaper::new(),
            layers: LayerStack::new(width, height)?,
            gesture: Gesture::Idle,
            in_redraw: false,
            benchmark: false,
            last_frame: None,
        };
        scope.full_redraw();
        Ok(scope)
    }

    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn last_frame(&self) -> Option<FrameStats> {
        self.last_frame
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x1: self.x_axis.min(),
            x2: self.x_axis.max(),
            y1: self.y_axis.min(),
            y2: self.y_axis.max(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.full_redraw();
    }

    /// Toggle the frame-time/point-count overlay on rendered output.
    pub fn benchmark(&mut self, enabled: bool) {
        self.benchmark = enabled;
    }

    // ---- series ingestion ---------------------------------------------------

    /// Plot an evenly spaced signal. An empty sample array is a no-op; an
    /// unspecified color resolves to the theme accent here, once.
    pub fn plot_signal(&mut self, samples: Vec<f64>, spacing: f64, color: Option<skia::Color>) {
        if samples.is_empty() {
            return;
        }
        let style = LineStyle::new(color.unwrap_or(self.theme.accent));
        self.series.push(Series::signal(samples, spacing, style));
        self.fast_redraw();
    }

    /// Plot explicit point pairs. Mismatched lengths truncate to the
    /// shorter array; nothing left after truncation is a no-op.
    pub fn plot_points(&mut self, xs: Vec<f64>, ys: Vec<f64>, color: Option<skia::Color>) {
        if xs.is_empty() || ys.is_empty() {
            return;
        }
        let style = LineStyle::new(color.unwrap_or(self.theme.accent));
        self.series.push(Series::points(xs, ys, style));
        self.fast_redraw();
    }

    /// Full-control ingestion (offsets, line width).
    pub fn plot_series(&mut self, series: Series) {
        if series.is_empty() {
            return;
        }
        self.series.push(series);
        self.fast_redraw();
    }

    /// Discard every stored series.
    pub fn clear(&mut self) {
        self.series.clear();
        self.fast_redraw();
    }

    // ---- bounds control -----------------------------------------------------

    /// Apply any provided bound to its axis; a full redraw is scheduled only
    /// if at least one bound actually changed. Degenerate combinations are
    /// rejected by the axes and leave state untouched.
    pub fn set_bounds(&mut self, x1: Option<f64>, x2: Option<f64>, y1: Option<f64>, y2: Option<f64>) {
        let changed_x = self
            .x_axis
            .set_bounds(x1.unwrap_or(self.x_axis.min()), x2.unwrap_or(self.x_axis.max()));
        let changed_y = self
            .y_axis
            .set_bounds(y1.unwrap_or(self.y_axis.min()), y2.unwrap_or(self.y_axis.max()));
        if changed_x || changed_y {
            self.full_redraw();
        }
    }

    /// Zoom each axis by its fraction (>1 zooms in). Always redraws fully.
    pub fn zoom(&mut self, x_fraction: Option<f64>, y_fraction: Option<f64>) {
        if let Some(f) = x_fraction {
            self.x_axis.zoom(f);
        }
        if let Some(f) = y_fraction {
            self.y_axis.zoom(f);
        }
        self.full_redraw();
    }

    /// Fit the bounds to the stored data, with a small vertical margin.
    /// No data is a no-op.
    pub fn autoscale(&mut self) {
        let Some((mut x_min, mut x_max, mut y_min, mut y_max)) = self.data_extents() else {
            return;
        };
        if (x_max - x_min).abs() < 1e-9 {
            x_max = x_min + 1.0;
        }
        if (y_max - y_min).abs() < 1e-9 {
            y_max = y_min + 1.0;
        }
        let margin = (y_max - y_min) * 0.02;
        y_min -= margin;
        y_max += margin;
        let changed_x = self.x_axis.set_bounds(x_min, x_max);
        let changed_y = self.y_axis.set_bounds(y_min, y_max);
        if changed_x || changed_y {
            self.full_redraw();
        }
    }

    fn data_extents(&self) -> Option<(f64, f64, f64, f64)> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut any = false;
        for s in &self.series {
            match &s.data {
                crate::series::SeriesData::Signal { samples, spacing } => {
                    if samples.is_empty() {
                        continue;
                    }
                    x_min = x_min.min(s.offset_x);
                    x_max = x_max.max(s.offset_x + (samples.len() - 1) as f64 * spacing);
                    for &v in samples {
                        y_min = y_min.min(v + s.offset_y);
                        y_max = y_max.max(v + s.offset_y);
                    }
                    any = true;
                }
                crate::series::SeriesData::Points { xs, ys } => {
                    for (&x, &y) in xs.iter().zip(ys.iter()) {
                        x_min = x_min.min(x + s.offset_x);
                        x_max = x_max.max(x + s.offset_x);
                        y_min = y_min.min(y + s.offset_y);
                        y_max = y_max.max(y + s.offset_y);
                        any = true;
                    }
                }
            }
        }
        if !any || !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return None;
        }
        Some((x_min, x_max, y_min, y_max))
    }

    // ---- host control -------------------------------------------------------

    pub fn pan_start(&mut self, x: i32, y: i32) {
        self.gesture = Gesture::Panning(GestureSnapshot::capture(&self.x_axis, &self.y_axis, x, y));
    }

    pub fn zoom_start(&mut self, x: i32, y: i32) {
        self.gesture = Gesture::Zooming(GestureSnapshot::capture(&self.x_axis, &self.y_axis, x, y));
    }

    pub fn pan_end(&mut self) {
        if matches!(self.gesture, Gesture::Panning(_)) {
            self.gesture = Gesture::Idle;
            self.full_redraw();
        }
    }

    pub fn zoom_end(&mut self) {
        if matches!(self.gesture, Gesture::Zooming(_)) {
            self.gesture = Gesture::Idle;
            self.full_redraw();
        }
    }

    /// Pointer move during a gesture: derive new bounds from the frozen
    /// snapshot, apply them atomically, and repaint only the data layer.
    pub fn mouse_move(&mut self, x: i32, y: i32) {
        let bounds = match &self.gesture {
            Gesture::Idle => return,
            Gesture::Panning(snapshot) => snapshot.pan(x, y),
            Gesture::Zooming(snapshot) => snapshot.zoom(x, y),
        };
        let changed_x = self.x_axis.set_bounds(bounds.x1, bounds.x2);
        let changed_y = self.y_axis.set_bounds(bounds.y1, bounds.y2);
        if changed_x || changed_y {
            self.fast_redraw();
        }
    }

    /// Surface size change: re-acquire layers and rescale both axes only if
    /// the size actually changed.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<()> {
        if self.layers.resize(width, height)? {
            self.x_axis.resize(width.max(1));
            self.y_axis.resize(height.max(1));
            self.full_redraw();
        }
        Ok(())
    }

    // ---- rendering ----------------------------------------------------------

    /// Regenerate the background layer (grid/ticks/labels) from current
    /// axis state, then the data layer.
    pub fn full_redraw(&mut self) {
        if self.in_redraw {
            return;
        }
        self.in_redraw = true;
        render::draw_background(
            self.layers.background_canvas(),
            &self.x_axis,
            &self.y_axis,
            &self.theme,
            &self.shaper,
        );
        self.redraw_foreground();
        self.in_redraw = false;
    }

    /// Reuse the cached background; re-render only the data layer. Used
    /// during continuous pointer moves to keep interaction responsive.
    /// Arriving here while a redraw is already in flight drops this frame
    /// (last-writer-wins): the bounds are already applied, so the next
    /// event repaints the latest state.
    pub fn fast_redraw(&mut self) {
        if self.in_redraw {
            return;
        }
        self.in_redraw = true;
        self.redraw_foreground();
        self.in_redraw = false;
    }

    fn redraw_foreground(&mut self) {
        let start = Instant::now();
        let canvas = self.layers.foreground_canvas();
        canvas.clear(skia::Color::TRANSPARENT);
        for series in &self.series {
            // A malformed trace must not abort the session; log, drop it for
            // this frame and carry on with the rest.
            if let Err(err) = render::draw_series(canvas, series, &self.x_axis, &self.y_axis) {
                warn!("dropping trace for this frame: {err:#}");
            }
        }
        self.last_frame = Some(FrameStats {
            duration: start.elapsed(),
            points: self.series.iter().map(Series::len).sum(),
        });
    }

    /// Composite background + foreground into a single raster for the host.
    pub fn render_image(&mut self) -> Result<skia::Image> {
        let mut output = self.layers.composite()?;
        if self.benchmark {
            if let Some(stats) = self.last_frame {
                let text = format!(
                    "{:.2} ms  {} pts",
                    stats.duration.as_secs_f64() * 1e3,
                    stats.points
                );
                render::draw_annotation(output.canvas(), &text, &self.theme, &self.shaper);
            }
        }
        Ok(output.image_snapshot())
    }

    pub fn render_png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.render_image()?;
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ScopeError::PngEncode)?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
