// File: crates/scope-core/src/render.rs
// Summary: Issues drawing-surface primitives for grid, labels, traces and markers.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::Axis;
use crate::decimate;
use crate::series::{Series, SeriesData};
use crate::text::{Align, TextShaper};
use crate::theme::Theme;

const LABEL_SIZE: f32 = 12.0;
const LABEL_PAD: f32 = 4.0;
const MARKER_RADIUS: f32 = 2.0;

/// Background layer: solid fill, gridlines from the dense tick set, labels
/// from the sparse set, and a frame around the plot area.
pub(crate) fn draw_background(
    canvas: &skia::Canvas,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &Theme,
    shaper: &TextShaper,
) {
    let width = x_axis.pixel_size();
    let height = y_axis.pixel_size();
    canvas.clear(theme.background);

    let mut grid = skia::Paint::default();
    grid.set_color(theme.grid);
    grid.set_anti_alias(false);
    grid.set_stroke_width(1.0);

    for tick in x_axis.grid_ticks() {
        let x = tick.pixel as f32;
        canvas.draw_line((x, 0.0), (x, height as f32), &grid);
    }
    for tick in y_axis.grid_ticks() {
        let y = tick.pixel as f32;
        canvas.draw_line((0.0, y), (width as f32, y), &grid);
    }

    let mut frame = skia::Paint::default();
    frame.set_color(theme.frame);
    frame.set_anti_alias(false);
    frame.set_style(skia::paint::Style::Stroke);
    frame.set_stroke_width(1.0);
    canvas.draw_rect(
        skia::Rect::from_ltrb(0.5, 0.5, width as f32 - 0.5, height as f32 - 0.5),
        &frame,
    );

    for tick in x_axis.label_ticks() {
        shaper.draw(
            canvas,
            &tick.label(),
            tick.pixel as f32,
            height as f32 - LABEL_PAD,
            LABEL_SIZE,
            theme.tick_label,
            true,
            Align::Center,
        );
    }
    for tick in y_axis.label_ticks() {
        shaper.draw(
            canvas,
            &tick.label(),
            LABEL_PAD,
            tick.pixel as f32 + LABEL_SIZE * 0.4,
            LABEL_SIZE,
            theme.tick_label,
            true,
            Align::Left,
        );
    }
}

/// Render one series onto the foreground layer.
///
/// Signal traces draw with anti-aliasing disabled so the decimated
/// envelope lands on crisp, deterministic pixels; point-pair traces keep
/// it on. Errors cross this boundary to the caller, which logs and drops
/// the trace for the frame.
pub(crate) fn draw_series(
    canvas: &skia::Canvas,
    series: &Series,
    x_axis: &Axis,
    y_axis: &Axis,
) -> Result<()> {
    let trace = decimate::decimate(series, x_axis, y_axis);
    if !trace.drawable() {
        return Ok(());
    }
    let anti_alias = matches!(series.data, SeriesData::Points { .. });

    let mut builder = skia::PathBuilder::new();
    let (x0, y0) = trace.vertices[0];
    builder.move_to((x0 as f32, y0 as f32));
    for &(x, y) in trace.vertices.iter().skip(1) {
        builder.line_to((x as f32, y as f32));
    }
    let path = builder.detach();

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(anti_alias);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.style.width);
    stroke.set_color(series.style.color);
    canvas.draw_path(&path, &stroke);

    if trace.markers {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(series.style.color);
        for &(x, y) in &trace.vertices {
            let (x, y) = (x as f32, y as f32);
            canvas.draw_oval(
                skia::Rect::from_ltrb(x - MARKER_RADIUS, y - MARKER_RADIUS, x + MARKER_RADIUS, y + MARKER_RADIUS),
                &fill,
            );
        }
    }
    Ok(())
}

/// Performance annotation in the top-left corner of the composited frame.
pub(crate) fn draw_annotation(canvas: &skia::Canvas, text: &str, theme: &Theme, shaper: &TextShaper) {
    shaper.draw(
        canvas,
        text,
        LABEL_PAD + 2.0,
        LABEL_SIZE + LABEL_PAD,
        LABEL_SIZE,
        theme.annotation,
        true,
        Align::Left,
    );
}
