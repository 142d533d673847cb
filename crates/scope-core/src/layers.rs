// File: crates/scope-core/src/layers.rs
// Summary: Background/foreground raster layers over Skia CPU surfaces.

use log::debug;
use skia_safe as skia;

use crate::error::ScopeError;

/// The two raster layers a frame is composed from.
///
/// The background holds grid, ticks and labels and survives across fast
/// redraws; the foreground holds the data traces and is cleared every
/// frame. Surfaces are owned, scope-bound resources: they are acquired
/// here, re-acquired only on an actual size change, and released when the
/// stack (or a failed acquisition's partial state) is dropped.
pub struct LayerStack {
    width: i32,
    height: i32,
    background: skia::Surface,
    foreground: skia::Surface,
}

impl LayerStack {
    pub fn new(width: i32, height: i32) -> Result<Self, ScopeError> {
        let width = width.max(1);
        let height = height.max(1);
        Ok(Self {
            width,
            height,
            background: acquire(width, height)?,
            foreground: acquire(width, height)?,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Re-acquire both surfaces if the size actually changed. Returns
    /// whether a reallocation happened.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<bool, ScopeError> {
        let width = width.max(1);
        let height = height.max(1);
        if width == self.width && height == self.height {
            return Ok(false);
        }
        debug!("reallocating layer surfaces: {}x{} -> {}x{}", self.width, self.height, width, height);
        self.background = acquire(width, height)?;
        self.foreground = acquire(width, height)?;
        self.width = width;
        self.height = height;
        Ok(true)
    }

    pub fn background_canvas(&mut self) -> &skia::Canvas {
        self.background.canvas()
    }

    pub fn foreground_canvas(&mut self) -> &skia::Canvas {
        self.foreground.canvas()
    }

    /// Merge both layers onto a fresh output surface and return it, leaving
    /// its canvas available for overlay annotations before snapshotting.
    pub fn composite(&mut self) -> Result<skia::Surface, ScopeError> {
        let mut output = acquire(self.width, self.height)?;
        let background = self.background.image_snapshot();
        let foreground = self.foreground.image_snapshot();
        let canvas = output.canvas();
        canvas.draw_image(&background, (0.0, 0.0), None);
        canvas.draw_image(&foreground, (0.0, 0.0), None);
        Ok(output)
    }
}

fn acquire(width: i32, height: i32) -> Result<skia::Surface, ScopeError> {
    skia::surfaces::raster_n32_premul((width, height))
        .ok_or(ScopeError::SurfaceAcquisition { width, height })
}
