// File: crates/scope-core/src/error.rs
// Summary: Typed errors for surface acquisition and encoding.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("failed to acquire {width}x{height} raster surface")]
    SurfaceAcquisition { width: i32, height: i32 },
    #[error("PNG encoding failed")]
    PngEncode,
}
