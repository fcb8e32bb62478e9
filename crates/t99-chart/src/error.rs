// File: crates/t99-chart/src/error.rs
// Summary: Rendering failures raised by the Skia raster pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("failed to read back rendered pixels")]
    ReadPixels,
    #[error("pixel buffer does not match {width}x{height}")]
    Buffer { width: u32, height: u32 },
    #[error("encode PNG failed: {0}")]
    Encode(#[from] png::EncodingError),
}
