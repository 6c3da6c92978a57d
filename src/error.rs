//! Errors

use thiserror::Error;

/// Errors raised by bitmap construction, pixel reads and export
#[derive(Debug, Error)]
pub enum Error {
    /// Bitmap requested with a zero side, or too large to address
    #[error("invalid bitmap dimension {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    /// Pixel read outside of `[0,width) x [0,height)`
    #[error("pixel ({x},{y}) out of bounds for {width}x{height} bitmap")]
    OutOfBounds { x: i64, y: i64, width: usize, height: usize },
    /// Failure inside the image encoder
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
