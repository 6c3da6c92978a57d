//! Minimal RGBA drawing surface
//!
//! How does this work
//!
//! ```text
//!    pix = Bitmap::new(w, h)            -- zero filled, fully transparent
//!  Pixel Operations
//!    put_pixel()                        -- outside of bitmap is ignored
//!    get_pixel()                        -- outside of bitmap is an error
//!    put_pixel_with_composition()
//!      get_pixel()
//!      composite_color()                -- source-over, all 4 channels
//!      put_pixel()
//!    clear_rect() / clear()             -- corners inclusive
//!  Lines
//!    draw_line(p1, p2, color, width, mode)
//!      LineMode::Bresenham              -- put_pixel()
//!      LineMode::AntiAliased            -- Xiaolin Wu, composited per pixel
//!  Output
//!    png::write_png(&pix, writer)
//!    png::write_file(&pix, path)
//! ```
//!
//! A [Bitmap] has no internal locking; sharing one across threads needs
//!   external synchronization.
//!
//!     use pixdraw::{Bitmap, LineMode, Point, rgb};
//!
//!     let mut pix = Bitmap::new(100,100).unwrap();
//!     pix.draw_line(Point::new(10,30), Point::new(90,10), rgb(255,0,0), 1.0, LineMode::Bresenham);
//!     let mut png = Vec::new();
//!     pixdraw::png::write_png(&pix, &mut png).unwrap();
//!
//! [Bitmap]: buffer/struct.Bitmap.html

pub mod buffer;
pub mod color;
pub mod error;
pub mod line;
pub mod math;
pub mod pixfmt;
pub mod png;

pub use crate::buffer::*;
pub use crate::color::*;
pub use crate::error::*;
pub use crate::line::*;
pub use crate::math::*;

/// Integer pixel location
///
/// Any value is valid, locations outside of a bitmap are handled by each
///   operation
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

impl From<(i64,i64)> for Point {
    fn from(p: (i64,i64)) -> Self {
        Point::new(p.0, p.1)
    }
}

/// Raw pixel data handed to an encoder
///
/// Data is `width * height * 4` bytes, R,G,B,A per pixel, row-major
pub trait PixelData {
    /// Width in pixels
    fn width(&self) -> usize;
    /// Height in pixels
    fn height(&self) -> usize;
    /// Component data
    fn pixeldata(&self) -> &[u8];
}
