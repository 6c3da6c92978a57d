//! Pixel Access
//!
//! Writes outside of the bitmap are silently clipped, reads outside of the
//!   bitmap are errors.

use crate::buffer::{Bitmap, BPP};
use crate::color::{Color, TRANSPARENT};
use crate::error::{Error, Result};
use crate::math::composite_color;
use crate::Point;

impl Bitmap {
    /// Copies the [Color] `c` to pixel at `p`
    ///
    /// Locations outside of the region are ignored
    ///
    ///     use pixdraw::{Bitmap, Color, Point, TRANSPARENT};
    ///
    ///     let mut pix = Bitmap::new(1,2).unwrap();
    ///     let black = Color::black();
    ///     pix.put_pixel(Point::new(0,1), black);
    ///     assert_eq!(pix.get_pixel(Point::new(0,0)).unwrap(), TRANSPARENT);
    ///     assert_eq!(pix.get_pixel(Point::new(0,1)).unwrap(), black);
    ///
    ///     pix.put_pixel(Point::new(10,10), black); // Ignored, outside of range
    ///
    /// [Color]: ../color/struct.Color.html
    pub fn put_pixel(&mut self, p: Point, c: Color) {
        if let Some(i) = self.offset(p) {
            self.data_mut()[i .. i+BPP].copy_from_slice(&c.channels());
        }
    }
    /// Color of the pixel at `p`
    ///
    /// Locations outside of the region return [Error::OutOfBounds]
    ///
    /// [Error::OutOfBounds]: ../error/enum.Error.html
    pub fn get_pixel(&self, p: Point) -> Result<Color> {
        let i = self.offset(p).ok_or(Error::OutOfBounds {
            x: p.x, y: p.y, width: self.width(), height: self.height()
        })?;
        Ok(Color::from_slice(&self.as_bytes()[i .. i+BPP]))
    }
    /// Composite the [Color] `c` over the pixel at `p`
    ///
    /// The existing pixel is read first, so locations outside of the region
    ///   return [Error::OutOfBounds] and nothing is written
    ///
    /// [Color]: ../color/struct.Color.html
    /// [Error::OutOfBounds]: ../error/enum.Error.html
    pub fn put_pixel_with_composition(&mut self, p: Point, c: Color) -> Result<()> {
        let old = self.get_pixel(p)?;
        self.put_pixel(p, composite_color(c, old));
        Ok(())
    }
    /// Set pixels from `top_left` to `bottom_right` to [TRANSPARENT]
    ///
    /// Both corners are inclusive; pixels outside of the region are ignored
    ///
    /// [TRANSPARENT]: ../color/constant.TRANSPARENT.html
    pub fn clear_rect(&mut self, top_left: Point, bottom_right: Point) {
        for x in top_left.x ..= bottom_right.x {
            for y in top_left.y ..= bottom_right.y {
                self.put_pixel(Point::new(x,y), TRANSPARENT);
            }
        }
    }
    /// Clear the Image
    ///
    /// Sweeps (0,0) to (width,height) inclusive, one column and one row
    ///   past the edge, which is clipped
    pub fn clear(&mut self) {
        let br = Point::new(self.width() as i64, self.height() as i64);
        self.clear_rect(Point::new(0,0), br);
    }
    /// Set every pixel to `c`
    pub fn fill(&mut self, c: Color) {
        let c = c.channels();
        self.data_mut().chunks_exact_mut(BPP).for_each(|p| p.copy_from_slice(&c));
    }
}
