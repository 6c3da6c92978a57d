//! Line Rasterizer

use crate::buffer::Bitmap;
use crate::color::Color;
use crate::math::composite_color;
use crate::Point;

use std::convert::TryFrom;

use log::{trace, warn};

/// Line drawing strategy
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum LineMode {
    /// Integer [Bresenham](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm), pixels are copied
    Bresenham,
    /// [Xiaolin Wu's line algorithm](https://en.wikipedia.org/wiki/Xiaolin_Wu%27s_line_algorithm),
    ///   pixels are composited with a coverage-scaled alpha
    AntiAliased,
}

impl Default for LineMode {
    fn default() -> Self {
        LineMode::AntiAliased
    }
}

/// `true` selects anti-aliasing
impl From<bool> for LineMode {
    fn from(anti_aliasing: bool) -> Self {
        if anti_aliasing { LineMode::AntiAliased } else { LineMode::Bresenham }
    }
}

impl Bitmap {
    /// Draw a line from `p1` to `p2` of color `c`
    ///
    /// Both end points are drawn. The whole line is walked, pixels
    ///   outside of the bitmap are ignored.
    ///
    /// Lines are always 1 pixel wide; `width` is accepted but not used.
    ///
    ///     use pixdraw::{Bitmap, LineMode, Point, rgb};
    ///
    ///     let mut pix = Bitmap::new(5,5).unwrap();
    ///     let red = rgb(255,0,0);
    ///     pix.draw_line(Point::new(0,0), Point::new(4,4), red, 1.0, LineMode::Bresenham);
    ///     for i in 0 .. 5 {
    ///         assert_eq!(pix.get_pixel(Point::new(i,i)).unwrap(), red);
    ///     }
    ///
    pub fn draw_line(&mut self, p1: Point, p2: Point, c: Color, width: f64, mode: LineMode) {
        trace!("line {:?} - {:?} {:?} {:?}", p1, p2, c, mode);
        if width != 1.0 {
            warn!("line width {} ignored, lines are drawn 1 pixel wide", width);
        }
        match mode {
            LineMode::Bresenham   => self.line_bresenham(p1, p2, c),
            LineMode::AntiAliased => self.line_aa(p1, p2, c),
        }
    }

    fn line_bresenham(&mut self, p1: Point, p2: Point, c: Color) {
        let dx = p1.x.abs_diff(p2.x);
        let dy = p1.y.abs_diff(p2.y);
        if dx > dy {
            let (p1,p2) = if p1.x > p2.x { (p2,p1) } else { (p1,p2) };
            // Equal y gives -1, never applied since dy is 0
            let sy = if p2.y > p1.y { 1 } else { -1 };
            self.bresenham_walk((p1.x, p1.y), p2.x, sy, (dx, dy), false, c);
        } else {
            let (p1,p2) = if p1.y > p2.y { (p2,p1) } else { (p1,p2) };
            let sx = if p2.x > p1.x { 1 } else { -1 };
            self.bresenham_walk((p1.y, p1.x), p2.y, sx, (dy, dx), true, c);
        }
    }

    /// Step the major axis from `start.0` to `end`, moving the minor axis
    ///   by `step` each time the error passes the major delta
    ///
    /// Major steps before or past the bitmap plot nothing, so they are not
    ///   walked; the error and minor position at the first visible step are
    ///   solved directly. Deltas and error are kept in i128 so any i64 end
    ///   points work.
    fn bresenham_walk(&mut self, start: (i64,i64), end: i64, step: i64,
                      deltas: (u64,u64), steep: bool, c: Color) {
        let (a1, b1) = start;
        let limit = if steep { self.height() } else { self.width() };
        let last = i64::try_from(limit).unwrap_or(i64::MAX) - 1;
        let (lo, hi) = (a1.max(0), end.min(last));
        if lo > hi {
            return;
        }
        let (d_major, d_minor) = (i128::from(deltas.0), i128::from(deltas.1));

        // After k steps: error = 2*k*d_minor - 2*d_major*m, in (-d_major, d_major]
        let k = (i128::from(lo) - i128::from(a1)) as u128;
        let (mut m, mut error) = if k == 0 {
            (0, 0)
        } else {
            let t = k * deltas.1 as u128;
            let q = (t / deltas.0 as u128) as i128;
            let r = (t % deltas.0 as u128) as i128;
            if 2 * r > d_major { (q + 1, 2 * (r - d_major)) } else { (q, 2 * r) }
        };
        let mut b = i128::from(b1) + i128::from(step) * m;
        for a in lo ..= hi {
            // b lies between the two end points, so it fits an i64
            let p = if steep { Point::new(b as i64, a) } else { Point::new(a, b as i64) };
            self.put_pixel(p, c);
            error += 2 * d_minor;
            if error > d_major {
                error -= 2 * d_major;
                m += 1;
                b += i128::from(step);
            }
        }
        trace!("bresenham walked {} steps, {} minor", hi - lo + 1, m);
    }

    fn line_aa(&mut self, p1: Point, p2: Point, c: Color) {
        let steep = p1.x.abs_diff(p2.x) < p1.y.abs_diff(p2.y);
        let (a1,b1,a2,b2) = if steep { (p1.y,p1.x,p2.y,p2.x) } else { (p1.x,p1.y,p2.x,p2.y) };
        let (a1,b1,a2,b2) = if a2 < a1 { (a2,b2,a1,b1) } else { (a1,b1,a2,b2) };
        let (x1,y1,x2,y2) = (a1 as f64, b1 as f64, a2 as f64, b2 as f64);
        let dx = x2-x1;
        let dy = y2-y1;
        let gradient = if dx == 0.0 { 1.0 } else { dy/dx };

        // Only columns inside the bitmap can be drawn
        let limit = if steep { self.height() } else { self.width() };
        let last = i64::try_from(limit).unwrap_or(i64::MAX) - 1;
        let (xs, xe) = (a1.max(0), a2.min(last));

        // End points sit on pixel centers, so they get full coverage
        for xp in xs ..= xe {
            let intery = y1 + gradient * (xp as f64 - x1);
            let yp = ipart(intery) as i64;
            let (q0,q1) = if steep {
                (Point::new(yp,xp), Point::new(yp.saturating_add(1),xp))
            } else {
                (Point::new(xp,yp), Point::new(xp,yp.saturating_add(1)))
            };
            self.blend_pix(q0, c, rfpart(intery));
            self.blend_pix(q1, c, fpart(intery));
        }
    }

    /// Composite `c` with its alpha scaled by `cover` onto the pixel at `p`
    ///
    /// Pixels outside of the bitmap and zero coverage are ignored
    fn blend_pix(&mut self, p: Point, c: Color, cover: f64) {
        let c = c.with_cover(cover);
        if c.a == 0 {
            return;
        }
        if let Ok(old) = self.get_pixel(p) {
            self.put_pixel(p, composite_color(c, old));
        }
    }
}

/// Compute fractional part of an f64 number
fn fpart(x: f64) -> f64 {
    x - x.floor()
}
/// Compute 1.0 - fractional part of an f64 number (remainder)
fn rfpart(x: f64) -> f64 {
    1.0 - fpart(x)
}
/// Compute integral part of an f64 number
fn ipart(x: f64) -> f64 {
    x.floor()
}
