//! Colors

/// Convert an f64 [0,255] component to a u8 [0,255] component
///
/// Values are rounded to the nearest integer, then clamped
///
///     use pixdraw::cu8;
///
///     assert_eq!(cu8(127.5), 128);
///     assert_eq!(cu8(-4.0), 0);
///     assert_eq!(cu8(300.0), 255);
///
pub fn cu8(v: f64) -> u8 {
    let v = v.round();
    if v <= 0.0 {
        0
    } else if v >= 255.0 {
        255
    } else {
        v as u8
    }
}

/// Fully transparent black (0,0,0,0)
///
/// Used when clearing regions of a [Bitmap]
///
/// [Bitmap]: ../buffer/struct.Bitmap.html
pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };

/// Color as Red, Green, Blue, and Alpha
///
/// Channels are stored straight (not pre-multiplied)
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Color {
    /// White Color (255,255,255,255)
    pub const fn white() -> Self {
        rgb(255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub const fn black() -> Self {
        rgb(0,0,0)
    }
    /// Channels in R,G,B,A order
    pub fn channels(&self) -> [u8;4] {
        [self.r, self.g, self.b, self.a]
    }
    /// Build a color from four bytes in R,G,B,A order
    pub(crate) fn from_slice(p: &[u8]) -> Self {
        rgba(p[0], p[1], p[2], p[3])
    }
    /// Alpha as a value in [0,1]
    pub fn alpha(&self) -> f64 {
        f64::from(self.a) / 255.0
    }
    /// Same color with alpha scaled by `cover` in [0,1]
    pub fn with_cover(self, cover: f64) -> Self {
        Color { a: cu8(f64::from(self.a) * cover), ..self }
    }
}

/// Opaque color, alpha is 255
///
///     use pixdraw::{rgb, Color};
///
///     assert_eq!(rgb(10,20,30), Color { r: 10, g: 20, b: 30, a: 255 });
///
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color { r, g, b, a: 255 }
}

/// Color with an explicit alpha
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    Color { r, g, b, a }
}

impl From<[u8;4]> for Color {
    fn from(c: [u8;4]) -> Color {
        rgba(c[0], c[1], c[2], c[3])
    }
}
impl From<Color> for [u8;4] {
    fn from(c: Color) -> [u8;4] {
        c.channels()
    }
}
