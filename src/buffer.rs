//! Bitmap storage

use crate::error::{Error, Result};
use crate::PixelData;
use crate::Point;

use log::debug;

/// Bytes per pixel, one per R,G,B,A component
pub const BPP: usize = 4;

/// RGBA Bitmap
///
/// Data is stored as row-major order (C-format), top to bottom, left to right,
///   with components in R,G,B,A order. The buffer is allocated once and
///   never resized, so `data.len() == width * height * 4` always holds.
///
/// The bitmap has no internal locking; every mutation goes through `&mut self`.
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Bitmap {
    /// Pixel / Component level data of Image
    data: Vec<u8>,
    /// Image Width in pixels
    width: usize,
    /// Image Height in pixels
    height: usize,
}

impl Bitmap {
    /// Create a new bitmap of width * height pixels
    ///
    /// Every pixel starts as fully transparent black
    ///
    ///     use pixdraw::Bitmap;
    ///
    ///     let bitmap = Bitmap::new(3, 2).unwrap();
    ///     assert_eq!(bitmap.len(), 3 * 2 * 4);
    ///     assert!(bitmap.as_bytes().iter().all(|&v| v == 0));
    ///
    ///     assert!(Bitmap::new(0, 2).is_err());
    ///
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let n = width.checked_mul(height)
            .and_then(|n| n.checked_mul(BPP))
            .filter(|&n| n > 0)
            .ok_or(Error::InvalidDimension { width, height })?;
        debug!("bitmap {}x{} ({} bytes)", width, height, n);
        Ok(Bitmap { width, height, data: vec![0u8; n] })
    }
    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Size of underlying buffer in bytes; width * height * 4
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Always false, a bitmap has at least one pixel
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Raw component data
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
    /// Mutable raw component data
    ///
    /// The slice has a fixed length, the buffer cannot be resized through it
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
    /// Consume the bitmap, returning the component data
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
    /// Check if `p` lies within `[0,width) x [0,height)`
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u64) < self.width as u64 && (p.y as u64) < self.height as u64
    }
    /// Byte offset of the pixel at `p`, None if outside of the bitmap
    pub(crate) fn offset(&self, p: Point) -> Option<usize> {
        if ! self.contains(p) {
            return None;
        }
        Some((p.x as usize + p.y as usize * self.width) * BPP)
    }
}

impl PixelData for Bitmap {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn pixeldata(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bitmap() {
        let b = Bitmap::new(10,5).unwrap();
        assert_eq!(b.len(), 200);
        assert_eq!(b.width(), 10);
        assert_eq!(b.height(), 5);
        assert!(!b.is_empty());
        assert!(b.as_bytes().iter().all(|&v| v == 0));
    }

    #[test]
    fn invalid_dimensions() {
        for &(w,h) in [(0,0),(0,1),(1,0),(usize::MAX,2)].iter() {
            match Bitmap::new(w,h) {
                Err(Error::InvalidDimension { width, height }) => {
                    assert_eq!((width,height), (w,h));
                }
                other => panic!("expected InvalidDimension, got {:?}", other),
            }
        }
    }

    #[test]
    fn offsets() {
        let b = Bitmap::new(3,2).unwrap();
        assert_eq!(b.offset(Point::new(0,0)), Some(0));
        assert_eq!(b.offset(Point::new(2,0)), Some(8));
        assert_eq!(b.offset(Point::new(0,1)), Some(12));
        assert_eq!(b.offset(Point::new(2,1)), Some(20));
        assert_eq!(b.offset(Point::new(3,0)), None);
        assert_eq!(b.offset(Point::new(0,2)), None);
        assert_eq!(b.offset(Point::new(-1,0)), None);
        assert_eq!(b.offset(Point::new(0,-1)), None);
    }

    #[test]
    fn data_mut_keeps_length() {
        let mut b = Bitmap::new(4,4).unwrap();
        b.data_mut().iter_mut().for_each(|v| *v = 100);
        assert_eq!(b.len(), 64);
        assert_eq!(b.into_raw(), vec![100u8; 64]);
    }
}
