//! Writing of PNG (Portable Network Graphics) files
//!
//! Any [PixelData] source with RGBA8 row-major data can be encoded
//!
//! [PixelData]: ../trait.PixelData.html
use std::convert::TryFrom;
use std::io::Write;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, ImageFormat};
use log::debug;

use crate::error::{Error, Result};
use crate::PixelData;

fn dimensions<T: PixelData>(pix: &T) -> Result<(u32,u32)> {
    let (width, height) = (pix.width(), pix.height());
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w,h)),
        _ => Err(Error::InvalidDimension { width, height }),
    }
}

/// Encode `pix` as a PNG image into `out`
///
///     use pixdraw::{Bitmap, rgb};
///
///     let mut pix = Bitmap::new(4,4).unwrap();
///     pix.fill(rgb(255,0,0));
///     let mut buf = Vec::new();
///     pixdraw::png::write_png(&pix, &mut buf).unwrap();
///     assert_eq!(&buf[1..4], b"PNG");
///
pub fn write_png<T: PixelData, W: Write>(pix: &T, out: W) -> Result<()> {
    let (w, h) = dimensions(pix)?;
    debug!("encoding png {}x{}", w, h);
    PngEncoder::new(out).write_image(pix.pixeldata(), w, h, ColorType::Rgba8)?;
    Ok(())
}

/// Write `pix` as a PNG image to `filename`
pub fn write_file<T: PixelData, P: AsRef<Path>>(pix: &T, filename: P) -> Result<()> {
    let (w, h) = dimensions(pix)?;
    debug!("writing png {}x{} to {}", w, h, filename.as_ref().display());
    image::save_buffer_with_format(filename, pix.pixeldata(), w, h,
                                   ColorType::Rgba8, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rgba, Bitmap, Point};

    #[test]
    fn png_round_trip_in_memory() {
        let mut pix = Bitmap::new(3,2).unwrap();
        pix.put_pixel(Point::new(2,1), rgba(10,20,30,40));
        let mut buf = Vec::new();
        write_png(&pix, &mut buf).unwrap();
        assert_eq!(&buf[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);

        let img = image::load_from_memory_with_format(&buf, ImageFormat::Png).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (3,2));
        assert_eq!(img.into_raw(), pix.into_raw());
    }

    struct Huge;
    impl PixelData for Huge {
        fn width(&self) -> usize { usize::MAX }
        fn height(&self) -> usize { 1 }
        fn pixeldata(&self) -> &[u8] { &[] }
    }

    #[test]
    fn too_wide_for_png() {
        if usize::MAX as u64 <= u64::from(u32::MAX) {
            return;
        }
        let r = write_png(&Huge, Vec::new());
        assert!(matches!(r, Err(Error::InvalidDimension { .. })));
    }
}
