extern crate pixdraw;

use pixdraw::{Bitmap, Error, Point, TRANSPARENT, rgb, rgba};

fn points(w: i64, h: i64) -> impl Iterator<Item = Point> {
    (0 .. h).flat_map(move |y| (0 .. w).map(move |x| Point::new(x,y)))
}

#[test_log::test]
fn t01_fresh_bitmap() {
    let pix = Bitmap::new(17,9).unwrap();
    for p in points(17,9) {
        assert_eq!(pix.get_pixel(p).unwrap(), TRANSPARENT);
    }
}

#[test_log::test]
fn t01_round_trip_every_pixel() {
    let mut pix = Bitmap::new(16,16).unwrap();
    for p in points(16,16) {
        let c = rgba(p.x as u8 * 16, p.y as u8 * 16, (p.x + p.y) as u8, 255 - p.x as u8);
        pix.put_pixel(p, c);
        assert_eq!(pix.get_pixel(p).unwrap(), c);
    }
    // Row-major, R,G,B,A
    let i = (3 + 2 * 16) * 4;
    assert_eq!(&pix.as_bytes()[i .. i+4], &[48, 32, 5, 252]);
}

#[test_log::test]
fn t01_border() {
    let mut pix = Bitmap::new(8,6).unwrap();
    let snapshot = pix.clone();
    let outside = [(-1,-1), (8,0), (0,6), (8,6), (-1,3), (3,-1), (100,100)];
    for &(x,y) in outside.iter() {
        let p = Point::new(x,y);
        pix.put_pixel(p, rgb(1,2,3));
        assert!(matches!(pix.get_pixel(p), Err(Error::OutOfBounds { .. })));
        assert!(pix.put_pixel_with_composition(p, rgb(1,2,3)).is_err());
    }
    assert_eq!(pix, snapshot);
}

#[test_log::test]
fn t01_clear() {
    let mut pix = Bitmap::new(10,10).unwrap();
    pix.fill(rgb(200,100,50));
    pix.clear_rect(Point::new(2,2), Point::new(4,4));
    let cleared = points(10,10).filter(|&p| pix.get_pixel(p).unwrap() == TRANSPARENT).count();
    assert_eq!(cleared, 9);

    pix.clear();
    for p in points(10,10) {
        assert_eq!(pix.get_pixel(p).unwrap(), TRANSPARENT);
    }
    assert_eq!(pix.len(), 400);
}

#[test_log::test]
fn t01_layered_composition() {
    let mut pix = Bitmap::new(1,1).unwrap();
    let p = Point::new(0,0);
    pix.put_pixel(p, rgb(255,255,255));
    // Opaque over anything replaces it
    pix.put_pixel_with_composition(p, rgb(0,0,0)).unwrap();
    assert_eq!(pix.get_pixel(p).unwrap(), rgb(0,0,0));
    // Transparent over anything leaves it
    pix.put_pixel_with_composition(p, TRANSPARENT).unwrap();
    assert_eq!(pix.get_pixel(p).unwrap(), rgb(0,0,0));
    // Transparent over transparent stays transparent
    pix.put_pixel(p, TRANSPARENT);
    pix.put_pixel_with_composition(p, TRANSPARENT).unwrap();
    assert_eq!(pix.get_pixel(p).unwrap(), TRANSPARENT);
}
