use crate::color::{cu8, Color, TRANSPARENT};

/// Blend a single component of `new` over `old`
///
/// `a1` and `a2` are the alpha values of `new` and `old` in [0,1]
fn composite1(n1: f64, n2: f64, a1: f64, a2: f64) -> f64 {
    (n1 * a1 + n2 * a2 * (1.0 - a1)) / (a1 + a2 * (1.0 - a1))
}

/// Composite the color `new` over `old` (source-over)
///
/// Each component, alpha included, is computed by:
///
///   out = (c1 * a1 + c2 * a2 * (1 - a1)) / (a1 + a2 * (1 - a1))
///
/// with `a1` and `a2` the alpha values of `new` and `old` scaled to [0,1],
///   then rounded and clamped to [0,255].
///
/// If both colors are fully transparent the denominator is zero and the
///   result is [TRANSPARENT].
///
///     use pixdraw::{composite_color, rgb, rgba, TRANSPARENT};
///
///     let red = rgb(255,0,0);
///     assert_eq!(composite_color(TRANSPARENT, red), red);
///     assert_eq!(composite_color(red, rgb(0,0,255)), red);
///     assert_eq!(composite_color(TRANSPARENT, TRANSPARENT), TRANSPARENT);
///
/// see [Alpha Compositing](https://en.wikipedia.org/wiki/Alpha_compositing)
///
/// [TRANSPARENT]: ../color/constant.TRANSPARENT.html
pub fn composite_color(new: Color, old: Color) -> Color {
    let (a1, a2) = (new.alpha(), old.alpha());
    if a1 + a2 * (1.0 - a1) == 0.0 {
        return TRANSPARENT;
    }
    let n = new.channels();
    let o = old.channels();
    let mut out = [0u8; 4];
    for i in 0 .. 4 {
        out[i] = cu8(composite1(f64::from(n[i]), f64::from(o[i]), a1, a2));
    }
    Color::from(out)
}
