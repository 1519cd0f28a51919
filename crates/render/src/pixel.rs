//! Pure-computation RGBA8 buffers from a [`Plane`] or a [`ColorPalette`].
//!
//! This module is always available (no feature gate) so that callers which
//! draw to their own surface can share the same conversion as the PNG path.

use crate::Plane;
use tonal_core::palette::ColorPalette;

/// Edge length of one checkerboard cell marking out-of-gamut pixels.
pub const CHECKER_CELL: usize = 10;

/// Checkerboard grey for even cells.
pub const CHECKER_LIGHT: u8 = 200;

/// Checkerboard grey for odd cells.
pub const CHECKER_DARK: u8 = 150;

/// Grey used at (x, y) for an unrepresentable color.
pub fn checker_shade(x: usize, y: usize) -> u8 {
    if (x / CHECKER_CELL + y / CHECKER_CELL) % 2 == 0 {
        CHECKER_LIGHT
    } else {
        CHECKER_DARK
    }
}

/// Renders the plane to an RGBA8 buffer of `width * height * 4` bytes.
///
/// In-gamut pixels carry their color; out-of-gamut pixels get the
/// checkerboard. Alpha is always 255.
pub fn plane_to_rgba(plane: &Plane) -> Vec<u8> {
    let (width, height) = (plane.width(), plane.height());
    let mut buf = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let px = match plane.color_at(x, y).rgb() {
                Some(rgb) => [rgb.r, rgb.g, rgb.b, 255],
                None => {
                    let shade = checker_shade(x, y);
                    [shade, shade, shade, 255]
                }
            };
            buf.extend_from_slice(&px);
        }
    }
    buf
}

/// Fraction of plane pixels that are inside sRGB.
pub fn gamut_coverage(plane: &Plane) -> f64 {
    let total = plane.width() * plane.height();
    let valid = (0..plane.height())
        .flat_map(|y| (0..plane.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| plane.color_at(x, y).valid)
        .count();
    valid as f64 / total as f64
}

/// Renders palette variants as a horizontal strip of swatches, each
/// `swatch_width` pixels wide and `height` tall.
///
/// Returns the buffer and its width in pixels.
pub fn palette_to_rgba(
    palette: &ColorPalette,
    swatch_width: usize,
    height: usize,
) -> (Vec<u8>, usize) {
    let width = swatch_width * palette.len();
    let row: Vec<u8> = palette
        .iter()
        .flat_map(|variant| {
            let rgb = variant.rgb();
            std::iter::repeat([rgb.r, rgb.g, rgb.b, 255u8]).take(swatch_width)
        })
        .flatten()
        .collect();
    let mut buf = Vec::with_capacity(row.len() * height);
    for _ in 0..height {
        buf.extend_from_slice(&row);
    }
    (buf, width)
}
