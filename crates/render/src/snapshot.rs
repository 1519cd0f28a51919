//! PNG output for RGBA8 buffers.
//!
//! This module is feature-gated behind `png` (default on) so that callers
//! drawing to their own surface can depend on this crate without pulling in
//! the `image` crate. Buffer construction lives in [`crate::pixel`].

use crate::pixel::{palette_to_rgba, plane_to_rgba};
use crate::Plane;
use std::path::Path;
use tonal_core::error::ColorError;
use tonal_core::palette::ColorPalette;

/// Writes an RGBA8 buffer as a PNG image.
///
/// Returns `ColorError::InvalidDimensions` if the dimensions overflow `u32`, or
/// `ColorError::Io` on a size mismatch or write failure.
pub fn write_png(
    rgba: Vec<u8>,
    width: usize,
    height: usize,
    path: &Path,
) -> Result<(), ColorError> {
    let too_large = ColorError::InvalidDimensions {
        width,
        height,
        reason: "image size overflows u32",
    };
    let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(too_large);
    };
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| ColorError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| ColorError::Io(e.to_string()))
}

/// Renders a plane and writes it as a PNG.
pub fn write_plane_png(plane: &Plane, path: &Path) -> Result<(), ColorError> {
    write_png(plane_to_rgba(plane), plane.width(), plane.height(), path)
}

/// Renders a palette swatch strip and writes it as a PNG.
pub fn write_palette_png(
    palette: &ColorPalette,
    swatch_width: usize,
    height: usize,
    path: &Path,
) -> Result<(), ColorError> {
    let (rgba, width) = palette_to_rgba(palette, swatch_width, height);
    write_png(rgba, width, height, path)
}
