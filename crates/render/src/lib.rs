#![deny(unsafe_code)]
//! Rasterization of OKLCh color planes and palette swatches.
//!
//! A [`Plane`] is the picker surface: hue runs left to right over
//! [0, 360), chroma runs from `max_chroma` at the top down to 0, and
//! lightness is fixed. Pixels whose color falls outside sRGB are drawn as a
//! checkerboard by [`pixel::plane_to_rgba`].

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

use tonal_core::color::{oklch_to_rgb, Conversion, OkLch, MAX_CHROMA};
use tonal_core::error::ColorError;

/// Default edge length of a picker plane in pixels.
pub const DEFAULT_PLANE_SIZE: usize = 300;

/// A chroma × hue slice of OKLCh at one lightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    width: usize,
    height: usize,
    lightness: f64,
    max_chroma: f64,
}

impl Plane {
    /// Creates a plane, checking dimensions and the lightness/chroma domain.
    pub fn new(
        width: usize,
        height: usize,
        lightness: f64,
        max_chroma: f64,
    ) -> Result<Self, ColorError> {
        if width == 0 || height == 0 {
            return Err(ColorError::InvalidDimensions {
                width,
                height,
                reason: "width and height must be non-zero",
            });
        }
        width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(ColorError::InvalidDimensions {
                width,
                height,
                reason: "RGBA buffer size overflows usize",
            })?;
        // Reuses the OKLCh domain checks for lightness and chroma.
        OkLch::new(lightness, max_chroma, 0.0)?;
        Ok(Self {
            width,
            height,
            lightness,
            max_chroma,
        })
    }

    /// A `size`×`size` plane spanning the full chroma range.
    pub fn square(size: usize, lightness: f64) -> Result<Self, ColorError> {
        Self::new(size, size, lightness, MAX_CHROMA)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    pub fn max_chroma(&self) -> f64 {
        self.max_chroma
    }

    /// The OKLCh color under a pixel position. Positions may be fractional.
    pub fn oklch_at(&self, x: f64, y: f64) -> OkLch {
        OkLch {
            l: self.lightness,
            c: (1.0 - y / self.height as f64) * self.max_chroma,
            h: x / self.width as f64 * 360.0,
        }
    }

    /// Converts the color under a pixel.
    #[inline]
    pub fn color_at(&self, x: usize, y: usize) -> Conversion {
        let c = self.oklch_at(x as f64, y as f64);
        oklch_to_rgb(c.l, c.c, c.h)
    }

    /// Picks the color under a pointer position, clamped to the plane, with
    /// chroma and hue rounded to four decimals.
    pub fn pick(&self, x: f64, y: f64) -> OkLch {
        let x = x.clamp(0.0, self.width as f64);
        let y = y.clamp(0.0, self.height as f64);
        let raw = self.oklch_at(x, y);
        OkLch {
            l: raw.l,
            c: round4(raw.c),
            h: round4(raw.h).rem_euclid(360.0),
        }
    }

    /// Pixel position of a color's chroma and hue, if it lies on the plane.
    pub fn position_of(&self, color: OkLch) -> Option<(f64, f64)> {
        if !(0.0..=self.max_chroma).contains(&color.c) || self.max_chroma == 0.0 {
            return None;
        }
        let x = color.h.rem_euclid(360.0) / 360.0 * self.width as f64;
        let y = (1.0 - color.c / self.max_chroma) * self.height as f64;
        Some((x, y))
    }
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(
            Plane::new(0, 10, 0.5, 0.4),
            Err(ColorError::InvalidDimensions { width: 0, height: 10, .. })
        ));
        let err = Plane::new(10, 0, 0.5, 0.4).unwrap_err();
        assert!(err.to_string().contains("10x0"), "got: {err}");
        assert!(!err.to_string().contains("palette"), "got: {err}");
    }

    #[test]
    fn new_rejects_overflowing_dimensions() {
        assert!(matches!(
            Plane::new(usize::MAX, 2, 0.5, 0.4),
            Err(ColorError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn new_rejects_out_of_domain_lightness_and_chroma() {
        assert!(Plane::new(10, 10, 1.5, 0.4).is_err());
        assert!(Plane::new(10, 10, 0.5, 0.5).is_err());
        assert!(Plane::new(10, 10, 0.5, -0.1).is_err());
    }

    #[test]
    fn top_left_is_max_chroma_hue_zero() {
        let plane = Plane::square(300, 0.7).unwrap();
        let c = plane.oklch_at(0.0, 0.0);
        assert_eq!(c.l, 0.7);
        assert_eq!(c.c, MAX_CHROMA);
        assert_eq!(c.h, 0.0);
    }

    #[test]
    fn bottom_row_is_achromatic_and_in_gamut() {
        let plane = Plane::square(100, 0.6).unwrap();
        let bottom = plane.oklch_at(50.0, 100.0);
        assert!(bottom.c.abs() < 1e-12);
        assert!(plane.color_at(99, 99).valid);
    }

    #[test]
    fn pick_rounds_to_four_decimals() {
        let plane = Plane::square(300, 0.9).unwrap();
        let picked = plane.pick(100.0, 100.0);
        assert_eq!(picked.l, 0.9);
        assert_eq!(picked.h, 120.0);
        assert!((picked.c - 0.2667).abs() < 1e-12, "c: {}", picked.c);
    }

    #[test]
    fn pick_clamps_outside_positions() {
        let plane = Plane::square(300, 0.5).unwrap();
        let picked = plane.pick(-20.0, 500.0);
        assert_eq!(picked.h, 0.0);
        assert_eq!(picked.c, 0.0);
        let picked = plane.pick(300.0, 0.0);
        assert_eq!(picked.h, 0.0, "full width wraps to hue 0");
    }

    #[test]
    fn position_of_inverts_oklch_at() {
        let plane = Plane::square(200, 0.5).unwrap();
        let color = plane.oklch_at(50.0, 80.0);
        let (x, y) = plane.position_of(color).unwrap();
        assert!((x - 50.0).abs() < 1e-9 && (y - 80.0).abs() < 1e-9, "({x}, {y})");
        assert!(plane
            .position_of(OkLch { l: 0.5, c: 0.45, h: 0.0 })
            .is_none());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pick_stays_in_domain(
                x in -50.0f64..400.0,
                y in -50.0f64..400.0,
                l in 0.0f64..=1.0,
            ) {
                let plane = Plane::square(300, l).unwrap();
                let picked = plane.pick(x, y);
                prop_assert!((0.0..=MAX_CHROMA).contains(&picked.c), "c: {}", picked.c);
                prop_assert!((0.0..360.0).contains(&picked.h), "h: {}", picked.h);
                prop_assert_eq!(picked.l, l);
            }

            #[test]
            fn zero_chroma_row_is_always_in_gamut(x in 0usize..64, l in 0.0f64..=0.999) {
                let plane = Plane::new(64, 64, l, 0.0).unwrap();
                prop_assert!(plane.color_at(x, 63).valid);
            }
        }
    }
}
