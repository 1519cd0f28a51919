//! Color types and the OKLCh → sRGB transform.
//!
//! Provides the perceptual types (`OkLch`, `OkLab`), the linear and 8-bit
//! display types (`LinearRgb`, `Rgb`), and pure conversion functions between
//! them. Everything uses `f64`.
//!
//! [`oklch_to_rgb`] is the single transform used by every caller. It reports
//! out-of-gamut input through [`Conversion::valid`] instead of clamping, so a
//! renderer can draw an "unrepresentable" marker rather than a wrong color.

use crate::error::ColorError;
use crate::gamma::{linear_to_srgb, srgb_to_linear};
use serde::{Deserialize, Serialize};

/// Practical sRGB-representable chroma ceiling, enforced at the boundary.
pub const MAX_CHROMA: f64 = 0.4;

/// OKLCh (cylindrical form of OKLab).
///
/// `l` in [0, 1], `c` in [0, `MAX_CHROMA`], `h` in degrees [0, 360).
/// Use [`OkLch::new`] to get those guarantees; the fields stay public so the
/// hot rendering path can build values without checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// OKLab perceptual color space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Linear RGB color (gamma-decoded), nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// 8-bit sRGB color.
///
/// Serializes as a hex string `"#rrggbb"`; see [`crate::hex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Result of [`oklch_to_rgb`].
///
/// When `valid` is false the source color lies outside the sRGB gamut and
/// `rgb` is black; it must not be shown as the color itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub rgb: Rgb,
    pub valid: bool,
}

impl Conversion {
    const INVALID: Conversion = Conversion {
        rgb: Rgb::BLACK,
        valid: false,
    };

    /// Returns the color if it is inside the gamut.
    pub fn rgb(self) -> Option<Rgb> {
        self.valid.then_some(self.rgb)
    }
}

impl OkLch {
    /// Creates a color after checking the domain.
    ///
    /// Fails fast on non-finite components, `l` outside [0, 1], and `c`
    /// outside [0, `MAX_CHROMA`]. Hue wraps into [0, 360) instead of failing.
    pub fn new(l: f64, c: f64, h: f64) -> Result<Self, ColorError> {
        if !l.is_finite() || !(0.0..=1.0).contains(&l) {
            return Err(ColorError::Domain {
                component: "lightness",
                value: l,
            });
        }
        if !c.is_finite() || !(0.0..=MAX_CHROMA).contains(&c) {
            return Err(ColorError::Domain {
                component: "chroma",
                value: c,
            });
        }
        if !h.is_finite() {
            return Err(ColorError::Domain {
                component: "hue",
                value: h,
            });
        }
        Ok(Self {
            l,
            c,
            h: normalize_hue(h),
        })
    }

    /// Re-checks an existing value through [`OkLch::new`], returning the
    /// copy with its hue wrapped.
    ///
    /// Values built from public fields or deserialized from JSON go through
    /// here so they follow the same domain policy as [`OkLch::new`].
    pub fn normalized(self) -> Result<Self, ColorError> {
        Self::new(self.l, self.c, self.h)
    }

    /// Returns a copy with chroma limited to `MAX_CHROMA`.
    pub fn clamp_chroma(self) -> Self {
        Self {
            c: self.c.min(MAX_CHROMA),
            ..self
        }
    }

    /// Converts through [`oklch_to_rgb`].
    pub fn to_rgb(self) -> Conversion {
        oklch_to_rgb(self.l, self.c, self.h)
    }
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Rounds and clamps 0–255 scale channels into bytes. NaN becomes 0.
    ///
    /// This is an explicit approximation; callers must keep the validity
    /// flag from [`oklch_to_rgb`] next to the result.
    pub fn from_channels_clamped(channels: [f64; 3]) -> Self {
        let [r, g, b] = channels.map(|v| {
            if v.is_nan() {
                0
            } else {
                v.round().clamp(0.0, 255.0) as u8
            }
        });
        Self { r, g, b }
    }

    /// Channels normalized to [0, 1].
    pub fn to_unit(self) -> [f64; 3] {
        [self.r, self.g, self.b].map(|v| f64::from(v) / 255.0)
    }
}

/// Converts OKLCh to OKLab.
#[inline]
pub fn oklch_to_oklab(c: OkLch) -> OkLab {
    let h_rad = c.h.to_radians();
    OkLab {
        l: c.l,
        a: c.c * h_rad.cos(),
        b: c.c * h_rad.sin(),
    }
}

/// Converts OKLab to OKLCh (cylindrical form).
///
/// NaN guard: if chroma is less than 1e-10, hue is set to 0.0 to avoid
/// indeterminate `atan2(0, 0)` results.
pub fn oklab_to_oklch(c: OkLab) -> OkLch {
    let ch = (c.a * c.a + c.b * c.b).sqrt();
    let h = if ch < 1e-10 {
        0.0
    } else {
        c.b.atan2(c.a).to_degrees().rem_euclid(360.0)
    };
    OkLch { l: c.l, c: ch, h }
}

/// Converts OKLab to linear RGB via the inverse OKLab matrix transform.
///
/// LMS' responses are floored at zero before cubing. Linear output is not
/// clamped; values outside [0, 1] mean the color is out of gamut.
#[inline]
pub fn oklab_to_linear(c: OkLab) -> LinearRgb {
    let l_ = (c.l + 0.3963377774 * c.a + 0.2158037573 * c.b).max(0.0);
    let m_ = (c.l - 0.1055613458 * c.a - 0.0638541728 * c.b).max(0.0);
    let s_ = (c.l - 0.0894841775 * c.a - 1.2914855480 * c.b).max(0.0);

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    LinearRgb {
        r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    }
}

/// Converts linear RGB to OKLab via the OKLab matrix transform.
pub fn linear_to_oklab(c: LinearRgb) -> OkLab {
    let l_ = 0.4122214708 * c.r + 0.5363325363 * c.g + 0.0514459929 * c.b;
    let m_ = 0.2119034982 * c.r + 0.6806995451 * c.g + 0.1073969566 * c.b;
    let s_ = 0.0883024619 * c.r + 0.2817188376 * c.g + 0.6299787005 * c.b;

    let l_c = l_.cbrt();
    let m_c = m_.cbrt();
    let s_c = s_.cbrt();

    OkLab {
        l: 0.2104542553 * l_c + 0.7936177850 * m_c - 0.0040720468 * s_c,
        a: 1.9779984951 * l_c - 2.4285922050 * m_c + 0.4505937099 * s_c,
        b: 0.0259040371 * l_c + 0.7827717662 * m_c - 0.8086757660 * s_c,
    }
}

/// Runs the OKLCh → sRGB pipeline and returns gamma-encoded channels on the
/// 0–255 scale, before any rounding or range check.
#[inline]
pub fn oklch_to_srgb_channels(l: f64, c: f64, h: f64) -> [f64; 3] {
    let lin = oklab_to_linear(oklch_to_oklab(OkLch { l, c, h }));
    [lin.r, lin.g, lin.b].map(|v| linear_to_srgb(v) * 255.0)
}

/// Converts OKLCh to 8-bit sRGB, flagging out-of-gamut input.
///
/// If any channel is NaN or outside [0, 255] before rounding, returns black
/// with `valid = false`. Allocation-free.
#[inline]
pub fn oklch_to_rgb(l: f64, c: f64, h: f64) -> Conversion {
    let channels = oklch_to_srgb_channels(l, c, h);
    if channels.iter().any(|v| !(0.0..=255.0).contains(v)) {
        return Conversion::INVALID;
    }
    Conversion {
        rgb: Rgb::from_channels_clamped(channels),
        valid: true,
    }
}

/// Exact inverse: 8-bit sRGB → linear → OKLab → OKLCh.
///
/// This is distinct from [`crate::palette::hex_to_oklch_approx`], which keeps
/// its fixed chroma and hue.
pub fn rgb_to_oklch(rgb: Rgb) -> OkLch {
    let [r, g, b] = rgb.to_unit().map(srgb_to_linear);
    oklab_to_oklch(linear_to_oklab(LinearRgb { r, g, b }))
}

/// Normalizes a hue angle to [0, 360).
pub(crate) fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
