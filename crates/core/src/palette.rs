//! Tonal palettes: one base hue and chroma sampled across an eased
//! lightness scale.
//!
//! The scale uses cubic ease-in-out, so steps bunch up near the dark and
//! light ends and spread out through the middle. Each variant carries its
//! hex value and WCAG contrast against white and black.

use crate::color::{oklch_to_rgb, oklch_to_srgb_channels, OkLch, Rgb};
use crate::contrast::ContrastResult;
use crate::error::ColorError;
use crate::hex::hex_to_rgb;
use log::debug;
use serde::Serialize;

/// Darkest lightness produced by [`lightness_scale`].
pub const MIN_LIGHTNESS: f64 = 0.05;

/// Lightest lightness produced by [`lightness_scale`].
pub const MAX_LIGHTNESS: f64 = 0.95;

/// Chroma returned by [`hex_to_oklch_approx`] for every input.
pub const APPROX_CHROMA: f64 = 0.4;

/// Hue returned by [`hex_to_oklch_approx`] for every input.
pub const APPROX_HUE: f64 = 180.0;

/// One step of a tonal palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorVariant {
    /// `"{palette}-{step}"`, e.g. `primary-300`.
    pub name: String,
    pub oklch: OkLch,
    /// Lowercase `#rrggbb`.
    pub hex: String,
    pub contrast: ContrastResult,
    /// False when the step lies outside sRGB. `hex` and `contrast` then
    /// describe the per-channel clamped approximation.
    pub in_gamut: bool,
    #[serde(skip)]
    rgb: Rgb,
}

impl ColorVariant {
    fn build(palette_name: &str, index: usize, oklch: OkLch) -> Self {
        let conversion = oklch_to_rgb(oklch.l, oklch.c, oklch.h);
        let name = format!("{palette_name}-{}", step_label(index));
        let rgb = match conversion.rgb() {
            Some(rgb) => rgb,
            None => {
                let clamped =
                    Rgb::from_channels_clamped(oklch_to_srgb_channels(oklch.l, oklch.c, oklch.h));
                debug!("{name}: l={:.4} is outside sRGB, using clamped {clamped}", oklch.l);
                clamped
            }
        };
        Self {
            name,
            oklch,
            hex: rgb.to_hex(),
            contrast: ContrastResult::for_color(rgb),
            in_gamut: conversion.valid,
            rgb,
        }
    }

    /// The displayed color: exact when in gamut, clamped otherwise.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }
}

/// A named, ordered set of tonal variants generated from one base color.
///
/// Variants are produced as one batch by [`generate_palette`] and are never
/// edited individually; regenerate the palette instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorPalette {
    id: String,
    name: String,
    base_color: OkLch,
    variants: Vec<ColorVariant>,
}

impl ColorPalette {
    /// Replaces the generated id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_color(&self) -> OkLch {
        self.base_color
    }

    pub fn variants(&self) -> &[ColorVariant] {
        &self.variants
    }

    /// Looks up a variant by its label step (100, 200, ...).
    pub fn variant(&self, step: usize) -> Option<&ColorVariant> {
        if step == 0 || step % 100 != 0 {
            return None;
        }
        self.variants.get(step / 100 - 1)
    }

    /// Returns the number of variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns true if there are no variants. (Always false for generated palettes.)
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorVariant> {
        self.variants.iter()
    }
}

impl<'a> IntoIterator for &'a ColorPalette {
    type Item = &'a ColorVariant;
    type IntoIter = std::slice::Iter<'a, ColorVariant>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.iter()
    }
}

/// Cubic ease-in-out on [0, 1].
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Samples `step_count` lightness values from `MIN_LIGHTNESS` to
/// `MAX_LIGHTNESS` through [`ease_in_out_cubic`].
///
/// Returns `ColorError::InvalidStepCount` for fewer than two steps.
pub fn lightness_scale(step_count: usize) -> Result<Vec<f64>, ColorError> {
    if step_count < 2 {
        return Err(ColorError::InvalidStepCount(step_count));
    }
    let last = (step_count - 1) as f64;
    Ok((0..step_count)
        .map(|i| {
            let eased = ease_in_out_cubic(i as f64 / last);
            MIN_LIGHTNESS + (MAX_LIGHTNESS - MIN_LIGHTNESS) * eased
        })
        .collect())
}

/// Generates a tonal palette from `base`'s chroma and hue.
///
/// Variant `i` is named `"{name}-{(i + 1) * 100}"`. All inputs are checked
/// before any variant is built, so the result is either a complete palette
/// or an error. `base` goes through [`OkLch::normalized`], so its hue
/// wraps exactly as in [`OkLch::new`]; `base.c` must already be clamped to
/// `MAX_CHROMA`.
pub fn generate_palette(
    name: &str,
    base: OkLch,
    step_count: usize,
) -> Result<ColorPalette, ColorError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ColorError::InvalidPalette(
            "palette name must not be empty".to_string(),
        ));
    }
    let base = base.normalized()?;
    let scale = lightness_scale(step_count)?;

    let variants: Vec<ColorVariant> = scale
        .into_iter()
        .enumerate()
        .map(|(i, l)| {
            ColorVariant::build(
                name,
                i,
                OkLch {
                    l,
                    c: base.c,
                    h: base.h,
                },
            )
        })
        .collect();

    let out_of_gamut = variants.iter().filter(|v| !v.in_gamut).count();
    debug!(
        "generated palette {name:?}: {} steps, {out_of_gamut} outside sRGB",
        variants.len()
    );

    Ok(ColorPalette {
        id: slugify(name),
        name: name.to_string(),
        base_color: base,
        variants,
    })
}

/// Rough hex → OKLCh used to seed palettes from a picked color.
///
/// `l` is the Rec. 601 luma `(0.299 R + 0.587 G + 0.114 B) / 255`; chroma and
/// hue are always `APPROX_CHROMA` and `APPROX_HUE`. The input's hue and
/// saturation are discarded. Use [`crate::color::rgb_to_oklch`] for the exact
/// conversion.
pub fn hex_to_oklch_approx(hex: &str) -> Result<OkLch, ColorError> {
    let rgb = hex_to_rgb(hex)?;
    let l = (0.299 * f64::from(rgb.r) + 0.587 * f64::from(rgb.g) + 0.114 * f64::from(rgb.b))
        / 255.0;
    Ok(OkLch {
        l,
        c: APPROX_CHROMA,
        h: APPROX_HUE,
    })
}

fn step_label(index: usize) -> usize {
    (index + 1) * 100
}

/// Lowercase ASCII alphanumerics, everything else collapsed to single dashes.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let trimmed = slug.trim_end_matches('-');
    if trimmed.is_empty() {
        "palette".to_string()
    } else {
        trimmed.to_string()
    }
}
