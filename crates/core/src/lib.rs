#![deny(unsafe_code)]
//! Core color math for tonal.
//!
//! Provides the OKLCh → sRGB transform with out-of-gamut detection
//! (`color`), the sRGB transfer function (`gamma`), the `#rrggbb` codec
//! (`hex`), WCAG contrast (`contrast`), tonal palette generation
//! (`palette`), and serializable palette requests (`request`).
//!
//! Every function is pure and synchronous.

pub mod color;
pub mod contrast;
pub mod error;
pub mod gamma;
pub mod hex;
pub mod palette;
pub mod request;

pub use color::{oklch_to_rgb, rgb_to_oklch, Conversion, OkLab, OkLch, Rgb, MAX_CHROMA};
pub use contrast::{classify, contrast_ratio, relative_luminance, Compliance, ContrastResult};
pub use error::ColorError;
pub use hex::{hex_to_rgb, rgb_to_hex};
pub use palette::{
    generate_palette, hex_to_oklch_approx, lightness_scale, ColorPalette, ColorVariant,
};
pub use request::{PaletteFile, PaletteRequest};
