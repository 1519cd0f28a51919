//! sRGB transfer function.
//!
//! Both directions work on a single normalized channel. Scaling to and from
//! the 0–255 byte range is left to the caller.

/// Linear-segment threshold on the encoding side.
const LINEAR_THRESHOLD: f64 = 0.0031308;

/// Linear-segment threshold on the decoding side (WCAG 2.x value).
const SRGB_THRESHOLD: f64 = 0.03928;

/// Applies sRGB gamma to a linear channel.
///
/// Negative input falls in the linear segment and stays negative, so a
/// caller checking the encoded range can still detect it.
#[inline]
pub fn linear_to_srgb(channel: f64) -> f64 {
    if channel <= LINEAR_THRESHOLD {
        12.92 * channel
    } else {
        1.055 * channel.powf(1.0 / 2.4) - 0.055
    }
}

/// Removes sRGB gamma from an encoded channel in [0, 1].
#[inline]
pub fn srgb_to_linear(channel: f64) -> f64 {
    if channel <= SRGB_THRESHOLD {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}
