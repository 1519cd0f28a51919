//! WCAG 2.x relative luminance and contrast ratio.
//!
//! Thresholds are the normal-text levels: AA at 4.5:1, AAA at 7:1.

use crate::color::Rgb;
use crate::gamma::srgb_to_linear;
use serde::{Deserialize, Serialize};

/// Minimum ratio for WCAG AA, normal text.
pub const AA_THRESHOLD: f64 = 4.5;

/// Minimum ratio for WCAG AAA, normal text.
pub const AAA_THRESHOLD: f64 = 7.0;

/// AA/AAA pass flags for one contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compliance {
    pub aa: bool,
    pub aaa: bool,
}

/// Contrast of one color against pure white and pure black.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    pub white: f64,
    pub black: f64,
    pub aa_white: bool,
    pub aaa_white: bool,
    pub aa_black: bool,
    pub aaa_black: bool,
}

impl ContrastResult {
    /// Measures `rgb` against [`Rgb::WHITE`] and [`Rgb::BLACK`].
    pub fn for_color(rgb: Rgb) -> Self {
        let white = contrast_ratio(rgb, Rgb::WHITE);
        let black = contrast_ratio(rgb, Rgb::BLACK);
        let on_white = classify(white);
        let on_black = classify(black);
        Self {
            white,
            black,
            aa_white: on_white.aa,
            aaa_white: on_white.aaa,
            aa_black: on_black.aa,
            aaa_black: on_black.aaa,
        }
    }

    /// True if either white or black text reaches AA.
    pub fn any_aa(&self) -> bool {
        self.aa_white || self.aa_black
    }

    /// True if either white or black text reaches AAA.
    pub fn any_aaa(&self) -> bool {
        self.aaa_white || self.aaa_black
    }
}

/// Relative luminance per WCAG: `0.2126 R + 0.7152 G + 0.0722 B` on
/// linearized channels. Returns a value in [0, 1].
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.to_unit().map(srgb_to_linear);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG contrast ratio, `(lighter + 0.05) / (darker + 0.05)`.
///
/// Symmetric in its arguments; always in [1, 21].
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Classifies a ratio against the AA and AAA normal-text thresholds.
pub fn classify(ratio: f64) -> Compliance {
    Compliance {
        aa: ratio >= AA_THRESHOLD,
        aaa: ratio >= AAA_THRESHOLD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Rgb {
        Rgb::from_hex(s).unwrap()
    }

    #[test]
    fn black_and_white_luminance() {
        assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
        assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(Rgb::WHITE, Rgb::BLACK);
        assert!((ratio - 21.0).abs() < 1e-2, "got {ratio}");
    }

    #[test]
    fn same_color_is_1() {
        let c = hex("#3b82f6");
        assert_eq!(contrast_ratio(c, c), 1.0);
    }

    #[test]
    fn gray_on_white_just_passes_aa() {
        let ratio = contrast_ratio(hex("#767676"), Rgb::WHITE);
        assert!((ratio - 4.54).abs() < 0.01, "got {ratio}");
        assert!(classify(ratio).aa);
    }

    #[test]
    fn red_on_white() {
        let ratio = contrast_ratio(hex("#ff0000"), Rgb::WHITE);
        assert!((ratio - 3.99).abs() < 0.01, "got {ratio}");
    }

    #[test]
    fn slate_on_white() {
        let ratio = contrast_ratio(hex("#1e293b"), Rgb::WHITE);
        assert!((ratio - 14.62).abs() < 0.1, "got {ratio}");
    }

    #[test]
    fn classify_at_thresholds() {
        assert_eq!(classify(4.5), Compliance { aa: true, aaa: false });
        assert_eq!(classify(7.0), Compliance { aa: true, aaa: true });
        assert_eq!(classify(3.0), Compliance { aa: false, aaa: false });
        assert_eq!(classify(4.499), Compliance { aa: false, aaa: false });
    }

    #[test]
    fn contrast_result_for_white_and_black() {
        let on_white = ContrastResult::for_color(Rgb::WHITE);
        assert_eq!(on_white.white, 1.0);
        assert!((on_white.black - 21.0).abs() < 1e-2);
        assert!(!on_white.aa_white && !on_white.aaa_white);
        assert!(on_white.aa_black && on_white.aaa_black);
        assert!(on_white.any_aaa());

        let on_black = ContrastResult::for_color(Rgb::BLACK);
        assert!(on_black.aa_white && on_black.aaa_white);
        assert!(!on_black.aa_black);
    }

    #[test]
    fn mid_gray_passes_neither_side_at_aaa() {
        let result = ContrastResult::for_color(hex("#777777"));
        assert!(!result.any_aaa(), "{result:?}");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn rgb() -> impl Strategy<Value = Rgb> {
            (0u8..=255, 0u8..=255, 0u8..=255).prop_map(|(r, g, b)| Rgb::new(r, g, b))
        }

        proptest! {
            #[test]
            fn ratio_is_symmetric_and_bounded(a in rgb(), b in rgb()) {
                let ab = contrast_ratio(a, b);
                let ba = contrast_ratio(b, a);
                prop_assert_eq!(ab, ba);
                prop_assert!((1.0..=21.0 + 1e-9).contains(&ab), "ratio {ab}");
            }

            #[test]
            fn ratio_with_itself_is_one(a in rgb()) {
                prop_assert_eq!(contrast_ratio(a, a), 1.0);
            }

            #[test]
            fn luminance_in_unit_interval(a in rgb()) {
                let l = relative_luminance(a);
                prop_assert!((0.0..=1.0 + 1e-12).contains(&l), "luminance {l}");
            }
        }
    }
}
