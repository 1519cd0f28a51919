//! `#rrggbb` encoding of [`Rgb`].
//!
//! Encoding is always lowercase. Decoding is strict: exactly `#` followed by
//! six hex digits (either case). The round trip is exact since both sides
//! are 8-bit integers.

use crate::color::Rgb;
use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Formats a color as lowercase `#rrggbb`.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    let packed = (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
    format!("#{packed:06x}")
}

/// Parses `#rrggbb` into an [`Rgb`].
///
/// Returns `ColorError::Parse` unless the input is exactly seven characters:
/// `#` and six hex digits.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| ColorError::Parse(format!("{hex:?}: missing leading '#'")))?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::Parse(format!(
            "{hex:?}: expected '#' followed by 6 hex digits"
        )));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|e| ColorError::Parse(format!("{hex:?}: {e}")))
    };
    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

impl Rgb {
    /// Parses `#rrggbb`; see [`hex_to_rgb`].
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        hex_to_rgb(hex)
    }

    /// Formats as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex_to_rgb(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_hex_pads_with_zeros() {
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(1, 2, 3), "#010203");
        assert_eq!(rgb_to_hex(255, 255, 255), "#ffffff");
    }

    #[test]
    fn to_hex_is_lowercase() {
        assert_eq!(rgb_to_hex(0xAB, 0xCD, 0xEF), "#abcdef");
    }

    #[test]
    fn display_matches_to_hex() {
        let rgb = Rgb::new(0x80, 0x40, 0x20);
        assert_eq!(rgb.to_string(), rgb.to_hex());
        assert_eq!(rgb.to_string(), "#804020");
    }

    #[test]
    fn from_hex_parses_known_color() {
        assert_eq!(hex_to_rgb("#3b82f6").unwrap(), Rgb::new(0x3b, 0x82, 0xf6));
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        assert_eq!(
            hex_to_rgb("#FF00AA").unwrap(),
            hex_to_rgb("#ff00aa").unwrap()
        );
    }

    #[test]
    fn from_hex_rejects_malformed_input() {
        for bad in [
            "", "#", "ff00aa", "#fff", "#ff00ff00", "#gggggg", "#ff 0aa", " #ff00aa", "#+f00aa",
            "#ff00é",
        ] {
            assert!(
                matches!(hex_to_rgb(bad), Err(ColorError::Parse(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn from_str_and_from_hex_agree() {
        let a: Rgb = "#c0ffee".parse().unwrap();
        assert_eq!(a, Rgb::from_hex("#c0ffee").unwrap());
    }

    #[test]
    fn rgb_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 0)).unwrap();
        assert_eq!(json, "\"#ff0000\"");
    }

    #[test]
    fn rgb_deserialize_rejects_invalid_hex() {
        let result: Result<Rgb, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hex_round_trip_is_exact(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
                let hex = rgb_to_hex(r, g, b);
                prop_assert_eq!(hex.len(), 7);
                prop_assert!(hex.starts_with('#'));
                prop_assert_eq!(hex_to_rgb(&hex).unwrap(), Rgb::new(r, g, b));
            }
        }
    }
}
