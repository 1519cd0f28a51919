//! Serializable description of palettes to generate.
//!
//! A [`PaletteRequest`] captures everything needed to regenerate a palette:
//! name, base color, and step count. A [`PaletteFile`] is a JSON document
//! holding several requests; it is the configuration format of the CLI.

use crate::color::OkLch;
use crate::error::ColorError;
use crate::palette::{generate_palette, hex_to_oklch_approx, ColorPalette};
use serde::{Deserialize, Serialize};

/// Step count used when a request does not name one.
pub const DEFAULT_STEPS: usize = 11;

fn default_steps() -> usize {
    DEFAULT_STEPS
}

/// Reproducible description of one tonal palette.
///
/// Two identical requests always generate identical palettes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaletteRequest {
    pub name: String,
    pub base: OkLch,
    #[serde(default = "default_steps")]
    pub steps: usize,
}

impl PaletteRequest {
    /// Creates a request with `DEFAULT_STEPS` steps.
    pub fn new(name: &str, base: OkLch) -> Self {
        Self {
            name: name.to_string(),
            base,
            steps: DEFAULT_STEPS,
        }
    }

    /// Seeds the base color from a hex string through
    /// [`hex_to_oklch_approx`], then clamps chroma to the boundary limit.
    pub fn from_hex(name: &str, hex: &str) -> Result<Self, ColorError> {
        let base = hex_to_oklch_approx(hex)?.clamp_chroma();
        Ok(Self::new(name, base))
    }

    /// Sets the step count.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Checks the name, base color domain, and step count.
    pub fn validate(&self) -> Result<(), ColorError> {
        if self.name.trim().is_empty() {
            return Err(ColorError::InvalidPalette(
                "palette name must not be empty".to_string(),
            ));
        }
        self.base.normalized()?;
        if self.steps < 2 {
            return Err(ColorError::InvalidStepCount(self.steps));
        }
        Ok(())
    }

    /// Generates the palette.
    pub fn generate(&self) -> Result<ColorPalette, ColorError> {
        self.validate()?;
        generate_palette(&self.name, self.base, self.steps)
    }
}

/// A set of palette requests, usually loaded from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PaletteFile {
    pub palettes: Vec<PaletteRequest>,
}

impl PaletteFile {
    /// Parses a JSON document of the form `{"palettes": [...]}`.
    pub fn from_json_str(json: &str) -> Result<Self, ColorError> {
        serde_json::from_str(json)
            .map_err(|e| ColorError::InvalidPalette(format!("invalid palette file: {e}")))
    }

    /// Checks every request and rejects duplicate names.
    pub fn validate(&self) -> Result<(), ColorError> {
        if self.palettes.is_empty() {
            return Err(ColorError::InvalidPalette(
                "palette file lists no palettes".to_string(),
            ));
        }
        for (i, request) in self.palettes.iter().enumerate() {
            request.validate()?;
            let name = request.name.trim();
            if self.palettes[..i].iter().any(|r| r.name.trim() == name) {
                return Err(ColorError::InvalidPalette(format!(
                    "duplicate palette name {name:?}"
                )));
            }
        }
        Ok(())
    }

    /// Generates every palette, or returns the first error.
    pub fn generate_all(&self) -> Result<Vec<ColorPalette>, ColorError> {
        self.validate()?;
        self.palettes.iter().map(PaletteRequest::generate).collect()
    }
}
