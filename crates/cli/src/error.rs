//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: color error (out-of-domain OKLCh, bad step count, empty palette name)
//! - 11: I/O error (file read or write, PNG snapshot)
//! - 12: input error (unparseable hex, bad plane size, malformed palette file)
//! - 13: serialization error

use std::fmt;
use std::path::Path;
use tonal_core::ColorError;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A color-level error (domain violation, bad step count, bad palette).
    Color(ColorError),
    /// An I/O error (file read or write, snapshot rendering).
    Io(String),
    /// A user input error (unparseable hex, bad plane size, malformed
    /// palette file).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }

    /// Wraps an error raised while loading or generating a palette file,
    /// naming the file. Problems with the file's contents are input errors.
    pub fn from_palette_file(path: &Path, e: ColorError) -> Self {
        match e {
            ColorError::InvalidPalette(msg) | ColorError::Parse(msg) => {
                CliError::Input(format!("{}: {msg}", path.display()))
            }
            other => other.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Color(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<ColorError> for CliError {
    fn from(e: ColorError) -> Self {
        match e {
            ColorError::Io(msg) => CliError::Io(msg),
            e @ (ColorError::Parse(_) | ColorError::InvalidDimensions { .. }) => {
                CliError::Input(e.to_string())
            }
            other => CliError::Color(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_and_step_errors_are_color_errors() {
        let domain = CliError::from(ColorError::Domain {
            component: "chroma",
            value: 0.9,
        });
        assert_eq!(domain.exit_code(), 10);
        assert!(domain.to_string().contains("chroma"));
        assert_eq!(CliError::from(ColorError::InvalidStepCount(1)).exit_code(), 10);
        let name = CliError::from(ColorError::InvalidPalette("empty name".into()));
        assert_eq!(name.exit_code(), 10);
    }

    #[test]
    fn bad_hex_is_an_input_error() {
        let err = CliError::from(ColorError::Parse("#zz0000".into()));
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("#zz0000"), "got: {err}");
    }

    #[test]
    fn bad_dimensions_are_an_input_error() {
        let err = CliError::from(ColorError::InvalidDimensions {
            width: 0,
            height: 0,
            reason: "width and height must be non-zero",
        });
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("0x0"), "got: {err}");
    }

    #[test]
    fn snapshot_failure_is_an_io_error() {
        let err = CliError::from(ColorError::Io("disk full".into()));
        assert_eq!(err.exit_code(), 11);
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn palette_file_problems_name_the_file() {
        let path = Path::new("palettes.json");
        let err = CliError::from_palette_file(
            path,
            ColorError::InvalidPalette("duplicate palette name \"a\"".into()),
        );
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().starts_with("palettes.json: "), "got: {err}");

        // A request with an out-of-domain color is still a color error.
        let err = CliError::from_palette_file(
            path,
            ColorError::Domain {
                component: "lightness",
                value: 2.0,
            },
        );
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn serde_json_failure_is_a_serialization_error() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let err = CliError::from(bad_json.unwrap_err());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        assert_eq!(CliError::from(io).exit_code(), 11);
    }
}
