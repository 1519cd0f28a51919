//! Error types for the tonal core.

use thiserror::Error;

/// Errors produced by color operations.
///
/// Out-of-gamut colors are not errors: they are reported through
/// [`Conversion::valid`](crate::color::Conversion) instead.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A hex color string could not be parsed.
    #[error("invalid hex color: {0}")]
    Parse(String),

    /// An OKLCh component was outside its domain or not finite.
    #[error("{component} out of domain: {value}")]
    Domain { component: &'static str, value: f64 },

    /// A lightness scale needs at least two steps.
    #[error("invalid step count {0}: at least 2 steps are required")]
    InvalidStepCount(usize),

    /// A palette or palette request could not be constructed.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// A plane or image had a zero or unrepresentable size.
    #[error("invalid dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        reason: &'static str,
    },

    /// Writing a snapshot or reading a request file failed.
    #[error("i/o error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_includes_message() {
        let err = ColorError::Parse("#zz0000".into());
        let msg = format!("{err}");
        assert!(msg.contains("#zz0000"), "missing input in: {msg}");
    }

    #[test]
    fn domain_error_includes_component_and_value() {
        let err = ColorError::Domain {
            component: "lightness",
            value: 1.5,
        };
        let msg = format!("{err}");
        assert!(msg.contains("lightness"), "missing component in: {msg}");
        assert!(msg.contains("1.5"), "missing value in: {msg}");
    }

    #[test]
    fn invalid_step_count_includes_count() {
        let err = ColorError::InvalidStepCount(1);
        let msg = format!("{err}");
        assert!(msg.contains('1') && msg.contains("2 steps"), "got: {msg}");
    }

    #[test]
    fn invalid_palette_includes_message() {
        let err = ColorError::InvalidPalette("empty name".into());
        let msg = format!("{err}");
        assert!(msg.contains("empty name"), "missing message in: {msg}");
    }

    #[test]
    fn invalid_dimensions_includes_size() {
        let err = ColorError::InvalidDimensions {
            width: 0,
            height: 300,
            reason: "width and height must be non-zero",
        };
        let msg = err.to_string();
        assert!(msg.contains("0x300"), "missing size in: {msg}");
        assert!(!msg.contains("palette"), "got: {msg}");
    }

    #[test]
    fn io_error_includes_message() {
        let err = ColorError::Io("disk full".into());
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn color_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorError>();
    }

    #[test]
    fn color_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ColorError>();
    }
}
