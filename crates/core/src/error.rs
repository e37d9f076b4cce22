//! Error types for the ambient particle field.
//!
//! The simulator itself is infallible: degenerate input is absorbed (empty
//! fields, skipped repulsion). Errors only surface at the edges, where a host
//! builds a raster surface, parses colors or loads a scene recipe.

use thiserror::Error;

/// Errors produced at the host-facing edges of the particle field.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Width or height was zero, or `width * height` overflowed.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette name was not one of the built-in palettes.
    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    /// A scene recipe failed validation.
    #[error("invalid scene: {0}")]
    InvalidScene(String),

    /// A file could not be read or written.
    #[error("i/o error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_mentions_width_and_height() {
        let msg = FieldError::InvalidDimensions.to_string();
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn invalid_color_includes_input() {
        let msg = FieldError::InvalidColor("rgba(1, 2)".into()).to_string();
        assert!(msg.contains("rgba(1, 2)"), "missing input in: {msg}");
    }

    #[test]
    fn unknown_palette_includes_name() {
        let msg = FieldError::UnknownPalette("sunset".into()).to_string();
        assert!(msg.contains("sunset"), "missing name in: {msg}");
    }

    #[test]
    fn invalid_scene_and_io_carry_message() {
        assert!(FieldError::InvalidScene("ticks".into())
            .to_string()
            .contains("ticks"));
        assert!(FieldError::Io("disk full".into())
            .to_string()
            .contains("disk full"));
    }

    #[test]
    fn field_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FieldError>();
    }

    #[test]
    fn field_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<FieldError>();
    }
}
