//! Error types for mathbox.

use std::io;

/// Errors produced by the mathbox layout engine and its data loaders.
#[derive(Debug, thiserror::Error)]
pub enum MathboxError {
    /// A delimiter glyph that is neither sizable nor stackable was used in a
    /// sizing context. Fatal to the current layout call.
    #[error("illegal delimiter: '{0}'")]
    IllegalDelimiter(String),

    /// The semantic input tree violated its shape contract.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("metrics error: {0}")]
    Metrics(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, MathboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_delimiter_display() {
        let e = MathboxError::IllegalDelimiter("x".into());
        assert_eq!(format!("{e}"), "illegal delimiter: 'x'");
    }

    #[test]
    fn malformed_input_display() {
        let e = MathboxError::MalformedInput("sized delimiter size 7".into());
        assert_eq!(format!("{e}"), "malformed input: sized delimiter size 7");
    }

    #[test]
    fn metrics_error_display() {
        let e = MathboxError::Metrics("unknown font 'Foo-Bold'".into());
        assert_eq!(format!("{e}"), "metrics error: unknown font 'Foo-Bold'");
    }

    #[test]
    fn config_error_display() {
        let e = MathboxError::Config("size out of range".into());
        assert_eq!(format!("{e}"), "config error: size out of range");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: MathboxError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: MathboxError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: MathboxError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn error_is_debug() {
        let e = MathboxError::IllegalDelimiter("a".into());
        assert!(format!("{e:?}").contains("IllegalDelimiter"));
    }
}
