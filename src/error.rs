//! Error types for datetime parsing, formatting, and conversion.

/// Common error type for datetime operations.
#[derive(Debug, thiserror::Error)]
pub enum DateTimeError {
    /// Input string did not match the expected format, or named an invalid
    /// calendar date/time (e.g. day 32).
    #[error("failed to parse '{value}' with format '{format}': {source}")]
    Parse {
        value: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A format pattern used a specifier outside the supported vocabulary.
    #[error("unsupported format specifier '{0}'")]
    UnsupportedToken(String),

    /// A numeric input was NaN or infinite where a finite value is required.
    #[error("{what} must be finite, got {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Splitting on an empty delimiter is not meaningful.
    #[error("split delimiter must not be empty")]
    EmptyDelimiter,
}

impl DateTimeError {
    pub(crate) fn parse(value: &str, format: &str, source: chrono::ParseError) -> Self {
        Self::Parse {
            value: value.to_string(),
            format: format.to_string(),
            source,
        }
    }
}
