//! Error types for rapid_summarizer
//!
//! Only input problems are errors here. Numeric edge cases (zero vectors,
//! isolated sentences, graphs without edges) are handled by the ranking
//! fallback and never surface as failures.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SummarizerError>;

/// Main error type for rapid_summarizer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummarizerError {
    /// Input bytes could not be decoded as UTF-8 text
    #[error("Invalid encoding: {message} (valid up to byte {valid_up_to})")]
    InvalidEncoding { message: String, valid_up_to: usize },

    /// Input text is empty or contains no sentences
    ///
    /// The pipeline itself never returns this; it is produced by
    /// [`Summary::require_content`](crate::types::Summary::require_content)
    /// for callers that treat an empty document as a failure.
    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    /// No stop-word or segmentation rules are registered for the language tag
    #[error("Unsupported language: '{tag}'")]
    UnsupportedLanguage { tag: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl SummarizerError {
    /// Create an invalid encoding error
    pub fn invalid_encoding(message: impl Into<String>, valid_up_to: usize) -> Self {
        Self::InvalidEncoding {
            message: message.into(),
            valid_up_to,
        }
    }

    /// Create an empty input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create an unsupported language error
    pub fn unsupported_language(tag: impl Into<String>) -> Self {
        Self::UnsupportedLanguage { tag: tag.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error came from malformed input rather than configuration
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidEncoding { .. } | Self::EmptyInput { .. } | Self::UnsupportedLanguage { .. }
        )
    }
}

impl From<serde_json::Error> for SummarizerError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<std::str::Utf8Error> for SummarizerError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::invalid_encoding(err.to_string(), err.valid_up_to())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SummarizerError::empty_input("no text provided");
        assert!(err.to_string().contains("Empty input"));
        assert!(err.to_string().contains("no text provided"));

        let err = SummarizerError::unsupported_language("xx");
        assert_eq!(err.to_string(), "Unsupported language: 'xx'");
    }

    #[test]
    fn test_utf8_conversion() {
        let bytes = [b'o', b'k', 0xff, 0xfe];
        let err: SummarizerError = std::str::from_utf8(&bytes).unwrap_err().into();

        match err {
            SummarizerError::InvalidEncoding { valid_up_to, .. } => assert_eq!(valid_up_to, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_is_input_error() {
        assert!(SummarizerError::invalid_encoding("bad", 0).is_input_error());
        assert!(SummarizerError::unsupported_language("xx").is_input_error());
        assert!(!SummarizerError::invalid_config("damping").is_input_error());
    }
}
