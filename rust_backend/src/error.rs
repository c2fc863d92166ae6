//! Error types for configuration and rendering.
//!
//! Parsing and colour synthesis never fail; these errors only come from the
//! edges of the crate (reading configuration, producing JSON).

/// Result type for fallible crate operations
pub type SpectraResult<T> = Result<T, SpectraError>;

/// Error type for fallible crate operations
#[derive(Debug, thiserror::Error)]
pub enum SpectraError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<String> for SpectraError {
    fn from(s: String) -> Self {
        SpectraError::InputError(s)
    }
}

impl From<&str> for SpectraError {
    fn from(s: &str) -> Self {
        SpectraError::InputError(s.to_string())
    }
}

impl From<serde_json::Error> for SpectraError {
    fn from(e: serde_json::Error) -> Self {
        SpectraError::SerializationError(e.to_string())
    }
}
