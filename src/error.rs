//! Error types for the analysis pipeline.

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Error type for analysis operations
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// A windowing precondition was violated. Raised before any windows are
    /// built; a window set is never partially constructed.
    #[error("Invalid window spec: {message}")]
    InvalidWindowSpec { message: String },

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl AnalysisError {
    /// Create an invalid window spec error.
    pub fn invalid_window_spec(message: impl Into<String>) -> Self {
        Self::InvalidWindowSpec {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
