//! Configuration errors.

use thiserror::Error;

/// Raised when a repository rule configuration cannot be obtained or decoded.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Configuration file '{}' not found", path)]
    ConfigNotFound { path: String },

    #[error("Configuration invalid: {}", message)]
    InvalidConfig { message: String },

    #[error("Invalid pattern '{}': {}", pattern, source)]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}
