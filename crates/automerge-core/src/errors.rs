//! Core errors.

use automerge_ghapi_interface::ApiError;
use automerge_models::ConfigurationError;
use thiserror::Error;

/// Raised when a snapshot breaks the contract of its provider.
#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Reviewer '{}' has more than one latest review", login)]
    DuplicateReviewer { login: String },

    #[error("Check run '{}' is completed without conclusion", name)]
    MissingCheckConclusion { name: String },
}

/// Error raised while processing a pull request.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum CoreError {
    /// Wraps [`automerge_models::ConfigurationError`].
    #[error("Configuration error: {source}")]
    ConfigurationError { source: ConfigurationError },

    #[error("Could not fetch pull request snapshot: {source}")]
    SnapshotFetchError { source: ApiError },

    /// Wraps [`EvaluationError`].
    #[error("Evaluation error: {source}")]
    EvaluationError { source: EvaluationError },

    #[error("Could not apply merge decision: {source}")]
    MergeExecutionError { source: ApiError },

    #[error("Task panicked: {message}")]
    TaskPanicked { message: String },
}

impl From<ConfigurationError> for CoreError {
    fn from(e: ConfigurationError) -> Self {
        Self::ConfigurationError { source: e }
    }
}

impl From<EvaluationError> for CoreError {
    fn from(e: EvaluationError) -> Self {
        Self::EvaluationError { source: e }
    }
}

/// Result alias for `CoreError`.
pub type Result<T> = core::result::Result<T, CoreError>;
