//! Collaborators consumed by the core.

use async_trait::async_trait;
use automerge_models::{ConfigurationError, PullRequestHandle, RepositoryConfig};
use tracing::error;

use crate::CoreError;

/// Provides the effective rule configuration of a repository.
///
/// Called once per processed task, so configuration changes apply to the next run.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RepositoryConfigService: Send + Sync {
    async fn repository_config_get(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<RepositoryConfig, ConfigurationError>;
}

/// Receives every error caught at the worker boundary.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait ErrorReporter: Send + Sync {
    fn report(&self, pr_handle: &PullRequestHandle, error: &CoreError);
}

/// Error reporter writing to the log only.
#[derive(Clone, Default)]
pub struct LoggingErrorReporter {
    _private: (),
}

impl LoggingErrorReporter {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ErrorReporter for LoggingErrorReporter {
    fn report(&self, pr_handle: &PullRequestHandle, error: &CoreError) {
        error!(
            owner = %pr_handle.owner(),
            name = %pr_handle.name(),
            pr_number = pr_handle.number(),
            error = %error,
            message = "Error while processing pull request"
        );
    }
}
