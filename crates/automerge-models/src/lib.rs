//! Shared models.

#![warn(clippy::all)]

mod author_association;
mod errors;
mod merge_method;
mod pattern;
mod pull_request_handle;
mod repository_config;
mod repository_path;
mod rule_config;

pub use author_association::AuthorAssociation;
pub use errors::ConfigurationError;
pub use merge_method::MergeMethod;
pub use pattern::{Pattern, RegexPattern};
pub use pull_request_handle::{PullRequestHandle, PullRequestHandleError};
pub use repository_config::{RepositoryConfig, RuleSetId};
pub use repository_path::{RepositoryPath, RepositoryPathError};
pub use rule_config::RuleConfig;
