use async_trait::async_trait;
use automerge_ghapi_interface::{types::GhPullRequestSnapshot, ApiError};
use automerge_models::{PullRequestHandle, RepositoryConfig};
use shaku::{Component, Interface};

use crate::CoreContext;

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait MergePullRequestInterface: Interface {
    async fn run(
        &self,
        ctx: &CoreContext,
        pr_handle: &PullRequestHandle,
        config: &RepositoryConfig,
        upstream_pr: &GhPullRequestSnapshot,
    ) -> Result<(), ApiError>;
}

#[derive(Component)]
#[shaku(interface = MergePullRequestInterface)]
pub(crate) struct MergePullRequest;

impl MergePullRequest {
    fn commit_message(template: Option<&str>, upstream_pr: &GhPullRequestSnapshot) -> String {
        template
            .map(|t| {
                t.replace("{title}", &upstream_pr.title)
                    .replace("{number}", &upstream_pr.number.to_string())
                    .replace("{body}", upstream_pr.body.as_deref().unwrap_or_default())
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl MergePullRequestInterface for MergePullRequest {
    #[tracing::instrument(
        skip_all,
        fields(pr_handle = %pr_handle, merge_method = %config.merge_method)
    )]
    async fn run(
        &self,
        ctx: &CoreContext,
        pr_handle: &PullRequestHandle,
        config: &RepositoryConfig,
        upstream_pr: &GhPullRequestSnapshot,
    ) -> Result<(), ApiError> {
        let commit_title = format!("{} (#{})", upstream_pr.title, upstream_pr.number);
        let commit_message =
            Self::commit_message(config.merge_commit_message.as_deref(), upstream_pr);

        ctx.api_service
            .pulls_merge(
                pr_handle.owner(),
                pr_handle.name(),
                pr_handle.number(),
                &upstream_pr.head.sha,
                &commit_title,
                &commit_message,
                config.merge_method,
            )
            .await
    }
}
