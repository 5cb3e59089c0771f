use async_trait::async_trait;
use automerge_models::MergeMethod;

use crate::{
    types::{GhCheckRunReport, GhPullRequestSnapshot},
    Result,
};

/// Platform API interface.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Get a fresh snapshot of a pull request, reviews and check runs included.
    async fn pulls_snapshot_get(
        &self,
        owner: &str,
        name: &str,
        pr_number: u64,
    ) -> Result<GhPullRequestSnapshot>;
    /// Merge a pull request, provided its head is still `head_sha`.
    #[allow(clippy::too_many_arguments)]
    async fn pulls_merge(
        &self,
        owner: &str,
        name: &str,
        pr_number: u64,
        head_sha: &str,
        commit_title: &str,
        commit_message: &str,
        merge_method: MergeMethod,
    ) -> Result<()>;
    /// Merge the base branch into the head branch of a pull request.
    async fn pulls_update_branch(
        &self,
        owner: &str,
        name: &str,
        pr_number: u64,
        head_sha: &str,
    ) -> Result<()>;
    /// Delete a branch.
    async fn branches_delete(&self, owner: &str, name: &str, branch: &str) -> Result<()>;
    /// Create or update a check run on a commit.
    async fn check_runs_report(
        &self,
        owner: &str,
        name: &str,
        report: GhCheckRunReport,
    ) -> Result<()>;
}
