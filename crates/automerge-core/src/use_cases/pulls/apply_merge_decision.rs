use async_trait::async_trait;
use automerge_ghapi_interface::types::GhPullRequestSnapshot;
use automerge_models::{PullRequestHandle, RepositoryConfig};
use shaku::{Component, HasComponent, Interface};
use tracing::info;

use super::MergePullRequestInterface;
use crate::{
    rules::MergeDecision, use_cases::status::ReportMergeStatusInterface, CoreContext, CoreError,
    Result,
};

/// Side effect applied for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    NotReady,
    /// Head branch was behind and got updated, the merge waits for the next run.
    BranchUpdated,
    Merged,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApplyMergeDecisionInterface: Interface {
    async fn run(
        &self,
        ctx: &CoreContext,
        pr_handle: &PullRequestHandle,
        config: &RepositoryConfig,
        upstream_pr: &GhPullRequestSnapshot,
        decision: &MergeDecision,
    ) -> Result<MergeOutcome>;
}

#[derive(Component)]
#[shaku(interface = ApplyMergeDecisionInterface)]
pub(crate) struct ApplyMergeDecision;

#[async_trait]
impl ApplyMergeDecisionInterface for ApplyMergeDecision {
    #[tracing::instrument(
        skip_all,
        fields(pr_handle = %pr_handle, status = ?decision.status),
        ret
    )]
    async fn run(
        &self,
        ctx: &CoreContext,
        pr_handle: &PullRequestHandle,
        config: &RepositoryConfig,
        upstream_pr: &GhPullRequestSnapshot,
        decision: &MergeDecision,
    ) -> Result<MergeOutcome> {
        if config.report_status {
            let report_uc: &dyn ReportMergeStatusInterface = ctx.core_module.resolve_ref();
            report_uc.run(ctx, pr_handle, decision, upstream_pr).await?;
        }

        if !decision.should_merge() {
            return Ok(MergeOutcome::NotReady);
        }

        if upstream_pr.behind_base && config.update_branch {
            ctx.api_service
                .pulls_update_branch(
                    pr_handle.owner(),
                    pr_handle.name(),
                    pr_handle.number(),
                    &upstream_pr.head.sha,
                )
                .await
                .map_err(|e| CoreError::MergeExecutionError { source: e })?;

            info!(
                owner = %pr_handle.owner(),
                name = %pr_handle.name(),
                pr_number = pr_handle.number(),
                message = "Head branch updated from base"
            );

            return Ok(MergeOutcome::BranchUpdated);
        }

        let merge_uc: &dyn MergePullRequestInterface = ctx.core_module.resolve_ref();
        merge_uc
            .run(ctx, pr_handle, config, upstream_pr)
            .await
            .map_err(|e| CoreError::MergeExecutionError { source: e })?;

        info!(
            owner = %pr_handle.owner(),
            name = %pr_handle.name(),
            pr_number = pr_handle.number(),
            merge_method = %config.merge_method,
            message = "Pull request merged"
        );

        if config.delete_branch_after_merge && upstream_pr.is_head_in_base_repository() {
            ctx.api_service
                .branches_delete(
                    pr_handle.owner(),
                    pr_handle.name(),
                    &upstream_pr.head.reference,
                )
                .await
                .map_err(|e| CoreError::MergeExecutionError { source: e })?;
        }

        Ok(MergeOutcome::Merged)
    }
}
