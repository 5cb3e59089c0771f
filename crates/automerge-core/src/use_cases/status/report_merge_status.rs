use async_trait::async_trait;
use automerge_ghapi_interface::types::{GhCheckRunReport, GhPullRequestSnapshot};
use automerge_models::PullRequestHandle;
use shaku::{Component, Interface};

use super::utils::StatusMessageGenerator;
use crate::{rules::MergeDecision, CoreContext, CoreError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ReportMergeStatusInterface: Interface {
    async fn run(
        &self,
        ctx: &CoreContext,
        pr_handle: &PullRequestHandle,
        decision: &MergeDecision,
        upstream_pr: &GhPullRequestSnapshot,
    ) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = ReportMergeStatusInterface)]
pub(crate) struct ReportMergeStatus;

#[async_trait]
impl ReportMergeStatusInterface for ReportMergeStatus {
    #[tracing::instrument(skip_all, fields(pr_handle = %pr_handle))]
    async fn run(
        &self,
        ctx: &CoreContext,
        pr_handle: &PullRequestHandle,
        decision: &MergeDecision,
        upstream_pr: &GhPullRequestSnapshot,
    ) -> Result<()> {
        let status_message = StatusMessageGenerator::default().generate(decision);

        ctx.api_service
            .check_runs_report(
                pr_handle.owner(),
                pr_handle.name(),
                GhCheckRunReport {
                    name: ctx.config.name.clone(),
                    head_sha: upstream_pr.head.sha.clone(),
                    status: status_message.status,
                    conclusion: status_message.conclusion,
                    title: status_message.title.into(),
                    summary: status_message.summary,
                },
            )
            .await
            .map_err(|e| CoreError::MergeExecutionError { source: e })
    }
}

#[cfg(test)]
mod tests {
    use automerge_ghapi_interface::{
        types::{GhBranch, GhCheckConclusion, GhCheckStatus},
        ApiError,
    };

    use super::*;
    use crate::{context::tests::CoreContextTest, rules::DecisionStatus};

    fn upstream_pr() -> GhPullRequestSnapshot {
        GhPullRequestSnapshot {
            number: 1,
            head: GhBranch {
                reference: "feature".into(),
                sha: "abcdef".into(),
                repository: "me/test".into(),
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn report_ready() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_check_runs_report()
            .once()
            .withf(|owner, name, report| {
                owner == "me"
                    && name == "test"
                    && report.name == "auto-merge"
                    && report.head_sha == "abcdef"
                    && report.status == GhCheckStatus::Completed
                    && report.conclusion == Some(GhCheckConclusion::Success)
                    && report.title == "Ready for merge"
            })
            .return_once(|_, _, _| Ok(()));

        ReportMergeStatus
            .run(
                &ctx.into_context(),
                &("me", "test", 1).into(),
                &MergeDecision {
                    status: DecisionStatus::Mergeable,
                    rule_sets: vec![],
                },
                &upstream_pr(),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn report_failure() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_check_runs_report()
            .once()
            .return_once(|_, _, _| {
                Err(ApiError::ImplementationError {
                    source: "forbidden".into(),
                })
            });

        let result = ReportMergeStatus
            .run(
                &ctx.into_context(),
                &("me", "test", 1).into(),
                &MergeDecision {
                    status: DecisionStatus::Pending,
                    rule_sets: vec![],
                },
                &upstream_pr(),
            )
            .await;

        assert!(matches!(
            result,
            Err(CoreError::MergeExecutionError { .. })
        ));
    }
}
