use async_trait::async_trait;
use automerge_models::PullRequestHandle;
use shaku::{Component, HasComponent, Interface};
use tracing::debug;

use super::{ApplyMergeDecisionInterface, MergeOutcome};
use crate::{rules::MergeDecisionEngine, CoreContext, CoreError, Result};

/// Evaluates a pull request from fresh platform state and applies the decision.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ProcessPullRequestInterface: Interface {
    async fn run(&self, ctx: &CoreContext, pr_handle: &PullRequestHandle) -> Result<MergeOutcome>;
}

#[derive(Component)]
#[shaku(interface = ProcessPullRequestInterface)]
pub(crate) struct ProcessPullRequest;

#[async_trait]
impl ProcessPullRequestInterface for ProcessPullRequest {
    #[tracing::instrument(skip_all, fields(pr_handle = %pr_handle))]
    async fn run(&self, ctx: &CoreContext, pr_handle: &PullRequestHandle) -> Result<MergeOutcome> {
        let config = ctx
            .config_service
            .repository_config_get(pr_handle.owner(), pr_handle.name())
            .await?;

        let upstream_pr = ctx
            .api_service
            .pulls_snapshot_get(pr_handle.owner(), pr_handle.name(), pr_handle.number())
            .await
            .map_err(|e| CoreError::SnapshotFetchError { source: e })?;

        let decision = MergeDecisionEngine::new().evaluate(&config, &upstream_pr)?;
        debug!(
            owner = %pr_handle.owner(),
            name = %pr_handle.name(),
            pr_number = pr_handle.number(),
            status = ?decision.status,
            message = "Merge decision"
        );

        let apply_uc: &dyn ApplyMergeDecisionInterface = ctx.core_module.resolve_ref();
        apply_uc
            .run(ctx, pr_handle, &config, &upstream_pr, &decision)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use automerge_ghapi_interface::{
        types::{GhPullRequestSnapshot, GhReview, GhReviewState},
        ApiError,
    };
    use automerge_models::{AuthorAssociation, ConfigurationError, RepositoryConfig, RuleConfig};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        context::tests::CoreContextTest, rules::DecisionStatus,
        use_cases::pulls::MockApplyMergeDecisionInterface, CoreModule,
    };

    fn config() -> RepositoryConfig {
        RepositoryConfig::from_rule(RuleConfig {
            required_labels: vec!["ready".into()],
            min_approvals: BTreeMap::from([(AuthorAssociation::Member, 2)]),
            ..RuleConfig::recommended()
        })
    }

    fn upstream_pr() -> GhPullRequestSnapshot {
        let approval = |login: &str| GhReview {
            user: login.into(),
            author_association: AuthorAssociation::Member,
            state: GhReviewState::Approved,
            ..Default::default()
        };

        GhPullRequestSnapshot {
            number: 1,
            title: "Add feature".into(),
            labels: vec!["ready".into()],
            reviews: vec![approval("alice"), approval("bob")],
            mergeable: Some(true),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn evaluate_and_apply() {
        let mut ctx = CoreContextTest::new();
        ctx.config_service
            .expect_repository_config_get()
            .once()
            .withf(|owner, name| owner == "me" && name == "test")
            .return_once(|_, _| Ok(config()));
        ctx.api_service
            .expect_pulls_snapshot_get()
            .once()
            .withf(|owner, name, number| owner == "me" && name == "test" && *number == 1)
            .return_once(|_, _, _| Ok(upstream_pr()));

        let mut apply_merge_decision = MockApplyMergeDecisionInterface::new();
        apply_merge_decision
            .expect_run()
            .once()
            .withf(|_, _, _, upstream_pr, decision| {
                upstream_pr.number == 1 && decision.status == DecisionStatus::Mergeable
            })
            .return_once(|_, _, _, _, _| Ok(MergeOutcome::Merged));
        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn ApplyMergeDecisionInterface>(Box::new(
                apply_merge_decision,
            ))
            .build();

        let outcome = ProcessPullRequest
            .run(&ctx.into_context(), &("me", "test", 1).into())
            .await
            .unwrap();

        assert_eq!(outcome, MergeOutcome::Merged);
    }

    #[tokio::test]
    async fn snapshot_fetch_error() {
        let mut ctx = CoreContextTest::new();
        ctx.config_service
            .expect_repository_config_get()
            .once()
            .return_once(|_, _| Ok(config()));
        ctx.api_service
            .expect_pulls_snapshot_get()
            .once()
            .return_once(|_, _, _| {
                Err(ApiError::ImplementationError {
                    source: "timeout".into(),
                })
            });

        let result = ProcessPullRequest
            .run(&ctx.into_context(), &("me", "test", 1).into())
            .await;

        assert!(matches!(result, Err(CoreError::SnapshotFetchError { .. })));
    }

    #[tokio::test]
    async fn configuration_error() {
        let mut ctx = CoreContextTest::new();
        ctx.config_service
            .expect_repository_config_get()
            .once()
            .return_once(|_, _| {
                Err(ConfigurationError::ConfigNotFound {
                    path: ".github/auto-merge.yml".into(),
                })
            });
        ctx.api_service.expect_pulls_snapshot_get().never();

        let result = ProcessPullRequest
            .run(&ctx.into_context(), &("me", "test", 1).into())
            .await;

        assert!(matches!(result, Err(CoreError::ConfigurationError { .. })));
    }
}
