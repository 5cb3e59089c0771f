use automerge_ghapi_interface::types::GhPullRequestSnapshot;
use automerge_models::{RepositoryConfig, RuleSetId};

use super::{RuleEvaluator, RuleSetResult, RuleVerdict};
use crate::{
    conditions::{ConditionName, ConditionResult},
    EvaluationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionStatus {
    /// At least one rule-set succeeded.
    Mergeable,
    /// Every rule-set is pending.
    Pending,
    Blocked,
}

/// Overall decision for one pull request snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeDecision {
    pub status: DecisionStatus,
    /// Results in evaluation order, the implicit rule-set first.
    pub rule_sets: Vec<(RuleSetId, RuleSetResult)>,
}

impl MergeDecision {
    pub fn should_merge(&self) -> bool {
        self.status == DecisionStatus::Mergeable
    }

    /// Conditions explaining a decision that is not mergeable.
    ///
    /// When blocked, the violations of the failing rule-set that is closest to
    /// success (fewest violations, first one on ties). When pending, the
    /// undecided conditions of the first rule-set.
    pub fn surfaced_conditions(&self) -> Vec<(ConditionName, &ConditionResult)> {
        match self.status {
            DecisionStatus::Mergeable => vec![],
            DecisionStatus::Pending => self
                .rule_sets
                .first()
                .map(|(_, result)| result.undecided().collect())
                .unwrap_or_default(),
            DecisionStatus::Blocked => self
                .rule_sets
                .iter()
                .filter(|(_, result)| result.verdict == RuleVerdict::Failure)
                .min_by_key(|(_, result)| result.violations().count())
                .map(|(_, result)| result.violations().collect())
                .unwrap_or_default(),
        }
    }
}

/// Evaluates every rule-set of a repository and combines them with OR.
#[derive(Default)]
pub struct MergeDecisionEngine {
    evaluator: RuleEvaluator,
}

impl MergeDecisionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(skip_all, fields(pr_number = upstream_pr.number), ret)]
    pub fn evaluate(
        &self,
        config: &RepositoryConfig,
        upstream_pr: &GhPullRequestSnapshot,
    ) -> Result<MergeDecision, EvaluationError> {
        let rule_sets = config
            .rule_sets()
            .map(|(id, rule)| Ok((id, self.evaluator.evaluate(rule, upstream_pr)?)))
            .collect::<Result<Vec<_>, EvaluationError>>()?;

        let has_verdict = |verdict: RuleVerdict| {
            rule_sets
                .iter()
                .any(|(_, result)| result.verdict == verdict)
        };

        let status = if has_verdict(RuleVerdict::Success) {
            DecisionStatus::Mergeable
        } else if has_verdict(RuleVerdict::Failure) {
            DecisionStatus::Blocked
        } else {
            DecisionStatus::Pending
        };

        Ok(MergeDecision { status, rule_sets })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use automerge_ghapi_interface::types::{GhReview, GhReviewState};
    use automerge_models::{AuthorAssociation, RuleConfig};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::conditions::ConditionStatus;

    fn approval(login: &str, role: AuthorAssociation) -> GhReview {
        GhReview {
            user: login.into(),
            author_association: role,
            state: GhReviewState::Approved,
            ..Default::default()
        }
    }

    fn ready_with_approvals() -> RepositoryConfig {
        RepositoryConfig::from_rule(RuleConfig {
            required_labels: vec!["ready".into()],
            min_approvals: BTreeMap::from([(AuthorAssociation::Member, 2)]),
            ..RuleConfig::recommended()
        })
    }

    fn snapshot(labels: &[&str]) -> GhPullRequestSnapshot {
        GhPullRequestSnapshot {
            number: 12,
            title: "Add feature".into(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
            reviews: vec![
                approval("alice", AuthorAssociation::Member),
                approval("bob", AuthorAssociation::Member),
            ],
            mergeable: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn labelled_and_approved_is_mergeable() {
        let decision = MergeDecisionEngine::new()
            .evaluate(&ready_with_approvals(), &snapshot(&["ready"]))
            .unwrap();

        assert!(decision.should_merge());
        assert_eq!(decision.rule_sets.len(), 1);
        assert!(decision.surfaced_conditions().is_empty());
    }

    #[test]
    fn missing_label_blocks() {
        let decision = MergeDecisionEngine::new()
            .evaluate(&ready_with_approvals(), &snapshot(&[]))
            .unwrap();

        assert!(!decision.should_merge());
        assert_eq!(decision.status, DecisionStatus::Blocked);

        let surfaced = decision.surfaced_conditions();
        assert_eq!(surfaced.len(), 1);
        assert_eq!(surfaced[0].0, ConditionName::RequiredLabels);
        assert_eq!(surfaced[0].1.status, ConditionStatus::Failure);
        assert_eq!(surfaced[0].1.message.as_deref(), Some("Missing labels: ready"));
    }

    #[test]
    fn rule_sets_combine_with_or() {
        let config = RepositoryConfig {
            rules: vec![RuleConfig {
                required_author_role: AuthorAssociation::Owner,
                ..RuleConfig::recommended()
            }],
            ..ready_with_approvals()
        };
        let upstream_pr = GhPullRequestSnapshot {
            author_association: AuthorAssociation::Owner,
            reviews: vec![],
            ..snapshot(&[])
        };

        let decision = MergeDecisionEngine::new()
            .evaluate(&config, &upstream_pr)
            .unwrap();

        assert_eq!(decision.status, DecisionStatus::Mergeable);
        assert_eq!(
            decision
                .rule_sets
                .iter()
                .map(|(id, result)| (*id, result.verdict))
                .collect::<Vec<_>>(),
            vec![
                (RuleSetId::Default, RuleVerdict::Failure),
                (RuleSetId::Rule(0), RuleVerdict::Success),
            ]
        );
    }

    #[test]
    fn all_pending_is_pending() {
        let config = RepositoryConfig {
            rules: vec![RuleConfig::recommended()],
            ..RepositoryConfig::from_rule(RuleConfig::recommended())
        };
        let upstream_pr = GhPullRequestSnapshot {
            mergeable: None,
            ..snapshot(&[])
        };

        let decision = MergeDecisionEngine::new()
            .evaluate(&config, &upstream_pr)
            .unwrap();

        assert_eq!(decision.status, DecisionStatus::Pending);
        assert_eq!(
            decision
                .surfaced_conditions()
                .into_iter()
                .map(|(name, _)| name)
                .collect::<Vec<_>>(),
            vec![ConditionName::Mergeable]
        );
    }

    #[test]
    fn pending_and_failure_is_blocked() {
        let config = RepositoryConfig {
            rules: vec![RuleConfig {
                required_labels: vec!["ready".into()],
                ..Default::default()
            }],
            ..RepositoryConfig::from_rule(RuleConfig::recommended())
        };
        let upstream_pr = GhPullRequestSnapshot {
            mergeable: None,
            ..snapshot(&[])
        };

        let decision = MergeDecisionEngine::new()
            .evaluate(&config, &upstream_pr)
            .unwrap();

        assert_eq!(decision.status, DecisionStatus::Blocked);
        assert_eq!(
            decision.surfaced_conditions()[0].0,
            ConditionName::RequiredLabels
        );
    }

    #[test]
    fn surfaces_closest_failing_rule_set() {
        let config = RepositoryConfig {
            rules: vec![RuleConfig {
                required_labels: vec!["ready".into()],
                ..Default::default()
            }],
            ..RepositoryConfig::from_rule(RuleConfig {
                required_labels: vec!["ready".into()],
                required_author_role: AuthorAssociation::Owner,
                ..Default::default()
            })
        };

        let decision = MergeDecisionEngine::new()
            .evaluate(&config, &snapshot(&[]))
            .unwrap();

        assert_eq!(decision.status, DecisionStatus::Blocked);
        assert_eq!(
            decision
                .surfaced_conditions()
                .into_iter()
                .map(|(name, _)| name)
                .collect::<Vec<_>>(),
            vec![ConditionName::RequiredLabels]
        );
    }
}
