//! Condition catalog.
//!
//! Each condition maps a rule configuration and a pull request snapshot to a
//! tri-state [`ConditionResult`]. A condition whose configuration is empty
//! evaluates to `None`: it is vacuously satisfied and left out of reports.

mod branches;
mod labels;
mod reviews;
mod state;
mod text;

use automerge_ghapi_interface::types::GhPullRequestSnapshot;
use automerge_models::RuleConfig;

use crate::EvaluationError;

/// How a condition result maps to a merge decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Must reach success.
    Required,
    /// Must reach failure: a success forbids the merge.
    Blocking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionStatus {
    Success,
    Failure,
    /// Not decidable yet. Never counts as a success.
    Pending,
}

/// Contribution of one condition result to its rule-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionOutcome {
    Satisfied,
    Violated,
    Undecided,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionResult {
    pub status: ConditionStatus,
    pub message: Option<String>,
}

impl ConditionResult {
    pub fn success() -> Self {
        Self {
            status: ConditionStatus::Success,
            message: None,
        }
    }

    pub fn failure() -> Self {
        Self {
            status: ConditionStatus::Failure,
            message: None,
        }
    }

    pub fn pending() -> Self {
        Self {
            status: ConditionStatus::Pending,
            message: None,
        }
    }

    pub fn with_message<S: Into<String>>(mut self, message: S) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn outcome(&self, polarity: Polarity) -> ConditionOutcome {
        match (polarity, self.status) {
            (_, ConditionStatus::Pending) => ConditionOutcome::Undecided,
            (Polarity::Required, ConditionStatus::Success)
            | (Polarity::Blocking, ConditionStatus::Failure) => ConditionOutcome::Satisfied,
            (Polarity::Required, ConditionStatus::Failure)
            | (Polarity::Blocking, ConditionStatus::Success) => ConditionOutcome::Violated,
        }
    }
}

pub(crate) type ConditionEvaluation = Result<Option<ConditionResult>, EvaluationError>;

/// Built-in conditions, named after their configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConditionName {
    BlockingBaseBranches,
    BlockingBody,
    BlockingChecks,
    BlockingLabels,
    BlockingLabelsRegex,
    BlockingTitle,
    MaximumChangesRequested,
    Mergeable,
    MinimumApprovals,
    Open,
    RequiredAuthorRole,
    RequiredBaseBranches,
    RequiredBody,
    RequiredLabels,
    RequiredLabelsRegex,
    RequiredReviewers,
    RequiredTitle,
}

impl ConditionName {
    pub const ALL: [ConditionName; 17] = [
        Self::BlockingBaseBranches,
        Self::BlockingBody,
        Self::BlockingChecks,
        Self::BlockingLabels,
        Self::BlockingLabelsRegex,
        Self::BlockingTitle,
        Self::MaximumChangesRequested,
        Self::Mergeable,
        Self::MinimumApprovals,
        Self::Open,
        Self::RequiredAuthorRole,
        Self::RequiredBaseBranches,
        Self::RequiredBody,
        Self::RequiredLabels,
        Self::RequiredLabelsRegex,
        Self::RequiredReviewers,
        Self::RequiredTitle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BlockingBaseBranches => "blockingBaseBranches",
            Self::BlockingBody => "blockingBody",
            Self::BlockingChecks => "blockingChecks",
            Self::BlockingLabels => "blockingLabels",
            Self::BlockingLabelsRegex => "blockingLabelsRegex",
            Self::BlockingTitle => "blockingTitle",
            Self::MaximumChangesRequested => "maximumChangesRequested",
            Self::Mergeable => "mergeable",
            Self::MinimumApprovals => "minimumApprovals",
            Self::Open => "open",
            Self::RequiredAuthorRole => "requiredAuthorRole",
            Self::RequiredBaseBranches => "requiredBaseBranches",
            Self::RequiredBody => "requiredBody",
            Self::RequiredLabels => "requiredLabels",
            Self::RequiredLabelsRegex => "requiredLabelsRegex",
            Self::RequiredReviewers => "requiredReviewers",
            Self::RequiredTitle => "requiredTitle",
        }
    }

    pub fn polarity(self) -> Polarity {
        match self {
            Self::BlockingBaseBranches
            | Self::BlockingBody
            | Self::BlockingChecks
            | Self::BlockingLabels
            | Self::BlockingLabelsRegex
            | Self::BlockingTitle => Polarity::Blocking,
            _ => Polarity::Required,
        }
    }

    /// Evaluate the condition, `None` meaning "not configured".
    pub fn evaluate(
        self,
        rule: &RuleConfig,
        upstream_pr: &GhPullRequestSnapshot,
    ) -> Result<Option<ConditionResult>, EvaluationError> {
        match self {
            Self::BlockingBaseBranches => branches::blocking_base_branches(rule, upstream_pr),
            Self::BlockingBody => text::blocking_body(rule, upstream_pr),
            Self::BlockingChecks => state::blocking_checks(rule, upstream_pr),
            Self::BlockingLabels => labels::blocking_labels(rule, upstream_pr),
            Self::BlockingLabelsRegex => labels::blocking_labels_regex(rule, upstream_pr),
            Self::BlockingTitle => text::blocking_title(rule, upstream_pr),
            Self::MaximumChangesRequested => reviews::maximum_changes_requested(rule, upstream_pr),
            Self::Mergeable => state::mergeable(rule, upstream_pr),
            Self::MinimumApprovals => reviews::minimum_approvals(rule, upstream_pr),
            Self::Open => state::open(rule, upstream_pr),
            Self::RequiredAuthorRole => reviews::required_author_role(rule, upstream_pr),
            Self::RequiredBaseBranches => branches::required_base_branches(rule, upstream_pr),
            Self::RequiredBody => text::required_body(rule, upstream_pr),
            Self::RequiredLabels => labels::required_labels(rule, upstream_pr),
            Self::RequiredLabelsRegex => labels::required_labels_regex(rule, upstream_pr),
            Self::RequiredReviewers => reviews::required_reviewers(rule, upstream_pr),
            Self::RequiredTitle => text::required_title(rule, upstream_pr),
        }
    }
}

impl std::fmt::Display for ConditionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_follows_name() {
        for name in ConditionName::ALL {
            let expected = if name.as_str().starts_with("blocking") {
                Polarity::Blocking
            } else {
                Polarity::Required
            };
            assert_eq!(name.polarity(), expected, "{name}");
        }
    }

    #[test]
    fn outcome() {
        let success = ConditionResult::success();
        let failure = ConditionResult::failure();
        let pending = ConditionResult::pending();

        assert_eq!(success.outcome(Polarity::Required), ConditionOutcome::Satisfied);
        assert_eq!(failure.outcome(Polarity::Required), ConditionOutcome::Violated);
        assert_eq!(success.outcome(Polarity::Blocking), ConditionOutcome::Violated);
        assert_eq!(failure.outcome(Polarity::Blocking), ConditionOutcome::Satisfied);
        assert_eq!(pending.outcome(Polarity::Blocking), ConditionOutcome::Undecided);
        assert_eq!(pending.outcome(Polarity::Required), ConditionOutcome::Undecided);
    }

    #[test]
    fn vacuous_rule_reports_nothing() {
        let snapshot = GhPullRequestSnapshot::default();
        for name in ConditionName::ALL {
            assert_eq!(
                name.evaluate(&RuleConfig::default(), &snapshot),
                Ok(None),
                "{name}"
            );
        }
    }
}
