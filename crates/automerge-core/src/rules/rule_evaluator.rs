use std::collections::BTreeMap;

use automerge_ghapi_interface::types::GhPullRequestSnapshot;
use automerge_models::RuleConfig;

use crate::{
    conditions::{ConditionName, ConditionOutcome, ConditionResult},
    EvaluationError,
};

/// Verdict of one rule-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleVerdict {
    Success,
    /// No condition is violated, at least one is undecided.
    Pending,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSetResult {
    pub verdict: RuleVerdict,
    /// Configured conditions only.
    pub conditions: BTreeMap<ConditionName, ConditionResult>,
}

impl RuleSetResult {
    fn with_outcome(
        &self,
        outcome: ConditionOutcome,
    ) -> impl Iterator<Item = (ConditionName, &ConditionResult)> {
        self.conditions
            .iter()
            .filter(move |(name, result)| result.outcome(name.polarity()) == outcome)
            .map(|(name, result)| (*name, result))
    }

    /// Conditions preventing the merge.
    pub fn violations(&self) -> impl Iterator<Item = (ConditionName, &ConditionResult)> {
        self.with_outcome(ConditionOutcome::Violated)
    }

    /// Conditions not decidable yet.
    pub fn undecided(&self) -> impl Iterator<Item = (ConditionName, &ConditionResult)> {
        self.with_outcome(ConditionOutcome::Undecided)
    }
}

/// Evaluates every condition of one rule-set.
#[derive(Default)]
pub struct RuleEvaluator {
    _private: (),
}

impl RuleEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluate(
        &self,
        rule: &RuleConfig,
        upstream_pr: &GhPullRequestSnapshot,
    ) -> Result<RuleSetResult, EvaluationError> {
        let mut conditions = BTreeMap::new();
        for name in ConditionName::ALL {
            if let Some(result) = name.evaluate(rule, upstream_pr)? {
                conditions.insert(name, result);
            }
        }

        let outcomes: Vec<ConditionOutcome> = conditions
            .iter()
            .map(|(name, result)| result.outcome(name.polarity()))
            .collect();

        let verdict = if outcomes.contains(&ConditionOutcome::Violated) {
            RuleVerdict::Failure
        } else if outcomes.contains(&ConditionOutcome::Undecided) {
            RuleVerdict::Pending
        } else {
            RuleVerdict::Success
        };

        Ok(RuleSetResult {
            verdict,
            conditions,
        })
    }
}
