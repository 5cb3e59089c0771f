//! Rule-set and repository level aggregation of condition results.

mod merge_decision;
mod rule_evaluator;

pub use merge_decision::{DecisionStatus, MergeDecision, MergeDecisionEngine};
pub use rule_evaluator::{RuleEvaluator, RuleSetResult, RuleVerdict};
