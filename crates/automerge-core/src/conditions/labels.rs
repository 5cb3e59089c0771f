use automerge_ghapi_interface::types::GhPullRequestSnapshot;
use automerge_models::{Pattern, RuleConfig};

use super::{ConditionEvaluation, ConditionResult};

fn has_label_matching<F: Fn(&str) -> bool>(upstream_pr: &GhPullRequestSnapshot, f: F) -> bool {
    upstream_pr.labels.iter().any(|l| f(l.as_str()))
}

fn missing_labels<'a, P, F>(
    patterns: &'a [P],
    upstream_pr: &GhPullRequestSnapshot,
    matcher: F,
) -> Vec<&'a P>
where
    F: Fn(&P, &str) -> bool,
{
    patterns
        .iter()
        .filter(|p| !has_label_matching(upstream_pr, |l| matcher(*p, l)))
        .collect()
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(super) fn required_labels(
    rule: &RuleConfig,
    upstream_pr: &GhPullRequestSnapshot,
) -> ConditionEvaluation {
    if rule.required_labels.is_empty() {
        return Ok(None);
    }

    let missing = missing_labels(&rule.required_labels, upstream_pr, Pattern::is_match);
    Ok(Some(if missing.is_empty() {
        ConditionResult::success()
    } else {
        ConditionResult::failure().with_message(format!("Missing labels: {}", join(&missing)))
    }))
}

pub(super) fn required_labels_regex(
    rule: &RuleConfig,
    upstream_pr: &GhPullRequestSnapshot,
) -> ConditionEvaluation {
    if rule.required_labels_regex.is_empty() {
        return Ok(None);
    }

    let missing = missing_labels(&rule.required_labels_regex, upstream_pr, |p, l| p.is_match(l));
    Ok(Some(if missing.is_empty() {
        ConditionResult::success()
    } else {
        ConditionResult::failure().with_message(format!("No label matching: {}", join(&missing)))
    }))
}

pub(super) fn blocking_labels(
    rule: &RuleConfig,
    upstream_pr: &GhPullRequestSnapshot,
) -> ConditionEvaluation {
    if rule.blocking_labels.is_empty() {
        return Ok(None);
    }

    let found: Vec<&String> = upstream_pr
        .labels
        .iter()
        .filter(|l| rule.blocking_labels.iter().any(|p| p.is_match(l)))
        .collect();

    Ok(Some(if found.is_empty() {
        ConditionResult::failure()
    } else {
        ConditionResult::success().with_message(format!("Blocking labels: {}", join(&found)))
    }))
}

pub(super) fn blocking_labels_regex(
    rule: &RuleConfig,
    upstream_pr: &GhPullRequestSnapshot,
) -> ConditionEvaluation {
    if rule.blocking_labels_regex.is_empty() {
        return Ok(None);
    }

    let found: Vec<&String> = upstream_pr
        .labels
        .iter()
        .filter(|l| rule.blocking_labels_regex.iter().any(|p| p.is_match(l)))
        .collect();

    Ok(Some(if found.is_empty() {
        ConditionResult::failure()
    } else {
        ConditionResult::success().with_message(format!("Blocking labels: {}", join(&found)))
    }))
}
