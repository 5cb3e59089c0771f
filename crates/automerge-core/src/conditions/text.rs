use automerge_ghapi_interface::types::GhPullRequestSnapshot;
use automerge_models::{RegexPattern, RuleConfig};

use super::{ConditionEvaluation, ConditionResult};

fn body(upstream_pr: &GhPullRequestSnapshot) -> &str {
    upstream_pr.body.as_deref().unwrap_or_default()
}

fn required_match(pattern: Option<&RegexPattern>, field: &str, value: &str) -> ConditionEvaluation {
    Ok(pattern.map(|p| {
        if p.is_match(value) {
            ConditionResult::success()
        } else {
            ConditionResult::failure().with_message(format!("{field} does not match {p}"))
        }
    }))
}

fn blocking_match(pattern: Option<&RegexPattern>, field: &str, value: &str) -> ConditionEvaluation {
    Ok(pattern.map(|p| {
        if p.is_match(value) {
            ConditionResult::success().with_message(format!("{field} matches {p}"))
        } else {
            ConditionResult::failure()
        }
    }))
}

pub(super) fn required_title(
    rule: &RuleConfig,
    upstream_pr: &GhPullRequestSnapshot,
) -> ConditionEvaluation {
    required_match(rule.required_title_regex.as_ref(), "Title", &upstream_pr.title)
}

pub(super) fn blocking_title(
    rule: &RuleConfig,
    upstream_pr: &GhPullRequestSnapshot,
) -> ConditionEvaluation {
    blocking_match(rule.blocking_title_regex.as_ref(), "Title", &upstream_pr.title)
}

pub(super) fn required_body(
    rule: &RuleConfig,
    upstream_pr: &GhPullRequestSnapshot,
) -> ConditionEvaluation {
    required_match(rule.required_body_regex.as_ref(), "Body", body(upstream_pr))
}

pub(super) fn blocking_body(
    rule: &RuleConfig,
    upstream_pr: &GhPullRequestSnapshot,
) -> ConditionEvaluation {
    blocking_match(rule.blocking_body_regex.as_ref(), "Body", body(upstream_pr))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::conditions::ConditionStatus;

    fn regex(pattern: &str) -> Option<RegexPattern> {
        Some(RegexPattern::new(pattern).unwrap())
    }

    #[test]
    fn title() {
        let rule = RuleConfig {
            required_title_regex: regex("^feat"),
            blocking_title_regex: regex("WIP"),
            ..Default::default()
        };
        let upstream_pr = GhPullRequestSnapshot {
            title: "feat: WIP stuff".into(),
            ..Default::default()
        };

        let required = required_title(&rule, &upstream_pr).unwrap().unwrap();
        assert_eq!(required.status, ConditionStatus::Success);

        let blocking = blocking_title(&rule, &upstream_pr).unwrap().unwrap();
        assert_eq!(blocking.status, ConditionStatus::Success);
        assert_eq!(blocking.message.as_deref(), Some("Title matches /WIP/"));
    }

    #[test]
    fn missing_body_is_empty() {
        let rule = RuleConfig {
            required_body_regex: regex("Closes #[0-9]+"),
            blocking_body_regex: regex("^$"),
            ..Default::default()
        };
        let upstream_pr = GhPullRequestSnapshot::default();

        let required = required_body(&rule, &upstream_pr).unwrap().unwrap();
        assert_eq!(required.status, ConditionStatus::Failure);
        assert_eq!(
            required.message.as_deref(),
            Some("Body does not match /Closes #[0-9]+/")
        );

        let blocking = blocking_body(&rule, &upstream_pr).unwrap().unwrap();
        assert_eq!(blocking.status, ConditionStatus::Success);
    }
}
