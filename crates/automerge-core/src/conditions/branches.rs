use automerge_ghapi_interface::types::GhPullRequestSnapshot;
use automerge_models::RuleConfig;

use super::{ConditionEvaluation, ConditionResult};

pub(super) fn required_base_branches(
    rule: &RuleConfig,
    upstream_pr: &GhPullRequestSnapshot,
) -> ConditionEvaluation {
    if rule.required_base_branches.is_empty() {
        return Ok(None);
    }

    let base = &upstream_pr.base.reference;
    Ok(Some(
        if rule.required_base_branches.iter().any(|p| p.is_match(base)) {
            ConditionResult::success()
        } else {
            ConditionResult::failure()
                .with_message(format!("Base branch '{base}' is not allowed"))
        },
    ))
}

pub(super) fn blocking_base_branches(
    rule: &RuleConfig,
    upstream_pr: &GhPullRequestSnapshot,
) -> ConditionEvaluation {
    if rule.blocking_base_branches.is_empty() {
        return Ok(None);
    }

    let base = &upstream_pr.base.reference;
    Ok(Some(
        if rule.blocking_base_branches.iter().any(|p| p.is_match(base)) {
            ConditionResult::success().with_message(format!("Base branch '{base}' is blocked"))
        } else {
            ConditionResult::failure()
        },
    ))
}
