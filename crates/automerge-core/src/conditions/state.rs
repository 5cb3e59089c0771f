use automerge_ghapi_interface::types::{GhPullRequestSnapshot, GhPullRequestState};
use automerge_models::RuleConfig;

use super::{ConditionEvaluation, ConditionResult};
use crate::EvaluationError;

pub(super) fn open(rule: &RuleConfig, upstream_pr: &GhPullRequestSnapshot) -> ConditionEvaluation {
    if !rule.require_open {
        return Ok(None);
    }

    Ok(Some(match upstream_pr.state {
        GhPullRequestState::Open => ConditionResult::success(),
        state => ConditionResult::failure().with_message(format!("Pull request is {state}")),
    }))
}

pub(super) fn mergeable(
    rule: &RuleConfig,
    upstream_pr: &GhPullRequestSnapshot,
) -> ConditionEvaluation {
    if !rule.require_mergeable {
        return Ok(None);
    }

    Ok(Some(match upstream_pr.mergeable {
        Some(true) => ConditionResult::success(),
        Some(false) => ConditionResult::failure().with_message("Pull request has conflicts"),
        None => ConditionResult::pending().with_message("Mergeability is not computed yet"),
    }))
}

pub(super) fn blocking_checks(
    rule: &RuleConfig,
    upstream_pr: &GhPullRequestSnapshot,
) -> ConditionEvaluation {
    if !rule.blocking_checks {
        return Ok(None);
    }

    let mut failed = vec![];
    let mut running = vec![];
    for check_run in &upstream_pr.check_runs {
        if check_run.is_completed() {
            let conclusion =
                check_run
                    .conclusion
                    .ok_or_else(|| EvaluationError::MissingCheckConclusion {
                        name: check_run.name.clone(),
                    })?;

            if conclusion.is_blocking() {
                failed.push(check_run.name.as_str());
            }
        } else {
            running.push(check_run.name.as_str());
        }
    }

    Ok(Some(if !failed.is_empty() {
        ConditionResult::success().with_message(format!("Failed checks: {}", failed.join(", ")))
    } else if !running.is_empty() {
        ConditionResult::pending().with_message(format!("Running checks: {}", running.join(", ")))
    } else {
        ConditionResult::failure()
    }))
}
