use std::collections::HashSet;

use automerge_ghapi_interface::types::{GhPullRequestSnapshot, GhReviewState};
use automerge_models::{AuthorAssociation, RuleConfig};

use super::{ConditionEvaluation, ConditionResult};
use crate::EvaluationError;

/// Reviews must be reduced to one latest review per reviewer upstream.
fn ensure_latest_reviews(upstream_pr: &GhPullRequestSnapshot) -> Result<(), EvaluationError> {
    let mut seen = HashSet::new();
    for review in &upstream_pr.reviews {
        if !seen.insert(review.user.login.as_str()) {
            return Err(EvaluationError::DuplicateReviewer {
                login: review.user.login.clone(),
            });
        }
    }

    Ok(())
}

pub(super) fn minimum_approvals(
    rule: &RuleConfig,
    upstream_pr: &GhPullRequestSnapshot,
) -> ConditionEvaluation {
    if rule.min_approvals.is_empty() {
        return Ok(None);
    }

    ensure_latest_reviews(upstream_pr)?;

    let unmet: Vec<String> = rule
        .min_approvals
        .iter()
        .filter_map(|(role, required)| {
            let count = upstream_pr.count_reviews_from(GhReviewState::Approved, *role);
            (count < *required).then(|| format!("{role}: {count}/{required}"))
        })
        .collect();

    Ok(Some(if unmet.is_empty() {
        ConditionResult::success()
    } else {
        ConditionResult::failure()
            .with_message(format!("Not enough approvals ({})", unmet.join(", ")))
    }))
}

pub(super) fn maximum_changes_requested(
    rule: &RuleConfig,
    upstream_pr: &GhPullRequestSnapshot,
) -> ConditionEvaluation {
    if rule.max_requested_changes.is_empty() {
        return Ok(None);
    }

    ensure_latest_reviews(upstream_pr)?;

    let exceeded: Vec<String> = rule
        .max_requested_changes
        .iter()
        .filter_map(|(role, maximum)| {
            let count = upstream_pr.count_reviews_from(GhReviewState::ChangesRequested, *role);
            (count > *maximum).then(|| format!("{role}: {count}/{maximum}"))
        })
        .collect();

    Ok(Some(if exceeded.is_empty() {
        ConditionResult::success()
    } else {
        ConditionResult::failure()
            .with_message(format!("Too many changes requested ({})", exceeded.join(", ")))
    }))
}

pub(super) fn required_reviewers(
    rule: &RuleConfig,
    upstream_pr: &GhPullRequestSnapshot,
) -> ConditionEvaluation {
    if rule.required_reviewers.is_empty() {
        return Ok(None);
    }

    ensure_latest_reviews(upstream_pr)?;

    let missing: Vec<&str> = rule
        .required_reviewers
        .iter()
        .map(String::as_str)
        .filter(|login| {
            !upstream_pr
                .reviews
                .iter()
                .any(|r| r.user.login == *login && r.state == GhReviewState::Approved)
        })
        .collect();

    Ok(Some(if missing.is_empty() {
        ConditionResult::success()
    } else {
        ConditionResult::failure()
            .with_message(format!("Missing approval from: {}", missing.join(", ")))
    }))
}

pub(super) fn required_author_role(
    rule: &RuleConfig,
    upstream_pr: &GhPullRequestSnapshot,
) -> ConditionEvaluation {
    if rule.required_author_role == AuthorAssociation::None {
        return Ok(None);
    }

    Ok(Some(
        if upstream_pr
            .author_association
            .is_at_least(rule.required_author_role)
        {
            ConditionResult::success()
        } else {
            ConditionResult::failure().with_message(format!(
                "Author is {}, {} required",
                upstream_pr.author_association, rule.required_author_role
            ))
        },
    ))
}
