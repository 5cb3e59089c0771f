use automerge_ghapi_interface::types::{GhCheckConclusion, GhCheckStatus};

use crate::{
    conditions::ConditionStatus,
    rules::{DecisionStatus, MergeDecision},
};

#[derive(Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub status: GhCheckStatus,
    pub conclusion: Option<GhCheckConclusion>,
    pub title: &'static str,
    pub summary: String,
}

#[derive(Default)]
pub struct StatusMessageGenerator {
    _private: (),
}

impl StatusMessageGenerator {
    #[tracing::instrument(skip_all, ret)]
    pub fn generate(&self, decision: &MergeDecision) -> StatusMessage {
        let (status, conclusion, title) = match decision.status {
            DecisionStatus::Mergeable => (
                GhCheckStatus::Completed,
                Some(GhCheckConclusion::Success),
                "Ready for merge",
            ),
            DecisionStatus::Pending => (GhCheckStatus::InProgress, None, "Waiting for conditions"),
            DecisionStatus::Blocked => (
                GhCheckStatus::Completed,
                Some(GhCheckConclusion::Neutral),
                "Blocked by conditions",
            ),
        };

        let surfaced = decision.surfaced_conditions();
        let summary = if surfaced.is_empty() {
            "All conditions are met.".to_string()
        } else {
            let lines: Vec<String> = surfaced
                .into_iter()
                .map(|(name, result)| {
                    let explanation = result.message.clone().unwrap_or_else(|| {
                        match result.status {
                            ConditionStatus::Success => "triggered",
                            ConditionStatus::Failure => "not met",
                            ConditionStatus::Pending => "pending",
                        }
                        .to_string()
                    });

                    format!("- `{name}`: {explanation}")
                })
                .collect();

            format!("Conditions:\n{}", lines.join("\n"))
        };

        StatusMessage {
            status,
            conclusion,
            title,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use automerge_models::RuleSetId;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        conditions::{ConditionName, ConditionResult},
        rules::{RuleSetResult, RuleVerdict},
    };

    fn decision(
        status: DecisionStatus,
        verdict: RuleVerdict,
        conditions: Vec<(ConditionName, ConditionResult)>,
    ) -> MergeDecision {
        MergeDecision {
            status,
            rule_sets: vec![(
                RuleSetId::Default,
                RuleSetResult {
                    verdict,
                    conditions: BTreeMap::from_iter(conditions),
                },
            )],
        }
    }

    #[test]
    fn ready() {
        let message = StatusMessageGenerator::default().generate(&decision(
            DecisionStatus::Mergeable,
            RuleVerdict::Success,
            vec![(ConditionName::Open, ConditionResult::success())],
        ));

        assert_eq!(
            message,
            StatusMessage {
                status: GhCheckStatus::Completed,
                conclusion: Some(GhCheckConclusion::Success),
                title: "Ready for merge",
                summary: "All conditions are met.".into()
            }
        );
    }

    #[test]
    fn waiting() {
        let message = StatusMessageGenerator::default().generate(&decision(
            DecisionStatus::Pending,
            RuleVerdict::Pending,
            vec![
                (ConditionName::Open, ConditionResult::success()),
                (ConditionName::Mergeable, ConditionResult::pending()),
            ],
        ));

        assert_eq!(message.status, GhCheckStatus::InProgress);
        assert_eq!(message.conclusion, None);
        assert_eq!(message.title, "Waiting for conditions");
        assert_eq!(message.summary, "Conditions:\n- `mergeable`: pending");
    }

    #[test]
    fn blocked() {
        let message = StatusMessageGenerator::default().generate(&decision(
            DecisionStatus::Blocked,
            RuleVerdict::Failure,
            vec![
                (
                    ConditionName::BlockingLabels,
                    ConditionResult::success().with_message("Blocking labels: wip"),
                ),
                (ConditionName::RequiredTitle, ConditionResult::failure()),
            ],
        ));

        assert_eq!(message.conclusion, Some(GhCheckConclusion::Neutral));
        assert_eq!(message.title, "Blocked by conditions");
        assert_eq!(
            message.summary,
            "Conditions:\n- `blockingLabels`: Blocking labels: wip\n- `requiredTitle`: not met"
        );
    }
}
