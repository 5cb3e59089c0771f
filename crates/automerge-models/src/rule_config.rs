use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{AuthorAssociation, Pattern, RegexPattern};

/// Parameters of one rule-set.
///
/// `RuleConfig::default()` is fully vacuous: every condition is disabled.
/// Decoding a rule from configuration applies the bot defaults instead (see
/// [`RuleConfig::recommended`]): no changes requested by anyone, and the
/// open / mergeable / checks conditions switched on.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleConfig {
    /// Minimum approvals, keyed by the lowest reviewer role that counts.
    #[serde(default)]
    pub min_approvals: BTreeMap<AuthorAssociation, u32>,
    /// Logins that must have approved.
    #[serde(default)]
    pub required_reviewers: Vec<String>,
    /// Maximum changes requested, keyed by the lowest reviewer role that counts.
    #[serde(default = "default_max_requested_changes")]
    pub max_requested_changes: BTreeMap<AuthorAssociation, u32>,
    #[serde(default)]
    pub required_labels: Vec<Pattern>,
    #[serde(default)]
    pub blocking_labels: Vec<Pattern>,
    #[serde(default)]
    pub required_labels_regex: Vec<RegexPattern>,
    #[serde(default)]
    pub blocking_labels_regex: Vec<RegexPattern>,
    #[serde(default)]
    pub required_title_regex: Option<RegexPattern>,
    #[serde(default)]
    pub blocking_title_regex: Option<RegexPattern>,
    #[serde(default)]
    pub required_body_regex: Option<RegexPattern>,
    #[serde(default)]
    pub blocking_body_regex: Option<RegexPattern>,
    #[serde(default)]
    pub required_base_branches: Vec<Pattern>,
    #[serde(default)]
    pub blocking_base_branches: Vec<Pattern>,
    /// Lowest role the author must hold.
    #[serde(default)]
    pub required_author_role: AuthorAssociation,
    #[serde(default = "enabled")]
    pub require_open: bool,
    #[serde(default = "enabled")]
    pub require_mergeable: bool,
    #[serde(default = "enabled")]
    pub blocking_checks: bool,
}

impl RuleConfig {
    /// Rule configuration equivalent to an empty configuration entry.
    pub fn recommended() -> Self {
        Self {
            max_requested_changes: default_max_requested_changes(),
            require_open: true,
            require_mergeable: true,
            blocking_checks: true,
            ..Default::default()
        }
    }
}

fn default_max_requested_changes() -> BTreeMap<AuthorAssociation, u32> {
    BTreeMap::from([(AuthorAssociation::None, 0)])
}

fn enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_entry_uses_recommended_defaults() {
        let rule: RuleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(rule, RuleConfig::recommended());
    }

    #[test]
    fn decode_entry() {
        let rule: RuleConfig = serde_json::from_str(
            r#"{
                "minApprovals": {"MEMBER": 2},
                "requiredLabels": ["ready"],
                "blockingTitleRegex": "^WIP",
                "requiredAuthorRole": "COLLABORATOR",
                "requireMergeable": false
            }"#,
        )
        .unwrap();

        assert_eq!(
            rule.min_approvals,
            BTreeMap::from([(AuthorAssociation::Member, 2)])
        );
        assert_eq!(rule.required_labels, vec![Pattern::from("ready")]);
        assert_eq!(
            rule.blocking_title_regex.as_ref().map(RegexPattern::as_str),
            Some("^WIP")
        );
        assert_eq!(rule.required_author_role, AuthorAssociation::Collaborator);
        assert!(!rule.require_mergeable);
        assert!(rule.require_open);
        assert_eq!(
            rule.max_requested_changes,
            BTreeMap::from([(AuthorAssociation::None, 0)])
        );
    }

    #[test]
    fn decode_unknown_role() {
        let result = serde_json::from_str::<RuleConfig>(r#"{"minApprovals": {"ADMIN": 1}}"#);
        assert!(result.is_err());
    }
}
