use serde::Deserialize;

use crate::{MergeMethod, RuleConfig};

/// Effective configuration of a repository.
///
/// The top-level rule fields form an implicit rule-set that is evaluated
/// alongside every entry of `rules`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryConfig {
    #[serde(flatten)]
    pub defaults: RuleConfig,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
    /// Update the head branch when it is behind its base instead of merging.
    #[serde(default)]
    pub update_branch: bool,
    #[serde(default)]
    pub delete_branch_after_merge: bool,
    #[serde(default)]
    pub merge_method: MergeMethod,
    /// Commit message template; `{title}`, `{number}` and `{body}` are replaced.
    #[serde(default)]
    pub merge_commit_message: Option<String>,
    /// Report the merge decision as a check run.
    #[serde(default)]
    pub report_status: bool,
}

/// Identity of a rule-set inside a [`RepositoryConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleSetId {
    /// The implicit top-level rule-set.
    Default,
    /// Entry of the `rules` list, by position.
    Rule(usize),
}

impl std::fmt::Display for RuleSetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::Rule(index) => write!(f, "rules[{index}]"),
        }
    }
}

impl RepositoryConfig {
    /// Configuration holding a single rule-set.
    pub fn from_rule(rule: RuleConfig) -> Self {
        Self {
            defaults: rule,
            ..Default::default()
        }
    }

    /// Every rule-set in evaluation order, the implicit one first.
    pub fn rule_sets(&self) -> impl Iterator<Item = (RuleSetId, &RuleConfig)> {
        std::iter::once((RuleSetId::Default, &self.defaults)).chain(
            self.rules
                .iter()
                .enumerate()
                .map(|(index, rule)| (RuleSetId::Rule(index), rule)),
        )
    }
}
