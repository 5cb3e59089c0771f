use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Relationship between a user and a repository, as reported by the platform.
///
/// Variants are declared from the least to the most trusted role, so the
/// derived ordering doubles as the role ranking: `MEMBER` counts as "at least
/// `COLLABORATOR`".
#[derive(
    Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorAssociation {
    /// No association.
    #[default]
    None,
    /// First-time user of the platform.
    FirstTimer,
    /// First contribution to this repository.
    FirstTimeContributor,
    /// Previous contributor.
    Contributor,
    /// Invited collaborator.
    Collaborator,
    /// Organization member.
    Member,
    /// Repository owner.
    Owner,
}

impl AuthorAssociation {
    /// Checks whether this role ranks at least as high as `other`.
    pub fn is_at_least(self, other: AuthorAssociation) -> bool {
        self >= other
    }
}

impl Display for AuthorAssociation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serde_plain::to_string(&self).map_err(|_| std::fmt::Error)?)
    }
}

impl FromStr for AuthorAssociation {
    type Err = serde_plain::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_plain::from_str(s)
    }
}
