use serde::{Deserialize, Serialize};

/// Pull request branch.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhBranch {
    /// Branch name.
    #[serde(rename = "ref")]
    pub reference: String,
    /// Commit SHA.
    pub sha: String,
    /// Full name of the repository holding the branch.
    pub repository: String,
}
