use serde::{Deserialize, Serialize};

use super::{GhCheckConclusion, GhCheckStatus};

/// Check run to create or update on a commit.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhCheckRunReport {
    /// Check run name.
    pub name: String,
    /// Commit SHA.
    pub head_sha: String,
    /// Status.
    pub status: GhCheckStatus,
    /// Conclusion, only for completed reports.
    pub conclusion: Option<GhCheckConclusion>,
    /// Output title.
    pub title: String,
    /// Output summary (markdown).
    pub summary: String,
}
