use serde::{Deserialize, Serialize};

/// Check status.
#[derive(Debug, Deserialize, Serialize, Copy, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhCheckStatus {
    /// Completed.
    #[default]
    Completed,
    /// In progress.
    InProgress,
    /// Queued.
    Queued,
}

/// Check conclusion.
#[derive(Debug, Deserialize, Serialize, Copy, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhCheckConclusion {
    /// Action required.
    ActionRequired,
    /// Cancelled.
    Cancelled,
    /// Failure.
    Failure,
    /// Neutral.
    Neutral,
    /// Skipped.
    Skipped,
    /// Stale.
    Stale,
    /// Success.
    #[default]
    Success,
    /// Timed out.
    TimedOut,
}

impl GhCheckConclusion {
    /// Does this conclusion prevent a merge?
    pub fn is_blocking(self) -> bool {
        !matches!(self, Self::Success | Self::Neutral | Self::Skipped)
    }
}

/// Check run of a head commit.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhCheckRun {
    /// Name.
    pub name: String,
    /// Status.
    pub status: GhCheckStatus,
    /// Conclusion, set once completed.
    pub conclusion: Option<GhCheckConclusion>,
}

impl GhCheckRun {
    pub fn is_completed(&self) -> bool {
        self.status == GhCheckStatus::Completed
    }
}
