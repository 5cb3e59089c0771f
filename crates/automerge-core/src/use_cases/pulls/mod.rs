pub(crate) mod apply_merge_decision;
pub(crate) mod merge_pull_request;
pub(crate) mod process_pull_request;

pub use apply_merge_decision::{ApplyMergeDecisionInterface, MergeOutcome};
pub use merge_pull_request::MergePullRequestInterface;
pub use process_pull_request::ProcessPullRequestInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    apply_merge_decision::MockApplyMergeDecisionInterface,
    merge_pull_request::MockMergePullRequestInterface,
    process_pull_request::MockProcessPullRequestInterface,
};
