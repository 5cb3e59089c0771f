mod pull_request_snapshot;
mod pull_request_state;

pub use pull_request_snapshot::GhPullRequestSnapshot;
pub use pull_request_state::GhPullRequestState;
