//! Merge decision engine and per-repository scheduling.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

pub mod conditions;
mod context;
pub mod errors;
pub mod rules;
pub mod services;
pub mod use_cases;
pub mod workers;

pub use context::CoreContext;
pub use errors::{CoreError, EvaluationError, Result};
use shaku::module;
use use_cases::{
    pulls::{
        apply_merge_decision::ApplyMergeDecision, merge_pull_request::MergePullRequest,
        process_pull_request::ProcessPullRequest,
    },
    status::report_merge_status::ReportMergeStatus,
};

module! {
    pub CoreModule {
        components = [
            ApplyMergeDecision, MergePullRequest, ProcessPullRequest, ReportMergeStatus
        ],
        providers = []
    }
}
