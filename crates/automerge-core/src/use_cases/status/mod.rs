pub(crate) mod report_merge_status;
pub(crate) mod utils;

pub use report_merge_status::ReportMergeStatusInterface;
pub use utils::{StatusMessage, StatusMessageGenerator};

#[cfg(any(test, feature = "testkit"))]
pub use self::report_merge_status::MockReportMergeStatusInterface;
