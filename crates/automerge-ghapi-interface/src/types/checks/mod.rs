mod check_run;
mod check_run_report;

pub use check_run::{GhCheckConclusion, GhCheckRun, GhCheckStatus};
pub use check_run_report::GhCheckRunReport;
