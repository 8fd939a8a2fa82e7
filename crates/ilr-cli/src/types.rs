use std::path::PathBuf;

use ilr_model::ValidationReport;
use ilr_reference::AcademicYear;

/// Process exit codes.
pub mod exit_code {
    pub const CLEAN: i32 = 0;
    /// Errors or fails were raised.
    pub const ISSUES_FOUND: i32 = 1;
    /// The run itself could not complete.
    pub const RUN_FAILED: i32 = 2;
}

/// Outcome of one `validate` run.
#[derive(Debug)]
pub struct ValidationRunResult {
    pub message_path: PathBuf,
    pub ukprn: i64,
    pub academic_year: AcademicYear,
    pub reference_dir: PathBuf,
    pub checksums_verified: bool,
    pub rule_count: usize,
    /// `None` for dry runs.
    pub report_path: Option<PathBuf>,
    pub report: ValidationReport,
    pub has_errors: bool,
}

impl ValidationRunResult {
    pub fn exit_code(&self) -> i32 {
        if self.has_errors {
            exit_code::ISSUES_FOUND
        } else {
            exit_code::CLEAN
        }
    }
}
