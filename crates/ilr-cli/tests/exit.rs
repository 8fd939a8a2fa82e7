//! Exit code mapping and logging start-up failures.

use std::path::PathBuf;

use anyhow::Result;
use ilr_cli::logging::{LogConfig, init_logging};
use ilr_cli::types::{ValidationRunResult, exit_code};
use ilr_model::{Severity, ValidationIssue, ValidationReport};
use ilr_reference::AcademicYear;

fn run_result(issues: Vec<ValidationIssue>) -> Result<ValidationRunResult> {
    let report = ValidationReport {
        learner_count: 1,
        issues,
    };
    Ok(ValidationRunResult {
        message_path: PathBuf::from("ILR.json"),
        ukprn: 10000001,
        academic_year: AcademicYear::new(2025)?,
        reference_dir: PathBuf::from("reference"),
        checksums_verified: true,
        rule_count: 39,
        report_path: None,
        has_errors: report.has_errors(),
        report,
    })
}

fn issue(severity: Severity) -> ValidationIssue {
    ValidationIssue {
        rule_name: "LearnAimRef_30".to_string(),
        learn_ref_number: "L1".to_string(),
        aim_seq_number: Some(1),
        severity,
        category: None,
        message: String::new(),
        parameters: vec![],
    }
}

#[test]
fn test_exit_codes_are_distinct() {
    assert_eq!(exit_code::CLEAN, 0);
    assert_eq!(exit_code::ISSUES_FOUND, 1);
    assert_eq!(exit_code::RUN_FAILED, 2);
}

#[test]
fn test_run_result_exit_code_follows_blocking_issues() -> Result<()> {
    assert_eq!(run_result(vec![])?.exit_code(), exit_code::CLEAN);
    assert_eq!(
        run_result(vec![issue(Severity::Warning)])?.exit_code(),
        exit_code::CLEAN
    );
    assert_eq!(
        run_result(vec![issue(Severity::Error)])?.exit_code(),
        exit_code::ISSUES_FOUND
    );
    assert_eq!(
        run_result(vec![issue(Severity::Fail)])?.exit_code(),
        exit_code::ISSUES_FOUND
    );
    Ok(())
}

#[test]
fn test_unopenable_log_file_is_a_start_up_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = LogConfig {
        log_file: Some(dir.path().join("missing").join("ilr.log")),
        ..LogConfig::default()
    };

    assert!(init_logging(&config).is_err());
    Ok(())
}
