//! JSON validation report.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use ilr_model::{ErrorMessageParameter, Severity, ValidationReport};
use serde::Serialize;

use crate::error::{Result, ValidateError};

pub const REPORT_SCHEMA: &str = "ilr-validator.validation-report";
pub const REPORT_SCHEMA_VERSION: u32 = 1;
pub const REPORT_FILE_NAME: &str = "validation_report.json";

#[derive(Debug, Serialize)]
pub struct ValidationReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub ukprn: i64,
    pub learner_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub fail_count: usize,
    pub rule_counts: BTreeMap<String, usize>,
    pub issues: Vec<ValidationIssueJson>,
}

#[derive(Debug, Serialize)]
pub struct ValidationIssueJson {
    pub severity: Severity,
    pub rule_name: String,
    pub learn_ref_number: String,
    pub aim_seq_number: Option<i32>,
    pub category: Option<String>,
    pub message: String,
    pub parameters: Vec<ErrorMessageParameter>,
}

pub fn build_report_payload(
    ukprn: i64,
    report: &ValidationReport,
    generated_at: String,
) -> ValidationReportPayload {
    ValidationReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at,
        ukprn,
        learner_count: report.learner_count,
        error_count: report.error_count(),
        warning_count: report.warning_count(),
        fail_count: report.fail_count(),
        rule_counts: report.rule_counts(),
        issues: report
            .issues
            .iter()
            .map(|issue| ValidationIssueJson {
                severity: issue.severity,
                rule_name: issue.rule_name.clone(),
                learn_ref_number: issue.learn_ref_number.clone(),
                aim_seq_number: issue.aim_seq_number,
                category: issue.category.clone(),
                message: issue.message.clone(),
                parameters: issue.parameters.clone(),
            })
            .collect(),
    }
}

/// Write `validation_report.json` into `output_dir` and return its path.
pub fn write_validation_report_json(
    output_dir: &Path,
    ukprn: i64,
    report: &ValidationReport,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).map_err(|e| ValidateError::io(output_dir, e))?;
    let output_path = output_dir.join(REPORT_FILE_NAME);
    let payload = build_report_payload(ukprn, report, Utc::now().to_rfc3339());
    let json = serde_json::to_string_pretty(&payload).map_err(|e| ValidateError::Json {
        path: output_path.clone(),
        source: e,
    })?;
    std::fs::write(&output_path, format!("{json}\n"))
        .map_err(|e| ValidateError::io(&output_path, e))?;
    Ok(output_path)
}
