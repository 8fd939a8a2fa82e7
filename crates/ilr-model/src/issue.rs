use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The whole file is rejected.
    Fail,
    /// The record is excluded from funding until fixed.
    Error,
    /// Should review.
    Warning,
}

impl Severity {
    /// Single-letter ILR code (F, E, W).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fail => "F",
            Self::Error => "E",
            Self::Warning => "W",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }

    /// Errors and fails both block funding.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Fail | Self::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f" | "fail" => Ok(Self::Fail),
            "e" | "error" => Ok(Self::Error),
            "w" | "warning" => Ok(Self::Warning),
            _ => Err(ModelError::InvalidSeverity(s.to_string())),
        }
    }
}

/// A named value shown alongside a validation error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessageParameter {
    pub property_name: String,
    pub value: String,
}

impl ErrorMessageParameter {
    pub fn new(property_name: impl Into<String>, value: impl ParameterValue) -> Self {
        Self {
            property_name: property_name.into(),
            value: value.render(),
        }
    }
}

/// Rendering of field values for error message parameters.
///
/// Dates render as `dd/MM/yyyy`, absent values as an empty string.
pub trait ParameterValue {
    fn render(&self) -> String;
}

impl ParameterValue for NaiveDate {
    fn render(&self) -> String {
        self.format("%d/%m/%Y").to_string()
    }
}

impl ParameterValue for str {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl ParameterValue for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl ParameterValue for i32 {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl ParameterValue for i64 {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: ParameterValue> ParameterValue for Option<T> {
    fn render(&self) -> String {
        self.as_ref().map(ParameterValue::render).unwrap_or_default()
    }
}

impl<T: ParameterValue + ?Sized> ParameterValue for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

/// A business-rule violation raised against a learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub rule_name: String,
    pub learn_ref_number: String,
    /// Learning delivery the issue belongs to; learner-level issues carry none.
    pub aim_seq_number: Option<i32>,
    pub severity: Severity,
    pub category: Option<String>,
    pub message: String,
    pub parameters: Vec<ErrorMessageParameter>,
}

/// Validation outcome for a whole submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub learner_count: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn fail_count(&self) -> usize {
        self.count_severity(Severity::Fail)
    }

    pub fn error_count(&self) -> usize {
        self.count_severity(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|issue| issue.severity.is_blocking())
    }

    /// Number of issues raised by each rule, ordered by rule name.
    pub fn rule_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for issue in &self.issues {
            *counts.entry(issue.rule_name.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of issues raised against each learner reference, ordered by
    /// reference. Learners sharing a reference number share one entry.
    pub fn learner_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for issue in &self.issues {
            *counts.entry(issue.learn_ref_number.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Issues raised against one learner.
    pub fn issues_for<'a>(
        &'a self,
        learn_ref_number: &'a str,
    ) -> impl Iterator<Item = &'a ValidationIssue> + 'a {
        self.issues
            .iter()
            .filter(move |issue| issue.learn_ref_number == learn_ref_number)
    }

    fn count_severity(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }
}
