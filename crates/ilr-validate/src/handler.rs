//! Sinks for business-rule violations.

use std::collections::BTreeMap;

use ilr_model::{ErrorMessageParameter, Severity, ValidationIssue};

use crate::rules::{Category, RuleRegistry};

/// Receives every violation a rule raises.
pub trait ValidationErrorHandler {
    fn handle(
        &mut self,
        rule_name: &str,
        learn_ref_number: &str,
        aim_seq_number: Option<i32>,
        parameters: Vec<ErrorMessageParameter>,
    );
}

/// A violation exactly as a rule reported it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaisedError {
    pub rule_name: String,
    pub learn_ref_number: String,
    pub aim_seq_number: Option<i32>,
    pub parameters: Vec<ErrorMessageParameter>,
}

impl RaisedError {
    /// Value of the named parameter, if the rule supplied it.
    pub fn parameter(&self, property_name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.property_name == property_name)
            .map(|p| p.value.as_str())
    }
}

impl ValidationErrorHandler for Vec<RaisedError> {
    fn handle(
        &mut self,
        rule_name: &str,
        learn_ref_number: &str,
        aim_seq_number: Option<i32>,
        parameters: Vec<ErrorMessageParameter>,
    ) {
        self.push(RaisedError {
            rule_name: rule_name.to_string(),
            learn_ref_number: learn_ref_number.to_string(),
            aim_seq_number,
            parameters,
        });
    }
}

/// Turns violations into [`ValidationIssue`]s using rule metadata and
/// per-rule severity overrides.
#[derive(Debug)]
pub struct IssueCollector<'a> {
    registry: &'a RuleRegistry,
    severity_overrides: BTreeMap<String, Severity>,
    issues: Vec<ValidationIssue>,
}

impl<'a> IssueCollector<'a> {
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self {
            registry,
            severity_overrides: BTreeMap::new(),
            issues: Vec::new(),
        }
    }

    pub fn with_severity_overrides(mut self, overrides: BTreeMap<String, Severity>) -> Self {
        self.severity_overrides = overrides;
        self
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }

    fn severity(&self, rule_name: &str) -> Severity {
        self.severity_overrides
            .get(rule_name)
            .copied()
            .unwrap_or_else(|| self.registry.severity(rule_name))
    }
}

impl ValidationErrorHandler for IssueCollector<'_> {
    fn handle(
        &mut self,
        rule_name: &str,
        learn_ref_number: &str,
        aim_seq_number: Option<i32>,
        parameters: Vec<ErrorMessageParameter>,
    ) {
        let category = match self.registry.category(rule_name) {
            Category::Unknown => None,
            category => Some(category.label().to_string()),
        };
        let issue = ValidationIssue {
            rule_name: rule_name.to_string(),
            learn_ref_number: learn_ref_number.to_string(),
            aim_seq_number,
            severity: self.severity(rule_name),
            category,
            message: self.registry.message(rule_name).to_string(),
            parameters,
        };
        tracing::debug!(rule = rule_name, severity = %issue.severity, "rule raised");
        self.issues.push(issue);
    }
}
