//! ILR business-rule validation.
//!
//! Rules live in [`checks`], one struct per rule. [`RuleEngine`] runs them
//! over every learner and hands each violation to a
//! [`ValidationErrorHandler`]; [`IssueCollector`] turns those into a
//! [`ValidationReport`](ilr_model::ValidationReport) using the metadata in
//! [`rules`].

pub mod checks;
pub mod config;
pub mod dates;
pub mod derived;
mod engine;
pub mod error;
pub mod handler;
pub mod query;
pub mod report;
pub mod rules;

pub use checks::{CatalogRule, RuleContext, ValidationRule, build_catalog, rule_names};
pub use config::{CONFIG_FILE_NAME, ValidationConfig};
pub use engine::RuleEngine;
pub use error::{Result, ValidateError};
pub use handler::{IssueCollector, RaisedError, ValidationErrorHandler};
pub use report::{REPORT_FILE_NAME, build_report_payload, write_validation_report_json};
pub use rules::{Category, RuleDefinition, RuleRegistry, load_reference_rules, load_rules};
