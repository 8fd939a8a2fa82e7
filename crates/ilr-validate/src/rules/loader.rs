//! CSV loader for `Rules.csv`.

use std::path::Path;

use ilr_model::Severity;
use ilr_reference::ReferenceData;

use super::category::Category;
use super::registry::{RuleDefinition, RuleRegistry};
use crate::error::{Result, ValidateError};

const NAME_COLUMN: &str = "Rule Name";
const SEVERITY_COLUMN: &str = "Severity";
const CATEGORY_COLUMN: &str = "Category";
const MESSAGE_COLUMN: &str = "Message";

/// Load rule metadata from a CSV file.
///
/// Blank severities default to Error and blank messages to the rule name.
pub fn load_rules(path: &Path) -> Result<RuleRegistry> {
    let load_error = |message: String| ValidateError::RuleLoad {
        path: path.to_path_buf(),
        message,
    };

    let mut reader = ::csv::ReaderBuilder::new()
        .trim(::csv::Trim::All)
        .from_path(path)
        .map_err(|e| load_error(e.to_string()))?;
    let headers = reader
        .headers()
        .map_err(|e| load_error(e.to_string()))?
        .clone();

    let name_idx = find_column(&headers, NAME_COLUMN)
        .ok_or_else(|| load_error(format!("missing column: {NAME_COLUMN}")))?;
    let severity_idx = find_column(&headers, SEVERITY_COLUMN);
    let category_idx = find_column(&headers, CATEGORY_COLUMN);
    let message_idx = find_column(&headers, MESSAGE_COLUMN);

    let mut registry = RuleRegistry::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| load_error(format!("row {}: {e}", index + 1)))?;
        let field = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("");

        let name = field(Some(name_idx));
        if name.is_empty() {
            continue;
        }

        let severity = match field(severity_idx) {
            "" => Severity::Error,
            value => value.parse().map_err(|e| load_error(format!("row {}: {e}", index + 1)))?,
        };
        let message = match field(message_idx) {
            "" => name,
            value => value,
        };

        registry.insert(RuleDefinition {
            name: name.to_string(),
            severity,
            category: Category::parse(field(category_idx)),
            message: message.to_string(),
        });
    }

    tracing::debug!(path = %path.display(), rules = registry.len(), "rule metadata loaded");
    Ok(registry)
}

/// Load the rule metadata file pinned by the reference manifest's `rules` role.
pub fn load_reference_rules(reference: &ReferenceData) -> Result<RuleRegistry> {
    load_rules(&reference.rules_path()?)
}

fn find_column(headers: &::csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.eq_ignore_ascii_case(name))
}
