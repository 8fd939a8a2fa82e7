//! Rule metadata indexed by rule name.

use std::collections::BTreeMap;

use ilr_model::Severity;

use super::category::Category;

/// Severity, category and message of one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDefinition {
    pub name: String,
    pub severity: Severity,
    pub category: Category,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: BTreeMap<String, RuleDefinition>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, rule: RuleDefinition) {
        self.rules.insert(rule.name.clone(), rule);
    }

    pub fn get(&self, name: &str) -> Option<&RuleDefinition> {
        self.rules.get(name)
    }

    /// Defaults to [`Severity::Error`] for rules without metadata.
    pub fn severity(&self, name: &str) -> Severity {
        self.get(name).map_or(Severity::Error, |rule| rule.severity)
    }

    /// Defaults to the rule name for rules without metadata.
    pub fn message<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).map_or(name, |rule| rule.message.as_str())
    }

    pub fn category(&self, name: &str) -> Category {
        self.get(name).map_or(Category::Unknown, |rule| rule.category)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<RuleDefinition> for RuleRegistry {
    fn from_iter<I: IntoIterator<Item = RuleDefinition>>(iter: I) -> Self {
        let mut registry = Self::new();
        for rule in iter {
            registry.insert(rule);
        }
        registry
    }
}
