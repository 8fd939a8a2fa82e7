//! Validator configuration (`ilr-validator.toml`).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ilr_model::Severity;
use ilr_reference::AcademicYear;
use serde::Deserialize;

use crate::checks::is_known_rule;
use crate::error::{Result, ValidateError};

pub const CONFIG_FILE_NAME: &str = "ilr-validator.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    pub validation: ValidationSection,
    pub rules: RulesSection,
    /// Rule name to severity (`F`/`E`/`W` or `fail`/`error`/`warning`).
    pub severity: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationSection {
    pub academic_year: Option<String>,
    pub reference_dir: Option<PathBuf>,
    pub verify_checksums: bool,
}

impl Default for ValidationSection {
    fn default() -> Self {
        Self {
            academic_year: None,
            reference_dir: None,
            verify_checksums: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesSection {
    pub disabled: Vec<String>,
}

impl ValidationConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ValidateError::io(path, e))?;
        Self::parse(&contents, path)
    }

    /// Load `ilr-validator.toml` from `dir` if it exists.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }
        Self::load(&path).map(Some)
    }

    /// `origin` names the source in error messages.
    pub fn parse(contents: &str, origin: &Path) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| ValidateError::Config {
            path: origin.to_path_buf(),
            source: e,
        })?;
        config.check_rule_names()?;
        Ok(config)
    }

    /// Every rule named in `[rules] disabled` or `[severity]` must exist.
    pub fn check_rule_names(&self) -> Result<()> {
        let named = self
            .rules
            .disabled
            .iter()
            .map(|name| (name, "rules.disabled"))
            .chain(self.severity.keys().map(|name| (name, "severity")));
        for (name, field) in named {
            if !is_known_rule(name) {
                return Err(ValidateError::UnknownRule {
                    name: name.clone(),
                    field,
                });
            }
        }
        Ok(())
    }

    pub fn academic_year(&self) -> Result<Option<AcademicYear>> {
        self.validation
            .academic_year
            .as_deref()
            .map(|value| value.parse::<AcademicYear>().map_err(ValidateError::from))
            .transpose()
    }

    pub fn severity_overrides(&self) -> Result<BTreeMap<String, Severity>> {
        self.severity
            .iter()
            .map(|(rule, value)| {
                value
                    .parse::<Severity>()
                    .map(|severity| (rule.clone(), severity))
                    .map_err(|_| ValidateError::InvalidSeverity {
                        rule: rule.clone(),
                        value: value.clone(),
                    })
            })
            .collect()
    }
}
