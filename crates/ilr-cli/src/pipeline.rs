//! Validation pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the ILR message and the validator config
//! 2. **Reference**: Load reference data and rule metadata
//! 3. **Context**: Resolve the academic year and wire rule services
//! 4. **Validate**: Run the rule catalog over every learner
//! 5. **Output**: Write `validation_report.json`
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{Level, debug, info};

use ilr_model::{Learner, Message, MessageHeader, Severity, ValidationReport};
use ilr_reference::{
    AcademicYear, FileData, ReferenceData, StaticLookups, VerifySummary, reference_root,
};
use ilr_validate::{
    Category, IssueCollector, RuleContext, RuleEngine, RuleRegistry, ValidationConfig,
    load_reference_rules, rule_names, write_validation_report_json,
};

use crate::logging::redact_value;

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Read and deserialize an ILR message.
pub fn read_message(path: &Path) -> Result<Message> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let message: Message = serde_json::from_str(&contents)
        .with_context(|| format!("parse ILR message {}", path.display()))?;
    info!(
        ukprn = message.header.ukprn,
        learners = message.learners.len(),
        "message loaded"
    );
    Ok(message)
}

/// Directory holding the message; `.` for a bare file name.
pub fn message_dir(message_path: &Path) -> &Path {
    match message_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Load the validator config.
///
/// An explicit path must exist. Otherwise `ilr-validator.toml` in
/// `search_dir` is used when present, and defaults apply when it is not.
pub fn load_config(explicit: Option<&Path>, search_dir: &Path) -> Result<ValidationConfig> {
    if let Some(path) = explicit {
        return ValidationConfig::load(path)
            .with_context(|| format!("load config {}", path.display()));
    }
    let discovered = ValidationConfig::discover(search_dir)
        .with_context(|| format!("load config from {}", search_dir.display()))?;
    if discovered.is_some() {
        debug!(dir = %search_dir.display(), "config discovered");
    }
    Ok(discovered.unwrap_or_default())
}

// ============================================================================
// Stage 2: Reference
// ============================================================================

/// Result of the reference stage.
#[derive(Debug)]
pub struct ReferenceStage {
    pub reference: ReferenceData,
    pub summary: VerifySummary,
    pub registry: RuleRegistry,
}

/// Directory to load reference data from: flag, then config, then the default root.
pub fn resolve_reference_dir(flag: Option<&Path>, config: &ValidationConfig) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| config.validation.reference_dir.clone())
        .unwrap_or_else(reference_root)
}

/// Load reference data and the rule metadata it pins.
pub fn load_reference(reference_dir: &Path, verify_checksums: bool) -> Result<ReferenceStage> {
    let start = Instant::now();
    let (reference, summary) = ReferenceData::load(reference_dir, verify_checksums)
        .with_context(|| format!("load reference data from {}", reference_dir.display()))?;
    let registry = load_reference_rules(&reference).context("load rule metadata")?;
    info!(
        rules = registry.len(),
        checksums_verified = summary.checksums_verified,
        duration_ms = start.elapsed().as_millis(),
        "reference stage complete"
    );
    Ok(ReferenceStage {
        reference,
        summary,
        registry,
    })
}

// ============================================================================
// Stage 3: Context
// ============================================================================

/// Academic year to validate against: flag, then config, then the year
/// containing the file preparation date.
pub fn resolve_academic_year(
    flag: Option<&str>,
    configured: Option<AcademicYear>,
    header: &MessageHeader,
) -> Result<AcademicYear> {
    if let Some(value) = flag {
        return value
            .parse::<AcademicYear>()
            .with_context(|| format!("invalid --academic-year {value:?}"));
    }
    if let Some(year) = configured {
        return Ok(year);
    }
    AcademicYear::containing(header.file_preparation_date)
        .context("derive academic year from file preparation date")
}

/// Wire every rule service from loaded reference data and the message header.
pub fn build_rule_context(
    reference: ReferenceData,
    header: &MessageHeader,
    academic_year: AcademicYear,
) -> RuleContext {
    RuleContext::new()
        .with_lars(Arc::new(reference.lars))
        .with_fcs(Arc::new(reference.fcs))
        .with_organisations(Arc::new(reference.organisations))
        .with_file_data(Arc::new(FileData::from(header)))
        .with_academic_year(Arc::new(academic_year))
        .with_lookups(Arc::new(StaticLookups::new()))
}

/// Config-disabled rules followed by flag-disabled ones, without repeats.
pub fn merge_disabled(config: &ValidationConfig, flags: &[String]) -> Vec<String> {
    let mut disabled: Vec<String> = Vec::new();
    for name in config.rules.disabled.iter().chain(flags) {
        if !disabled.contains(name) {
            disabled.push(name.clone());
        }
    }
    disabled
}

/// One catalog entry as the `rules` command shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleListing {
    pub name: &'static str,
    /// Severity after config overrides.
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    pub enabled: bool,
}

/// The catalog in order, with the metadata and overrides a run would apply.
pub fn list_rules(registry: &RuleRegistry, config: &ValidationConfig) -> Result<Vec<RuleListing>> {
    let overrides = config
        .severity_overrides()
        .context("config severity overrides")?;
    Ok(rule_names()
        .map(|name| RuleListing {
            name,
            severity: overrides
                .get(name)
                .copied()
                .unwrap_or_else(|| registry.severity(name)),
            category: registry.category(name),
            message: registry.message(name).to_string(),
            enabled: !config.rules.disabled.iter().any(|disabled| disabled == name),
        })
        .collect())
}

// ============================================================================
// Stage 4: Validate
// ============================================================================

/// Result of the validate stage.
#[derive(Debug)]
pub struct ValidateStage {
    pub report: ValidationReport,
    pub rule_count: usize,
}

/// Run every enabled rule over `learners`.
pub fn validate(
    learners: &[Learner],
    ctx: &RuleContext,
    registry: &RuleRegistry,
    disabled: &[String],
    severity_overrides: BTreeMap<String, Severity>,
) -> Result<ValidateStage> {
    let start = Instant::now();
    let engine = RuleEngine::from_context(ctx, disabled).context("build rule catalog")?;
    let collector = IssueCollector::new(registry).with_severity_overrides(severity_overrides);
    let report = engine.execute(learners, collector);

    if tracing::enabled!(Level::DEBUG) {
        for (learner, issues) in report.learner_counts() {
            debug!(learner = redact_value(learner), issues, "learner has issues");
        }
    }
    info!(
        rules = engine.len(),
        disabled = disabled.len(),
        duration_ms = start.elapsed().as_millis(),
        "validate stage complete"
    );
    Ok(ValidateStage {
        report,
        rule_count: engine.len(),
    })
}

// ============================================================================
// Stage 5: Output
// ============================================================================

/// Default output directory: `output/` next to the message.
pub fn default_output_dir(message_path: &Path) -> PathBuf {
    message_dir(message_path).join("output")
}

/// Write the JSON report and return its path.
pub fn output(output_dir: &Path, ukprn: i64, report: &ValidationReport) -> Result<PathBuf> {
    let path = write_validation_report_json(output_dir, ukprn, report)
        .with_context(|| format!("write validation report to {}", output_dir.display()))?;
    info!(path = %path.display(), "validation report written");
    Ok(path)
}
