//! `ilr-validator.toml` parsing.

use std::path::Path;

use ilr_model::Severity;
use ilr_validate::{CONFIG_FILE_NAME, ValidateError, ValidationConfig};

fn parse(contents: &str) -> Result<ValidationConfig, ValidateError> {
    ValidationConfig::parse(contents, Path::new(CONFIG_FILE_NAME))
}

#[test]
fn parses_all_sections() -> anyhow::Result<()> {
    let config = parse(
        r#"
[validation]
academic_year = "2025/26"
reference_dir = "ref"
verify_checksums = false

[rules]
disabled = ["LearnAimRef_30"]

[severity]
AFinDate_02 = "W"
ConRefNumber_01 = "fail"
"#,
    )?;

    assert_eq!(config.validation.reference_dir.as_deref(), Some(Path::new("ref")));
    assert!(!config.validation.verify_checksums);
    assert_eq!(config.rules.disabled, vec!["LearnAimRef_30".to_string()]);
    assert_eq!(config.academic_year()?.map(|y| y.start_year()), Some(2025));

    let overrides = config.severity_overrides()?;
    assert_eq!(overrides.get("AFinDate_02"), Some(&Severity::Warning));
    assert_eq!(overrides.get("ConRefNumber_01"), Some(&Severity::Fail));
    Ok(())
}

#[test]
fn empty_config_verifies_checksums() -> anyhow::Result<()> {
    let config = parse("")?;

    assert!(config.validation.verify_checksums);
    assert!(config.rules.disabled.is_empty());
    assert_eq!(config.academic_year()?, None);
    assert!(config.severity_overrides()?.is_empty());
    Ok(())
}

#[test]
fn rejects_unknown_rule_names() {
    let err = parse("[rules]\ndisabled = [\"Nope_01\"]\n").unwrap_err();
    assert!(matches!(
        err,
        ValidateError::UnknownRule { ref name, field: "rules.disabled" } if name == "Nope_01"
    ));

    let err = parse("[severity]\nNope_02 = \"E\"\n").unwrap_err();
    assert!(matches!(err, ValidateError::UnknownRule { field: "severity", .. }));
}

#[test]
fn rejects_invalid_severity() -> anyhow::Result<()> {
    let config = parse("[severity]\nAFinDate_02 = \"info\"\n")?;

    let err = config.severity_overrides().unwrap_err();
    assert!(matches!(
        err,
        ValidateError::InvalidSeverity { ref rule, ref value } if rule == "AFinDate_02" && value == "info"
    ));
    Ok(())
}

#[test]
fn rejects_unknown_keys() {
    let err = parse("[validation]\nacademic_yr = \"2526\"\n").unwrap_err();
    assert!(matches!(err, ValidateError::Config { .. }));
}

#[test]
fn rejects_malformed_academic_year() -> anyhow::Result<()> {
    let config = parse("[validation]\nacademic_year = \"2025/27\"\n")?;
    assert!(matches!(
        config.academic_year(),
        Err(ValidateError::Reference(_))
    ));
    Ok(())
}

#[test]
fn discover_reads_config_from_directory() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    assert!(ValidationConfig::discover(dir.path())?.is_none());

    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[validation]\nacademic_year = \"2425\"\n",
    )?;
    let config = ValidationConfig::discover(dir.path())?.expect("config found");
    assert_eq!(config.academic_year()?.map(|y| y.code()), Some("2425".to_string()));
    Ok(())
}
