//! JSON validation report.

use ilr_model::{ErrorMessageParameter, Severity, ValidationIssue, ValidationReport};
use ilr_validate::report::{REPORT_SCHEMA, build_report_payload};
use ilr_validate::{REPORT_FILE_NAME, write_validation_report_json};

fn sample_report() -> ValidationReport {
    ValidationReport {
        learner_count: 2,
        issues: vec![
            ValidationIssue {
                rule_name: "ConRefNumber_01".to_string(),
                learn_ref_number: "L0001".to_string(),
                aim_seq_number: Some(1),
                severity: Severity::Error,
                category: Some("LearningDelivery".to_string()),
                message: "Contract reference missing".to_string(),
                parameters: vec![
                    ErrorMessageParameter::new("FundModel", 70),
                    ErrorMessageParameter::new("ConRefNumber", None::<String>),
                ],
            },
            ValidationIssue {
                rule_name: "PriorAttain_01".to_string(),
                learn_ref_number: "L0002".to_string(),
                aim_seq_number: None,
                severity: Severity::Warning,
                category: None,
                message: "Prior attainment missing".to_string(),
                parameters: vec![],
            },
        ],
    }
}

#[test]
fn report_payload_snapshot() {
    let payload = build_report_payload(
        10000001,
        &sample_report(),
        "2025-10-01T09:00:00+00:00".to_string(),
    );

    insta::assert_json_snapshot!(payload, @r#"
    {
      "schema": "ilr-validator.validation-report",
      "schema_version": 1,
      "generated_at": "2025-10-01T09:00:00+00:00",
      "ukprn": 10000001,
      "learner_count": 2,
      "error_count": 1,
      "warning_count": 1,
      "fail_count": 0,
      "rule_counts": {
        "ConRefNumber_01": 1,
        "PriorAttain_01": 1
      },
      "issues": [
        {
          "severity": "error",
          "rule_name": "ConRefNumber_01",
          "learn_ref_number": "L0001",
          "aim_seq_number": 1,
          "category": "LearningDelivery",
          "message": "Contract reference missing",
          "parameters": [
            {
              "property_name": "FundModel",
              "value": "70"
            },
            {
              "property_name": "ConRefNumber",
              "value": ""
            }
          ]
        },
        {
          "severity": "warning",
          "rule_name": "PriorAttain_01",
          "learn_ref_number": "L0002",
          "aim_seq_number": null,
          "category": null,
          "message": "Prior attainment missing",
          "parameters": []
        }
      ]
    }
    "#);
}

#[test]
fn writes_report_file() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let output_dir = dir.path().join("out");

    let path = write_validation_report_json(&output_dir, 10000001, &sample_report())?;

    assert_eq!(path, output_dir.join(REPORT_FILE_NAME));
    let contents = std::fs::read_to_string(&path)?;
    assert!(contents.ends_with("}\n"));
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    assert_eq!(json["schema"], REPORT_SCHEMA);
    assert_eq!(json["error_count"], 1);
    assert_eq!(json["issues"].as_array().map(Vec::len), Some(2));
    Ok(())
}
