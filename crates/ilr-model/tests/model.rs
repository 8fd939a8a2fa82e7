//! Tests for ilr-model types.

use chrono::NaiveDate;
use ilr_model::{
    ErrorMessageParameter, Message, Severity, ValidationIssue, ValidationReport,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn issue(rule: &str, learner: &str, severity: Severity) -> ValidationIssue {
    ValidationIssue {
        rule_name: rule.to_string(),
        learn_ref_number: learner.to_string(),
        aim_seq_number: Some(1),
        severity,
        category: None,
        message: String::new(),
        parameters: vec![],
    }
}

#[test]
fn report_counts_by_severity() {
    let report = ValidationReport {
        learner_count: 2,
        issues: vec![
            issue("AFinDate_02", "L1", Severity::Error),
            issue("AFinDate_02", "L2", Severity::Error),
            issue("LearnAimRef_30", "L1", Severity::Warning),
        ],
    };
    assert_eq!(report.error_count(), 2);
    assert_eq!(report.warning_count(), 1);
    assert_eq!(report.fail_count(), 0);
    assert!(report.has_errors());
    assert_eq!(report.rule_counts().get("AFinDate_02"), Some(&2));
    assert_eq!(report.issues_for("L1").count(), 2);
}

#[test]
fn learner_counts_merge_shared_reference_numbers() {
    let report = ValidationReport {
        learner_count: 3,
        issues: vec![
            issue("LearnAimRef_01", "DUP", Severity::Error),
            issue("DateOfBirth_01", "L2", Severity::Error),
            issue("PriorAttain_01", "DUP", Severity::Error),
            issue("LearnAimRef_30", "DUP", Severity::Warning),
        ],
    };

    let counts = report.learner_counts();

    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get("DUP"), Some(&3));
    assert_eq!(counts.get("L2"), Some(&1));
    assert_eq!(counts.values().sum::<usize>(), report.issues.len());
}

#[test]
fn warnings_alone_do_not_block() {
    let report = ValidationReport {
        learner_count: 1,
        issues: vec![issue("LearnAimRef_30", "L1", Severity::Warning)],
    };
    assert!(!report.has_errors());
}

#[test]
fn severity_parses_codes_and_labels() {
    assert_eq!("E".parse::<Severity>().unwrap(), Severity::Error);
    assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
    assert_eq!(" Fail ".parse::<Severity>().unwrap(), Severity::Fail);
    assert!("info".parse::<Severity>().is_err());
}

#[test]
fn parameters_render_dates_and_absent_values() {
    let start = ErrorMessageParameter::new("LearnStartDate", date(2019, 8, 1));
    assert_eq!(start.value, "01/08/2019");

    let absent = ErrorMessageParameter::new("ProgType", None::<i32>);
    assert_eq!(absent.value, "");

    let code = ErrorMessageParameter::new("AFinType", "TNP");
    assert_eq!(code.value, "TNP");
}

#[test]
fn message_deserializes_from_ilr_field_names() {
    let json = r#"{
        "Header": { "UKPRN": 10000001, "FilePreparationDate": "2025-10-01" },
        "Learners": [{
            "LearnRefNumber": "0fm3601",
            "DateOfBirth": "2001-03-04",
            "LearnerEmploymentStatuses": [
                { "EmpStat": 10, "DateEmpStatApp": "2025-08-01" }
            ],
            "LearningDeliveries": [{
                "LearnAimRef": "ZPROG001",
                "AimType": 1,
                "AimSeqNumber": 1,
                "LearnStartDate": "2025-08-01",
                "LearnPlanEndDate": "2027-07-31",
                "FundModel": 36,
                "ProgType": 25,
                "StdCode": 123,
                "CompStatus": 1,
                "LearningDeliveryFAMs": [
                    { "LearnDelFAMType": "ACT", "LearnDelFAMCode": "1" }
                ],
                "AppFinRecords": [
                    { "AFinType": "TNP", "AFinCode": 1, "AFinDate": "2025-08-01", "AFinAmount": 9000 }
                ]
            }]
        }]
    }"#;

    let message: Message = serde_json::from_str(json).expect("deserialize message");
    assert_eq!(message.header.ukprn, 10000001);
    let learner = &message.learners[0];
    assert_eq!(learner.date_of_birth, Some(date(2001, 3, 4)));
    let delivery = &learner.learning_deliveries[0];
    assert!(delivery.is_programme_aim());
    assert_eq!(delivery.prog_type, Some(25));
    assert_eq!(delivery.learn_act_end_date, None);
    assert_eq!(delivery.programme_end_date(), date(2027, 7, 31));
    assert_eq!(delivery.app_fin_records[0].afin_amount, 9000);
    assert!(delivery.learning_delivery_fams[0].is_type("act"));
}

#[test]
fn blank_contract_reference_counts_as_absent() {
    let mut delivery = ilr_model::LearningDelivery::new(
        "50023408",
        3,
        2,
        date(2025, 9, 1),
        date(2026, 7, 31),
        70,
    );
    delivery.con_ref_number = Some("   ".to_string());
    assert_eq!(delivery.con_ref_number(), None);
    delivery.con_ref_number = Some(" ESF-1234 ".to_string());
    assert_eq!(delivery.con_ref_number(), Some("ESF-1234"));
}
