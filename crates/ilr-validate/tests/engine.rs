//! Catalog construction and whole-learner runs.

mod common;

use std::collections::BTreeMap;

use common::{clean_apprentice, delivery, full_context, learner, run};
use ilr_model::Severity;
use ilr_validate::checks::ConRefNumber01;
use ilr_validate::{
    Category, IssueCollector, RaisedError, RuleContext, RuleDefinition, RuleEngine, RuleRegistry,
    ValidateError, ValidationRule, build_catalog, rule_names,
};

fn registry() -> RuleRegistry {
    [
        RuleDefinition {
            name: "ConRefNumber_01".to_string(),
            severity: Severity::Error,
            category: Category::LearningDelivery,
            message: "Contract reference missing".to_string(),
        },
        RuleDefinition {
            name: "LearnDelFAMType_02".to_string(),
            severity: Severity::Warning,
            category: Category::LearningDeliveryFam,
            message: "Source of funding missing".to_string(),
        },
    ]
    .into_iter()
    .collect()
}

#[test]
fn catalog_names_are_unique() {
    let mut names: Vec<_> = rule_names().collect();
    assert_eq!(names.len(), 39);
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 39);
}

#[test]
fn full_context_builds_every_rule() -> anyhow::Result<()> {
    let rules = build_catalog(&full_context(), &[])?;
    let built: Vec<_> = rules.iter().map(|rule| rule.rule_name()).collect();
    assert_eq!(built, rule_names().collect::<Vec<_>>());
    Ok(())
}

#[test]
fn missing_service_names_rule_and_service() {
    let err = build_catalog(&RuleContext::new(), &[]).unwrap_err();
    assert!(matches!(
        err,
        ValidateError::MissingService {
            rule: "AFinDate_03",
            service: "file data"
        }
    ));
}

#[test]
fn disabled_rules_are_not_built() -> anyhow::Result<()> {
    let disabled = vec!["AFinDate_02".to_string(), "LearnAimRef_30".to_string()];
    let engine = RuleEngine::from_context(&full_context(), &disabled)?;

    assert_eq!(engine.len(), 37);
    assert!(!engine.rule_names().any(|name| disabled.iter().any(|d| d == name)));
    Ok(())
}

#[test]
fn disabled_rule_must_exist() {
    let err = build_catalog(&full_context(), &["NoSuchRule_01".to_string()]).unwrap_err();
    match err {
        ValidateError::UnknownRule { name, field } => {
            assert_eq!(name, "NoSuchRule_01");
            assert_eq!(field, "rules.disabled");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn clean_learner_raises_nothing() -> anyhow::Result<()> {
    let engine = RuleEngine::from_context(&full_context(), &[])?;
    let mut raised: Vec<RaisedError> = Vec::new();

    engine.validate(&[clean_apprentice()], &mut raised);

    assert!(raised.is_empty(), "unexpected: {raised:?}");
    Ok(())
}

#[test]
fn every_violation_is_reported() {
    let mut second = learner(vec![delivery(1, 4, 70), delivery(2, 4, 70)]);
    second.learn_ref_number = "L0002".to_string();

    let engine = RuleEngine::new(vec![Box::new(ConRefNumber01::new())]);
    let mut raised: Vec<RaisedError> = Vec::new();
    engine.validate(&[learner(vec![delivery(1, 4, 70)]), second], &mut raised);

    let refs: Vec<_> = raised
        .iter()
        .map(|e| (e.learn_ref_number.as_str(), e.aim_seq_number))
        .collect();
    assert_eq!(
        refs,
        vec![("L0001", Some(1)), ("L0002", Some(1)), ("L0002", Some(2))]
    );
}

#[test]
fn execute_applies_rule_metadata() -> anyhow::Result<()> {
    let registry = registry();
    let engine = RuleEngine::from_context(&full_context(), &[])?;
    let subject = learner(vec![delivery(1, 4, 70)]);

    let report = engine.execute(&[subject], IssueCollector::new(&registry));

    assert_eq!(report.learner_count, 1);
    let con_ref = report
        .issues
        .iter()
        .find(|issue| issue.rule_name == "ConRefNumber_01")
        .expect("ConRefNumber_01 raised");
    assert_eq!(con_ref.severity, Severity::Error);
    assert_eq!(con_ref.category.as_deref(), Some("LearningDelivery"));
    assert_eq!(con_ref.message, "Contract reference missing");

    let sof = report
        .issues
        .iter()
        .find(|issue| issue.rule_name == "LearnDelFAMType_02")
        .expect("LearnDelFAMType_02 raised");
    assert_eq!(sof.severity, Severity::Warning);
    assert_eq!(sof.category.as_deref(), Some("LearningDeliveryFAM"));
    Ok(())
}

#[test]
fn rules_without_metadata_fall_back_to_error() {
    let registry = RuleRegistry::new();
    let mut collector = IssueCollector::new(&registry);
    let subject = learner(vec![delivery(1, 4, 70)]);

    ConRefNumber01::new().validate(&subject, &mut collector);

    let issues = collector.into_issues();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Error);
    assert_eq!(issues[0].category, None);
    assert_eq!(issues[0].message, "ConRefNumber_01");
}

#[test]
fn severity_overrides_win_over_metadata() {
    let registry = registry();
    let overrides = BTreeMap::from([("ConRefNumber_01".to_string(), Severity::Warning)]);
    let engine = RuleEngine::new(vec![Box::new(ConRefNumber01::new())]);

    let report = engine.execute(
        &[learner(vec![delivery(1, 4, 70)])],
        IssueCollector::new(&registry).with_severity_overrides(overrides),
    );

    assert_eq!(report.warning_count(), 1);
    assert!(!report.has_errors());
}

#[test]
fn raised_errors_match_direct_rule_runs() {
    let subject = learner(vec![delivery(1, 4, 70)]);
    let engine = RuleEngine::new(vec![Box::new(ConRefNumber01::new())]);
    let mut raised: Vec<RaisedError> = Vec::new();
    engine.validate_learner(&subject, &mut raised);

    assert_eq!(raised, run(&ConRefNumber01::new(), &subject));
}
