//! Learning aim reference and funding model rules.

mod common;

use common::{date, delivery, lars, learner, lookups, run, standard_programme};
use ilr_validate::checks::learn_aim_ref::validity_category;
use ilr_validate::checks::{FundModel01, LearnAimRef01, LearnAimRef30};

#[test]
fn learn_aim_ref_01_looks_up_lars_case_insensitively() {
    let rule = LearnAimRef01::new(lars());

    assert!(!rule.condition_met("50023408"));
    assert!(!rule.condition_met("zprog001"));
    assert!(rule.condition_met("ZZZ99999"));

    let mut unknown = delivery(1, 4, 35);
    unknown.learn_aim_ref = "ZZZ99999".to_string();
    let raised = run(&rule, &learner(vec![unknown, delivery(2, 4, 35)]));
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].parameter("LearnAimRef"), Some("ZZZ99999"));
}

#[test]
fn learn_aim_ref_30_maps_funding_models_to_validity_categories() {
    assert_eq!(
        LearnAimRef30::validity_category(35),
        Some(validity_category::ADULT_SKILLS)
    );
    assert_eq!(LearnAimRef30::validity_category(25), Some("1619_EFA"));
    assert_eq!(LearnAimRef30::validity_category(82), Some("1619_EFA"));
    assert_eq!(LearnAimRef30::validity_category(10), Some("COMM_LEARN"));
    assert_eq!(LearnAimRef30::validity_category(81), Some("APPRENTICESHIPS"));
    assert_eq!(LearnAimRef30::validity_category(70), None);
    assert_eq!(LearnAimRef30::validity_category(99), None);
}

#[test]
fn learn_aim_ref_30_requires_validity_covering_start_date() {
    let rule = LearnAimRef30::new(lars());
    let start = date(2025, 9, 1);

    assert!(!rule.validity_condition_met("50023408", 35, start));
    assert!(rule.validity_condition_met("50023408", 25, start));
    assert!(rule.validity_condition_met("50023408", 35, date(2015, 7, 31)));
    assert!(rule.validity_condition_met("60146401", 25, start));
    assert!(!rule.validity_condition_met("60146401", 25, date(2026, 8, 1)));
    assert!(!rule.validity_condition_met("ZZZ99999", 35, start));
    assert!(!rule.validity_condition_met("50023408", 99, start));
}

#[test]
fn learn_aim_ref_30_skips_programme_aims() {
    let mut programme = standard_programme(1);
    programme.fund_model = 25;
    let component = delivery(2, 3, 25);

    let raised = run(&LearnAimRef30::new(lars()), &learner(vec![programme, component]));

    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].aim_seq_number, Some(2));
    assert_eq!(raised[0].parameter("LearnStartDate"), Some("01/09/2025"));
}

#[test]
fn fund_model_01_checks_code_list() {
    let rule = FundModel01::new(lookups());

    assert!(!rule.condition_met(99));
    assert!(rule.condition_met(11));

    let raised = run(&rule, &learner(vec![delivery(1, 4, 11), delivery(2, 4, 36)]));
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].parameter("FundModel"), Some("11"));
}
