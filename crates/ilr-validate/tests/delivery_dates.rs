//! Learning delivery date rules.

mod common;

use common::{academic_year, date, delivery, fam, file_data, learner, run};
use ilr_validate::checks::{
    LearnActEndDate01, LearnActEndDate04, LearnStartDate02, LearnStartDate03,
    OrigLearnStartDate01, OrigLearnStartDate06,
};

#[test]
fn learn_act_end_date_01_flags_end_before_start() {
    let rule = LearnActEndDate01::new();
    let start = date(2025, 9, 1);

    assert!(rule.condition_met(start, Some(date(2025, 8, 31))));
    assert!(!rule.condition_met(start, Some(start)));
    assert!(!rule.condition_met(start, None));

    let mut aim = delivery(1, 4, 35);
    aim.learn_act_end_date = Some(date(2025, 8, 1));
    let raised = run(&rule, &learner(vec![aim]));
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].parameter("LearnActEndDate"), Some("01/08/2025"));
}

#[test]
fn learn_act_end_date_04_compares_with_file_preparation_date() {
    let rule = LearnActEndDate04::new(file_data());

    assert!(rule.condition_met(Some(date(2025, 10, 2))));
    assert!(!rule.condition_met(Some(date(2025, 10, 1))));
    assert!(!rule.condition_met(None));
}

#[test]
fn learn_start_date_02_allows_ten_years_before_the_teaching_year() {
    let rule = LearnStartDate02::new(academic_year());

    assert_eq!(rule.earliest_start_date(), Some(date(2015, 8, 1)));
    assert!(rule.condition_met(date(2015, 7, 31)));
    assert!(!rule.condition_met(date(2015, 8, 1)));

    let mut old = delivery(1, 4, 35);
    old.learn_start_date = date(2010, 1, 4);
    let raised = run(&rule, &learner(vec![old, delivery(2, 4, 35)]));
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].aim_seq_number, Some(1));
    assert_eq!(raised[0].parameter("LearnStartDate"), Some("04/01/2010"));
}

#[test]
fn learn_start_date_03_flags_starts_after_the_teaching_year() {
    let rule = LearnStartDate03::new(academic_year());

    assert!(rule.condition_met(date(2026, 8, 1)));
    assert!(!rule.condition_met(date(2026, 7, 31)));
}

#[test]
fn orig_learn_start_date_01_must_precede_start() {
    let rule = OrigLearnStartDate01::new();
    let start = date(2025, 9, 1);

    assert!(rule.condition_met(Some(start), start));
    assert!(rule.condition_met(Some(date(2025, 9, 2)), start));
    assert!(!rule.condition_met(Some(date(2024, 9, 1)), start));
    assert!(!rule.condition_met(None, start));
}

#[test]
fn orig_learn_start_date_06_requires_original_date_on_restarts() {
    let rule = OrigLearnStartDate06::new();

    let mut restart = delivery(1, 4, 35);
    restart.learning_delivery_fams = vec![fam("res", "1")];
    let mut restart_with_date = delivery(2, 4, 35);
    restart_with_date.learning_delivery_fams = vec![fam("RES", "1")];
    restart_with_date.orig_learn_start_date = Some(date(2024, 9, 1));
    let fresh = delivery(3, 4, 35);

    let raised = run(&rule, &learner(vec![restart, restart_with_date, fresh]));

    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].aim_seq_number, Some(1));
    assert_eq!(raised[0].parameter("LearnDelFAMType"), Some("RES"));
    assert_eq!(raised[0].parameter("OrigLearnStartDate"), Some(""));
}
