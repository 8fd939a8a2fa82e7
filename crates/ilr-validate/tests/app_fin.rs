//! Apprenticeship financial record rules.

mod common;

use common::{afin, date, delivery, file_data, learner, lookups, run, standard_programme};
use ilr_validate::checks::{
    AFinDate02, AFinDate03, AFinDate04, AFinType01, AFinType02, AFinType08, AFinType14,
};

#[test]
fn afin_date_02_flags_total_price_more_than_a_year_after_programme_end() {
    let mut aim = standard_programme(1);
    aim.app_fin_records = vec![
        afin("TNP", 1, date(2028, 9, 1)),
        afin("TNP", 2, date(2028, 8, 31)),
        afin("TNP", 3, date(2030, 1, 1)),
    ];

    let raised = run(&AFinDate02::new(), &learner(vec![aim]));

    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].aim_seq_number, Some(1));
    assert_eq!(raised[0].parameter("AFinCode"), Some("1"));
    assert_eq!(raised[0].parameter("AFinDate"), Some("01/09/2028"));
    assert_eq!(raised[0].parameter("LearnPlanEndDate"), Some("31/08/2027"));
    assert_eq!(raised[0].parameter("LearnActEndDate"), Some(""));
}

#[test]
fn afin_date_02_measures_from_actual_end_when_returned() {
    let mut aim = standard_programme(1);
    aim.learn_act_end_date = Some(date(2026, 3, 31));
    aim.app_fin_records = vec![afin("TNP", 1, date(2027, 4, 1))];

    assert_eq!(run(&AFinDate02::new(), &learner(vec![aim])).len(), 1);
}

#[test]
fn afin_date_02_ignores_component_aims() {
    let mut component = delivery(2, 3, 36);
    component.app_fin_records = vec![afin("TNP", 1, date(2030, 1, 1))];

    assert!(run(&AFinDate02::new(), &learner(vec![component])).is_empty());
}

#[test]
fn afin_date_03_flags_payments_after_file_preparation() {
    let mut aim = standard_programme(1);
    aim.app_fin_records = vec![
        afin("PMR", 1, date(2025, 10, 2)),
        afin("PMR", 1, date(2025, 10, 1)),
        afin("TNP", 1, date(2025, 12, 1)),
    ];

    let raised = run(&AFinDate03::new(file_data()), &learner(vec![aim]));

    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].parameter("AFinDate"), Some("02/10/2025"));
    assert_eq!(raised[0].parameter("FilePreparationDate"), Some("01/10/2025"));
}

#[test]
fn afin_date_04_needs_an_actual_end_date() {
    let mut open = standard_programme(1);
    open.app_fin_records = vec![afin("PMR", 1, date(2030, 1, 1))];

    let mut closed = standard_programme(2);
    closed.learn_act_end_date = Some(date(2026, 6, 30));
    closed.app_fin_records = vec![
        afin("PMR", 2, date(2027, 7, 1)),
        afin("PMR", 3, date(2027, 6, 30)),
    ];

    let raised = run(&AFinDate04::new(), &learner(vec![open, closed]));

    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].aim_seq_number, Some(2));
    assert_eq!(raised[0].parameter("AFinDate"), Some("01/07/2027"));
}

#[test]
fn afin_type_01_checks_type_and_code_together() {
    let mut aim = standard_programme(1);
    aim.app_fin_records = vec![
        afin("TNP", 4, date(2025, 9, 1)),
        afin("PMR", 4, date(2025, 9, 1)),
        afin("XYZ", 1, date(2025, 9, 1)),
        afin("pmr", 2, date(2025, 9, 1)),
    ];

    let raised = run(&AFinType01::new(lookups()), &learner(vec![aim]));

    let pairs: Vec<_> = raised
        .iter()
        .map(|e| (e.parameter("AFinType"), e.parameter("AFinCode")))
        .collect();
    assert_eq!(pairs, vec![(Some("PMR"), Some("4")), (Some("XYZ"), Some("1"))]);
}

#[test]
fn afin_type_02_allows_records_only_on_funded_programme_aims() {
    let record = afin("TNP", 1, date(2025, 9, 1));

    let mut programme = standard_programme(1);
    programme.app_fin_records = vec![record.clone()];
    let mut component = delivery(2, 3, 36);
    component.app_fin_records = vec![record.clone()];
    let mut adult_skills = delivery(3, 1, 35);
    adult_skills.app_fin_records = vec![record];
    let bare = delivery(4, 4, 35);

    let raised = run(
        &AFinType02::new(),
        &learner(vec![programme, component, adult_skills, bare]),
    );

    let aims: Vec<_> = raised.iter().map(|e| e.aim_seq_number).collect();
    assert_eq!(aims, vec![Some(2), Some(3)]);
    assert_eq!(raised[1].parameter("FundModel"), Some("35"));
}

#[test]
fn afin_type_08_flags_residual_price_dated_with_total_price() {
    let mut same_day = standard_programme(1);
    same_day.app_fin_records = vec![
        afin("TNP", 1, date(2025, 9, 1)),
        afin("TNP", 3, date(2025, 9, 1)),
    ];
    let mut later = standard_programme(2);
    later.app_fin_records = vec![
        afin("TNP", 1, date(2025, 9, 1)),
        afin("TNP", 3, date(2026, 1, 1)),
    ];

    let raised = run(&AFinType08::new(), &learner(vec![same_day, later]));

    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].aim_seq_number, Some(1));
    assert_eq!(raised[0].parameter("AFinCode"), Some("3"));
}

#[test]
fn afin_type_14_requires_a_training_price_on_standards() {
    let rule = AFinType14::new();

    let mut assessment_only = standard_programme(1);
    assessment_only.app_fin_records = vec![afin("TNP", 2, date(2025, 9, 1))];
    assert!(rule.condition_met(&assessment_only));

    let mut residual = standard_programme(2);
    residual.app_fin_records = vec![afin("TNP", 3, date(2025, 9, 1))];
    assert!(!rule.condition_met(&residual));

    let mut framework = standard_programme(3);
    framework.prog_type = Some(3);
    assert!(!rule.condition_met(&framework));

    let raised = run(&rule, &learner(vec![assessment_only, residual, framework]));
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].parameter("ProgType"), Some("25"));
}
