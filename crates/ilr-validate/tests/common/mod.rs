//! Fixtures shared by the rule tests.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use ilr_model::{
    AppFinRecord, Learner, LearnerEmploymentStatus, LearningDelivery, LearningDeliveryFam,
};
use ilr_reference::{
    AcademicYear, ContractAllocation, FcsIndex, FileData, LarsIndex, LarsLearningDelivery,
    LarsValidity, Organisation, OrganisationIndex, StaticLookups,
};
use ilr_validate::{RaisedError, RuleContext, ValidationRule};

pub const UKPRN: i64 = 10000001;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn learner(deliveries: Vec<LearningDelivery>) -> Learner {
    Learner {
        learn_ref_number: "L0001".to_string(),
        date_of_birth: Some(date(2000, 1, 1)),
        prior_attain: Some(3),
        learning_deliveries: deliveries,
        ..Learner::default()
    }
}

/// Classroom aim starting 1 September 2025.
pub fn delivery(aim_seq_number: i32, aim_type: i32, fund_model: i32) -> LearningDelivery {
    LearningDelivery::new(
        "50023408",
        aim_type,
        aim_seq_number,
        date(2025, 9, 1),
        date(2026, 7, 31),
        fund_model,
    )
}

/// Apprenticeship standard programme aim starting 1 September 2025.
pub fn standard_programme(aim_seq_number: i32) -> LearningDelivery {
    let mut aim = LearningDelivery::new(
        "ZPROG001",
        1,
        aim_seq_number,
        date(2025, 9, 1),
        date(2027, 8, 31),
        36,
    );
    aim.prog_type = Some(25);
    aim.std_code = Some(123);
    aim
}

pub fn employment(emp_stat: i32, applies: NaiveDate) -> LearnerEmploymentStatus {
    LearnerEmploymentStatus {
        emp_stat,
        date_emp_stat_app: applies,
        emp_id: None,
    }
}

pub fn fam(fam_type: &str, code: &str) -> LearningDeliveryFam {
    LearningDeliveryFam::new(fam_type, code)
}

pub fn afin(afin_type: &str, code: i32, on: NaiveDate) -> AppFinRecord {
    AppFinRecord::new(afin_type, code, on)
}

/// A learner that passes every rule in the catalog.
pub fn clean_apprentice() -> Learner {
    let mut aim = standard_programme(1);
    aim.learning_delivery_fams = vec![fam("SOF", "105"), fam("ACT", "1")];
    aim.app_fin_records = vec![
        afin("TNP", 1, date(2025, 9, 1)),
        afin("PMR", 1, date(2025, 9, 30)),
    ];
    let mut learner = learner(vec![aim]);
    learner.learner_employment_statuses = vec![employment(10, date(2025, 8, 1))];
    learner
}

pub fn run(rule: &dyn ValidationRule, learner: &Learner) -> Vec<RaisedError> {
    let mut raised = Vec::new();
    rule.validate(learner, &mut raised);
    raised
}

/// File prepared on 1 October 2025 by [`UKPRN`].
pub fn file_data() -> Arc<FileData> {
    Arc::new(FileData::new(UKPRN, date(2025, 10, 1)))
}

/// Teaching year 2025/26.
pub fn academic_year() -> Arc<AcademicYear> {
    Arc::new(AcademicYear::new(2025).unwrap())
}

pub fn lookups() -> Arc<StaticLookups> {
    Arc::new(StaticLookups::new())
}

fn aim(learn_aim_ref: &str, category: &str, from: NaiveDate) -> LarsLearningDelivery {
    LarsLearningDelivery {
        learn_aim_ref: learn_aim_ref.to_string(),
        validities: vec![LarsValidity {
            category: category.to_string(),
            start_date: from,
            end_date: None,
        }],
    }
}

pub fn lars() -> Arc<LarsIndex> {
    let index: LarsIndex = [
        aim("50023408", "ADULT_SKILLS", date(2015, 8, 1)),
        aim("ZPROG001", "APPRENTICESHIPS", date(2017, 5, 1)),
        aim("60146401", "1619_EFA", date(2026, 8, 1)),
    ]
    .into_iter()
    .collect();
    Arc::new(index)
}

fn allocation(number: &str, ukprn: i64) -> ContractAllocation {
    ContractAllocation {
        contract_allocation_number: number.to_string(),
        delivery_ukprn: ukprn,
        funding_stream_period_code: "ESF1420".to_string(),
        start_date: None,
        end_date: None,
    }
}

pub fn fcs() -> Arc<FcsIndex> {
    let index: FcsIndex = [
        allocation("ESF-2234", UKPRN),
        allocation("ESF-7741", 10000002),
    ]
    .into_iter()
    .collect();
    Arc::new(index)
}

pub fn organisations() -> Arc<OrganisationIndex> {
    let index: OrganisationIndex = [UKPRN, 10000002]
        .into_iter()
        .map(|ukprn| Organisation {
            ukprn,
            name: format!("Provider {ukprn}"),
            legal_org_type: None,
        })
        .collect();
    Arc::new(index)
}

/// Context with every service populated from the fixtures above.
pub fn full_context() -> RuleContext {
    RuleContext::new()
        .with_lars(lars())
        .with_fcs(fcs())
        .with_organisations(organisations())
        .with_file_data(file_data())
        .with_academic_year(academic_year())
        .with_lookups(lookups())
}

pub fn rule_names(raised: &[RaisedError]) -> Vec<&str> {
    raised.iter().map(|e| e.rule_name.as_str()).collect()
}
