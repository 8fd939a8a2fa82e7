//! Derived data shared by several rules.

use chrono::NaiveDate;
use ilr_model::codes::prog_type;
use ilr_model::{Learner, LearningDelivery};

/// Programme types that count as apprenticeships (frameworks and standards).
pub const APPRENTICESHIP_PROG_TYPES: &[i32] = &[
    prog_type::ADVANCED_LEVEL_APPRENTICESHIP,
    prog_type::INTERMEDIATE_LEVEL_APPRENTICESHIP,
    prog_type::HIGHER_APPRENTICESHIP_LEVEL_4,
    prog_type::HIGHER_APPRENTICESHIP_LEVEL_5,
    prog_type::HIGHER_APPRENTICESHIP_LEVEL_6,
    prog_type::HIGHER_APPRENTICESHIP_LEVEL_7_PLUS,
    prog_type::APPRENTICESHIP_STANDARD,
];

/// DD07: the delivery belongs to an apprenticeship programme.
pub fn is_apprenticeship(prog_type: Option<i32>) -> bool {
    prog_type.is_some_and(|code| APPRENTICESHIP_PROG_TYPES.contains(&code))
}

/// DD04: earliest start date among the learner's programme aims that share
/// the delivery's programme (ProgType, FworkCode, PwayCode and StdCode).
///
/// `None` when the delivery has no programme type or no such programme aim exists.
pub fn earliest_programme_start_date(
    learner: &Learner,
    delivery: &LearningDelivery,
) -> Option<NaiveDate> {
    delivery.prog_type?;
    learner
        .programme_aims()
        .filter(|aim| same_programme(aim, delivery))
        .map(|aim| aim.learn_start_date)
        .min()
}

fn same_programme(a: &LearningDelivery, b: &LearningDelivery) -> bool {
    a.prog_type == b.prog_type
        && a.fwork_code == b.fwork_code
        && a.pway_code == b.pway_code
        && a.std_code == b.std_code
}
