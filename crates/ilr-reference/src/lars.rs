//! In-memory LARS learning aims and their funding validities.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::csv::lars::{LearningDeliveryRow, ValidityRow};
use crate::services::LarsDataService;

/// A learning aim as published in LARS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LarsLearningDelivery {
    pub learn_aim_ref: String,
    pub validities: Vec<LarsValidity>,
}

impl LarsLearningDelivery {
    /// First validity of `category` (case-insensitive) whose period covers `date`.
    pub fn validity_covering(&self, category: &str, date: NaiveDate) -> Option<&LarsValidity> {
        self.validities
            .iter()
            .filter(|validity| validity.category.eq_ignore_ascii_case(category))
            .find(|validity| validity.covers(date))
    }
}

/// Funding validity of an aim for one category (e.g. `ADULT_SKILLS`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LarsValidity {
    pub category: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl LarsValidity {
    /// Open-ended validities cover every date from their start.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && self.end_date.is_none_or(|end| date <= end)
    }
}

/// LARS lookup keyed by upper-cased aim reference.
#[derive(Debug, Clone, Default)]
pub struct LarsIndex {
    by_ref: BTreeMap<String, LarsLearningDelivery>,
}

impl LarsIndex {
    pub fn from_rows(deliveries: Vec<LearningDeliveryRow>, validities: Vec<ValidityRow>) -> Self {
        let mut by_ref: BTreeMap<String, LarsLearningDelivery> = deliveries
            .into_iter()
            .map(|row| {
                (
                    normalize_key(&row.learn_aim_ref),
                    LarsLearningDelivery {
                        learn_aim_ref: row.learn_aim_ref,
                        validities: Vec::new(),
                    },
                )
            })
            .collect();

        let mut orphans = 0usize;
        for row in validities {
            match by_ref.get_mut(&normalize_key(&row.learn_aim_ref)) {
                Some(aim) => aim.validities.push(LarsValidity {
                    category: row.validity_category,
                    start_date: row.start_date,
                    end_date: row.end_date,
                }),
                None => orphans += 1,
            }
        }
        if orphans > 0 {
            tracing::warn!(orphans, "LARS validities reference unknown learning aims");
        }

        Self { by_ref }
    }

    pub fn len(&self) -> usize {
        self.by_ref.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_ref.is_empty()
    }

    pub fn validity_count(&self) -> usize {
        self.by_ref.values().map(|aim| aim.validities.len()).sum()
    }
}

impl FromIterator<LarsLearningDelivery> for LarsIndex {
    fn from_iter<I: IntoIterator<Item = LarsLearningDelivery>>(iter: I) -> Self {
        Self {
            by_ref: iter
                .into_iter()
                .map(|aim| (normalize_key(&aim.learn_aim_ref), aim))
                .collect(),
        }
    }
}

impl LarsDataService for LarsIndex {
    fn learning_delivery(&self, learn_aim_ref: &str) -> Option<&LarsLearningDelivery> {
        self.by_ref.get(&normalize_key(learn_aim_ref))
    }
}

fn normalize_key(value: &str) -> String {
    value.trim().to_ascii_uppercase()
}
