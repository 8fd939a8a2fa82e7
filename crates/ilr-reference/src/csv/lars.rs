#![deny(unsafe_code)]

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ReferenceError;

/// Row of `lars/LearningDeliveries.csv`; only the aim reference is read.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LearningDeliveryRow {
    pub learn_aim_ref: String,
}

/// Row of `lars/Validities.csv`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidityRow {
    pub learn_aim_ref: String,
    pub validity_category: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

pub fn parse_learning_deliveries_csv(path: &Path) -> Result<Vec<LearningDeliveryRow>, ReferenceError> {
    super::read_rows(path)
}

pub fn parse_validities_csv(path: &Path) -> Result<Vec<ValidityRow>, ReferenceError> {
    super::read_rows(path)
}
