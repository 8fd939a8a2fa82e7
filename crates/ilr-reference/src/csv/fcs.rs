#![deny(unsafe_code)]

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ReferenceError;

/// Row of `fcs/ContractAllocations.csv`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContractAllocationRow {
    pub contract_allocation_number: String,
    #[serde(rename = "DeliveryUKPRN")]
    pub delivery_ukprn: i64,
    pub funding_stream_period_code: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

pub fn parse_contract_allocations_csv(
    path: &Path,
) -> Result<Vec<ContractAllocationRow>, ReferenceError> {
    super::read_rows(path)
}
