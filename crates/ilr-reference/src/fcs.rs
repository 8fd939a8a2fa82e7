//! In-memory FCS contract allocations.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::csv::fcs::ContractAllocationRow;
use crate::services::FcsDataService;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractAllocation {
    pub contract_allocation_number: String,
    pub delivery_ukprn: i64,
    pub funding_stream_period_code: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl From<ContractAllocationRow> for ContractAllocation {
    fn from(row: ContractAllocationRow) -> Self {
        Self {
            contract_allocation_number: row.contract_allocation_number,
            delivery_ukprn: row.delivery_ukprn,
            funding_stream_period_code: row.funding_stream_period_code,
            start_date: row.start_date,
            end_date: row.end_date,
        }
    }
}

/// Contract allocations keyed by upper-cased allocation number.
#[derive(Debug, Clone, Default)]
pub struct FcsIndex {
    by_number: BTreeMap<String, ContractAllocation>,
}

impl FcsIndex {
    pub fn len(&self) -> usize {
        self.by_number.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_number.is_empty()
    }
}

impl FromIterator<ContractAllocation> for FcsIndex {
    fn from_iter<I: IntoIterator<Item = ContractAllocation>>(iter: I) -> Self {
        Self {
            by_number: iter
                .into_iter()
                .map(|allocation| {
                    (
                        allocation.contract_allocation_number.trim().to_ascii_uppercase(),
                        allocation,
                    )
                })
                .collect(),
        }
    }
}

impl FcsDataService for FcsIndex {
    fn contract_allocation(&self, contract_allocation_number: &str) -> Option<&ContractAllocation> {
        self.by_number
            .get(&contract_allocation_number.trim().to_ascii_uppercase())
    }
}
