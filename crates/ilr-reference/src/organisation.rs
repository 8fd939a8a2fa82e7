//! In-memory organisation reference data.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::csv::organisations::OrganisationRow;
use crate::services::OrganisationDataService;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organisation {
    pub ukprn: i64,
    pub name: String,
    pub legal_org_type: Option<String>,
}

impl From<OrganisationRow> for Organisation {
    fn from(row: OrganisationRow) -> Self {
        Self {
            ukprn: row.ukprn,
            name: row.name,
            legal_org_type: row.legal_org_type.filter(|v| !v.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrganisationIndex {
    by_ukprn: BTreeMap<i64, Organisation>,
}

impl OrganisationIndex {
    pub fn len(&self) -> usize {
        self.by_ukprn.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_ukprn.is_empty()
    }
}

impl FromIterator<Organisation> for OrganisationIndex {
    fn from_iter<I: IntoIterator<Item = Organisation>>(iter: I) -> Self {
        Self {
            by_ukprn: iter.into_iter().map(|org| (org.ukprn, org)).collect(),
        }
    }
}

impl OrganisationDataService for OrganisationIndex {
    fn organisation(&self, ukprn: i64) -> Option<&Organisation> {
        self.by_ukprn.get(&ukprn)
    }
}
