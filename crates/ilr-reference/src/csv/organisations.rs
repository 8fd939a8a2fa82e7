#![deny(unsafe_code)]

use std::path::Path;

use serde::Deserialize;

use crate::error::ReferenceError;

/// Row of `organisations/Organisations.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganisationRow {
    #[serde(rename = "UKPRN")]
    pub ukprn: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "LegalOrgType", default)]
    pub legal_org_type: Option<String>,
}

pub fn parse_organisations_csv(path: &Path) -> Result<Vec<OrganisationRow>, ReferenceError> {
    super::read_rows(path)
}
