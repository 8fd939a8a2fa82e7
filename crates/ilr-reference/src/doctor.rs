#![deny(unsafe_code)]

use crate::manifest::{ManifestFile, Pins};
use crate::registry::VerifySummary;

pub const DOCTOR_SCHEMA: &str = "ilr-validator.reference-doctor";

/// Machine-readable description of a verified reference directory.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DoctorReport {
    pub schema: String,
    pub schema_version: u32,
    pub pins: Pins,
    pub checksums_verified: bool,
    pub files: Vec<ManifestFile>,
    pub counts: DoctorCounts,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DoctorCounts {
    pub files: usize,
    pub learning_aims: usize,
    pub validities: usize,
    pub contract_allocations: usize,
    pub organisations: usize,
}

impl DoctorReport {
    pub fn from_verify_summary(summary: &VerifySummary, files: Vec<ManifestFile>) -> Self {
        Self {
            schema: DOCTOR_SCHEMA.to_string(),
            schema_version: 1,
            pins: summary.manifest_pins.clone(),
            checksums_verified: summary.checksums_verified,
            files,
            counts: DoctorCounts {
                files: summary.file_count,
                learning_aims: summary.learning_aim_count,
                validities: summary.validity_count,
                contract_allocations: summary.contract_allocation_count,
                organisations: summary.organisation_count,
            },
        }
    }
}
