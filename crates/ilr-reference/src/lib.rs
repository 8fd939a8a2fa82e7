#![deny(unsafe_code)]

//! ILR reference data: service traits and the CSV-backed implementations
//! loaded from a manifest-pinned `reference/` directory.

pub mod academic_year;
pub mod csv;
pub mod doctor;
pub mod error;
pub mod fcs;
pub mod file_data;
pub mod hash;
pub mod lars;
pub mod lookups;
pub mod manifest;
pub mod organisation;
pub mod paths;
pub mod registry;
pub mod services;

pub use crate::academic_year::AcademicYear;
pub use crate::doctor::DoctorReport;
pub use crate::error::{ReferenceError, Result};
pub use crate::fcs::{ContractAllocation, FcsIndex};
pub use crate::file_data::FileData;
pub use crate::lars::{LarsIndex, LarsLearningDelivery, LarsValidity};
pub use crate::lookups::{LookupKey, LookupPairKey, StaticLookups};
pub use crate::organisation::{Organisation, OrganisationIndex};
pub use crate::paths::reference_root;
pub use crate::registry::{ReferenceData, VerifySummary};
pub use crate::services::{
    AcademicYearDataService, FcsDataService, FileDataService, LarsDataService,
    LookupDataService, OrganisationDataService,
};
