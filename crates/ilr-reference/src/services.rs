//! Reference data service traits.
//!
//! Validation rules depend on these traits rather than on the concrete
//! indexes, so a host can back them with whatever store it has.

use chrono::NaiveDate;

use crate::fcs::ContractAllocation;
use crate::lars::LarsLearningDelivery;
use crate::lookups::{LookupKey, LookupPairKey};
use crate::organisation::Organisation;

/// Learning Aims Reference Service.
pub trait LarsDataService: Send + Sync {
    /// Look up a learning aim by reference (case-insensitive).
    fn learning_delivery(&self, learn_aim_ref: &str) -> Option<&LarsLearningDelivery>;

    fn contains_learn_aim_ref(&self, learn_aim_ref: &str) -> bool {
        self.learning_delivery(learn_aim_ref).is_some()
    }

    /// True when the aim has a validity of `category` whose period covers `date`.
    fn has_validity_covering(&self, learn_aim_ref: &str, category: &str, date: NaiveDate) -> bool {
        self.learning_delivery(learn_aim_ref)
            .is_some_and(|aim| aim.validity_covering(category, date).is_some())
    }
}

/// Funding Contract Service.
pub trait FcsDataService: Send + Sync {
    fn contract_allocation(&self, contract_allocation_number: &str) -> Option<&ContractAllocation>;

    /// True when the contract exists and is held by `ukprn`.
    fn contract_held_by(&self, contract_allocation_number: &str, ukprn: i64) -> bool {
        self.contract_allocation(contract_allocation_number)
            .is_some_and(|allocation| allocation.delivery_ukprn == ukprn)
    }
}

/// Organisation reference data.
pub trait OrganisationDataService: Send + Sync {
    fn organisation(&self, ukprn: i64) -> Option<&Organisation>;

    fn ukprn_exists(&self, ukprn: i64) -> bool {
        self.organisation(ukprn).is_some()
    }
}

/// Metadata of the file being validated.
pub trait FileDataService: Send + Sync {
    fn ukprn(&self) -> i64;
    fn file_preparation_date(&self) -> NaiveDate;
}

/// The teaching year the submission belongs to.
pub trait AcademicYearDataService: Send + Sync {
    /// 1 August of the teaching year.
    fn start(&self) -> NaiveDate;
    /// 31 July of the following calendar year.
    fn end(&self) -> NaiveDate;
}

/// Valid ILR code lists.
pub trait LookupDataService: Send + Sync {
    fn contains(&self, key: LookupKey, code: i32) -> bool;
    fn contains_pair(&self, key: LookupPairKey, type_code: &str, code: &str) -> bool;
}
