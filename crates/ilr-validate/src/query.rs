//! Lookups over a delivery's FAMs and financial records.

use ilr_model::{AppFinRecord, LearningDelivery, LearningDeliveryFam};

pub fn fams_of_type<'a>(
    delivery: &'a LearningDelivery,
    fam_type: &'a str,
) -> impl Iterator<Item = &'a LearningDeliveryFam> + 'a {
    delivery
        .learning_delivery_fams
        .iter()
        .filter(move |fam| fam.is_type(fam_type))
}

pub fn has_fam_type(delivery: &LearningDelivery, fam_type: &str) -> bool {
    fams_of_type(delivery, fam_type).next().is_some()
}

/// Records of `afin_type` whose code is one of `codes`.
pub fn app_fin_records<'a>(
    delivery: &'a LearningDelivery,
    afin_type: &'a str,
    codes: &'a [i32],
) -> impl Iterator<Item = &'a AppFinRecord> + 'a {
    delivery
        .app_fin_records
        .iter()
        .filter(move |record| record.is_type(afin_type) && codes.contains(&record.afin_code))
}

pub fn has_app_fin_record(delivery: &LearningDelivery, afin_type: &str, codes: &[i32]) -> bool {
    app_fin_records(delivery, afin_type, codes).next().is_some()
}

/// All records of `afin_type`, whatever the code.
pub fn app_fin_records_of_type<'a>(
    delivery: &'a LearningDelivery,
    afin_type: &'a str,
) -> impl Iterator<Item = &'a AppFinRecord> + 'a {
    delivery
        .app_fin_records
        .iter()
        .filter(move |record| record.is_type(afin_type))
}
