//! ILR learner entities.
//!
//! These are read-only inputs deserialized from a submission. Field names
//! follow the ILR data dictionary (PascalCase on the wire).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::codes::{aim_type, comp_status};

/// A single learner in the submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Learner {
    pub learn_ref_number: String,
    #[serde(rename = "ULN", default)]
    pub uln: Option<i64>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub prior_attain: Option<i32>,
    #[serde(default)]
    pub learner_employment_statuses: Vec<LearnerEmploymentStatus>,
    #[serde(default)]
    pub learning_deliveries: Vec<LearningDelivery>,
}

impl Learner {
    /// Programme aims (AimType 1) in submission order.
    pub fn programme_aims(&self) -> impl Iterator<Item = &LearningDelivery> {
        self.learning_deliveries
            .iter()
            .filter(|delivery| delivery.is_programme_aim())
    }
}

/// Learner employment status record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LearnerEmploymentStatus {
    pub emp_stat: i32,
    pub date_emp_stat_app: NaiveDate,
    #[serde(default)]
    pub emp_id: Option<i32>,
}

/// A learning aim the learner is studying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LearningDelivery {
    pub learn_aim_ref: String,
    pub aim_type: i32,
    pub aim_seq_number: i32,
    pub learn_start_date: NaiveDate,
    #[serde(default)]
    pub orig_learn_start_date: Option<NaiveDate>,
    pub learn_plan_end_date: NaiveDate,
    #[serde(default)]
    pub learn_act_end_date: Option<NaiveDate>,
    pub fund_model: i32,
    #[serde(default)]
    pub prog_type: Option<i32>,
    #[serde(default)]
    pub fwork_code: Option<i32>,
    #[serde(default)]
    pub pway_code: Option<i32>,
    #[serde(default)]
    pub std_code: Option<i32>,
    #[serde(rename = "PartnerUKPRN", default)]
    pub partner_ukprn: Option<i64>,
    #[serde(default)]
    pub con_ref_number: Option<String>,
    pub comp_status: i32,
    #[serde(default)]
    pub withdraw_reason: Option<i32>,
    #[serde(default)]
    pub outcome: Option<i32>,
    #[serde(rename = "LearningDeliveryFAMs", default)]
    pub learning_delivery_fams: Vec<LearningDeliveryFam>,
    #[serde(default)]
    pub app_fin_records: Vec<AppFinRecord>,
}

impl LearningDelivery {
    /// Create a delivery with the mandatory fields set and everything optional left empty.
    pub fn new(
        learn_aim_ref: impl Into<String>,
        aim_type: i32,
        aim_seq_number: i32,
        learn_start_date: NaiveDate,
        learn_plan_end_date: NaiveDate,
        fund_model: i32,
    ) -> Self {
        Self {
            learn_aim_ref: learn_aim_ref.into(),
            aim_type,
            aim_seq_number,
            learn_start_date,
            orig_learn_start_date: None,
            learn_plan_end_date,
            learn_act_end_date: None,
            fund_model,
            prog_type: None,
            fwork_code: None,
            pway_code: None,
            std_code: None,
            partner_ukprn: None,
            con_ref_number: None,
            comp_status: comp_status::CONTINUING,
            withdraw_reason: None,
            outcome: None,
            learning_delivery_fams: Vec::new(),
            app_fin_records: Vec::new(),
        }
    }

    pub fn is_programme_aim(&self) -> bool {
        self.aim_type == aim_type::PROGRAMME_AIM
    }

    /// Actual end date when returned, planned end date otherwise.
    pub fn programme_end_date(&self) -> NaiveDate {
        self.learn_act_end_date.unwrap_or(self.learn_plan_end_date)
    }

    /// Contract reference with surrounding whitespace removed; blank counts as absent.
    pub fn con_ref_number(&self) -> Option<&str> {
        self.con_ref_number
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// Apprenticeship financial record (TNP price or PMR payment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppFinRecord {
    #[serde(rename = "AFinType")]
    pub afin_type: String,
    #[serde(rename = "AFinCode")]
    pub afin_code: i32,
    #[serde(rename = "AFinDate")]
    pub afin_date: NaiveDate,
    #[serde(rename = "AFinAmount", default)]
    pub afin_amount: i32,
}

impl AppFinRecord {
    pub fn new(afin_type: impl Into<String>, afin_code: i32, afin_date: NaiveDate) -> Self {
        Self {
            afin_type: afin_type.into(),
            afin_code,
            afin_date,
            afin_amount: 0,
        }
    }

    /// Type comparison is case-insensitive, matching how providers key the field.
    pub fn is_type(&self, afin_type: &str) -> bool {
        self.afin_type.trim().eq_ignore_ascii_case(afin_type)
    }
}

/// Learning delivery funding and monitoring (FAM) entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningDeliveryFam {
    #[serde(rename = "LearnDelFAMType")]
    pub learn_del_fam_type: String,
    #[serde(rename = "LearnDelFAMCode")]
    pub learn_del_fam_code: String,
    #[serde(rename = "LearnDelFAMDateFrom", default)]
    pub date_from: Option<NaiveDate>,
    #[serde(rename = "LearnDelFAMDateTo", default)]
    pub date_to: Option<NaiveDate>,
}

impl LearningDeliveryFam {
    pub fn new(fam_type: impl Into<String>, fam_code: impl Into<String>) -> Self {
        Self {
            learn_del_fam_type: fam_type.into(),
            learn_del_fam_code: fam_code.into(),
            date_from: None,
            date_to: None,
        }
    }

    pub fn is_type(&self, fam_type: &str) -> bool {
        self.learn_del_fam_type.trim().eq_ignore_ascii_case(fam_type)
    }
}
