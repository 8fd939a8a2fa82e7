//! Apprenticeship financial record rules (AFinDate, AFinType).

use std::sync::Arc;

use chrono::NaiveDate;
use ilr_model::codes::{afin_type, aim_type, fund_model, prog_type};
use ilr_model::{AppFinRecord, ErrorMessageParameter, Learner, LearningDelivery};
use ilr_reference::{FileDataService, LookupDataService, LookupPairKey};

use super::{CatalogRule, RuleContext, ValidationRule};
use crate::dates::more_than_one_year_after;
use crate::error::Result;
use crate::handler::ValidationErrorHandler;
use crate::query::{app_fin_records, app_fin_records_of_type, has_app_fin_record};

const TOTAL_PRICE_CODES: &[i32] = &[
    afin_type::TOTAL_TRAINING_PRICE,
    afin_type::TOTAL_ASSESSMENT_PRICE,
];

/// A programme aim's total negotiated price must not be dated more than one
/// year after the programme ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct AFinDate02;

impl AFinDate02 {
    pub const RULE_NAME: &'static str = "AFinDate_02";

    pub fn new() -> Self {
        Self
    }

    pub fn programme_aim_condition_met(&self, delivery: &LearningDelivery) -> bool {
        delivery.is_programme_aim()
    }

    pub fn afin_date_condition_met(&self, afin_date: NaiveDate, programme_end: NaiveDate) -> bool {
        more_than_one_year_after(afin_date, programme_end)
    }

    pub fn build_error_message_parameters(
        &self,
        record: &AppFinRecord,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("AFinType", &record.afin_type),
            ErrorMessageParameter::new("AFinCode", record.afin_code),
            ErrorMessageParameter::new("AFinDate", record.afin_date),
            ErrorMessageParameter::new("LearnPlanEndDate", delivery.learn_plan_end_date),
            ErrorMessageParameter::new("LearnActEndDate", delivery.learn_act_end_date),
        ]
    }
}

impl ValidationRule for AFinDate02 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if !self.programme_aim_condition_met(delivery) {
                continue;
            }
            let programme_end = delivery.programme_end_date();
            for record in app_fin_records(delivery, afin_type::TNP, TOTAL_PRICE_CODES) {
                if self.afin_date_condition_met(record.afin_date, programme_end) {
                    handler.handle(
                        Self::RULE_NAME,
                        &learner.learn_ref_number,
                        Some(delivery.aim_seq_number),
                        self.build_error_message_parameters(record, delivery),
                    );
                }
            }
        }
    }
}

impl CatalogRule for AFinDate02 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}

/// Payment records must not be dated after the file was prepared.
pub struct AFinDate03 {
    file_data: Arc<dyn FileDataService>,
}

impl AFinDate03 {
    pub const RULE_NAME: &'static str = "AFinDate_03";

    pub fn new(file_data: Arc<dyn FileDataService>) -> Self {
        Self { file_data }
    }

    pub fn condition_met(&self, record: &AppFinRecord) -> bool {
        record.is_type(afin_type::PMR) && record.afin_date > self.file_data.file_preparation_date()
    }

    pub fn build_error_message_parameters(&self, record: &AppFinRecord) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("AFinType", &record.afin_type),
            ErrorMessageParameter::new("AFinCode", record.afin_code),
            ErrorMessageParameter::new("AFinDate", record.afin_date),
            ErrorMessageParameter::new(
                "FilePreparationDate",
                self.file_data.file_preparation_date(),
            ),
        ]
    }
}

impl ValidationRule for AFinDate03 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            for record in delivery.app_fin_records.iter().filter(|r| self.condition_met(r)) {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(record),
                );
            }
        }
    }
}

impl CatalogRule for AFinDate03 {
    fn from_context(ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new(ctx.require_file_data(Self::RULE_NAME)?))
    }
}

/// Payment records must not be dated more than one year after the actual end date.
#[derive(Debug, Clone, Copy, Default)]
pub struct AFinDate04;

impl AFinDate04 {
    pub const RULE_NAME: &'static str = "AFinDate_04";

    pub fn new() -> Self {
        Self
    }

    pub fn afin_date_condition_met(
        &self,
        afin_date: NaiveDate,
        learn_act_end_date: Option<NaiveDate>,
    ) -> bool {
        learn_act_end_date.is_some_and(|end| more_than_one_year_after(afin_date, end))
    }

    pub fn build_error_message_parameters(
        &self,
        record: &AppFinRecord,
        learn_act_end_date: Option<NaiveDate>,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("AFinType", &record.afin_type),
            ErrorMessageParameter::new("AFinDate", record.afin_date),
            ErrorMessageParameter::new("LearnActEndDate", learn_act_end_date),
        ]
    }
}

impl ValidationRule for AFinDate04 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            let end = delivery.learn_act_end_date;
            for record in app_fin_records_of_type(delivery, afin_type::PMR) {
                if self.afin_date_condition_met(record.afin_date, end) {
                    handler.handle(
                        Self::RULE_NAME,
                        &learner.learn_ref_number,
                        Some(delivery.aim_seq_number),
                        self.build_error_message_parameters(record, end),
                    );
                }
            }
        }
    }
}

impl CatalogRule for AFinDate04 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}

/// Type and code of every financial record must be a valid combination.
pub struct AFinType01 {
    lookups: Arc<dyn LookupDataService>,
}

impl AFinType01 {
    pub const RULE_NAME: &'static str = "AFinType_01";

    pub fn new(lookups: Arc<dyn LookupDataService>) -> Self {
        Self { lookups }
    }

    pub fn condition_met(&self, record: &AppFinRecord) -> bool {
        !self.lookups.contains_pair(
            LookupPairKey::AppFinTypeCode,
            &record.afin_type,
            &record.afin_code.to_string(),
        )
    }

    pub fn build_error_message_parameters(&self, record: &AppFinRecord) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("AFinType", &record.afin_type),
            ErrorMessageParameter::new("AFinCode", record.afin_code),
        ]
    }
}

impl ValidationRule for AFinType01 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            for record in delivery.app_fin_records.iter().filter(|r| self.condition_met(r)) {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(record),
                );
            }
        }
    }
}

impl CatalogRule for AFinType01 {
    fn from_context(ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new(ctx.require_lookups(Self::RULE_NAME)?))
    }
}

/// Financial records belong only on apprenticeship-funded programme aims.
#[derive(Debug, Clone, Copy, Default)]
pub struct AFinType02;

impl AFinType02 {
    pub const RULE_NAME: &'static str = "AFinType_02";

    pub fn new() -> Self {
        Self
    }

    pub fn app_fin_records_condition_met(&self, delivery: &LearningDelivery) -> bool {
        !delivery.app_fin_records.is_empty()
    }

    /// True when the delivery is not an apprenticeship or other-adult programme aim.
    pub fn aim_condition_met(&self, aim_type: i32, fund_model: i32) -> bool {
        !(aim_type == aim_type::PROGRAMME_AIM
            && matches!(
                fund_model,
                fund_model::APPRENTICESHIPS | fund_model::OTHER_ADULT
            ))
    }

    pub fn build_error_message_parameters(
        &self,
        aim_type: i32,
        fund_model: i32,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("AimType", aim_type),
            ErrorMessageParameter::new("FundModel", fund_model),
        ]
    }
}

impl ValidationRule for AFinType02 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.app_fin_records_condition_met(delivery)
                && self.aim_condition_met(delivery.aim_type, delivery.fund_model)
            {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(delivery.aim_type, delivery.fund_model),
                );
            }
        }
    }
}

impl CatalogRule for AFinType02 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}

/// A residual training price must not share its date with the total training price.
#[derive(Debug, Clone, Copy, Default)]
pub struct AFinType08;

impl AFinType08 {
    pub const RULE_NAME: &'static str = "AFinType_08";

    pub fn new() -> Self {
        Self
    }

    /// Residual training price records dated the same day as a total training price.
    pub fn conflicting_records<'a>(
        &self,
        delivery: &'a LearningDelivery,
    ) -> impl Iterator<Item = &'a AppFinRecord> + 'a {
        app_fin_records(delivery, afin_type::TNP, &[afin_type::RESIDUAL_TRAINING_PRICE]).filter(
            move |residual| {
                app_fin_records(delivery, afin_type::TNP, &[afin_type::TOTAL_TRAINING_PRICE])
                    .any(|total| total.afin_date == residual.afin_date)
            },
        )
    }

    pub fn build_error_message_parameters(&self, record: &AppFinRecord) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("AFinType", &record.afin_type),
            ErrorMessageParameter::new("AFinCode", record.afin_code),
            ErrorMessageParameter::new("AFinDate", record.afin_date),
        ]
    }
}

impl ValidationRule for AFinType08 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            for record in self.conflicting_records(delivery) {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(record),
                );
            }
        }
    }
}

impl CatalogRule for AFinType08 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}

/// An apprenticeship standard programme aim must carry a training price.
#[derive(Debug, Clone, Copy, Default)]
pub struct AFinType14;

impl AFinType14 {
    pub const RULE_NAME: &'static str = "AFinType_14";

    const TRAINING_PRICE_CODES: &'static [i32] = &[
        afin_type::TOTAL_TRAINING_PRICE,
        afin_type::RESIDUAL_TRAINING_PRICE,
    ];

    pub fn new() -> Self {
        Self
    }

    pub fn delivery_condition_met(&self, delivery: &LearningDelivery) -> bool {
        delivery.is_programme_aim()
            && delivery.fund_model == fund_model::APPRENTICESHIPS
            && delivery.prog_type == Some(prog_type::APPRENTICESHIP_STANDARD)
    }

    pub fn app_fin_condition_met(&self, delivery: &LearningDelivery) -> bool {
        !has_app_fin_record(delivery, afin_type::TNP, Self::TRAINING_PRICE_CODES)
    }

    pub fn condition_met(&self, delivery: &LearningDelivery) -> bool {
        self.delivery_condition_met(delivery) && self.app_fin_condition_met(delivery)
    }

    pub fn build_error_message_parameters(
        &self,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("AimType", delivery.aim_type),
            ErrorMessageParameter::new("FundModel", delivery.fund_model),
            ErrorMessageParameter::new("ProgType", delivery.prog_type),
        ]
    }
}

impl ValidationRule for AFinType14 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in learner
            .learning_deliveries
            .iter()
            .filter(|d| self.condition_met(d))
        {
            handler.handle(
                Self::RULE_NAME,
                &learner.learn_ref_number,
                Some(delivery.aim_seq_number),
                self.build_error_message_parameters(delivery),
            );
        }
    }
}

impl CatalogRule for AFinType14 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}
