//! Learning delivery FAM rules.

use std::sync::Arc;

use chrono::NaiveDate;
use ilr_model::codes::{aim_type, fam_type, fund_model};
use ilr_model::{ErrorMessageParameter, Learner, LearningDelivery, LearningDeliveryFam};
use ilr_reference::{LookupDataService, LookupPairKey};

use super::{CatalogRule, RuleContext, ValidationRule};
use crate::derived::earliest_programme_start_date;
use crate::error::Result;
use crate::handler::ValidationErrorHandler;
use crate::query::{fams_of_type, has_fam_type};

/// Every FAM type and code must be a valid combination.
pub struct LearnDelFamType01 {
    lookups: Arc<dyn LookupDataService>,
}

impl LearnDelFamType01 {
    pub const RULE_NAME: &'static str = "LearnDelFAMType_01";

    pub fn new(lookups: Arc<dyn LookupDataService>) -> Self {
        Self { lookups }
    }

    pub fn condition_met(&self, fam: &LearningDeliveryFam) -> bool {
        !self.lookups.contains_pair(
            LookupPairKey::LearnDelFamTypeCode,
            &fam.learn_del_fam_type,
            &fam.learn_del_fam_code,
        )
    }

    pub fn build_error_message_parameters(
        &self,
        fam: &LearningDeliveryFam,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("LearnDelFAMType", &fam.learn_del_fam_type),
            ErrorMessageParameter::new("LearnDelFAMCode", &fam.learn_del_fam_code),
        ]
    }
}

impl ValidationRule for LearnDelFamType01 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            for fam in delivery
                .learning_delivery_fams
                .iter()
                .filter(|fam| self.condition_met(fam))
            {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(fam),
                );
            }
        }
    }
}

impl CatalogRule for LearnDelFamType01 {
    fn from_context(ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new(ctx.require_lookups(Self::RULE_NAME)?))
    }
}

/// Funded aims must state their source of funding.
#[derive(Debug, Clone, Copy, Default)]
pub struct LearnDelFamType02;

impl LearnDelFamType02 {
    pub const RULE_NAME: &'static str = "LearnDelFAMType_02";

    const FUND_MODELS: &'static [i32] = &[
        fund_model::COMMUNITY_LEARNING,
        fund_model::AGE_16_TO_19,
        fund_model::ADULT_SKILLS,
        fund_model::APPRENTICESHIPS,
        fund_model::EUROPEAN_SOCIAL_FUND,
        fund_model::OTHER_ADULT,
        fund_model::OTHER_16_TO_19,
    ];

    pub fn new() -> Self {
        Self
    }

    pub fn fund_model_condition_met(&self, fund_model: i32) -> bool {
        Self::FUND_MODELS.contains(&fund_model)
    }

    pub fn fam_condition_met(&self, delivery: &LearningDelivery) -> bool {
        !has_fam_type(delivery, fam_type::SOF)
    }

    pub fn build_error_message_parameters(&self, fund_model: i32) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("FundModel", fund_model),
            ErrorMessageParameter::new("LearnDelFAMType", fam_type::SOF),
        ]
    }
}

impl ValidationRule for LearnDelFamType02 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.fund_model_condition_met(delivery.fund_model) && self.fam_condition_met(delivery)
            {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(delivery.fund_model),
                );
            }
        }
    }
}

impl CatalogRule for LearnDelFamType02 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}

/// Non-repeatable FAM types may appear at most once per delivery.
#[derive(Debug, Clone, Copy, Default)]
pub struct LearnDelFamType03;

impl LearnDelFamType03 {
    pub const RULE_NAME: &'static str = "LearnDelFAMType_03";

    pub fn new() -> Self {
        Self
    }

    /// Non-repeatable types returned more than once, in [`fam_type::NON_REPEATABLE`] order.
    pub fn repeated_types<'a>(
        &self,
        delivery: &'a LearningDelivery,
    ) -> impl Iterator<Item = &'static str> + 'a {
        fam_type::NON_REPEATABLE
            .iter()
            .copied()
            .filter(move |ty| fams_of_type(delivery, ty).nth(1).is_some())
    }

    pub fn build_error_message_parameters(&self, fam_type: &str) -> Vec<ErrorMessageParameter> {
        vec![ErrorMessageParameter::new("LearnDelFAMType", fam_type)]
    }
}

impl ValidationRule for LearnDelFamType03 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            for repeated in self.repeated_types(delivery) {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(repeated),
                );
            }
        }
    }
}

impl CatalogRule for LearnDelFamType03 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}

/// Apprenticeship-funded programmes starting on or after 1 May 2017 must
/// state their contract type.
#[derive(Debug, Clone, Copy, Default)]
pub struct LearnDelFamType60;

const CONTRACT_TYPE_FIRST_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2017, 5, 1) {
    Some(date) => date,
    None => panic!("contract type first date is not a calendar date"),
};

impl LearnDelFamType60 {
    pub const RULE_NAME: &'static str = "LearnDelFAMType_60";

    pub fn new() -> Self {
        Self
    }

    pub fn delivery_condition_met(&self, delivery: &LearningDelivery) -> bool {
        delivery.fund_model == fund_model::APPRENTICESHIPS
            && matches!(
                delivery.aim_type,
                aim_type::PROGRAMME_AIM | aim_type::COMPONENT_AIM_IN_A_PROGRAMME
            )
    }

    pub fn programme_start_condition_met(&self, programme_start: Option<NaiveDate>) -> bool {
        programme_start.is_some_and(|start| start >= CONTRACT_TYPE_FIRST_DATE)
    }

    pub fn fam_condition_met(&self, delivery: &LearningDelivery) -> bool {
        !has_fam_type(delivery, fam_type::ACT)
    }

    pub fn condition_met(&self, learner: &Learner, delivery: &LearningDelivery) -> bool {
        self.delivery_condition_met(delivery)
            && self.fam_condition_met(delivery)
            && self.programme_start_condition_met(earliest_programme_start_date(learner, delivery))
    }

    pub fn build_error_message_parameters(
        &self,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("FundModel", delivery.fund_model),
            ErrorMessageParameter::new("LearnStartDate", delivery.learn_start_date),
            ErrorMessageParameter::new("LearnDelFAMType", fam_type::ACT),
        ]
    }
}

impl ValidationRule for LearnDelFamType60 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(learner, delivery) {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(delivery),
                );
            }
        }
    }
}

impl CatalogRule for LearnDelFamType60 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}
