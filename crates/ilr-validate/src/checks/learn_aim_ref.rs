//! Learning aim reference and funding model rules.

use std::sync::Arc;

use chrono::NaiveDate;
use ilr_model::codes::fund_model;
use ilr_model::{ErrorMessageParameter, Learner, LearningDelivery};
use ilr_reference::{LarsDataService, LookupDataService, LookupKey};

use super::{CatalogRule, RuleContext, ValidationRule};
use crate::error::Result;
use crate::handler::ValidationErrorHandler;

/// LARS validity categories.
pub mod validity_category {
    pub const ADULT_SKILLS: &str = "ADULT_SKILLS";
    pub const AGE_16_TO_19: &str = "1619_EFA";
    pub const COMMUNITY_LEARNING: &str = "COMM_LEARN";
    pub const APPRENTICESHIPS: &str = "APPRENTICESHIPS";
}

/// The learning aim must exist in LARS.
pub struct LearnAimRef01 {
    lars: Arc<dyn LarsDataService>,
}

impl LearnAimRef01 {
    pub const RULE_NAME: &'static str = "LearnAimRef_01";

    pub fn new(lars: Arc<dyn LarsDataService>) -> Self {
        Self { lars }
    }

    pub fn condition_met(&self, learn_aim_ref: &str) -> bool {
        !self.lars.contains_learn_aim_ref(learn_aim_ref)
    }

    pub fn build_error_message_parameters(&self, learn_aim_ref: &str) -> Vec<ErrorMessageParameter> {
        vec![ErrorMessageParameter::new("LearnAimRef", learn_aim_ref)]
    }
}

impl ValidationRule for LearnAimRef01 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(&delivery.learn_aim_ref) {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(&delivery.learn_aim_ref),
                );
            }
        }
    }
}

impl CatalogRule for LearnAimRef01 {
    fn from_context(ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new(ctx.require_lars(Self::RULE_NAME)?))
    }
}

/// The aim must have a LARS validity for its funding model on the start date.
pub struct LearnAimRef30 {
    lars: Arc<dyn LarsDataService>,
}

impl LearnAimRef30 {
    pub const RULE_NAME: &'static str = "LearnAimRef_30";

    pub fn new(lars: Arc<dyn LarsDataService>) -> Self {
        Self { lars }
    }

    /// LARS validity category a funding model is checked against.
    pub fn validity_category(fund_model: i32) -> Option<&'static str> {
        match fund_model {
            fund_model::ADULT_SKILLS => Some(validity_category::ADULT_SKILLS),
            fund_model::AGE_16_TO_19 | fund_model::OTHER_16_TO_19 => {
                Some(validity_category::AGE_16_TO_19)
            }
            fund_model::COMMUNITY_LEARNING => Some(validity_category::COMMUNITY_LEARNING),
            fund_model::APPRENTICESHIPS | fund_model::OTHER_ADULT => {
                Some(validity_category::APPRENTICESHIPS)
            }
            _ => None,
        }
    }

    pub fn aim_type_condition_met(&self, delivery: &LearningDelivery) -> bool {
        !delivery.is_programme_aim()
    }

    pub fn validity_condition_met(
        &self,
        learn_aim_ref: &str,
        fund_model: i32,
        learn_start_date: NaiveDate,
    ) -> bool {
        let Some(category) = Self::validity_category(fund_model) else {
            return false;
        };
        self.lars.contains_learn_aim_ref(learn_aim_ref)
            && !self
                .lars
                .has_validity_covering(learn_aim_ref, category, learn_start_date)
    }

    pub fn build_error_message_parameters(
        &self,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("LearnAimRef", &delivery.learn_aim_ref),
            ErrorMessageParameter::new("FundModel", delivery.fund_model),
            ErrorMessageParameter::new("LearnStartDate", delivery.learn_start_date),
        ]
    }
}

impl ValidationRule for LearnAimRef30 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.aim_type_condition_met(delivery)
                && self.validity_condition_met(
                    &delivery.learn_aim_ref,
                    delivery.fund_model,
                    delivery.learn_start_date,
                )
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
}

impl CatalogRule for LearnAimRef30 {
    fn from_context(ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new(ctx.require_lars(Self::RULE_NAME)?))
    }
}

/// The funding model must be a valid code.
pub struct FundModel01 {
    lookups: Arc<dyn LookupDataService>,
}

impl FundModel01 {
    pub const RULE_NAME: &'static str = "FundModel_01";

    pub fn new(lookups: Arc<dyn LookupDataService>) -> Self {
        Self { lookups }
    }

    pub fn condition_met(&self, fund_model: i32) -> bool {
        !self.lookups.contains(LookupKey::FundModel, fund_model)
    }

    pub fn build_error_message_parameters(&self, fund_model: i32) -> Vec<ErrorMessageParameter> {
        vec![ErrorMessageParameter::new("FundModel", fund_model)]
    }
}

impl ValidationRule for FundModel01 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(delivery.fund_model) {
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

impl CatalogRule for FundModel01 {
    fn from_context(ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new(ctx.require_lookups(Self::RULE_NAME)?))
    }
}
