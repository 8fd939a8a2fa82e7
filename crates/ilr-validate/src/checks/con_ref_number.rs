//! Contract reference number rules.

use std::sync::Arc;

use ilr_model::codes::fund_model;
use ilr_model::{ErrorMessageParameter, Learner, LearningDelivery};
use ilr_reference::{FcsDataService, FileDataService};

use super::{CatalogRule, RuleContext, ValidationRule};
use crate::error::Result;
use crate::handler::ValidationErrorHandler;

fn fund_model_and_contract(delivery: &LearningDelivery) -> Vec<ErrorMessageParameter> {
    vec![
        ErrorMessageParameter::new("FundModel", delivery.fund_model),
        ErrorMessageParameter::new("ConRefNumber", delivery.con_ref_number()),
    ]
}

/// ESF-funded aims must carry a contract reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConRefNumber01;

impl ConRefNumber01 {
    pub const RULE_NAME: &'static str = "ConRefNumber_01";

    pub fn new() -> Self {
        Self
    }

    pub fn condition_met(&self, fund_model: i32, con_ref_number: Option<&str>) -> bool {
        fund_model == fund_model::EUROPEAN_SOCIAL_FUND && con_ref_number.is_none()
    }

    pub fn build_error_message_parameters(
        &self,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        fund_model_and_contract(delivery)
    }
}

impl ValidationRule for ConRefNumber01 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(delivery.fund_model, delivery.con_ref_number()) {
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

impl CatalogRule for ConRefNumber01 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}

/// Only ESF-funded aims may carry a contract reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConRefNumber02;

impl ConRefNumber02 {
    pub const RULE_NAME: &'static str = "ConRefNumber_02";

    pub fn new() -> Self {
        Self
    }

    pub fn condition_met(&self, fund_model: i32, con_ref_number: Option<&str>) -> bool {
        con_ref_number.is_some() && fund_model != fund_model::EUROPEAN_SOCIAL_FUND
    }

    pub fn build_error_message_parameters(
        &self,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        fund_model_and_contract(delivery)
    }
}

impl ValidationRule for ConRefNumber02 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(delivery.fund_model, delivery.con_ref_number()) {
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

impl CatalogRule for ConRefNumber02 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}

/// A returned contract reference must be an FCS allocation held by this provider.
pub struct ConRefNumber03 {
    fcs: Arc<dyn FcsDataService>,
    file_data: Arc<dyn FileDataService>,
}

impl ConRefNumber03 {
    pub const RULE_NAME: &'static str = "ConRefNumber_03";

    pub fn new(fcs: Arc<dyn FcsDataService>, file_data: Arc<dyn FileDataService>) -> Self {
        Self { fcs, file_data }
    }

    pub fn condition_met(&self, con_ref_number: Option<&str>) -> bool {
        con_ref_number.is_some_and(|number| {
            !self.fcs.contract_held_by(number, self.file_data.ukprn())
        })
    }

    pub fn build_error_message_parameters(
        &self,
        con_ref_number: Option<&str>,
    ) -> Vec<ErrorMessageParameter> {
        vec![ErrorMessageParameter::new("ConRefNumber", con_ref_number)]
    }
}

impl ValidationRule for ConRefNumber03 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            let con_ref_number = delivery.con_ref_number();
            if self.condition_met(con_ref_number) {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(con_ref_number),
                );
            }
        }
    }
}

impl CatalogRule for ConRefNumber03 {
    fn from_context(ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new(
            ctx.require_fcs(Self::RULE_NAME)?,
            ctx.require_file_data(Self::RULE_NAME)?,
        ))
    }
}
