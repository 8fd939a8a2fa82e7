//! Completion status and withdrawal reason rules.

use std::sync::Arc;

use ilr_model::codes::comp_status;
use ilr_model::{ErrorMessageParameter, Learner, LearningDelivery};
use ilr_reference::{LookupDataService, LookupKey};

use super::{CatalogRule, RuleContext, ValidationRule};
use crate::error::Result;
use crate::handler::ValidationErrorHandler;

fn status_and_reason(delivery: &LearningDelivery) -> Vec<ErrorMessageParameter> {
    vec![
        ErrorMessageParameter::new("CompStatus", delivery.comp_status),
        ErrorMessageParameter::new("WithdrawReason", delivery.withdraw_reason),
    ]
}

/// A returned withdrawal reason must be a valid code.
pub struct WithdrawReason01 {
    lookups: Arc<dyn LookupDataService>,
}

impl WithdrawReason01 {
    pub const RULE_NAME: &'static str = "WithdrawReason_01";

    pub fn new(lookups: Arc<dyn LookupDataService>) -> Self {
        Self { lookups }
    }

    pub fn condition_met(&self, withdraw_reason: Option<i32>) -> bool {
        withdraw_reason.is_some_and(|code| !self.lookups.contains(LookupKey::WithdrawReason, code))
    }

    pub fn build_error_message_parameters(
        &self,
        withdraw_reason: Option<i32>,
    ) -> Vec<ErrorMessageParameter> {
        vec![ErrorMessageParameter::new("WithdrawReason", withdraw_reason)]
    }
}

impl ValidationRule for WithdrawReason01 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(delivery.withdraw_reason) {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(delivery.withdraw_reason),
                );
            }
        }
    }
}

impl CatalogRule for WithdrawReason01 {
    fn from_context(ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new(ctx.require_lookups(Self::RULE_NAME)?))
    }
}

/// Withdrawn aims must state why.
#[derive(Debug, Clone, Copy, Default)]
pub struct WithdrawReason02;

impl WithdrawReason02 {
    pub const RULE_NAME: &'static str = "WithdrawReason_02";

    pub fn new() -> Self {
        Self
    }

    pub fn condition_met(&self, comp_status: i32, withdraw_reason: Option<i32>) -> bool {
        comp_status == comp_status::WITHDRAWN && withdraw_reason.is_none()
    }

    pub fn build_error_message_parameters(
        &self,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        status_and_reason(delivery)
    }
}

impl ValidationRule for WithdrawReason02 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(delivery.comp_status, delivery.withdraw_reason) {
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

impl CatalogRule for WithdrawReason02 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}

/// Only withdrawn aims may state a withdrawal reason.
#[derive(Debug, Clone, Copy, Default)]
pub struct WithdrawReason03;

impl WithdrawReason03 {
    pub const RULE_NAME: &'static str = "WithdrawReason_03";

    pub fn new() -> Self {
        Self
    }

    pub fn condition_met(&self, comp_status: i32, withdraw_reason: Option<i32>) -> bool {
        withdraw_reason.is_some() && comp_status != comp_status::WITHDRAWN
    }

    pub fn build_error_message_parameters(
        &self,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        status_and_reason(delivery)
    }
}

impl ValidationRule for WithdrawReason03 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(delivery.comp_status, delivery.withdraw_reason) {
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

impl CatalogRule for WithdrawReason03 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}
