//! Programme type, pathway and standard code rules.

use std::sync::Arc;

use ilr_model::codes::{aim_type, prog_type};
use ilr_model::{ErrorMessageParameter, Learner, LearningDelivery};
use ilr_reference::{LookupDataService, LookupKey};

use super::{CatalogRule, RuleContext, ValidationRule};
use crate::error::Result;
use crate::handler::ValidationErrorHandler;

fn prog_type_and_pathway(delivery: &LearningDelivery) -> Vec<ErrorMessageParameter> {
    vec![
        ErrorMessageParameter::new("ProgType", delivery.prog_type),
        ErrorMessageParameter::new("PwayCode", delivery.pway_code),
    ]
}

/// Programme aims must state their programme type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgType01;

impl ProgType01 {
    pub const RULE_NAME: &'static str = "ProgType_01";

    pub fn new() -> Self {
        Self
    }

    pub fn condition_met(&self, delivery: &LearningDelivery) -> bool {
        delivery.is_programme_aim() && delivery.prog_type.is_none()
    }

    pub fn build_error_message_parameters(
        &self,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("AimType", delivery.aim_type),
            ErrorMessageParameter::new("ProgType", delivery.prog_type),
        ]
    }
}

impl ValidationRule for ProgType01 {
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

impl CatalogRule for ProgType01 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}

/// A returned programme type must be a valid code.
pub struct ProgType03 {
    lookups: Arc<dyn LookupDataService>,
}

impl ProgType03 {
    pub const RULE_NAME: &'static str = "ProgType_03";

    pub fn new(lookups: Arc<dyn LookupDataService>) -> Self {
        Self { lookups }
    }

    pub fn condition_met(&self, prog_type: Option<i32>) -> bool {
        prog_type.is_some_and(|code| !self.lookups.contains(LookupKey::ProgType, code))
    }

    pub fn build_error_message_parameters(&self, prog_type: Option<i32>) -> Vec<ErrorMessageParameter> {
        vec![ErrorMessageParameter::new("ProgType", prog_type)]
    }
}

impl ValidationRule for ProgType03 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(delivery.prog_type) {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(delivery.prog_type),
                );
            }
        }
    }
}

impl CatalogRule for ProgType03 {
    fn from_context(ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new(ctx.require_lookups(Self::RULE_NAME)?))
    }
}

/// Framework programmes and their components must state a pathway.
#[derive(Debug, Clone, Copy, Default)]
pub struct PwayCode02;

impl PwayCode02 {
    pub const RULE_NAME: &'static str = "PwayCode_02";

    pub fn new() -> Self {
        Self
    }

    pub fn prog_type_condition_met(&self, prog_type: Option<i32>) -> bool {
        prog_type.is_some_and(|code| prog_type::FRAMEWORKS.contains(&code))
    }

    pub fn aim_type_condition_met(&self, aim_type: i32) -> bool {
        matches!(
            aim_type,
            aim_type::PROGRAMME_AIM | aim_type::COMPONENT_AIM_IN_A_PROGRAMME
        )
    }

    pub fn pway_code_condition_met(&self, pway_code: Option<i32>) -> bool {
        pway_code.is_none()
    }

    pub fn build_error_message_parameters(
        &self,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        prog_type_and_pathway(delivery)
    }
}

impl ValidationRule for PwayCode02 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.prog_type_condition_met(delivery.prog_type)
                && self.aim_type_condition_met(delivery.aim_type)
                && self.pway_code_condition_met(delivery.pway_code)
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

impl CatalogRule for PwayCode02 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}

/// Apprenticeship standards have no pathway.
#[derive(Debug, Clone, Copy, Default)]
pub struct PwayCode03;

impl PwayCode03 {
    pub const RULE_NAME: &'static str = "PwayCode_03";

    pub fn new() -> Self {
        Self
    }

    pub fn condition_met(&self, prog_type: Option<i32>, pway_code: Option<i32>) -> bool {
        prog_type == Some(prog_type::APPRENTICESHIP_STANDARD) && pway_code.is_some()
    }

    pub fn build_error_message_parameters(
        &self,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        prog_type_and_pathway(delivery)
    }
}

impl ValidationRule for PwayCode03 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(delivery.prog_type, delivery.pway_code) {
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

impl CatalogRule for PwayCode03 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}

/// Apprenticeship standards must state the standard code.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdCode01;

impl StdCode01 {
    pub const RULE_NAME: &'static str = "StdCode_01";

    pub fn new() -> Self {
        Self
    }

    pub fn condition_met(&self, prog_type: Option<i32>, std_code: Option<i32>) -> bool {
        prog_type == Some(prog_type::APPRENTICESHIP_STANDARD) && std_code.is_none()
    }

    pub fn build_error_message_parameters(
        &self,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("ProgType", delivery.prog_type),
            ErrorMessageParameter::new("StdCode", delivery.std_code),
        ]
    }
}

impl ValidationRule for StdCode01 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(delivery.prog_type, delivery.std_code) {
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

impl CatalogRule for StdCode01 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}
