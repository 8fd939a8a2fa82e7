//! Learner-level rules: date of birth, prior attainment and employment status.

use std::sync::Arc;

use chrono::NaiveDate;
use ilr_model::codes::fund_model;
use ilr_model::{ErrorMessageParameter, Learner, LearnerEmploymentStatus, LearningDelivery};
use ilr_reference::{LookupDataService, LookupKey};

use super::{CatalogRule, RuleContext, ValidationRule};
use crate::dates::age_at;
use crate::derived::is_apprenticeship;
use crate::error::Result;
use crate::handler::ValidationErrorHandler;

/// Date of birth is mandatory for age-dependent funding models.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateOfBirth01;

impl DateOfBirth01 {
    pub const RULE_NAME: &'static str = "DateOfBirth_01";

    const FUND_MODELS: &'static [i32] = &[
        fund_model::AGE_16_TO_19,
        fund_model::ADULT_SKILLS,
        fund_model::APPRENTICESHIPS,
        fund_model::OTHER_ADULT,
        fund_model::OTHER_16_TO_19,
    ];

    pub fn new() -> Self {
        Self
    }

    pub fn date_of_birth_condition_met(&self, date_of_birth: Option<NaiveDate>) -> bool {
        date_of_birth.is_none()
    }

    pub fn fund_model_condition_met(&self, fund_model: i32) -> bool {
        Self::FUND_MODELS.contains(&fund_model)
    }

    pub fn build_error_message_parameters(
        &self,
        date_of_birth: Option<NaiveDate>,
        fund_model: i32,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("DateOfBirth", date_of_birth),
            ErrorMessageParameter::new("FundModel", fund_model),
        ]
    }
}

impl ValidationRule for DateOfBirth01 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        if !self.date_of_birth_condition_met(learner.date_of_birth) {
            return;
        }
        for delivery in &learner.learning_deliveries {
            if self.fund_model_condition_met(delivery.fund_model) {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(learner.date_of_birth, delivery.fund_model),
                );
            }
        }
    }
}

impl CatalogRule for DateOfBirth01 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}

/// Apprentices must be at least 16 when the programme starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateOfBirth46;

impl DateOfBirth46 {
    pub const RULE_NAME: &'static str = "DateOfBirth_46";
    pub const MINIMUM_AGE: i32 = 16;

    pub fn new() -> Self {
        Self
    }

    pub fn delivery_condition_met(&self, delivery: &LearningDelivery) -> bool {
        delivery.is_programme_aim() && is_apprenticeship(delivery.prog_type)
    }

    pub fn age_condition_met(&self, date_of_birth: Option<NaiveDate>, learn_start_date: NaiveDate) -> bool {
        date_of_birth.is_some_and(|dob| age_at(dob, learn_start_date) < Self::MINIMUM_AGE)
    }

    pub fn build_error_message_parameters(
        &self,
        date_of_birth: Option<NaiveDate>,
        learn_start_date: NaiveDate,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("DateOfBirth", date_of_birth),
            ErrorMessageParameter::new("LearnStartDate", learn_start_date),
        ]
    }
}

impl ValidationRule for DateOfBirth46 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.delivery_condition_met(delivery)
                && self.age_condition_met(learner.date_of_birth, delivery.learn_start_date)
            {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(
                        learner.date_of_birth,
                        delivery.learn_start_date,
                    ),
                );
            }
        }
    }
}

impl CatalogRule for DateOfBirth46 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}

/// Employment status codes must be valid.
pub struct EmpStat01 {
    lookups: Arc<dyn LookupDataService>,
}

impl EmpStat01 {
    pub const RULE_NAME: &'static str = "EmpStat_01";

    pub fn new(lookups: Arc<dyn LookupDataService>) -> Self {
        Self { lookups }
    }

    pub fn condition_met(&self, emp_stat: i32) -> bool {
        !self.lookups.contains(LookupKey::EmpStat, emp_stat)
    }

    pub fn build_error_message_parameters(
        &self,
        status: &LearnerEmploymentStatus,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("EmpStat", status.emp_stat),
            ErrorMessageParameter::new("DateEmpStatApp", status.date_emp_stat_app),
        ]
    }
}

impl ValidationRule for EmpStat01 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for status in &learner.learner_employment_statuses {
            if self.condition_met(status.emp_stat) {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    None,
                    self.build_error_message_parameters(status),
                );
            }
        }
    }
}

impl CatalogRule for EmpStat01 {
    fn from_context(ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new(ctx.require_lookups(Self::RULE_NAME)?))
    }
}

/// An apprenticeship needs an employment status that applies by its start date.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmpStat02;

impl EmpStat02 {
    pub const RULE_NAME: &'static str = "EmpStat_02";

    pub fn new() -> Self {
        Self
    }

    pub fn delivery_condition_met(&self, delivery: &LearningDelivery) -> bool {
        delivery.is_programme_aim() && is_apprenticeship(delivery.prog_type)
    }

    pub fn employment_status_condition_met(
        &self,
        statuses: &[LearnerEmploymentStatus],
        learn_start_date: NaiveDate,
    ) -> bool {
        !statuses
            .iter()
            .any(|status| status.date_emp_stat_app <= learn_start_date)
    }

    pub fn build_error_message_parameters(
        &self,
        learn_start_date: NaiveDate,
    ) -> Vec<ErrorMessageParameter> {
        vec![ErrorMessageParameter::new("LearnStartDate", learn_start_date)]
    }
}

impl ValidationRule for EmpStat02 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.delivery_condition_met(delivery)
                && self.employment_status_condition_met(
                    &learner.learner_employment_statuses,
                    delivery.learn_start_date,
                )
            {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(delivery.learn_start_date),
                );
            }
        }
    }
}

impl CatalogRule for EmpStat02 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}

/// Prior attainment is mandatory for adult skills and apprenticeship learners.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorAttain01;

impl PriorAttain01 {
    pub const RULE_NAME: &'static str = "PriorAttain_01";

    pub fn new() -> Self {
        Self
    }

    pub fn prior_attain_condition_met(&self, prior_attain: Option<i32>) -> bool {
        prior_attain.is_none()
    }

    /// First delivery funded as adult skills or apprenticeship.
    pub fn triggering_delivery<'a>(&self, learner: &'a Learner) -> Option<&'a LearningDelivery> {
        learner.learning_deliveries.iter().find(|delivery| {
            matches!(
                delivery.fund_model,
                fund_model::ADULT_SKILLS | fund_model::APPRENTICESHIPS
            )
        })
    }

    pub fn build_error_message_parameters(
        &self,
        prior_attain: Option<i32>,
        fund_model: i32,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("PriorAttain", prior_attain),
            ErrorMessageParameter::new("FundModel", fund_model),
        ]
    }
}

impl ValidationRule for PriorAttain01 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        if !self.prior_attain_condition_met(learner.prior_attain) {
            return;
        }
        if let Some(delivery) = self.triggering_delivery(learner) {
            handler.handle(
                Self::RULE_NAME,
                &learner.learn_ref_number,
                None,
                self.build_error_message_parameters(learner.prior_attain, delivery.fund_model),
            );
        }
    }
}

impl CatalogRule for PriorAttain01 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}

/// A returned prior attainment must be a valid code.
pub struct PriorAttain04 {
    lookups: Arc<dyn LookupDataService>,
}

impl PriorAttain04 {
    pub const RULE_NAME: &'static str = "PriorAttain_04";

    pub fn new(lookups: Arc<dyn LookupDataService>) -> Self {
        Self { lookups }
    }

    pub fn condition_met(&self, prior_attain: Option<i32>) -> bool {
        prior_attain.is_some_and(|code| !self.lookups.contains(LookupKey::PriorAttain, code))
    }

    pub fn build_error_message_parameters(
        &self,
        prior_attain: Option<i32>,
    ) -> Vec<ErrorMessageParameter> {
        vec![ErrorMessageParameter::new("PriorAttain", prior_attain)]
    }
}

impl ValidationRule for PriorAttain04 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        if self.condition_met(learner.prior_attain) {
            handler.handle(
                Self::RULE_NAME,
                &learner.learn_ref_number,
                None,
                self.build_error_message_parameters(learner.prior_attain),
            );
        }
    }
}

impl CatalogRule for PriorAttain04 {
    fn from_context(ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new(ctx.require_lookups(Self::RULE_NAME)?))
    }
}
