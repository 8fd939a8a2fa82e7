//! Learning delivery date rules.

use std::sync::Arc;

use chrono::NaiveDate;
use ilr_model::codes::fam_type;
use ilr_model::{ErrorMessageParameter, Learner, LearningDelivery};
use ilr_reference::{AcademicYearDataService, FileDataService};

use super::{CatalogRule, RuleContext, ValidationRule};
use crate::dates::add_years;
use crate::error::Result;
use crate::handler::ValidationErrorHandler;
use crate::query::has_fam_type;

/// The actual end date must not precede the start date.
#[derive(Debug, Clone, Copy, Default)]
pub struct LearnActEndDate01;

impl LearnActEndDate01 {
    pub const RULE_NAME: &'static str = "LearnActEndDate_01";

    pub fn new() -> Self {
        Self
    }

    pub fn condition_met(&self, learn_start_date: NaiveDate, learn_act_end_date: Option<NaiveDate>) -> bool {
        learn_act_end_date.is_some_and(|end| end < learn_start_date)
    }

    pub fn build_error_message_parameters(
        &self,
        learn_start_date: NaiveDate,
        learn_act_end_date: Option<NaiveDate>,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("LearnStartDate", learn_start_date),
            ErrorMessageParameter::new("LearnActEndDate", learn_act_end_date),
        ]
    }
}

impl ValidationRule for LearnActEndDate01 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(delivery.learn_start_date, delivery.learn_act_end_date) {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(
                        delivery.learn_start_date,
                        delivery.learn_act_end_date,
                    ),
                );
            }
        }
    }
}

impl CatalogRule for LearnActEndDate01 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}

/// The actual end date must not be after the file preparation date.
pub struct LearnActEndDate04 {
    file_data: Arc<dyn FileDataService>,
}

impl LearnActEndDate04 {
    pub const RULE_NAME: &'static str = "LearnActEndDate_04";

    pub fn new(file_data: Arc<dyn FileDataService>) -> Self {
        Self { file_data }
    }

    pub fn condition_met(&self, learn_act_end_date: Option<NaiveDate>) -> bool {
        learn_act_end_date.is_some_and(|end| end > self.file_data.file_preparation_date())
    }

    pub fn build_error_message_parameters(
        &self,
        learn_act_end_date: Option<NaiveDate>,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("LearnActEndDate", learn_act_end_date),
            ErrorMessageParameter::new(
                "FilePreparationDate",
                self.file_data.file_preparation_date(),
            ),
        ]
    }
}

impl ValidationRule for LearnActEndDate04 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(delivery.learn_act_end_date) {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(delivery.learn_act_end_date),
                );
            }
        }
    }
}

impl CatalogRule for LearnActEndDate04 {
    fn from_context(ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new(ctx.require_file_data(Self::RULE_NAME)?))
    }
}

/// The start date must not be more than ten years before the teaching year starts.
pub struct LearnStartDate02 {
    academic_year: Arc<dyn AcademicYearDataService>,
}

impl LearnStartDate02 {
    pub const RULE_NAME: &'static str = "LearnStartDate_02";
    pub const MAX_YEARS_BEFORE: i32 = 10;

    pub fn new(academic_year: Arc<dyn AcademicYearDataService>) -> Self {
        Self { academic_year }
    }

    /// Earliest acceptable start date.
    pub fn earliest_start_date(&self) -> Option<NaiveDate> {
        add_years(self.academic_year.start(), -Self::MAX_YEARS_BEFORE)
    }

    pub fn condition_met(&self, learn_start_date: NaiveDate) -> bool {
        self.earliest_start_date()
            .is_some_and(|earliest| learn_start_date < earliest)
    }

    pub fn build_error_message_parameters(
        &self,
        learn_start_date: NaiveDate,
    ) -> Vec<ErrorMessageParameter> {
        vec![ErrorMessageParameter::new("LearnStartDate", learn_start_date)]
    }
}

impl ValidationRule for LearnStartDate02 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(delivery.learn_start_date) {
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

impl CatalogRule for LearnStartDate02 {
    fn from_context(ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new(ctx.require_academic_year(Self::RULE_NAME)?))
    }
}

/// The start date must not be after the end of the teaching year.
pub struct LearnStartDate03 {
    academic_year: Arc<dyn AcademicYearDataService>,
}

impl LearnStartDate03 {
    pub const RULE_NAME: &'static str = "LearnStartDate_03";

    pub fn new(academic_year: Arc<dyn AcademicYearDataService>) -> Self {
        Self { academic_year }
    }

    pub fn condition_met(&self, learn_start_date: NaiveDate) -> bool {
        learn_start_date > self.academic_year.end()
    }

    pub fn build_error_message_parameters(
        &self,
        learn_start_date: NaiveDate,
    ) -> Vec<ErrorMessageParameter> {
        vec![ErrorMessageParameter::new("LearnStartDate", learn_start_date)]
    }
}

impl ValidationRule for LearnStartDate03 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(delivery.learn_start_date) {
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

impl CatalogRule for LearnStartDate03 {
    fn from_context(ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new(ctx.require_academic_year(Self::RULE_NAME)?))
    }
}

/// The original start date must be before the start date.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrigLearnStartDate01;

impl OrigLearnStartDate01 {
    pub const RULE_NAME: &'static str = "OrigLearnStartDate_01";

    pub fn new() -> Self {
        Self
    }

    pub fn condition_met(
        &self,
        orig_learn_start_date: Option<NaiveDate>,
        learn_start_date: NaiveDate,
    ) -> bool {
        orig_learn_start_date.is_some_and(|orig| orig >= learn_start_date)
    }

    pub fn build_error_message_parameters(
        &self,
        orig_learn_start_date: Option<NaiveDate>,
        learn_start_date: NaiveDate,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("OrigLearnStartDate", orig_learn_start_date),
            ErrorMessageParameter::new("LearnStartDate", learn_start_date),
        ]
    }
}

impl ValidationRule for OrigLearnStartDate01 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(delivery.orig_learn_start_date, delivery.learn_start_date) {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(
                        delivery.orig_learn_start_date,
                        delivery.learn_start_date,
                    ),
                );
            }
        }
    }
}

impl CatalogRule for OrigLearnStartDate01 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}

/// Restarted aims must carry the original start date.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrigLearnStartDate06;

impl OrigLearnStartDate06 {
    pub const RULE_NAME: &'static str = "OrigLearnStartDate_06";

    pub fn new() -> Self {
        Self
    }

    pub fn restart_condition_met(&self, delivery: &LearningDelivery) -> bool {
        has_fam_type(delivery, fam_type::RES)
    }

    pub fn orig_learn_start_date_condition_met(
        &self,
        orig_learn_start_date: Option<NaiveDate>,
    ) -> bool {
        orig_learn_start_date.is_none()
    }

    pub fn build_error_message_parameters(
        &self,
        orig_learn_start_date: Option<NaiveDate>,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("LearnDelFAMType", fam_type::RES),
            ErrorMessageParameter::new("OrigLearnStartDate", orig_learn_start_date),
        ]
    }
}

impl ValidationRule for OrigLearnStartDate06 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.restart_condition_met(delivery)
                && self.orig_learn_start_date_condition_met(delivery.orig_learn_start_date)
            {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(delivery.orig_learn_start_date),
                );
            }
        }
    }
}

impl CatalogRule for OrigLearnStartDate06 {
    fn from_context(_ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new())
    }
}
