//! Subcontracting partner rules.

use std::sync::Arc;

use ilr_model::{ErrorMessageParameter, Learner};
use ilr_reference::{FileDataService, OrganisationDataService};

use super::{CatalogRule, RuleContext, ValidationRule};
use crate::error::Result;
use crate::handler::ValidationErrorHandler;

/// A returned partner UKPRN must be a known organisation.
pub struct PartnerUkprn01 {
    organisations: Arc<dyn OrganisationDataService>,
}

impl PartnerUkprn01 {
    pub const RULE_NAME: &'static str = "PartnerUKPRN_01";

    pub fn new(organisations: Arc<dyn OrganisationDataService>) -> Self {
        Self { organisations }
    }

    pub fn condition_met(&self, partner_ukprn: Option<i64>) -> bool {
        partner_ukprn.is_some_and(|ukprn| !self.organisations.ukprn_exists(ukprn))
    }

    pub fn build_error_message_parameters(
        &self,
        partner_ukprn: Option<i64>,
    ) -> Vec<ErrorMessageParameter> {
        vec![ErrorMessageParameter::new("PartnerUKPRN", partner_ukprn)]
    }
}

impl ValidationRule for PartnerUkprn01 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(delivery.partner_ukprn) {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(delivery.partner_ukprn),
                );
            }
        }
    }
}

impl CatalogRule for PartnerUkprn01 {
    fn from_context(ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new(ctx.require_organisations(Self::RULE_NAME)?))
    }
}

/// A provider cannot subcontract to itself.
pub struct PartnerUkprn02 {
    file_data: Arc<dyn FileDataService>,
}

impl PartnerUkprn02 {
    pub const RULE_NAME: &'static str = "PartnerUKPRN_02";

    pub fn new(file_data: Arc<dyn FileDataService>) -> Self {
        Self { file_data }
    }

    pub fn condition_met(&self, partner_ukprn: Option<i64>) -> bool {
        partner_ukprn == Some(self.file_data.ukprn())
    }

    pub fn build_error_message_parameters(
        &self,
        partner_ukprn: Option<i64>,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            ErrorMessageParameter::new("PartnerUKPRN", partner_ukprn),
            ErrorMessageParameter::new("UKPRN", self.file_data.ukprn()),
        ]
    }
}

impl ValidationRule for PartnerUkprn02 {
    fn rule_name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if self.condition_met(delivery.partner_ukprn) {
                handler.handle(
                    Self::RULE_NAME,
                    &learner.learn_ref_number,
                    Some(delivery.aim_seq_number),
                    self.build_error_message_parameters(delivery.partner_ukprn),
                );
            }
        }
    }
}

impl CatalogRule for PartnerUkprn02 {
    fn from_context(ctx: &RuleContext) -> Result<Self> {
        Ok(Self::new(ctx.require_file_data(Self::RULE_NAME)?))
    }
}
