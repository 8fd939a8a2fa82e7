//! The rule catalog.
//!
//! One module per rule family. Every rule is a small struct holding the
//! services it queries; [`build_catalog`] wires them from a [`RuleContext`].

pub mod app_fin;
pub mod con_ref_number;
pub mod delivery_dates;
pub mod fam;
pub mod learn_aim_ref;
pub mod learner;
pub mod partner;
pub mod programme;
pub mod withdrawal;

use std::sync::Arc;

use ilr_model::Learner;
use ilr_reference::{
    AcademicYearDataService, FcsDataService, FileDataService, LarsDataService,
    LookupDataService, OrganisationDataService,
};

use crate::error::{Result, ValidateError};
use crate::handler::ValidationErrorHandler;

pub use app_fin::{AFinDate02, AFinDate03, AFinDate04, AFinType01, AFinType02, AFinType08, AFinType14};
pub use con_ref_number::{ConRefNumber01, ConRefNumber02, ConRefNumber03};
pub use delivery_dates::{
    LearnActEndDate01, LearnActEndDate04, LearnStartDate02, LearnStartDate03,
    OrigLearnStartDate01, OrigLearnStartDate06,
};
pub use fam::{LearnDelFamType01, LearnDelFamType02, LearnDelFamType03, LearnDelFamType60};
pub use learn_aim_ref::{FundModel01, LearnAimRef01, LearnAimRef30};
pub use learner::{DateOfBirth01, DateOfBirth46, EmpStat01, EmpStat02, PriorAttain01, PriorAttain04};
pub use partner::{PartnerUkprn01, PartnerUkprn02};
pub use programme::{ProgType01, ProgType03, PwayCode02, PwayCode03, StdCode01};
pub use withdrawal::{WithdrawReason01, WithdrawReason02, WithdrawReason03};

/// A business rule run against one learner at a time.
pub trait ValidationRule: Send + Sync {
    fn rule_name(&self) -> &'static str;

    /// Report every violation in `learner` to `handler`.
    fn validate(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler);
}

impl std::fmt::Debug for dyn ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.rule_name())
    }
}

/// A rule the catalog can construct from a [`RuleContext`].
pub trait CatalogRule: ValidationRule + Sized + 'static {
    fn from_context(ctx: &RuleContext) -> Result<Self>;
}

/// Services available to rule construction.
#[derive(Clone, Default)]
pub struct RuleContext {
    pub lars: Option<Arc<dyn LarsDataService>>,
    pub fcs: Option<Arc<dyn FcsDataService>>,
    pub organisations: Option<Arc<dyn OrganisationDataService>>,
    pub file_data: Option<Arc<dyn FileDataService>>,
    pub academic_year: Option<Arc<dyn AcademicYearDataService>>,
    pub lookups: Option<Arc<dyn LookupDataService>>,
}

impl RuleContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lars(mut self, lars: Arc<dyn LarsDataService>) -> Self {
        self.lars = Some(lars);
        self
    }

    pub fn with_fcs(mut self, fcs: Arc<dyn FcsDataService>) -> Self {
        self.fcs = Some(fcs);
        self
    }

    pub fn with_organisations(mut self, organisations: Arc<dyn OrganisationDataService>) -> Self {
        self.organisations = Some(organisations);
        self
    }

    pub fn with_file_data(mut self, file_data: Arc<dyn FileDataService>) -> Self {
        self.file_data = Some(file_data);
        self
    }

    pub fn with_academic_year(mut self, academic_year: Arc<dyn AcademicYearDataService>) -> Self {
        self.academic_year = Some(academic_year);
        self
    }

    pub fn with_lookups(mut self, lookups: Arc<dyn LookupDataService>) -> Self {
        self.lookups = Some(lookups);
        self
    }

    pub(crate) fn require_lars(&self, rule: &'static str) -> Result<Arc<dyn LarsDataService>> {
        require(&self.lars, rule, "LARS")
    }

    pub(crate) fn require_fcs(&self, rule: &'static str) -> Result<Arc<dyn FcsDataService>> {
        require(&self.fcs, rule, "FCS")
    }

    pub(crate) fn require_organisations(
        &self,
        rule: &'static str,
    ) -> Result<Arc<dyn OrganisationDataService>> {
        require(&self.organisations, rule, "organisation")
    }

    pub(crate) fn require_file_data(&self, rule: &'static str) -> Result<Arc<dyn FileDataService>> {
        require(&self.file_data, rule, "file data")
    }

    pub(crate) fn require_academic_year(
        &self,
        rule: &'static str,
    ) -> Result<Arc<dyn AcademicYearDataService>> {
        require(&self.academic_year, rule, "academic year")
    }

    pub(crate) fn require_lookups(&self, rule: &'static str) -> Result<Arc<dyn LookupDataService>> {
        require(&self.lookups, rule, "lookup")
    }
}

impl std::fmt::Debug for RuleContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleContext")
            .field("lars", &self.lars.is_some())
            .field("fcs", &self.fcs.is_some())
            .field("organisations", &self.organisations.is_some())
            .field("file_data", &self.file_data.is_some())
            .field("academic_year", &self.academic_year.is_some())
            .field("lookups", &self.lookups.is_some())
            .finish()
    }
}

fn require<T: ?Sized>(
    service: &Option<Arc<T>>,
    rule: &'static str,
    name: &'static str,
) -> Result<Arc<T>> {
    service.clone().ok_or(ValidateError::MissingService {
        rule,
        service: name,
    })
}

type RuleFactory = fn(&RuleContext) -> Result<Box<dyn ValidationRule>>;

fn build<R: CatalogRule>(ctx: &RuleContext) -> Result<Box<dyn ValidationRule>> {
    R::from_context(ctx).map(|rule| Box::new(rule) as Box<dyn ValidationRule>)
}

const CATALOG: &[(&str, RuleFactory)] = &[
    (AFinDate02::RULE_NAME, build::<AFinDate02>),
    (AFinDate03::RULE_NAME, build::<AFinDate03>),
    (AFinDate04::RULE_NAME, build::<AFinDate04>),
    (AFinType01::RULE_NAME, build::<AFinType01>),
    (AFinType02::RULE_NAME, build::<AFinType02>),
    (AFinType08::RULE_NAME, build::<AFinType08>),
    (AFinType14::RULE_NAME, build::<AFinType14>),
    (ConRefNumber01::RULE_NAME, build::<ConRefNumber01>),
    (ConRefNumber02::RULE_NAME, build::<ConRefNumber02>),
    (ConRefNumber03::RULE_NAME, build::<ConRefNumber03>),
    (DateOfBirth01::RULE_NAME, build::<DateOfBirth01>),
    (DateOfBirth46::RULE_NAME, build::<DateOfBirth46>),
    (EmpStat01::RULE_NAME, build::<EmpStat01>),
    (EmpStat02::RULE_NAME, build::<EmpStat02>),
    (FundModel01::RULE_NAME, build::<FundModel01>),
    (LearnActEndDate01::RULE_NAME, build::<LearnActEndDate01>),
    (LearnActEndDate04::RULE_NAME, build::<LearnActEndDate04>),
    (LearnAimRef01::RULE_NAME, build::<LearnAimRef01>),
    (LearnAimRef30::RULE_NAME, build::<LearnAimRef30>),
    (LearnDelFamType01::RULE_NAME, build::<LearnDelFamType01>),
    (LearnDelFamType02::RULE_NAME, build::<LearnDelFamType02>),
    (LearnDelFamType03::RULE_NAME, build::<LearnDelFamType03>),
    (LearnDelFamType60::RULE_NAME, build::<LearnDelFamType60>),
    (LearnStartDate02::RULE_NAME, build::<LearnStartDate02>),
    (LearnStartDate03::RULE_NAME, build::<LearnStartDate03>),
    (OrigLearnStartDate01::RULE_NAME, build::<OrigLearnStartDate01>),
    (OrigLearnStartDate06::RULE_NAME, build::<OrigLearnStartDate06>),
    (PartnerUkprn01::RULE_NAME, build::<PartnerUkprn01>),
    (PartnerUkprn02::RULE_NAME, build::<PartnerUkprn02>),
    (PriorAttain01::RULE_NAME, build::<PriorAttain01>),
    (PriorAttain04::RULE_NAME, build::<PriorAttain04>),
    (ProgType01::RULE_NAME, build::<ProgType01>),
    (ProgType03::RULE_NAME, build::<ProgType03>),
    (PwayCode02::RULE_NAME, build::<PwayCode02>),
    (PwayCode03::RULE_NAME, build::<PwayCode03>),
    (StdCode01::RULE_NAME, build::<StdCode01>),
    (WithdrawReason01::RULE_NAME, build::<WithdrawReason01>),
    (WithdrawReason02::RULE_NAME, build::<WithdrawReason02>),
    (WithdrawReason03::RULE_NAME, build::<WithdrawReason03>),
];

/// Names of every rule in the catalog, in catalog order.
pub fn rule_names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(name, _)| *name)
}

pub fn is_known_rule(name: &str) -> bool {
    rule_names().any(|known| known == name)
}

/// Build every rule except those named in `disabled`.
///
/// Fails on the first enabled rule whose services are missing from `ctx`,
/// and on disabled names the catalog does not know.
pub fn build_catalog(ctx: &RuleContext, disabled: &[String]) -> Result<Vec<Box<dyn ValidationRule>>> {
    if let Some(unknown) = disabled.iter().find(|name| !is_known_rule(name)) {
        return Err(ValidateError::UnknownRule {
            name: unknown.clone(),
            field: "rules.disabled",
        });
    }

    CATALOG
        .iter()
        .filter(|(name, _)| !disabled.iter().any(|d| d == name))
        .map(|(_, factory)| factory(ctx))
        .collect()
}
