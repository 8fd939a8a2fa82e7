//! Runs the rule catalog over a submission.

use ilr_model::{Learner, ValidationReport};

use crate::checks::{RuleContext, ValidationRule, build_catalog};
use crate::error::Result;
use crate::handler::{IssueCollector, ValidationErrorHandler};

/// Ordered set of rules applied to every learner.
///
/// Rules run sequentially and never stop early: every violation of every
/// rule is reported.
pub struct RuleEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl RuleEngine {
    pub fn new(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self { rules }
    }

    /// Engine over the whole catalog minus `disabled`.
    pub fn from_context(ctx: &RuleContext, disabled: &[String]) -> Result<Self> {
        Ok(Self::new(build_catalog(ctx, disabled)?))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.rule_name())
    }

    pub fn validate_learner(&self, learner: &Learner, handler: &mut dyn ValidationErrorHandler) {
        for rule in &self.rules {
            rule.validate(learner, handler);
        }
    }

    pub fn validate(&self, learners: &[Learner], handler: &mut dyn ValidationErrorHandler) {
        let _span = tracing::info_span!(
            "validate",
            learners = learners.len(),
            rules = self.rules.len()
        )
        .entered();

        for (index, learner) in learners.iter().enumerate() {
            let _learner_span = tracing::debug_span!("learner", index).entered();
            self.validate_learner(learner, handler);
        }
    }

    /// Validate `learners` and collect the issues into a report.
    pub fn execute(&self, learners: &[Learner], mut collector: IssueCollector<'_>) -> ValidationReport {
        self.validate(learners, &mut collector);
        let report = ValidationReport {
            learner_count: learners.len(),
            issues: collector.into_issues(),
        };
        tracing::info!(
            learners = report.learner_count,
            fails = report.fail_count(),
            errors = report.error_count(),
            warnings = report.warning_count(),
            "validation complete"
        );
        report
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names().collect::<Vec<_>>())
            .finish()
    }
}
