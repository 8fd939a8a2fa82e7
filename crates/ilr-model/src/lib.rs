//! ILR learner record data model.
//!
//! Plain, read-only records deserialized from a submission, plus the issue
//! and report types produced by validation.

pub mod codes;
pub mod error;
pub mod issue;
pub mod learner;
pub mod message;

pub use error::{ModelError, Result};
pub use issue::{ErrorMessageParameter, ParameterValue, Severity, ValidationIssue, ValidationReport};
pub use learner::{
    AppFinRecord, Learner, LearnerEmploymentStatus, LearningDelivery, LearningDeliveryFam,
};
pub use message::{Message, MessageHeader};
