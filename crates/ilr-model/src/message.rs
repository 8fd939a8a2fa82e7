use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::learner::Learner;

/// An ILR submission: file header plus the learners it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Message {
    pub header: MessageHeader,
    #[serde(default)]
    pub learners: Vec<Learner>,
}

/// Collection details for the submitted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageHeader {
    #[serde(rename = "UKPRN")]
    pub ukprn: i64,
    pub file_preparation_date: NaiveDate,
    #[serde(default)]
    pub file_name: Option<String>,
}
