//! Rule categories from `Rules.csv`.

use serde::{Deserialize, Serialize};

/// The ILR entity a rule primarily checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Category {
    Learner,
    LearnerEmploymentStatus,
    LearningDelivery,
    LearningDeliveryFam,
    AppFinRecord,
    #[default]
    Unknown,
}

impl Category {
    /// Parse category from CSV string.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "learner" => Self::Learner,
            "learneremploymentstatus" | "learner employment status" => {
                Self::LearnerEmploymentStatus
            }
            "learningdelivery" | "learning delivery" => Self::LearningDelivery,
            "learningdeliveryfam" | "learning delivery fam" => Self::LearningDeliveryFam,
            "appfinrecord" | "app fin record" => Self::AppFinRecord,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Learner => "Learner",
            Self::LearnerEmploymentStatus => "LearnerEmploymentStatus",
            Self::LearningDelivery => "LearningDelivery",
            Self::LearningDeliveryFam => "LearningDeliveryFAM",
            Self::AppFinRecord => "AppFinRecord",
            Self::Unknown => "Unknown",
        }
    }
}
