use chrono::NaiveDate;
use ilr_model::MessageHeader;

use crate::services::FileDataService;

/// Header facts of the submission being validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileData {
    pub ukprn: i64,
    pub file_preparation_date: NaiveDate,
    pub file_name: Option<String>,
}

impl FileData {
    pub fn new(ukprn: i64, file_preparation_date: NaiveDate) -> Self {
        Self {
            ukprn,
            file_preparation_date,
            file_name: None,
        }
    }
}

impl From<&MessageHeader> for FileData {
    fn from(header: &MessageHeader) -> Self {
        Self {
            ukprn: header.ukprn,
            file_preparation_date: header.file_preparation_date,
            file_name: header.file_name.clone(),
        }
    }
}

impl FileDataService for FileData {
    fn ukprn(&self) -> i64 {
        self.ukprn
    }

    fn file_preparation_date(&self) -> NaiveDate {
        self.file_preparation_date
    }
}
