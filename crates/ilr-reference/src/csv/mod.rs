#![deny(unsafe_code)]

//! CSV parsers for the reference extracts.

pub mod fcs;
pub mod lars;
pub mod organisations;

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ReferenceError;

/// Read every row of a headed CSV file into `T`.
///
/// A leading byte-order mark is tolerated; trailing whitespace is trimmed.
pub(crate) fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ReferenceError> {
    let bytes = std::fs::read(path).map_err(|e| ReferenceError::io(path, e))?;
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&bytes);

    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(::csv::Trim::All)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for (index, row) in reader.deserialize::<T>().enumerate() {
        let row = row.map_err(|e| ReferenceError::Csv {
            path: path.to_path_buf(),
            message: format!("row {}: {e}", index + 1),
        })?;
        rows.push(row);
    }
    Ok(rows)
}
