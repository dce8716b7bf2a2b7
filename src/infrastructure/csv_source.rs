//! CSV exports of the curbside violation log.
//!
//! The file must have a header row naming the columns `DATE`, `HOUSE #`,
//! `STREET`, `OVER FLOW`, `NOT OUT`, `NOT AT CURB` and `DETAILS`. Names are
//! matched exactly; extra columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};

use crate::domain::entities::{RawViolation, ViolationFlag, ViolationRecord};

pub const DATE_COLUMN: &str = "DATE";
pub const HOUSE_NUMBER_COLUMN: &str = "HOUSE #";
pub const STREET_COLUMN: &str = "STREET";
pub const DETAILS_COLUMN: &str = "DETAILS";

/// Errors raised while loading violation records from a file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{} does not exist", .0.display())]
    InputNotFound(PathBuf),

    #[error("CSV header is missing the '{0}' column")]
    MissingColumn(&'static str),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Positions of the expected columns within a header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    date: usize,
    house_number: usize,
    street: usize,
    overflow: usize,
    not_out: usize,
    not_at_curb: usize,
    details: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, SourceError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(SourceError::MissingColumn(name))
        };

        Ok(Self {
            date: find(DATE_COLUMN)?,
            house_number: find(HOUSE_NUMBER_COLUMN)?,
            street: find(STREET_COLUMN)?,
            overflow: find(ViolationFlag::Overflow.column())?,
            not_out: find(ViolationFlag::NotOut.column())?,
            not_at_curb: find(ViolationFlag::NotAtCurb.column())?,
            details: find(DETAILS_COLUMN)?,
        })
    }

    fn normalize(&self, row: &StringRecord) -> ViolationRecord {
        let cell = |idx: usize| row.get(idx).map(str::to_string);

        ViolationRecord::from(RawViolation {
            date: cell(self.date),
            house_number: cell(self.house_number),
            street: cell(self.street),
            overflow: cell(self.overflow),
            not_out: cell(self.not_out),
            not_at_curb: cell(self.not_at_curb),
            details: cell(self.details),
        })
    }
}

/// Reads every row of a CSV stream, in file order.
///
/// # Errors
///
/// Returns [`SourceError::MissingColumn`] if the header lacks an expected
/// column and [`SourceError::Csv`] for malformed rows, including rows whose
/// field count differs from the header.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<ViolationRecord>, SourceError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let columns = ColumnIndex::from_headers(reader.headers()?)?;

    reader
        .records()
        .map(|row| -> Result<ViolationRecord, SourceError> { Ok(columns.normalize(&row?)) })
        .collect()
}

/// Reads the CSV file at `path`.
///
/// # Errors
///
/// Returns [`SourceError::InputNotFound`] when `path` does not exist, before
/// anything is opened. Otherwise as [`read_records`].
pub fn read_csv_file(path: &Path) -> Result<Vec<ViolationRecord>, SourceError> {
    if !path.exists() {
        return Err(SourceError::InputNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let records = read_records(file)?;
    tracing::debug!(path = %path.display(), rows = records.len(), "read violation CSV");
    Ok(records)
}
