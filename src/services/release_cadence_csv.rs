use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::cadence::{Cadence, RELEASE_DATE_FORMAT, ReleaseCadencePeriod, ReleaseSchedule};
use crate::services::csv_table::missing_column;

const REQUIRED_COLUMNS: [&str; 2] = ["cadence", "release_date"];

#[derive(Error, Debug)]
pub enum ReleaseCadenceCsvError {
    #[error("failed to read release cadence csv {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("release cadence csv is missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("malformed release cadence row {row}: {source}")]
    Row { row: usize, source: csv::Error },
    #[error("unknown cadence in release cadence row {row}: {value}")]
    UnknownCadence { row: usize, value: String },
    #[error("malformed release date in row {row}: {value} (expected YYYY-MM-DDTHH:MM)")]
    MalformedDate { row: usize, value: String },
}

#[derive(Debug, Deserialize)]
struct ReleaseCadenceRow {
    cadence: String,
    release_date: String,
}

pub fn load_release_schedule_from_csv_file<P: AsRef<Path>>(
    path: P,
) -> Result<ReleaseSchedule, ReleaseCadenceCsvError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ReleaseCadenceCsvError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_release_schedule_from_csv_str(&content)
}

pub fn deserialize_release_schedule_from_csv_str(
    input: &str,
) -> Result<ReleaseSchedule, ReleaseCadenceCsvError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());
    read_release_schedule(reader)
}

fn read_release_schedule<R: io::Read>(
    mut reader: csv::Reader<R>,
) -> Result<ReleaseSchedule, ReleaseCadenceCsvError> {
    let headers = reader
        .headers()
        .map_err(|source| ReleaseCadenceCsvError::Row { row: 0, source })?;
    if let Some(column) = missing_column(headers, &REQUIRED_COLUMNS) {
        return Err(ReleaseCadenceCsvError::MissingColumn(column));
    }

    let periods = reader
        .deserialize::<ReleaseCadenceRow>()
        .enumerate()
        .map(|(index, row)| -> Result<ReleaseCadencePeriod, ReleaseCadenceCsvError> {
            let row_number = index + 1;
            let row = row.map_err(|source| ReleaseCadenceCsvError::Row {
                row: row_number,
                source,
            })?;
            period_from_row(row, row_number)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ReleaseSchedule::new(periods))
}

fn period_from_row(
    row: ReleaseCadenceRow,
    row_number: usize,
) -> Result<ReleaseCadencePeriod, ReleaseCadenceCsvError> {
    let cadence: Cadence = row
        .cadence
        .parse()
        .map_err(|_| ReleaseCadenceCsvError::UnknownCadence {
            row: row_number,
            value: row.cadence.clone(),
        })?;
    let release_date = NaiveDateTime::parse_from_str(&row.release_date, RELEASE_DATE_FORMAT)
        .map_err(|_| ReleaseCadenceCsvError::MalformedDate {
            row: row_number,
            value: row.release_date.clone(),
        })?;

    Ok(ReleaseCadencePeriod {
        cadence,
        release_date,
    })
}
