use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::throughput::ThroughputRecord;
use crate::services::csv_table::{missing_column, parse_day};

const REQUIRED_COLUMNS: [&str; 3] = ["team", "date_day", "throughput"];

#[derive(Error, Debug)]
pub enum ThroughputCsvError {
    #[error("failed to read throughput csv {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("throughput csv is missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("malformed throughput row {row}: {source}")]
    Row { row: usize, source: csv::Error },
    #[error("invalid date in throughput row {row}: {value} (expected YYYY-MM-DD)")]
    MalformedDate { row: usize, value: String },
}

#[derive(Debug, Deserialize)]
struct ThroughputRow {
    team: String,
    date_day: String,
    throughput: u32,
}

pub fn load_throughput_from_csv_file<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<ThroughputRecord>, ThroughputCsvError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ThroughputCsvError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_throughput_from_csv_str(&content)
}

pub fn deserialize_throughput_from_csv_str(
    input: &str,
) -> Result<Vec<ThroughputRecord>, ThroughputCsvError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());
    read_throughput(reader)
}

fn read_throughput<R: io::Read>(
    mut reader: csv::Reader<R>,
) -> Result<Vec<ThroughputRecord>, ThroughputCsvError> {
    let headers = reader
        .headers()
        .map_err(|source| ThroughputCsvError::Row { row: 0, source })?;
    if let Some(column) = missing_column(headers, &REQUIRED_COLUMNS) {
        return Err(ThroughputCsvError::MissingColumn(column));
    }

    reader
        .deserialize::<ThroughputRow>()
        .enumerate()
        .map(|(index, row)| -> Result<ThroughputRecord, ThroughputCsvError> {
            let row_number = index + 1;
            let row = row.map_err(|source| ThroughputCsvError::Row {
                row: row_number,
                source,
            })?;
            let date = parse_day(&row.date_day).ok_or_else(|| ThroughputCsvError::MalformedDate {
                row: row_number,
                value: row.date_day.clone(),
            })?;
            Ok(ThroughputRecord {
                team: row.team,
                date,
                throughput: row.throughput,
            })
        })
        .collect()
}
