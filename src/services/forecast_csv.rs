use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::forecast::ForecastResult;

pub const FORECAST_COLUMNS: [&str; 5] = [
    "team_name",
    "_85_pt",
    "_70_pt",
    "days_until_release",
    "current_period_forecast",
];

#[derive(Error, Debug)]
pub enum ForecastCsvError {
    #[error("failed to create forecast csv {path}: {source}")]
    CreateFile { path: PathBuf, source: io::Error },
    #[error("failed to write forecast csv: {0}")]
    Write(#[from] csv::Error),
}

/// Writes the forecast rows in the given order. The header row is always
/// written, also when there are no rows.
pub fn serialize_forecast_to_csv<W: io::Write>(
    writer: W,
    results: &[ForecastResult],
) -> Result<(), ForecastCsvError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(FORECAST_COLUMNS)?;
    for result in results {
        writer.serialize(result)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_forecast_csv_file<P: AsRef<Path>>(
    path: P,
    results: &[ForecastResult],
) -> Result<(), ForecastCsvError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|source| ForecastCsvError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    serialize_forecast_to_csv(file, results)
}
