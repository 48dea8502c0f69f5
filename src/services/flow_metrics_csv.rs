use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::work_item::FlowMetrics;

pub const FLOW_METRICS_COLUMNS: [&str; 11] = [
    "Issue_Key",
    "Issue_Type",
    "Current_Status",
    "stage",
    "workflow_stage",
    "cycle_time",
    "lead_time",
    "work_item_age",
    "stage_age",
    "staleness",
    "planned",
];

#[derive(Error, Debug)]
pub enum FlowMetricsCsvError {
    #[error("failed to create flow metrics csv {path}: {source}")]
    CreateFile { path: PathBuf, source: io::Error },
    #[error("failed to write flow metrics csv: {0}")]
    Write(#[from] csv::Error),
}

pub fn serialize_flow_metrics_to_csv<W: io::Write>(
    writer: W,
    metrics: &[FlowMetrics],
) -> Result<(), FlowMetricsCsvError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(FLOW_METRICS_COLUMNS)?;
    for item in metrics {
        writer.serialize(item)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_flow_metrics_csv_file<P: AsRef<Path>>(
    path: P,
    metrics: &[FlowMetrics],
) -> Result<(), FlowMetricsCsvError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|source| FlowMetricsCsvError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    serialize_flow_metrics_to_csv(file, metrics)
}
