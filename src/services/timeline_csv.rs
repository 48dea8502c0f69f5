use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::work_item::{WorkItemTimeline, WorkflowStatus};
use crate::services::csv_table::{missing_column, parse_timestamp};

const REQUIRED_COLUMNS: [&str; 2] = ["Issue_Key", "Current_Status"];

#[derive(Error, Debug)]
pub enum TimelineCsvError {
    #[error("failed to read timeline csv {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("timeline csv is missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("malformed timeline row {row}: {source}")]
    Row { row: usize, source: csv::Error },
}

#[derive(Debug, Deserialize)]
struct TimelineRow {
    #[serde(rename = "Issue_Key")]
    issue_key: String,
    #[serde(rename = "Issue_Type", default)]
    issue_type: Option<String>,
    #[serde(rename = "Current_Status")]
    current_status: String,
    #[serde(rename = "Backlog", default)]
    backlog: Option<String>,
    #[serde(rename = "In_Refinement", default)]
    in_refinement: Option<String>,
    #[serde(rename = "Ready", default)]
    ready: Option<String>,
    #[serde(rename = "In_Progress", default)]
    in_progress: Option<String>,
    #[serde(rename = "In_Review", default)]
    in_review: Option<String>,
    #[serde(rename = "Ready_for_QA", default)]
    ready_for_qa: Option<String>,
    #[serde(rename = "In_QA", default)]
    in_qa: Option<String>,
    #[serde(rename = "Done", default)]
    done: Option<String>,
    #[serde(rename = "Updated", default)]
    updated: Option<String>,
}

pub fn load_timeline_from_csv_file<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<WorkItemTimeline>, TimelineCsvError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| TimelineCsvError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_timeline_from_csv_str(&content)
}

pub fn deserialize_timeline_from_csv_str(
    input: &str,
) -> Result<Vec<WorkItemTimeline>, TimelineCsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());
    let headers = reader
        .headers()
        .map_err(|source| TimelineCsvError::Row { row: 0, source })?;
    if let Some(column) = missing_column(headers, &REQUIRED_COLUMNS) {
        return Err(TimelineCsvError::MissingColumn(column));
    }

    reader
        .deserialize::<TimelineRow>()
        .enumerate()
        .map(|(index, row)| -> Result<WorkItemTimeline, TimelineCsvError> {
            let row = row.map_err(|source| TimelineCsvError::Row {
                row: index + 1,
                source,
            })?;
            Ok(timeline_from_row(row))
        })
        .collect()
}

fn timeline_from_row(row: TimelineRow) -> WorkItemTimeline {
    let columns = [
        (WorkflowStatus::Backlog, &row.backlog),
        (WorkflowStatus::InRefinement, &row.in_refinement),
        (WorkflowStatus::Ready, &row.ready),
        (WorkflowStatus::InProgress, &row.in_progress),
        (WorkflowStatus::InReview, &row.in_review),
        (WorkflowStatus::ReadyForQa, &row.ready_for_qa),
        (WorkflowStatus::InQa, &row.in_qa),
        (WorkflowStatus::Done, &row.done),
    ];

    let mut entered = BTreeMap::new();
    for (status, value) in columns {
        if let Some(timestamp) = value
            .as_deref()
            .and_then(|value| timestamp_of(&row.issue_key, value))
        {
            entered.insert(status, timestamp);
        }
    }
    let updated = row
        .updated
        .as_deref()
        .and_then(|value| timestamp_of(&row.issue_key, value));

    WorkItemTimeline {
        issue_key: row.issue_key,
        issue_type: row.issue_type.unwrap_or_default(),
        current_status: row.current_status,
        entered,
        updated,
    }
}

fn timestamp_of(issue_key: &str, value: &str) -> Option<NaiveDateTime> {
    let timestamp = parse_timestamp(value);
    if timestamp.is_none() {
        debug!(issue_key, value, "ignoring unreadable timeline timestamp");
    }
    timestamp
}
