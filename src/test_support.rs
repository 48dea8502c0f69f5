use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::domain::cadence::{Cadence, RELEASE_DATE_FORMAT, ReleaseCadencePeriod, ReleaseSchedule};
use crate::domain::team::TeamConfig;
use crate::domain::throughput::ThroughputRecord;
use crate::domain::work_item::{WorkItemTimeline, WorkflowStatus};

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// One record per consecutive day starting at `first_day`.
pub fn daily_history(team: &str, first_day: NaiveDate, values: &[u32]) -> Vec<ThroughputRecord> {
    values
        .iter()
        .enumerate()
        .map(|(offset, value)| ThroughputRecord {
            team: team.to_string(),
            date: first_day + Duration::days(offset as i64),
            throughput: *value,
        })
        .collect()
}

/// Parses `YYYY-MM-DDTHH:MM`.
pub fn at(timestamp: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(timestamp, RELEASE_DATE_FORMAT).unwrap()
}

pub fn release_at(cadence: Cadence, release_date: &str) -> ReleaseCadencePeriod {
    ReleaseCadencePeriod {
        cadence,
        release_date: at(release_date),
    }
}

pub fn schedule(periods: &[(Cadence, &str)]) -> ReleaseSchedule {
    ReleaseSchedule::new(
        periods
            .iter()
            .map(|(cadence, release_date)| release_at(*cadence, release_date))
            .collect(),
    )
}

pub fn team_config(teams: &[(&str, Cadence)]) -> TeamConfig {
    let mut config = TeamConfig::new();
    for (name, cadence) in teams {
        config.add_team(*name, *cadence);
    }
    config
}

pub fn timeline(
    issue_key: &str,
    issue_type: &str,
    current_status: &str,
    entered: &[(WorkflowStatus, &str)],
    updated: Option<&str>,
) -> WorkItemTimeline {
    WorkItemTimeline {
        issue_key: issue_key.to_string(),
        issue_type: issue_type.to_string(),
        current_status: current_status.to_string(),
        entered: entered
            .iter()
            .map(|(status, timestamp)| (*status, at(timestamp)))
            .collect::<BTreeMap<_, _>>(),
        updated: updated.map(at),
    }
}
