use chrono::NaiveDateTime;
use tracing::info;

use crate::domain::work_item::{FlowMetrics, Planning, Stage, WorkItemTimeline, WorkflowStatus};

const SECONDS_PER_DAY: i64 = 86_400;

/// Computes flow metrics for every issue relative to `now`.
pub fn compute_flow_metrics(items: &[WorkItemTimeline], now: NaiveDateTime) -> Vec<FlowMetrics> {
    let metrics: Vec<FlowMetrics> = items.iter().map(|item| item_metrics(item, now)).collect();
    info!(issues = metrics.len(), %now, "flow metrics computed");
    metrics
}

/// Metric rules:
/// - cycle time counts from `In_Progress` to `Done` and lead time from
///   `Backlog` to `Done`, both only for issues whose status is DONE;
/// - work item age counts from `In_Progress` to `now` while the issue is in
///   progress;
/// - stage age counts from entering the current status to `now` for issues
///   that are not done;
/// - staleness counts from the last update to `now`.
///
/// All but staleness include both end days. A missing date gives 0.
fn item_metrics(item: &WorkItemTimeline, now: NaiveDateTime) -> FlowMetrics {
    let status = item.status();
    let stage = status.map_or(Stage::Unknown, WorkflowStatus::stage);
    let in_progress = item.entered_at(WorkflowStatus::InProgress);

    let (cycle_time, lead_time) = match (status, item.entered_at(WorkflowStatus::Done)) {
        (Some(WorkflowStatus::Done), Some(done)) => (
            inclusive_days(done, in_progress),
            inclusive_days(done, item.entered_at(WorkflowStatus::Backlog)),
        ),
        _ => (0, 0),
    };

    let work_item_age = if stage == Stage::InProgress {
        inclusive_days(now, in_progress)
    } else {
        0
    };

    let stage_age = match status {
        Some(current) if current.stage() != Stage::Done => {
            inclusive_days(now, item.entered_at(current))
        }
        _ => 0,
    };

    let staleness = item.updated.map_or(0, |updated| days_between(now, updated));

    FlowMetrics {
        issue_key: item.issue_key.clone(),
        issue_type: item.issue_type.clone(),
        current_status: item.current_status.clone(),
        stage,
        workflow_stage: status.map_or("Unknown", WorkflowStatus::workflow_stage),
        cycle_time,
        lead_time,
        work_item_age,
        stage_age,
        staleness,
        planned: if item.issue_type == "Story" {
            Planning::Planned
        } else {
            Planning::Unplanned
        },
    }
}

fn inclusive_days(later: NaiveDateTime, earlier: Option<NaiveDateTime>) -> i64 {
    earlier.map_or(0, |earlier| days_between(later, earlier) + 1)
}

/// Whole days from `earlier` to `later`, rounded down.
fn days_between(later: NaiveDateTime, earlier: NaiveDateTime) -> i64 {
    (later - earlier).num_seconds().div_euclid(SECONDS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{at, timeline};

    fn now() -> NaiveDateTime {
        at("2026-02-02T12:00")
    }

    #[test]
    fn done_item_counts_cycle_and_lead_time_inclusively() {
        let item = timeline(
            "MOB-1",
            "Story",
            "DONE",
            &[
                (WorkflowStatus::Backlog, "2026-01-01T09:00"),
                (WorkflowStatus::InProgress, "2026-01-10T09:00"),
                (WorkflowStatus::Done, "2026-01-14T17:00"),
            ],
            Some("2026-01-14T17:00"),
        );

        let metrics = compute_flow_metrics(&[item], now());

        let metrics = &metrics[0];
        assert_eq!(metrics.cycle_time, 5);
        assert_eq!(metrics.lead_time, 14);
        assert_eq!(metrics.work_item_age, 0);
        assert_eq!(metrics.stage_age, 0);
        assert_eq!(metrics.staleness, 18);
        assert_eq!(metrics.stage, Stage::Done);
        assert_eq!(metrics.workflow_stage, "Done");
        assert_eq!(metrics.planned, Planning::Planned);
    }

    #[test]
    fn same_day_completion_counts_one_day() {
        let item = timeline(
            "MOB-2",
            "Bug",
            "Done",
            &[
                (WorkflowStatus::InProgress, "2026-01-20T09:00"),
                (WorkflowStatus::Done, "2026-01-20T15:00"),
            ],
            None,
        );

        let metrics = &compute_flow_metrics(&[item], now())[0];

        assert_eq!(metrics.cycle_time, 1);
        assert_eq!(metrics.lead_time, 0);
        assert_eq!(metrics.staleness, 0);
        assert_eq!(metrics.planned, Planning::Unplanned);
    }

    #[test]
    fn rejected_item_has_no_cycle_or_lead_time() {
        let item = timeline(
            "ORC-3",
            "Story",
            "REJECTED",
            &[
                (WorkflowStatus::Backlog, "2026-01-01T09:00"),
                (WorkflowStatus::InProgress, "2026-01-10T09:00"),
                (WorkflowStatus::Done, "2026-01-14T17:00"),
            ],
            None,
        );

        let metrics = &compute_flow_metrics(&[item], now())[0];

        assert_eq!(metrics.cycle_time, 0);
        assert_eq!(metrics.lead_time, 0);
        assert_eq!(metrics.stage, Stage::Done);
    }

    #[test]
    fn item_in_review_ages_from_in_progress_and_from_review() {
        let item = timeline(
            "PER-4",
            "Story",
            "IN_REVIEW",
            &[
                (WorkflowStatus::InProgress, "2026-01-26T08:00"),
                (WorkflowStatus::InReview, "2026-01-31T08:00"),
            ],
            Some("2026-02-01T13:00"),
        );

        let metrics = &compute_flow_metrics(&[item], now())[0];

        assert_eq!(metrics.stage, Stage::InProgress);
        assert_eq!(metrics.workflow_stage, "In Review");
        assert_eq!(metrics.work_item_age, 8);
        assert_eq!(metrics.stage_age, 3);
        assert_eq!(metrics.staleness, 0);
    }

    #[test]
    fn backlog_item_ages_in_its_stage_only() {
        let item = timeline(
            "PRD-5",
            "Task",
            "BACKLOG",
            &[(WorkflowStatus::Backlog, "2026-01-30T12:00")],
            None,
        );

        let metrics = &compute_flow_metrics(&[item], now())[0];

        assert_eq!(metrics.stage, Stage::ToDo);
        assert_eq!(metrics.workflow_stage, "To Do");
        assert_eq!(metrics.work_item_age, 0);
        assert_eq!(metrics.stage_age, 4);
    }

    #[test]
    fn in_progress_item_without_start_date_has_zero_age() {
        let item = timeline("OSI-6", "Story", "IN_PROGRESS", &[], None);

        let metrics = &compute_flow_metrics(&[item], now())[0];

        assert_eq!(metrics.work_item_age, 0);
        assert_eq!(metrics.stage_age, 0);
    }

    #[test]
    fn unknown_status_yields_unknown_stage_and_zero_metrics() {
        let item = timeline(
            "CUS-7",
            "Story",
            "BLOCKED",
            &[(WorkflowStatus::InProgress, "2026-01-26T08:00")],
            None,
        );

        let metrics = &compute_flow_metrics(&[item], now())[0];

        assert_eq!(metrics.stage, Stage::Unknown);
        assert_eq!(metrics.workflow_stage, "Unknown");
        assert_eq!(metrics.work_item_age, 0);
        assert_eq!(metrics.stage_age, 0);
    }

    #[test]
    fn days_between_rounds_down() {
        assert_eq!(days_between(at("2026-02-02T08:00"), at("2026-02-01T09:00")), 0);
        assert_eq!(days_between(at("2026-02-01T09:00"), at("2026-02-02T08:00")), -1);
    }
}
