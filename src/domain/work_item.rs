use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;

/// Workflow status of an issue, as recorded in the `Current_Status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WorkflowStatus {
    Backlog,
    InRefinement,
    Ready,
    InProgress,
    InReview,
    ReadyForQa,
    InQa,
    Done,
    Rejected,
    WontDo,
}

/// Coarse board column an issue currently sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Planning {
    Planned,
    Unplanned,
}

impl WorkflowStatus {
    /// Parses labels such as `IN_PROGRESS`, `In Progress` or `in-progress`.
    /// Unrecognised labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "BACKLOG" => Some(Self::Backlog),
            "IN_REFINEMENT" => Some(Self::InRefinement),
            "READY" => Some(Self::Ready),
            "IN_PROGRESS" => Some(Self::InProgress),
            "IN_REVIEW" => Some(Self::InReview),
            "READY_FOR_QA" => Some(Self::ReadyForQa),
            "IN_QA" => Some(Self::InQa),
            "DONE" => Some(Self::Done),
            "REJECTED" => Some(Self::Rejected),
            "WON'T_DO" | "WONT_DO" => Some(Self::WontDo),
            _ => None,
        }
    }

    pub fn stage(self) -> Stage {
        match self {
            Self::Backlog | Self::InRefinement | Self::Ready => Stage::ToDo,
            Self::InProgress | Self::InReview | Self::ReadyForQa | Self::InQa => Stage::InProgress,
            Self::Done | Self::Rejected | Self::WontDo => Stage::Done,
        }
    }

    pub fn workflow_stage(self) -> &'static str {
        match self {
            Self::Backlog => "To Do",
            Self::InRefinement => "In Refinement",
            Self::Ready => "Ready",
            Self::InProgress => "In Progress",
            Self::InReview => "In Review",
            Self::ReadyForQa => "Ready for QA",
            Self::InQa => "In QA",
            Self::Done | Self::Rejected | Self::WontDo => "Done",
        }
    }
}

/// Per-issue timeline: the moment the issue entered each workflow status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItemTimeline {
    pub issue_key: String,
    pub issue_type: String,
    pub current_status: String,
    pub entered: BTreeMap<WorkflowStatus, NaiveDateTime>,
    pub updated: Option<NaiveDateTime>,
}

impl WorkItemTimeline {
    pub fn status(&self) -> Option<WorkflowStatus> {
        WorkflowStatus::from_label(&self.current_status)
    }

    pub fn entered_at(&self, status: WorkflowStatus) -> Option<NaiveDateTime> {
        self.entered.get(&status).copied()
    }
}

/// Flow metrics of one issue. Durations are whole days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowMetrics {
    #[serde(rename = "Issue_Key")]
    pub issue_key: String,
    #[serde(rename = "Issue_Type")]
    pub issue_type: String,
    #[serde(rename = "Current_Status")]
    pub current_status: String,
    pub stage: Stage,
    pub workflow_stage: &'static str,
    pub cycle_time: i64,
    pub lead_time: i64,
    pub work_item_age: i64,
    pub stage_age: i64,
    pub staleness: i64,
    pub planned: Planning,
}
