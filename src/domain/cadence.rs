use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use thiserror::Error;

/// Format of release timestamps in the release cadence table.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown release cadence: {0} (expected Weekly or Biweekly)")]
pub struct UnknownCadence(pub String);

/// Release rhythm of a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cadence {
    Weekly,
    Biweekly,
}

impl Cadence {
    /// Length of one full release period in days.
    pub fn period_days(self) -> u64 {
        match self {
            Cadence::Weekly => 7,
            Cadence::Biweekly => 14,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Cadence::Weekly => "Weekly",
            Cadence::Biweekly => "Biweekly",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cadence {
    type Err = UnknownCadence;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Cadence::Weekly),
            "biweekly" | "bi-weekly" => Ok(Cadence::Biweekly),
            _ => Err(UnknownCadence(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseCadencePeriod {
    pub cadence: Cadence,
    pub release_date: NaiveDateTime,
}

/// Scheduled releases of all cadences.
#[derive(Debug, Clone, Default)]
pub struct ReleaseSchedule {
    pub periods: Vec<ReleaseCadencePeriod>,
}

impl ReleaseSchedule {
    pub fn new(periods: Vec<ReleaseCadencePeriod>) -> Self {
        Self { periods }
    }

    /// The earliest scheduled release of `cadence`, if any.
    pub fn next_release(&self, cadence: Cadence) -> Option<NaiveDateTime> {
        self.periods
            .iter()
            .filter(|period| period.cadence == cadence)
            .map(|period| period.release_date)
            .min()
    }
}
