use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::cadence::{Cadence, ReleaseSchedule};
use crate::domain::team::TeamConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CadenceError {
    #[error("team {0} has no configured release cadence")]
    UnknownTeam(String),
    #[error("no release scheduled for the {0} cadence")]
    MissingCadenceConfig(Cadence),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRelease {
    pub cadence: Cadence,
    pub release_date: NaiveDate,
    pub days_until_release: u64,
}

/// Maps teams to the next release of their cadence.
pub struct CadenceResolver<'a> {
    schedule: &'a ReleaseSchedule,
    teams: &'a TeamConfig,
}

impl<'a> CadenceResolver<'a> {
    pub fn new(schedule: &'a ReleaseSchedule, teams: &'a TeamConfig) -> Self {
        Self { schedule, teams }
    }

    pub fn resolve(&self, team: &str, today: NaiveDate) -> Result<ResolvedRelease, CadenceError> {
        let cadence = self
            .teams
            .cadence_of(team)
            .ok_or_else(|| CadenceError::UnknownTeam(team.to_string()))?;
        let release_date = self
            .schedule
            .next_release(cadence)
            .ok_or(CadenceError::MissingCadenceConfig(cadence))?
            .date();

        Ok(ResolvedRelease {
            cadence,
            release_date,
            days_until_release: days_between(today, release_date),
        })
    }
}

/// Absolute number of days between `today` and `release_date`. A release in
/// the past counts the same as one equally far in the future.
pub fn days_between(today: NaiveDate, release_date: NaiveDate) -> u64 {
    release_date
        .signed_duration_since(today)
        .num_days()
        .unsigned_abs()
}
