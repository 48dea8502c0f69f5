use chrono::NaiveDate;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::cadence::ReleaseSchedule;
use crate::domain::forecast::ForecastResult;
use crate::domain::team::{TeamCadence, TeamConfig};
use crate::domain::throughput::{ThroughputRecord, recent_team_throughput};
use crate::services::cadence_resolver::{CadenceResolver, ResolvedRelease};
use crate::services::percentiles::{ExceedanceForecast, estimate};
use crate::services::throughput_sampler::{SamplerError, simulate_with_rng};

pub const DEFAULT_RELEVANT_WINDOW: usize = 60;
pub const DEFAULT_TRIALS: usize = 1000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ForecastError {
    #[error("relevant window must be greater than zero")]
    InvalidWindow,
    #[error("trials must be greater than zero")]
    InvalidTrials,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastSettings {
    /// Number of most recent days used as the sampling population.
    pub relevant_window: usize,
    /// Monte Carlo runs per horizon.
    pub trials: usize,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            relevant_window: DEFAULT_RELEVANT_WINDOW,
            trials: DEFAULT_TRIALS,
        }
    }
}

pub(crate) fn forecast_teams(
    throughput: &[ThroughputRecord],
    schedule: &ReleaseSchedule,
    teams: &TeamConfig,
    settings: ForecastSettings,
    today: NaiveDate,
) -> Result<Vec<ForecastResult>, ForecastError> {
    let mut rng = rand::thread_rng();
    forecast_teams_with_rng(throughput, schedule, teams, settings, today, &mut rng)
}

/// Forecasts every configured team and orders the rows ascending by the 85%
/// forecast, so teams expected to deliver least come first.
///
/// Teams whose release cadence cannot be resolved, or that have no
/// throughput history, get a zero-filled row instead of failing the run.
pub(crate) fn forecast_teams_with_rng<R: Rng + ?Sized>(
    throughput: &[ThroughputRecord],
    schedule: &ReleaseSchedule,
    teams: &TeamConfig,
    settings: ForecastSettings,
    today: NaiveDate,
    rng: &mut R,
) -> Result<Vec<ForecastResult>, ForecastError> {
    if settings.relevant_window == 0 {
        return Err(ForecastError::InvalidWindow);
    }
    if settings.trials == 0 {
        return Err(ForecastError::InvalidTrials);
    }

    let resolver = CadenceResolver::new(schedule, teams);
    let mut results = Vec::with_capacity(teams.teams.len());
    for team in &teams.teams {
        results.push(forecast_team(throughput, &resolver, team, settings, today, rng));
    }
    results.sort_by_key(|result| result.pct_85);

    info!(
        teams = results.len(),
        trials = settings.trials,
        relevant_window = settings.relevant_window,
        "throughput forecast complete"
    );
    Ok(results)
}

fn forecast_team<R: Rng + ?Sized>(
    throughput: &[ThroughputRecord],
    resolver: &CadenceResolver<'_>,
    team: &TeamCadence,
    settings: ForecastSettings,
    today: NaiveDate,
    rng: &mut R,
) -> ForecastResult {
    let release = match resolver.resolve(&team.name, today) {
        Ok(release) => release,
        Err(error) => {
            warn!(team = %team.name, %error, "cannot resolve next release, emitting zero forecast");
            return ForecastResult::zero_filled(&team.name, 0);
        }
    };
    debug!(
        team = %team.name,
        release_date = %release.release_date,
        days_until_release = release.days_until_release,
        "resolved next release"
    );

    let history = recent_team_throughput(throughput, &team.name, settings.relevant_window);
    if history.is_empty() {
        info!(team = %team.name, "no throughput history, emitting zero forecast");
        return ForecastResult::zero_filled(&team.name, release.days_until_release);
    }
    debug!(team = %team.name, ?history, "relevant historical throughput");

    match forecast_from_history(&team.name, &history, release, settings.trials, rng) {
        Ok(result) => result,
        Err(error) => {
            warn!(team = %team.name, %error, "simulation failed, emitting zero forecast");
            ForecastResult::zero_filled(&team.name, release.days_until_release)
        }
    }
}

fn forecast_from_history<R: Rng + ?Sized>(
    team_name: &str,
    history: &[u32],
    release: ResolvedRelease,
    trials: usize,
    rng: &mut R,
) -> Result<ForecastResult, SamplerError> {
    // Only the 85% figure of the run up to the release is reported.
    let current_period = simulate_horizon(history, release.days_until_release, trials, rng)?;
    let next_period = simulate_horizon(history, release.cadence.period_days(), trials, rng)?;

    Ok(ForecastResult {
        team_name: team_name.to_string(),
        pct_85: next_period.pct_85_items(),
        pct_70: next_period.pct_70_items(),
        days_until_release: release.days_until_release,
        current_period_forecast: current_period.pct_85_items(),
    })
}

fn simulate_horizon<R: Rng + ?Sized>(
    history: &[u32],
    horizon_days: u64,
    trials: usize,
    rng: &mut R,
) -> Result<ExceedanceForecast, SamplerError> {
    let totals = simulate_with_rng(history, horizon_days, trials, rng)?;
    estimate(&totals).ok_or(SamplerError::InvalidTrials)
}
