use serde::Serialize;

/// Forecast row of one team. Column names follow the published report.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ForecastResult {
    pub team_name: String,
    /// 85% chance of completing at least this many items in the next full period.
    #[serde(rename = "_85_pt")]
    pub pct_85: u64,
    /// 70% chance of completing at least this many items in the next full period.
    #[serde(rename = "_70_pt")]
    pub pct_70: u64,
    pub days_until_release: u64,
    /// 85% forecast for the days left until the next release.
    pub current_period_forecast: u64,
}

impl ForecastResult {
    pub fn zero_filled(team_name: &str, days_until_release: u64) -> Self {
        Self {
            team_name: team_name.to_string(),
            pct_85: 0,
            pct_70: 0,
            days_until_release,
            current_period_forecast: 0,
        }
    }
}
