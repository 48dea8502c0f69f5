use crate::domain::forecast::ForecastResult;

pub fn format_forecast_report(today: &str, trials: usize, results: &[ForecastResult]) -> String {
    let mut lines = Vec::new();
    lines.push("Throughput Forecast".to_string());
    lines.push(format!("Reference date: {today}"));
    lines.push(format!("Trials per horizon: {trials}"));
    lines.push(format!("Teams: {}", results.len()));
    lines.push(String::new());
    lines.push("Team | 85% | 70% | Days until release | Until release (85%)".to_string());
    lines.push("-----|-----|-----|--------------------|--------------------".to_string());
    for result in results {
        lines.push(format_forecast_row(result));
    }

    lines.join("\n")
}

fn format_forecast_row(result: &ForecastResult) -> String {
    format!(
        "{team} | {pct_85} | {pct_70} | {days} | {current}",
        team = result.team_name,
        pct_85 = result.pct_85,
        pct_70 = result.pct_70,
        days = result.days_until_release,
        current = result.current_period_forecast
    )
}
