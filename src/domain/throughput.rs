use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Number of items a team completed on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThroughputRecord {
    pub team: String,
    pub date: NaiveDate,
    pub throughput: u32,
}

/// Returns the daily throughput of `team`, newest day first, limited to the
/// `window` most recent days. Records sharing a date are summed.
pub fn recent_team_throughput(
    records: &[ThroughputRecord],
    team: &str,
    window: usize,
) -> Vec<u32> {
    daily_totals(records, team)
        .into_values()
        .rev()
        .take(window)
        .collect()
}

/// Returns one record per day of `team` in chronological order, summing
/// records that share a date.
pub fn team_series(records: &[ThroughputRecord], team: &str) -> Vec<ThroughputRecord> {
    daily_totals(records, team)
        .into_iter()
        .map(|(date, throughput)| ThroughputRecord {
            team: team.to_string(),
            date,
            throughput,
        })
        .collect()
}

fn daily_totals(records: &[ThroughputRecord], team: &str) -> BTreeMap<NaiveDate, u32> {
    let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for record in records.iter().filter(|record| record.team == team) {
        let total = per_day.entry(record.date).or_insert(0);
        *total = total.saturating_add(record.throughput);
    }
    per_day
}
