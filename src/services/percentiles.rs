//! Percentile helpers for simulated totals.
//!
//! - Empty input => `None`.
//! - `percentile <= 0` => first element.
//! - `percentile >= 100` => last element.
//! - Otherwise the position within `[0, len-1]` is interpolated linearly
//!   between the two closest ranks.

/// Percentile read for the "85% chance to reach at least this" forecast.
pub const PCT_85_PERCENTILE: f64 = 15.0;
/// Percentile read for the "70% chance to reach at least this" forecast.
pub const PCT_70_PERCENTILE: f64 = 30.0;

/// Returns the percentile value from a slice that is already sorted in
/// ascending order.
pub fn value_sorted(sorted_values: &[f64], percentile: f64) -> Option<f64> {
    let last = sorted_values.len().checked_sub(1)?;
    if percentile <= 0.0 {
        return sorted_values.first().copied();
    }
    if percentile >= 100.0 {
        return sorted_values.last().copied();
    }

    let position = percentile * last as f64 / 100.0;
    let lower = position.floor() as usize;
    let upper = (position.ceil() as usize).min(last);
    let fraction = position - lower as f64;
    let lower_value = sorted_values[lower];
    let upper_value = sorted_values[upper];
    Some(lower_value + (upper_value - lower_value) * fraction)
}

/// Two percentile-of-exceedance forecasts over a set of simulated totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExceedanceForecast {
    pub pct_85: f64,
    pub pct_70: f64,
}

impl ExceedanceForecast {
    pub fn pct_85_items(&self) -> u64 {
        self.pct_85.trunc() as u64
    }

    pub fn pct_70_items(&self) -> u64 {
        self.pct_70.trunc() as u64
    }
}

/// Reduces simulated totals to the 85% and 70% exceedance forecasts, i.e. the
/// 15th and 30th percentile of the totals.
pub fn estimate(totals: &[u64]) -> Option<ExceedanceForecast> {
    let mut sorted: Vec<f64> = totals.iter().map(|total| *total as f64).collect();
    sorted.sort_by(|a, b| a.total_cmp(b));

    Some(ExceedanceForecast {
        pct_85: value_sorted(&sorted, PCT_85_PERCENTILE)?,
        pct_70: value_sorted(&sorted, PCT_70_PERCENTILE)?,
    })
}
