use rand::Rng;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SamplerError {
    #[error("invalid input: cannot sample from an empty throughput history")]
    EmptyHistory,
    #[error("invalid input: trials must be greater than zero")]
    InvalidTrials,
}

/// Monte Carlo simulation of the items completed over `horizon_days`.
///
/// Every trial draws `horizon_days` daily values uniformly, with replacement,
/// from `history` and sums them. Days without completions stay part of the
/// population. Returns one total per trial.
///
/// `history` is checked to be non-empty before any trial runs, so every draw
/// indexes a valid day.
pub fn simulate_with_rng<R: Rng + ?Sized>(
    history: &[u32],
    horizon_days: u64,
    trials: usize,
    rng: &mut R,
) -> Result<Vec<u64>, SamplerError> {
    if history.is_empty() {
        return Err(SamplerError::EmptyHistory);
    }
    if trials == 0 {
        return Err(SamplerError::InvalidTrials);
    }

    let mut totals = Vec::with_capacity(trials);
    for _ in 0..trials {
        totals.push(simulate_single_trial(history, horizon_days, rng));
    }
    Ok(totals)
}

fn simulate_single_trial<R: Rng + ?Sized>(history: &[u32], horizon_days: u64, rng: &mut R) -> u64 {
    let mut total = 0_u64;
    for _ in 0..horizon_days {
        total += u64::from(history[rng.gen_range(0..history.len())]);
    }
    total
}
