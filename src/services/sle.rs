use serde::Serialize;
use thiserror::Error;

use crate::domain::percentile_set::PercentileSet;
use crate::domain::state_times::WorkflowTimes;
use crate::services::percentiles;
use crate::services::state_times_csv::{StateTimesCsvError, read_state_times_csv};

#[derive(Error, Debug)]
pub enum SleError {
    #[error("failed to read state times data: {0}")]
    ReadStateTimes(#[from] StateTimesCsvError),
    #[error("historical data contains no workflow states")]
    EmptyStateTimes,
    #[error("timebox duration must be greater than zero")]
    InvalidTimebox,
    #[error("total time across all observations is zero, cannot derive a scaling factor")]
    ZeroTotalTime,
}

#[derive(Serialize, Debug, Clone)]
pub struct SleEstimate {
    pub percentile: f64,
    pub days: f32,
}

#[derive(Serialize, Debug, Clone)]
pub struct StateServiceLevel {
    pub state: String,
    pub estimates: Vec<SleEstimate>,
}

#[derive(Serialize, Debug, Clone)]
pub struct SleReport {
    pub data_source: String,
    pub timebox_days: f32,
    pub states: Vec<StateServiceLevel>,
}

#[derive(Serialize, Debug, Clone)]
pub struct ScaledServiceLevel {
    pub state: String,
    pub days: f32,
}

#[derive(Serialize, Debug, Clone)]
pub struct ScaledSleReport {
    pub data_source: String,
    pub timebox_days: f32,
    pub states: Vec<ScaledServiceLevel>,
}

pub(crate) fn estimate_from_state_times_file(
    state_times_path: &str,
    timebox_days: f32,
    percentile_set: &PercentileSet,
) -> Result<SleReport, SleError> {
    let times = read_state_times_csv(state_times_path)?;
    let states = estimate_service_levels(&times, timebox_days, percentile_set)?;
    Ok(SleReport {
        data_source: data_source_name(state_times_path),
        timebox_days,
        states,
    })
}

pub(crate) fn scale_from_state_times_file(
    state_times_path: &str,
    timebox_days: f32,
) -> Result<ScaledSleReport, SleError> {
    let times = read_state_times_csv(state_times_path)?;
    let states = scale_service_levels(&times, timebox_days)?;
    Ok(ScaledSleReport {
        data_source: data_source_name(state_times_path),
        timebox_days,
        states,
    })
}

/// Percentile strategy: one estimate per requested percentile over each
/// state's own historical durations, capped at the timebox.
pub fn estimate_service_levels(
    times: &WorkflowTimes,
    timebox_days: f32,
    percentile_set: &PercentileSet,
) -> Result<Vec<StateServiceLevel>, SleError> {
    if !(timebox_days > 0.0) {
        return Err(SleError::InvalidTimebox);
    }
    if times.is_empty() {
        return Err(SleError::EmptyStateTimes);
    }

    let mut states = Vec::with_capacity(times.states().len());
    for entry in times.states() {
        let mut sorted = entry.times.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let estimates = percentile_set
            .targets()
            .iter()
            .map(|&percentile| SleEstimate {
                percentile,
                days: percentiles::value_f32_sorted(&sorted, percentile).min(timebox_days),
            })
            .collect();

        states.push(StateServiceLevel {
            state: entry.state.clone(),
            estimates,
        });
    }
    Ok(states)
}

/// Proportional-scaling strategy: every observation is scaled by
/// `timebox / total time across all observations`, and the last observation
/// per state becomes that state's estimate, capped at the timebox.
///
/// Assumes the pooled historical durations approximate one full workflow
/// traversal. Data spanning several unrelated cycles scales into nonsense;
/// that is inherent to the strategy, not detected here.
pub fn scale_service_levels(
    times: &WorkflowTimes,
    timebox_days: f32,
) -> Result<Vec<ScaledServiceLevel>, SleError> {
    if !(timebox_days > 0.0) {
        return Err(SleError::InvalidTimebox);
    }
    if times.is_empty() {
        return Err(SleError::EmptyStateTimes);
    }
    let total_time = times.total_time();
    if total_time <= 0.0 {
        return Err(SleError::ZeroTotalTime);
    }

    let adjustment_factor = timebox_days / total_time;
    let states = times
        .states()
        .iter()
        .map(|entry| {
            let last_time = entry.times.last().copied().unwrap_or(0.0);
            ScaledServiceLevel {
                state: entry.state.clone(),
                days: (last_time * adjustment_factor).min(timebox_days),
            }
        })
        .collect();
    Ok(states)
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}
