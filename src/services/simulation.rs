use chrono::NaiveDate;
use rand::Rng;
use thiserror::Error;

use crate::domain::noise::{NoiseError, NoiseModel};
use crate::domain::observations::{Observations, ObservationsError};
use crate::domain::percentile_set::PercentileSet;
use crate::services::histogram::{HistogramError, write_histogram_png};
use crate::services::percentiles;
use crate::services::projection::project_completion_date;
use crate::services::sampler::sample_throughput;
use crate::services::simulation_types::{CompletionPercentile, ForecastOutput, ForecastReport};
use crate::services::throughput_csv::{ThroughputCsvError, read_throughput_csv};

/// Hard ceiling on simulated weeks per trial. A healthy configuration
/// finishes orders of magnitude below this; hitting it means the effective
/// throughput cannot reach the backlog size.
const MAX_WEEKS_PER_TRIAL: u32 = 10_000;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("failed to read throughput data: {0}")]
    ReadThroughput(#[from] ThroughputCsvError),
    #[error("invalid throughput data: {0}")]
    InvalidThroughput(#[from] ObservationsError),
    #[error("invalid start date: {0}")]
    InvalidStartDate(String),
    #[error("iterations must be greater than zero")]
    InvalidIterations,
    #[error("number of backlog items must be greater than zero")]
    InvalidBacklogSize,
    #[error("completed items ({completed}) exceed backlog items ({backlog})")]
    CompletedExceedsBacklog { completed: usize, backlog: usize },
    #[error("timeframe weeks must be greater than zero")]
    InvalidTimeframe,
    #[error("max wip must be greater than zero")]
    InvalidMaxWip,
    #[error("throughput data has no nonzero values")]
    ZeroThroughput,
    #[error("failed to sample throughput: {0}")]
    Sample(#[from] NoiseError),
    #[error(
        "trial stalled after {weeks} weeks without completing the backlog; \
         check throughput data, sigma and max wip"
    )]
    TrialStalled { weeks: u32 },
    #[error("failed to render histogram: {0}")]
    Histogram(#[from] HistogramError),
}

#[derive(Debug, Clone)]
pub struct ForecastParameters {
    pub num_items: usize,
    pub num_completed: usize,
    pub timeframe_weeks: f32,
    pub iterations: usize,
    pub max_wip: Option<f32>,
}

pub(crate) fn forecast_from_throughput_file(
    throughput_path: &str,
    params: &ForecastParameters,
    noise: &NoiseModel,
    percentile_set: &PercentileSet,
    start_date: &str,
    histogram_path: &str,
) -> Result<ForecastReport, SimulationError> {
    let values = read_throughput_csv(throughput_path)?;
    let history = Observations::new(values)?;
    let start_date = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
        .map_err(|_| SimulationError::InvalidStartDate(start_date.to_string()))?;

    let mut rng = rand::thread_rng();
    let mut output =
        run_forecast_with_rng(&history, params, noise, percentile_set, start_date, &mut rng)?;
    output.report.data_source = data_source_name(throughput_path);
    write_histogram_png(
        histogram_path,
        "Simulated Completion Times",
        "Completion time in weeks",
        &output.results,
    )?;
    Ok(output.report)
}

pub(crate) fn run_forecast_with_rng<R: Rng + ?Sized>(
    history: &Observations,
    params: &ForecastParameters,
    noise: &NoiseModel,
    percentile_set: &PercentileSet,
    start_date: NaiveDate,
    rng: &mut R,
) -> Result<ForecastOutput, SimulationError> {
    if params.iterations == 0 {
        return Err(SimulationError::InvalidIterations);
    }
    if params.num_items == 0 {
        return Err(SimulationError::InvalidBacklogSize);
    }
    if params.num_completed > params.num_items {
        return Err(SimulationError::CompletedExceedsBacklog {
            completed: params.num_completed,
            backlog: params.num_items,
        });
    }
    if !(params.timeframe_weeks > 0.0) {
        return Err(SimulationError::InvalidTimeframe);
    }
    if let Some(max_wip) = params.max_wip {
        if !(max_wip > 0.0) {
            return Err(SimulationError::InvalidMaxWip);
        }
    }
    if history.is_all_zero() {
        return Err(SimulationError::ZeroThroughput);
    }

    let mut results = Vec::with_capacity(params.iterations);
    for _ in 0..params.iterations {
        let weeks = simulate_single_trial(history, params, noise, rng)?;
        results.push(weeks as f32);
    }
    results.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let entries = percentile_set
        .targets()
        .iter()
        .map(|&percentile| {
            let weeks = percentiles::value_f32_sorted(&results, percentile);
            CompletionPercentile {
                percentile,
                weeks,
                date: project_completion_date(start_date, weeks)
                    .format("%Y-%m-%d")
                    .to_string(),
            }
        })
        .collect();

    let report = ForecastReport {
        data_source: String::new(),
        start_date: start_date.format("%Y-%m-%d").to_string(),
        iterations: params.iterations,
        num_items: params.num_items,
        num_completed: params.num_completed,
        percentiles: entries,
    };

    Ok(ForecastOutput { report, results })
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}

/// One independent trial: accumulate sampled weekly throughput until the
/// backlog is complete, counting the weeks it took.
fn simulate_single_trial<R: Rng + ?Sized>(
    history: &Observations,
    params: &ForecastParameters,
    noise: &NoiseModel,
    rng: &mut R,
) -> Result<u32, SimulationError> {
    let target = params.num_items as f32;
    let mut completed = params.num_completed as f32;
    let mut weeks = 0_u32;

    while completed < target {
        if weeks >= MAX_WEEKS_PER_TRIAL {
            return Err(SimulationError::TrialStalled { weeks });
        }
        let sampled = sample_throughput(history, noise, rng)?;
        let weekly_rate = sampled / params.timeframe_weeks;
        let effective_rate = match params.max_wip {
            // Little's Law ceiling: WIP over cycle time bounds throughput.
            Some(max_wip) => weekly_rate.min(max_wip / params.timeframe_weeks),
            None => weekly_rate,
        };
        completed += effective_rate;
        weeks += 1;
    }

    Ok(weeks)
}
