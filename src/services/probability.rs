use rand::Rng;
use thiserror::Error;

use crate::domain::noise::{NoiseError, NoiseModel};
use crate::domain::observations::{Observations, ObservationsError};
use crate::domain::percentile_set::PercentileSet;
use crate::services::histogram::{HistogramError, write_histogram_png};
use crate::services::percentiles;
use crate::services::sampler::sample_throughput;
use crate::services::simulation_types::{
    ProbabilityOutput, ProbabilityReport, ThroughputPercentile,
};
use crate::services::throughput_csv::{ThroughputCsvError, read_throughput_csv};

#[derive(Error, Debug)]
pub enum ProbabilityError {
    #[error("failed to read throughput data: {0}")]
    ReadThroughput(#[from] ThroughputCsvError),
    #[error("invalid throughput data: {0}")]
    InvalidThroughput(#[from] ObservationsError),
    #[error("iterations must be greater than zero")]
    InvalidIterations,
    #[error("failed to sample throughput: {0}")]
    Sample(#[from] NoiseError),
    #[error("failed to render histogram: {0}")]
    Histogram(#[from] HistogramError),
}

pub(crate) fn probability_from_throughput_file(
    throughput_path: &str,
    iterations: usize,
    noise: &NoiseModel,
    percentile_set: &PercentileSet,
    histogram_path: &str,
) -> Result<ProbabilityReport, ProbabilityError> {
    let values = read_throughput_csv(throughput_path)?;
    let history = Observations::new(values)?;

    let mut rng = rand::thread_rng();
    let mut output = run_probability_with_rng(&history, iterations, noise, percentile_set, &mut rng)?;
    output.report.data_source = data_source_name(throughput_path);
    write_histogram_png(
        histogram_path,
        "Simulated Throughput",
        "Throughput",
        &output.results,
    )?;
    Ok(output.report)
}

/// Simulates the throughput distribution itself: one sampled value per
/// iteration, aggregated into percentile-indexed throughput estimates.
pub(crate) fn run_probability_with_rng<R: Rng + ?Sized>(
    history: &Observations,
    iterations: usize,
    noise: &NoiseModel,
    percentile_set: &PercentileSet,
    rng: &mut R,
) -> Result<ProbabilityOutput, ProbabilityError> {
    if iterations == 0 {
        return Err(ProbabilityError::InvalidIterations);
    }

    let mut results = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        results.push(sample_throughput(history, noise, rng)?);
    }
    results.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let entries = percentile_set
        .targets()
        .iter()
        .map(|&percentile| ThroughputPercentile {
            percentile,
            throughput: percentiles::value_f32_sorted(&results, percentile),
        })
        .collect();

    let report = ProbabilityReport {
        data_source: String::new(),
        iterations,
        percentiles: entries,
    };

    Ok(ProbabilityOutput { report, results })
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}
