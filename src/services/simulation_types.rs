use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct CompletionPercentile {
    pub percentile: f64,
    pub weeks: f32,
    pub date: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct ForecastReport {
    pub data_source: String,
    pub start_date: String,
    pub iterations: usize,
    pub num_items: usize,
    pub num_completed: usize,
    pub percentiles: Vec<CompletionPercentile>,
}

#[derive(Debug, Clone)]
pub struct ForecastOutput {
    pub report: ForecastReport,
    /// Weeks per trial, sorted ascending.
    pub results: Vec<f32>,
}

#[derive(Serialize, Debug, Clone)]
pub struct ThroughputPercentile {
    pub percentile: f64,
    pub throughput: f32,
}

#[derive(Serialize, Debug, Clone)]
pub struct ProbabilityReport {
    pub data_source: String,
    pub iterations: usize,
    pub percentiles: Vec<ThroughputPercentile>,
}

#[derive(Debug, Clone)]
pub struct ProbabilityOutput {
    pub report: ProbabilityReport,
    /// Simulated throughput values, sorted ascending.
    pub results: Vec<f32>,
}
