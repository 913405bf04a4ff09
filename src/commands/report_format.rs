use crate::services::simulation_types::{ForecastReport, ProbabilityReport};
use crate::services::sle::{ScaledSleReport, SleReport};

pub fn format_forecast_report(report: &ForecastReport) -> String {
    let mut lines = Vec::new();
    lines.push("Completion Forecast".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Start date: {}", report.start_date));
    lines.push(format!("Iterations: {}", report.iterations));
    lines.push(format!("Backlog items: {}", report.num_items));
    lines.push(format!("Completed items: {}", report.num_completed));
    lines.push(String::new());
    lines.push("Percentile | Weeks | Date".to_string());
    lines.push("-----------|-------|-----".to_string());
    for entry in &report.percentiles {
        lines.push(format!(
            "{} | {:.2} | {}",
            percentile_label(entry.percentile),
            entry.weeks,
            entry.date
        ));
    }
    lines.join("\n")
}

pub fn format_probability_report(report: &ProbabilityReport) -> String {
    let mut lines = Vec::new();
    lines.push("Throughput Forecast".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Iterations: {}", report.iterations));
    lines.push(String::new());
    lines.push("Percentile | Throughput".to_string());
    lines.push("-----------|-----------".to_string());
    for entry in &report.percentiles {
        lines.push(format!(
            "{} | {:.2}",
            percentile_label(entry.percentile),
            entry.throughput
        ));
    }
    lines.join("\n")
}

pub fn format_sle_report(report: &SleReport) -> String {
    let mut lines = Vec::new();
    lines.push("Service Level Expectations".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Timebox: {:.2} days", report.timebox_days));
    lines.push(String::new());
    lines.push("State | Percentile | Days".to_string());
    lines.push("------|------------|-----".to_string());
    for state in &report.states {
        for estimate in &state.estimates {
            lines.push(format!(
                "{} | {} | {:.2}",
                state.state,
                percentile_label(estimate.percentile),
                estimate.days
            ));
        }
    }
    lines.join("\n")
}

pub fn format_scaled_sle_report(report: &ScaledSleReport) -> String {
    let mut lines = Vec::new();
    lines.push("Service Level Expectations (timebox-scaled)".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Timebox: {:.2} days", report.timebox_days));
    lines.push(String::new());
    lines.push("State | Days".to_string());
    lines.push("------|-----".to_string());
    for state in &report.states {
        lines.push(format!("{} | {:.2}", state.state, state.days));
    }
    lines.join("\n")
}

fn percentile_label(percentile: f64) -> String {
    if percentile.fract() == 0.0 {
        format!("P{:.0}", percentile)
    } else {
        format!("P{}", percentile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::simulation_types::{
        CompletionPercentile, ThroughputPercentile,
    };
    use crate::services::sle::{ScaledServiceLevel, SleEstimate, StateServiceLevel};

    fn build_forecast_report() -> ForecastReport {
        ForecastReport {
            data_source: "throughput.csv".to_string(),
            start_date: "2025-08-01".to_string(),
            iterations: 10000,
            num_items: 187,
            num_completed: 18,
            percentiles: vec![
                CompletionPercentile {
                    percentile: 60.0,
                    weeks: 16.0,
                    date: "2025-11-21".to_string(),
                },
                CompletionPercentile {
                    percentile: 95.0,
                    weeks: 21.5,
                    date: "2025-12-30".to_string(),
                },
            ],
        }
    }

    #[test]
    fn forecast_report_includes_header_and_table() {
        let output = format_forecast_report(&build_forecast_report());

        assert!(output.contains("Completion Forecast"));
        assert!(output.contains("Data source: throughput.csv"));
        assert!(output.contains("Start date: 2025-08-01"));
        assert!(output.contains("Iterations: 10000"));
        assert!(output.contains("Backlog items: 187"));
        assert!(output.contains("Completed items: 18"));
        assert!(output.contains("Percentile | Weeks | Date"));
        assert!(output.contains("P60 | 16.00 | 2025-11-21"));
        assert!(output.contains("P95 | 21.50 | 2025-12-30"));
    }

    #[test]
    fn probability_report_lists_throughput_per_percentile() {
        let report = ProbabilityReport {
            data_source: "throughput.csv".to_string(),
            iterations: 10000,
            percentiles: vec![ThroughputPercentile {
                percentile: 85.0,
                throughput: 9.73,
            }],
        };

        let output = format_probability_report(&report);
        assert!(output.contains("Throughput Forecast"));
        assert!(output.contains("P85 | 9.73"));
    }

    #[test]
    fn sle_report_lists_each_state_and_percentile() {
        let report = SleReport {
            data_source: "historical_data.csv".to_string(),
            timebox_days: 14.0,
            states: vec![StateServiceLevel {
                state: "In Progress".to_string(),
                estimates: vec![SleEstimate {
                    percentile: 50.0,
                    days: 14.0,
                }],
            }],
        };

        let output = format_sle_report(&report);
        assert!(output.contains("Timebox: 14.00 days"));
        assert!(output.contains("In Progress | P50 | 14.00"));
    }

    #[test]
    fn scaled_sle_report_lists_each_state() {
        let report = ScaledSleReport {
            data_source: "historical_data.csv".to_string(),
            timebox_days: 14.0,
            states: vec![ScaledServiceLevel {
                state: "Review".to_string(),
                days: 2.15,
            }],
        };

        let output = format_scaled_sle_report(&report);
        assert!(output.contains("Review | 2.15"));
    }
}
