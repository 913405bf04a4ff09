use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_forecast_report;
use crate::domain::noise::NoiseModel;
use crate::domain::percentile_set::PercentileSet;
use crate::services::simulation::{ForecastParameters, forecast_from_throughput_file};

pub fn forecast_command(cmd: Commands) -> ExitCode {
    let Commands::Forecast {
        throughput,
        output,
        num_items,
        num_completed,
        timeframe_weeks,
        sigma,
        truncate_noise,
        max_wip,
        start_date,
        iterations,
        percentiles,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let noise = match NoiseModel::from_sigma(sigma, truncate_noise) {
        Ok(noise) => noise,
        Err(e) => {
            eprintln!("Invalid noise parameters: {e:?}");
            return ExitCode::FAILURE;
        }
    };
    let percentile_set = match PercentileSet::new(percentiles) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Invalid percentiles: {e:?}");
            return ExitCode::FAILURE;
        }
    };
    let params = ForecastParameters {
        num_items,
        num_completed,
        timeframe_weeks,
        iterations,
        max_wip,
    };

    let histogram_path = format!("{output}.png");
    let report = match forecast_from_throughput_file(
        &throughput,
        &params,
        &noise,
        &percentile_set,
        &start_date,
        &histogram_path,
    ) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Failed to forecast completion dates: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let yaml = match serde_yaml::to_string(&report) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to serialize forecast output: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = std::fs::write(&output, yaml) {
        eprintln!("Failed to write forecast output: {e:?}");
        return ExitCode::FAILURE;
    }

    println!("{}", format_forecast_report(&report));
    println!("Forecast for {num_items} items written to {output}");
    println!("Forecast histogram written to {histogram_path}");
    ExitCode::SUCCESS
}
