use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_probability_report;
use crate::domain::noise::NoiseModel;
use crate::domain::percentile_set::PercentileSet;
use crate::services::probability::probability_from_throughput_file;

pub fn probability_command(cmd: Commands) -> ExitCode {
    let Commands::Probability {
        throughput,
        output,
        sigma,
        truncate_noise,
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

    let histogram_path = format!("{output}.png");
    let report = match probability_from_throughput_file(
        &throughput,
        iterations,
        &noise,
        &percentile_set,
        &histogram_path,
    ) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Failed to forecast throughput: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let yaml = match serde_yaml::to_string(&report) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to serialize throughput forecast: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = std::fs::write(&output, yaml) {
        eprintln!("Failed to write throughput forecast: {e:?}");
        return ExitCode::FAILURE;
    }

    println!("{}", format_probability_report(&report));
    println!("Throughput forecast written to {output}");
    println!("Throughput histogram written to {histogram_path}");
    ExitCode::SUCCESS
}
