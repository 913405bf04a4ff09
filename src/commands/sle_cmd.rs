use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::{format_scaled_sle_report, format_sle_report};
use crate::domain::percentile_set::PercentileSet;
use crate::services::sle::{estimate_from_state_times_file, scale_from_state_times_file};

pub fn sle_command(cmd: Commands) -> ExitCode {
    let Commands::Sle {
        state_times,
        output,
        timebox,
        percentiles,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let percentile_set = match PercentileSet::new(percentiles) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Invalid percentiles: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let report = match estimate_from_state_times_file(&state_times, timebox, &percentile_set) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Failed to estimate service levels: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let yaml = match serde_yaml::to_string(&report) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to serialize service level output: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = std::fs::write(&output, yaml) {
        eprintln!("Failed to write service level output: {e:?}");
        return ExitCode::FAILURE;
    }

    println!("{}", format_sle_report(&report));
    println!("Service level estimates written to {output}");
    ExitCode::SUCCESS
}

pub fn sle_scale_command(cmd: Commands) -> ExitCode {
    let Commands::SleScale {
        state_times,
        output,
        timebox,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let report = match scale_from_state_times_file(&state_times, timebox) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Failed to scale service levels: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let yaml = match serde_yaml::to_string(&report) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to serialize service level output: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = std::fs::write(&output, yaml) {
        eprintln!("Failed to write service level output: {e:?}");
        return ExitCode::FAILURE;
    }

    println!("{}", format_scaled_sle_report(&report));
    println!("Scaled service level estimates written to {output}");
    ExitCode::SUCCESS
}
