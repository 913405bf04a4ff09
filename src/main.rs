mod commands;
mod domain;
mod services;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::forecast_cmd::forecast_command;
use crate::commands::probability_cmd::probability_command;
use crate::commands::sle_cmd::{sle_command, sle_scale_command};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Forecast { .. } => forecast_command(cmd),
        cmd @ Commands::Probability { .. } => probability_command(cmd),
        cmd @ Commands::Sle { .. } => sle_command(cmd),
        cmd @ Commands::SleScale { .. } => sle_scale_command(cmd),
        Commands::Completions { shell } => {
            let mut cli = CliArgs::command();
            let name = cli.get_name().to_string();
            clap_complete::generate(shell, &mut cli, name, &mut std::io::stdout());
            ExitCode::SUCCESS
        }
    }
}
