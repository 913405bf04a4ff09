use chrono::Local;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Forecast completion dates for a backlog from historical throughput
    Forecast {
        /// Throughput CSV file (row- or column-shaped numeric values)
        #[arg(short = 'f', long)]
        throughput: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Total number of backlog items
        #[arg(short = 'n', long)]
        num_items: usize,
        /// Number of items already completed
        #[arg(short = 'c', long, default_value_t = 0)]
        num_completed: usize,
        /// Weeks covered by one throughput observation
        #[arg(short = 'w', long, default_value_t = 12.0)]
        timeframe_weeks: f32,
        /// Standard deviation of the throughput noise (0 disables noise)
        #[arg(long, default_value_t = 0.0)]
        sigma: f32,
        /// Resample noisy draws until they are non-negative
        #[arg(long, default_value_t = false)]
        truncate_noise: bool,
        /// Cap on work in progress (Little's Law ceiling on throughput)
        #[arg(long)]
        max_wip: Option<f32>,
        /// Simulation start date (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_start_date())]
        start_date: String,
        /// Number of simulation iterations
        #[arg(short, long, default_value_t = 10000)]
        iterations: usize,
        /// Percentiles to report
        #[arg(short, long, value_delimiter = ',', default_values_t = [60.0, 85.0, 95.0])]
        percentiles: Vec<f64>,
    },
    /// Forecast the throughput distribution itself
    Probability {
        /// Throughput CSV file (row- or column-shaped numeric values)
        #[arg(short = 'f', long)]
        throughput: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Standard deviation of the throughput noise (0 disables noise)
        #[arg(long, default_value_t = 0.0)]
        sigma: f32,
        /// Resample noisy draws until they are non-negative
        #[arg(long, default_value_t = false)]
        truncate_noise: bool,
        /// Number of simulation iterations
        #[arg(short, long, default_value_t = 10000)]
        iterations: usize,
        /// Percentiles to report
        #[arg(short, long, value_delimiter = ',', default_values_t = [60.0, 85.0, 95.0])]
        percentiles: Vec<f64>,
    },
    /// Percentile-based service level expectations per workflow state
    Sle {
        /// State times CSV file (state,time_spent rows)
        #[arg(short = 'f', long)]
        state_times: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Timebox duration in days, caps every estimate
        #[arg(short, long)]
        timebox: f32,
        /// Percentiles to report
        #[arg(short, long, value_delimiter = ',', default_values_t = [50.0, 85.0, 95.0])]
        percentiles: Vec<f64>,
    },
    /// Timebox-scaled service level expectations per workflow state
    SleScale {
        /// State times CSV file (state,time_spent rows)
        #[arg(short = 'f', long)]
        state_times: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Timebox duration in days, scales and caps every estimate
        #[arg(short, long)]
        timebox: f32,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn default_start_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
