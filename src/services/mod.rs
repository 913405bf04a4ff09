pub mod histogram;
pub mod percentiles;
pub mod probability;
pub mod projection;
pub mod sampler;
pub mod simulation;
pub mod simulation_types;
pub mod sle;
pub mod state_times_csv;
pub mod throughput_csv;
