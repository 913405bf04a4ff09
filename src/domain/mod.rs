pub mod noise;
pub mod observations;
pub mod percentile_set;
pub mod state_times;
