pub mod day_aggregator;
pub mod error;
