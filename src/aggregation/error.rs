use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ForecastError {
    #[error("Window size must be at least 1, got {0}")]
    InvalidWindowSize(usize),

    #[error("Sample {index} has an unparseable timestamp '{timestamp}'")]
    InvalidTimestamp { index: usize, timestamp: String },

    #[error("Sample {index} has a non-finite {field}: {value}")]
    NonFiniteValue {
        index: usize,
        field: &'static str,
        value: f64,
    },

    #[error("Sample {index} reports negative precipitation: {value}")]
    NegativePrecipitation { index: usize, value: f64 },

    #[error("Sample {index} has temperature_min {min} above temperature_max {max}")]
    InvertedRange { index: usize, min: f64, max: f64 },
}
