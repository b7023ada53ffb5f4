use crate::aggregation::error::ForecastError;
use crate::openweather::error::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Cannot {action} while the dashboard is {from}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },
}
