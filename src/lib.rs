//! Current weather and a bounded daily forecast for a city.
//!
//! The core is [`aggregate`], which folds 3-hourly forecast [`Sample`]s into one
//! [`DailySummary`] per date, and [`build_series`], which projects those days onto the
//! aligned label/temperature/precipitation series of a dual-axis chart. Both are pure.
//!
//! [`OpenWeatherClient`] retrieves data from OpenWeatherMap and [`Dashboard`] ties the
//! pieces together as a small state machine.

mod aggregation;
mod chart;
mod dashboard;
mod error;
mod openweather;
mod provider;
mod types;

pub use error::DashboardError;

pub use aggregation::day_aggregator::{aggregate, DayAggregator, DEFAULT_WINDOW_SIZE};
pub use aggregation::error::ForecastError;

pub use chart::dual_axis::{
    AxisPosition, Dataset, DatasetKind, DualAxisChart, LegendPosition, ValueAxis,
};
pub use chart::series::{build_series, format_label, ChartSeries};

pub use dashboard::{
    Dashboard, DashboardConfig, DashboardState, DashboardView, Failure, DEFAULT_CITY,
};

pub use openweather::client::{OpenWeatherClient, API_KEY_ENV, DEFAULT_BASE_URL};
pub use openweather::error::FetchError;
pub use openweather::models::{
    ConditionEntry, CurrentResponse, ForecastEntry, ForecastResponse, MainReadings, Volume,
};

pub use provider::WeatherProvider;

pub use types::current_weather::CurrentWeather;
pub use types::daily_summary::DailySummary;
pub use types::sample::Sample;
pub use types::timestamp::{AnyTimestamp, Timestamp};
pub use types::units::Units;
