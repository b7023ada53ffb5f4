//! Defines [`Sample`], one sub-daily weather observation as delivered by a forecast source.

use crate::types::timestamp::Timestamp;
use bon::Builder;

/// A single forecast observation for a short window (3 hours for OpenWeatherMap).
///
/// Samples are read-only input to [`crate::aggregate`]. Temperatures are in whatever unit
/// the source was queried with; nothing here converts them.
///
/// # Examples
///
/// ```
/// use weather_dashboard::Sample;
///
/// let sample = Sample::builder()
///     .timestamp("2024-06-01 12:00:00")
///     .temperature(31.2)
///     .temperature_min(30.1)
///     .temperature_max(32.4)
///     .precipitation(0.4)
///     .condition_text("light rain")
///     .build();
///
/// assert_eq!(sample.precipitation_or_zero(), 0.4);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct Sample {
    /// Local time label of the sample's window.
    #[builder(into)]
    pub timestamp: Timestamp,
    /// Reading at that instant.
    pub temperature: f64,
    /// Lower bound reported for this sample's window (not the day).
    pub temperature_min: f64,
    /// Upper bound reported for this sample's window (not the day).
    pub temperature_max: f64,
    /// Precipitation volume in mm for the window. `None` when the source reported none.
    pub precipitation: Option<f64>,
    /// Short description of the sky, e.g. "scattered clouds".
    #[builder(into)]
    pub condition_text: String,
}

impl Sample {
    /// Precipitation with an absent value counted as zero.
    pub fn precipitation_or_zero(&self) -> f64 {
        self.precipitation.unwrap_or(0.0)
    }
}
