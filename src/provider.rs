//! The seam between the dashboard and whatever service supplies weather data.

use crate::openweather::error::FetchError;
use crate::types::current_weather::CurrentWeather;
use crate::types::sample::Sample;
use crate::types::units::Units;
use std::future::Future;

/// A source of current conditions and sub-daily forecast samples for a named city.
///
/// [`crate::OpenWeatherClient`] is the bundled implementation. Forecast samples must be
/// returned in chronological order; the dashboard aggregates them as delivered.
pub trait WeatherProvider {
    /// Unit system the provider's temperatures are expressed in.
    fn units(&self) -> Units;

    fn current_weather(
        &self,
        city: &str,
    ) -> impl Future<Output = Result<CurrentWeather, FetchError>> + Send;

    fn forecast(
        &self,
        city: &str,
    ) -> impl Future<Output = Result<Vec<Sample>, FetchError>> + Send;
}
