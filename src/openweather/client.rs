//! HTTP client for the OpenWeatherMap 2.5 API.
//!
//! Only two endpoints are used: `weather` for the present conditions and `forecast` for the
//! 5-day list of 3-hourly samples. Both are queried by city name.

use crate::openweather::error::FetchError;
use crate::openweather::models::{CurrentResponse, ForecastResponse};
use crate::provider::WeatherProvider;
use crate::types::current_weather::CurrentWeather;
use crate::types::sample::Sample;
use crate::types::units::Units;
use bon::bon;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
/// Environment variable read by [`OpenWeatherClient::from_env`].
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches current weather and forecast samples from OpenWeatherMap.
///
/// # Examples
///
/// ```no_run
/// use weather_dashboard::{OpenWeatherClient, Units, WeatherProvider};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), weather_dashboard::FetchError> {
/// let client = OpenWeatherClient::builder()
///     .api_key("my-api-key")
///     .units(Units::Metric)
///     .build()?;
///
/// let samples = client.forecast("Kolkata").await?;
/// println!("Got {} samples", samples.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
    units: Units,
}

#[bon]
impl OpenWeatherClient {
    /// Creates a client.
    ///
    /// * `.api_key(..)`: **Required.** OpenWeatherMap application key.
    /// * `.base_url(..)`: Optional. Defaults to [`DEFAULT_BASE_URL`].
    /// * `.units(Units)`: Optional. Defaults to [`Units::Metric`].
    /// * `.timeout(Duration)`: Optional request timeout. Defaults to 30 seconds.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::MissingApiKey`] for a blank key and [`FetchError::ClientBuild`]
    /// if the HTTP client cannot be initialized.
    #[builder]
    pub fn new(
        #[builder(into)] api_key: String,
        #[builder(into)] base_url: Option<String>,
        units: Option<Units>,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        if api_key.trim().is_empty() {
            return Err(FetchError::MissingApiKey(API_KEY_ENV));
        }
        let http = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(FetchError::ClientBuild)?;
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            units: units.unwrap_or_default(),
        })
    }

    /// Creates a client whose key comes from the `OPENWEATHER_API_KEY` environment variable.
    pub fn from_env(units: Units) -> Result<Self, FetchError> {
        let api_key =
            std::env::var(API_KEY_ENV).map_err(|_| FetchError::MissingApiKey(API_KEY_ENV))?;
        Self::builder().api_key(api_key).units(units).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Present conditions for `city`.
    pub async fn fetch_current(&self, city: &str) -> Result<CurrentWeather, FetchError> {
        let response: CurrentResponse = self.get_json("weather", city).await?;
        Ok(response.into_current_weather())
    }

    /// The 3-hourly forecast for `city`, in the order the service returned it.
    pub async fn fetch_forecast(&self, city: &str) -> Result<Vec<Sample>, FetchError> {
        let response: ForecastResponse = self.get_json("forecast", city).await?;
        let samples = response.into_samples()?;
        debug!("Received {} forecast samples for '{}'", samples.len(), city);
        Ok(samples)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, FetchError> {
        // The key is a query parameter, so it never appears in `url` or in logs.
        let url = format!("{}/{}", self.base_url, endpoint);
        info!("Requesting {} for '{}' ({})", url, city, self.units);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("units", self.units.query_value()),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

        if response.status() == StatusCode::NOT_FOUND {
            warn!("City '{}' not found at {}", city, url);
            return Err(FetchError::CityNotFound(city.to_string()));
        }

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(url, e)
                });
            }
        };

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode { url, source: e })
    }
}

impl WeatherProvider for OpenWeatherClient {
    fn units(&self) -> Units {
        self.units
    }

    async fn current_weather(&self, city: &str) -> Result<CurrentWeather, FetchError> {
        self.fetch_current(city).await
    }

    async fn forecast(&self, city: &str) -> Result<Vec<Sample>, FetchError> {
        self.fetch_forecast(city).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() -> Result<(), FetchError> {
        let client = OpenWeatherClient::builder().api_key("key").build()?;
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.units(), Units::Metric);
        Ok(())
    }

    #[test]
    fn test_builder_trims_trailing_slash() -> Result<(), FetchError> {
        let client = OpenWeatherClient::builder()
            .api_key("key")
            .base_url("http://localhost:8080/data/2.5/")
            .units(Units::Imperial)
            .timeout(Duration::from_secs(2))
            .build()?;
        assert_eq!(client.base_url(), "http://localhost:8080/data/2.5");
        assert_eq!(client.units(), Units::Imperial);
        Ok(())
    }

    #[test]
    fn test_blank_api_key_is_rejected() {
        let result = OpenWeatherClient::builder().api_key("   ").build();
        assert!(matches!(result, Err(FetchError::MissingApiKey(API_KEY_ENV))));
    }
}
