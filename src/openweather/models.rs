//! Wire types for the OpenWeatherMap 2.5 `weather` and `forecast` endpoints, and their
//! mapping onto the crate's own types.

use crate::openweather::error::FetchError;
use crate::types::current_weather::CurrentWeather;
use crate::types::sample::Sample;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionEntry {
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Volume {
    #[serde(rename = "3h")]
    pub three_hours: Option<f64>,
}

/// Response of `GET /weather`.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    pub name: String,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
}

/// One 3-hourly entry of `GET /forecast`.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    /// Local label such as `"2024-06-01 15:00:00"`.
    pub dt_txt: String,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
    pub rain: Option<Volume>,
}

/// Response of `GET /forecast`.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

impl CurrentResponse {
    pub fn into_current_weather(self) -> CurrentWeather {
        let condition_text = self
            .weather
            .into_iter()
            .next()
            .map(|entry| entry.description)
            .unwrap_or_default();
        CurrentWeather {
            city_name: self.name,
            temperature: self.main.temp,
            condition_text,
        }
    }
}

impl ForecastResponse {
    /// Maps the entries onto [`Sample`]s, preserving their order.
    ///
    /// The condition text is the first `weather` entry's description; an entry without
    /// one is rejected because every forecast day needs a condition to show.
    pub fn into_samples(self) -> Result<Vec<Sample>, FetchError> {
        self.list
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let condition_text = entry
                    .weather
                    .into_iter()
                    .next()
                    .map(|c| c.description)
                    .ok_or(FetchError::MissingField {
                        index,
                        field: "weather[0].description",
                    })?;
                Ok(Sample {
                    timestamp: entry.dt_txt.into(),
                    temperature: entry.main.temp,
                    temperature_min: entry.main.temp_min,
                    temperature_max: entry.main.temp_max,
                    precipitation: entry.rain.and_then(|rain| rain.three_hours),
                    condition_text,
                })
            })
            .collect()
    }
}
