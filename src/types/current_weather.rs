use serde::Serialize;

/// Present conditions for a city, as shown at the top of the dashboard.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct CurrentWeather {
    /// City name as resolved by the service (may differ from the query).
    pub city_name: String,
    pub temperature: f64,
    pub condition_text: String,
}

impl CurrentWeather {
    /// Temperature rounded to a whole degree for display.
    ///
    /// Halves round up (`-2.5` becomes `-2`, `2.5` becomes `3`), matching how browsers
    /// round display values.
    pub fn rounded_temperature(&self) -> i64 {
        (self.temperature + 0.5).floor() as i64
    }
}
