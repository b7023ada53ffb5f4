//! demos/offline_forecast.rs
//!
//! Aggregates a canned OpenWeatherMap forecast payload without touching the network.
//!
//! To run this example:
//! cargo run --example offline_forecast

use std::error::Error;

use weather_dashboard::{aggregate, build_series, ForecastResponse, DEFAULT_WINDOW_SIZE};

const PAYLOAD: &str = r#"{
  "list": [
    { "dt_txt": "2024-06-01 18:00:00", "main": { "temp": 31.0, "temp_min": 30.5, "temp_max": 31.8 },
      "weather": [{ "description": "light rain" }], "rain": { "3h": 0.5 } },
    { "dt_txt": "2024-06-01 21:00:00", "main": { "temp": 29.0, "temp_min": 28.4, "temp_max": 29.2 },
      "weather": [{ "description": "clear sky" }] },
    { "dt_txt": "2024-06-02 00:00:00", "main": { "temp": 28.0, "temp_min": 27.9, "temp_max": 28.0 },
      "weather": [{ "description": "few clouds" }] },
    { "dt_txt": "2024-06-02 12:00:00", "main": { "temp": 34.0, "temp_min": 33.1, "temp_max": 34.6 },
      "weather": [{ "description": "moderate rain" }], "rain": { "3h": 3.1 } },
    { "dt_txt": "2024-06-03 12:00:00", "main": { "temp": 33.0, "temp_min": 32.0, "temp_max": 33.6 },
      "weather": [{ "description": "overcast clouds" }] }
  ]
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    let samples = serde_json::from_str::<ForecastResponse>(PAYLOAD)?.into_samples()?;
    let days = aggregate(&samples, DEFAULT_WINDOW_SIZE)?;

    for day in &days {
        println!(
            "{}  min {:.1}  max {:.1}  rain {:.1} mm  ({} samples, {})",
            day.date,
            day.min,
            day.max,
            day.precipitation_total,
            day.temperatures.len(),
            day.condition_text
        );
    }

    let series = build_series(&days);
    println!("{:?}", series.labels);

    Ok(())
}
