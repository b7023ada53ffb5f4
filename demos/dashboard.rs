//! demos/dashboard.rs
//!
//! Fetches current weather and the forecast for a city and prints the dashboard.
//!
//! To run this example:
//! OPENWEATHER_API_KEY=... cargo run --example dashboard -- Lisbon

use std::env;
use std::error::Error;

use weather_dashboard::{Dashboard, DashboardConfig, OpenWeatherClient, Units};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // 1. Create an OpenWeatherMap client from the environment
    let client = OpenWeatherClient::from_env(Units::Metric)?;

    // 2. Pick the city: first argument, or the default
    let config = match env::args().nth(1) {
        Some(city) => DashboardConfig::builder().city(city).build(),
        None => DashboardConfig::default(),
    };
    let mut dashboard = Dashboard::new(client, config)?;

    // 3. Fetch, aggregate and show
    let state = dashboard.refresh().await?;
    match state.view() {
        Some(view) => {
            println!("{}", view);
            println!("{}", view.chart().to_json()?);
        }
        None => println!("{}", state.error_message().unwrap_or_default()),
    }

    Ok(())
}
