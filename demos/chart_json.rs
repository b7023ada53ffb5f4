//! demos/chart_json.rs
//!
//! Builds the dual-axis chart description for a synthetic week and prints it as JSON,
//! ready to hand to a charting front end.
//!
//! To run this example:
//! cargo run --example chart_json

use std::error::Error;

use chrono::{Duration, NaiveDate};
use weather_dashboard::{build_series, DayAggregator, DualAxisChart, Sample, Units};

fn main() -> Result<(), Box<dyn Error>> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or("invalid start date")?;

    // A week of 3-hourly samples; only the first five days survive aggregation.
    let samples: Vec<Sample> = (0..56)
        .map(|slot| {
            let at = start + Duration::hours(3 * slot);
            let temp = 2.0 + (slot % 8) as f64 * 0.75;
            Sample::builder()
                .timestamp(at)
                .temperature(temp)
                .temperature_min(temp - 0.4)
                .temperature_max(temp + 0.4)
                .maybe_precipitation((slot % 5 == 0).then_some(0.6))
                .condition_text("light snow")
                .build()
        })
        .collect();

    let days = DayAggregator::builder().build()?.aggregate(&samples)?;
    let chart = DualAxisChart::new(build_series(&days), Units::Metric);
    println!("{}", chart.to_json()?);

    Ok(())
}
