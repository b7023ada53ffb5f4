//! A renderer-neutral description of the forecast chart: a shared category axis of day
//! labels, temperature as a line on the left axis, precipitation as bars on the right axis.
//!
//! The description serializes to JSON, so any charting surface can consume it.

use crate::chart::series::ChartSeries;
use crate::types::units::Units;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Line,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

/// A linear value axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueAxis {
    pub id: &'static str,
    pub title: String,
    pub position: AxisPosition,
    /// Whether grid lines of this axis are drawn across the plot area.
    pub draw_grid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub kind: DatasetKind,
    /// The [`ValueAxis::id`] this dataset is plotted against.
    pub axis_id: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// The complete forecast chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DualAxisChart {
    pub labels: Vec<String>,
    pub temperature_axis: ValueAxis,
    pub precipitation_axis: ValueAxis,
    pub datasets: Vec<Dataset>,
    pub legend: LegendPosition,
}

const TEMPERATURE_AXIS_ID: &str = "y1";
const PRECIPITATION_AXIS_ID: &str = "y2";

impl DualAxisChart {
    /// Wraps `series` with axes and dataset labels for the given unit system.
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_dashboard::{ChartSeries, DualAxisChart, Units};
    ///
    /// let series = ChartSeries {
    ///     labels: vec!["Sat, Jun 1".to_string()],
    ///     temperature: vec![34.0],
    ///     precipitation: vec![1.75],
    /// };
    /// let chart = DualAxisChart::new(series, Units::Metric);
    ///
    /// assert_eq!(chart.temperature_axis.title, "Temperature (°C)");
    /// assert_eq!(chart.datasets[0].label, "Max Temp (°C)");
    /// assert_eq!(chart.datasets[1].label, "Precipitation (mm)");
    /// ```
    pub fn new(series: ChartSeries, units: Units) -> Self {
        let temp_symbol = units.temperature_symbol();
        let precip_symbol = units.precipitation_symbol();
        let ChartSeries {
            labels,
            temperature,
            precipitation,
        } = series;

        Self {
            labels,
            temperature_axis: ValueAxis {
                id: TEMPERATURE_AXIS_ID,
                title: format!("Temperature ({})", temp_symbol),
                position: AxisPosition::Left,
                draw_grid: true,
            },
            precipitation_axis: ValueAxis {
                id: PRECIPITATION_AXIS_ID,
                title: format!("Rainfall ({})", precip_symbol),
                position: AxisPosition::Right,
                draw_grid: false,
            },
            datasets: vec![
                Dataset {
                    label: format!("Max Temp ({})", temp_symbol),
                    kind: DatasetKind::Line,
                    axis_id: TEMPERATURE_AXIS_ID,
                    color: "orange",
                    values: temperature,
                },
                Dataset {
                    label: format!("Precipitation ({})", precip_symbol),
                    kind: DatasetKind::Bar,
                    axis_id: PRECIPITATION_AXIS_ID,
                    color: "rgba(135, 206, 250, 0.7)",
                    values: precipitation,
                },
            ],
            legend: LegendPosition::Bottom,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
