use chrono::NaiveDate;
use serde::Serialize;

/// One calendar day of forecast, folded from the samples sharing its date.
///
/// Produced by [`crate::aggregate`]; never mutated afterwards.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// Every sample temperature of the day, in input order. Not used by the chart.
    pub temperatures: Vec<f64>,
    pub min: f64,
    pub max: f64,
    pub precipitation_total: f64, // mm
    /// Condition of the first sample seen for this date.
    pub condition_text: String,
}
