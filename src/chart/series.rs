//! Projects [`DailySummary`] values onto aligned label/value series.

use crate::types::daily_summary::DailySummary;
use chrono::NaiveDate;
use serde::Serialize;

/// Category labels and the two value series of the forecast chart.
///
/// `labels[i]`, `temperature[i]` and `precipitation[i]` all describe the same day.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    /// Daily maximum temperature.
    pub temperature: Vec<f64>,
    /// Daily precipitation total.
    pub precipitation: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Builds the chart series for `summaries`, one entry per summary, in the same order.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use weather_dashboard::{build_series, DailySummary};
///
/// let day = DailySummary {
///     date: NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
///     temperatures: vec![12.0, 14.5],
///     min: 10.8,
///     max: 15.1,
///     precipitation_total: 2.25,
///     condition_text: "light rain".to_string(),
/// };
///
/// let series = build_series(&[day]);
/// assert_eq!(series.labels, vec!["Sat, Jan 6"]);
/// assert_eq!(series.temperature, vec![15.1]);
/// assert_eq!(series.precipitation, vec![2.25]);
/// ```
pub fn build_series(summaries: &[DailySummary]) -> ChartSeries {
    ChartSeries {
        labels: summaries.iter().map(|day| format_label(day.date)).collect(),
        temperature: summaries.iter().map(|day| day.max).collect(),
        precipitation: summaries
            .iter()
            .map(|day| day.precipitation_total)
            .collect(),
    }
}

/// Short en-US label: abbreviated weekday, abbreviated month, day without padding.
pub fn format_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(y: i32, m: u32, d: u32, max: f64, rain: f64) -> DailySummary {
        DailySummary {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            temperatures: vec![max - 1.0],
            min: max - 3.0,
            max,
            precipitation_total: rain,
            condition_text: "clouds".to_string(),
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            format_label(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
            "Sat, Jun 1"
        );
        assert_eq!(
            format_label(NaiveDate::from_ymd_opt(2025, 12, 24).unwrap()),
            "Wed, Dec 24"
        );
    }

    #[test]
    fn test_series_align_with_summaries() {
        let summaries = vec![
            summary(2024, 6, 1, 34.0, 1.75),
            summary(2024, 6, 2, 32.0, 0.0),
            summary(2024, 6, 3, 29.5, 12.5),
        ];
        let series = build_series(&summaries);

        assert_eq!(series.len(), 3);
        assert_eq!(series.labels, vec!["Sat, Jun 1", "Sun, Jun 2", "Mon, Jun 3"]);
        for (i, day) in summaries.iter().enumerate() {
            assert_eq!(series.temperature[i], day.max);
            assert_eq!(series.precipitation[i], day.precipitation_total);
        }
    }

    #[test]
    fn test_empty_summaries_give_empty_series() {
        let series = build_series(&[]);
        assert!(series.is_empty());
        assert_eq!(series, ChartSeries::default());
    }

    #[test]
    fn test_build_series_is_idempotent() {
        let summaries = vec![
            summary(2024, 6, 1, 34.0, 1.75),
            summary(2024, 6, 2, 30.0, 0.5),
        ];
        let first = build_series(&summaries);
        assert_eq!(first, build_series(&summaries));
        assert_eq!(summaries.len(), 2);
    }
}
