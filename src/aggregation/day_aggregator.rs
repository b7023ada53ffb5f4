//! Folds sub-daily [`Sample`]s into a bounded sequence of [`DailySummary`] values.
//!
//! Grouping keeps an explicit first-seen order (a `Vec` of summaries plus a date index),
//! so the output is chronological whenever the input is, without relying on any map's
//! iteration order.

use crate::aggregation::error::ForecastError;
use crate::types::daily_summary::DailySummary;
use crate::types::sample::Sample;
use crate::types::timestamp::AnyTimestamp;
use bon::bon;
use chrono::NaiveDate;
use log::debug;
use std::collections::HashMap;

/// Number of daily buckets kept when no window size is configured.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Groups samples by calendar date and returns the first `window_size` days.
///
/// The fold runs over the entire input; truncation to `window_size` happens once, after
/// every sample has been folded. Absent precipitation counts as zero.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidWindowSize`] when `window_size` is zero, and one of the
/// per-sample variants (carrying the sample's index) when a sample is malformed. No
/// partial result is returned.
///
/// # Examples
///
/// ```
/// use weather_dashboard::{aggregate, Sample};
///
/// let samples = vec![
///     Sample::builder().timestamp("2024-06-01 12:00:00").temperature(30.0)
///         .temperature_min(29.0).temperature_max(31.0).condition_text("haze").build(),
///     Sample::builder().timestamp("2024-06-01 15:00:00").temperature(32.0)
///         .temperature_min(31.5).temperature_max(33.0).precipitation(1.5)
///         .condition_text("light rain").build(),
/// ];
///
/// let days = aggregate(&samples, 5)?;
/// assert_eq!(days.len(), 1);
/// assert_eq!(days[0].max, 33.0);
/// assert_eq!(days[0].precipitation_total, 1.5);
/// assert_eq!(days[0].condition_text, "haze");
/// # Ok::<(), weather_dashboard::ForecastError>(())
/// ```
pub fn aggregate(
    samples: &[Sample],
    window_size: usize,
) -> Result<Vec<DailySummary>, ForecastError> {
    DayAggregator::new(window_size)?.aggregate(samples)
}

/// A validated aggregation setup that can be reused across forecasts.
///
/// Holds no state between calls; every [`DayAggregator::aggregate`] is a fresh fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayAggregator {
    window_size: usize,
}

#[bon]
impl DayAggregator {
    /// Creates an aggregator keeping at most `window_size` days.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidWindowSize`] if `window_size` is zero.
    pub fn new(window_size: usize) -> Result<Self, ForecastError> {
        if window_size == 0 {
            return Err(ForecastError::InvalidWindowSize(window_size));
        }
        Ok(Self { window_size })
    }

    /// Builder form of [`DayAggregator::new`]; the window defaults to [`DEFAULT_WINDOW_SIZE`].
    ///
    /// ```
    /// use weather_dashboard::DayAggregator;
    ///
    /// let aggregator = DayAggregator::builder().build()?;
    /// assert_eq!(aggregator.window_size(), 5);
    /// # Ok::<(), weather_dashboard::ForecastError>(())
    /// ```
    #[builder(start_fn = builder, finish_fn = build)]
    #[doc(hidden)]
    pub fn with_optional_window(window_size: Option<usize>) -> Result<Self, ForecastError> {
        Self::new(window_size.unwrap_or(DEFAULT_WINDOW_SIZE))
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Folds `samples` into daily summaries. See [`aggregate`].
    pub fn aggregate(&self, samples: &[Sample]) -> Result<Vec<DailySummary>, ForecastError> {
        let mut days: Vec<DailySummary> = Vec::new();
        let mut index_by_date: HashMap<NaiveDate, usize> = HashMap::new();

        for (index, sample) in samples.iter().enumerate() {
            let date = validate_sample(index, sample)?;
            let slot = *index_by_date.entry(date).or_insert_with(|| {
                days.push(DailySummary {
                    date,
                    temperatures: Vec::new(),
                    min: sample.temperature_min,
                    max: sample.temperature_max,
                    precipitation_total: 0.0,
                    condition_text: sample.condition_text.clone(),
                });
                days.len() - 1
            });
            fold_sample(&mut days[slot], sample);
        }

        debug!(
            "Folded {} samples into {} days, keeping at most {}",
            samples.len(),
            days.len(),
            self.window_size
        );

        days.truncate(self.window_size);
        Ok(days)
    }
}

impl Default for DayAggregator {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

fn fold_sample(day: &mut DailySummary, sample: &Sample) {
    day.temperatures.push(sample.temperature);
    day.min = day.min.min(sample.temperature_min);
    day.max = day.max.max(sample.temperature_max);
    day.precipitation_total += sample.precipitation_or_zero();
}

/// Checks a sample and returns its date key.
fn validate_sample(index: usize, sample: &Sample) -> Result<NaiveDate, ForecastError> {
    let date = sample
        .timestamp
        .date_key()
        .ok_or_else(|| ForecastError::InvalidTimestamp {
            index,
            timestamp: sample.timestamp.to_string(),
        })?;

    let numeric_fields = [
        ("temperature", sample.temperature),
        ("temperature_min", sample.temperature_min),
        ("temperature_max", sample.temperature_max),
        ("precipitation", sample.precipitation_or_zero()),
    ];
    for (field, value) in numeric_fields {
        if !value.is_finite() {
            return Err(ForecastError::NonFiniteValue { index, field, value });
        }
    }

    if sample.precipitation_or_zero() < 0.0 {
        return Err(ForecastError::NegativePrecipitation {
            index,
            value: sample.precipitation_or_zero(),
        });
    }
    if sample.temperature_min > sample.temperature_max {
        return Err(ForecastError::InvertedRange {
            index,
            min: sample.temperature_min,
            max: sample.temperature_max,
        });
    }

    Ok(date)
}
