//! The dashboard shell: holds the searched city, drives retrieval through a
//! [`WeatherProvider`] and keeps the resulting view.
//!
//! State moves `Idle → Loading → Loaded | Failed`. Aggregation runs only on the move into
//! `Loaded`; a failed retrieval or a malformed forecast lands in `Failed` and drops any
//! previously shown weather.

use crate::aggregation::day_aggregator::{DayAggregator, DEFAULT_WINDOW_SIZE};
use crate::chart::dual_axis::DualAxisChart;
use crate::chart::series::{build_series, format_label, ChartSeries};
use crate::error::DashboardError;
use crate::openweather::error::FetchError;
use crate::provider::WeatherProvider;
use crate::types::current_weather::CurrentWeather;
use crate::types::daily_summary::DailySummary;
use crate::types::sample::Sample;
use crate::types::units::Units;
use bon::Builder;
use log::{info, warn};
use serde::Serialize;
use std::fmt;

pub const DEFAULT_CITY: &str = "Kolkata";

/// Start-up settings of a [`Dashboard`].
///
/// ```
/// use weather_dashboard::DashboardConfig;
///
/// let config = DashboardConfig::builder().city("Lisbon").build();
/// assert_eq!(config.city, "Lisbon");
/// assert_eq!(config.window_size, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct DashboardConfig {
    /// City searched on the first refresh.
    #[builder(into, default = DEFAULT_CITY.to_string())]
    pub city: String,
    /// Number of forecast days kept.
    #[builder(default = DEFAULT_WINDOW_SIZE)]
    pub window_size: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// What the user is told when a refresh fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    NotFound,
    Unavailable,
}

impl Failure {
    fn classify(error: &DashboardError) -> Self {
        match error {
            DashboardError::Fetch(fetch) if fetch.is_not_found() => Failure::NotFound,
            _ => Failure::Unavailable,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Failure::NotFound => "City not found.",
            Failure::Unavailable => "Weather data unavailable.",
        }
    }
}

/// Everything shown after a successful refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// The city as it was searched.
    pub query: String,
    pub units: Units,
    pub current: CurrentWeather,
    pub summaries: Vec<DailySummary>,
    pub series: ChartSeries,
}

impl DashboardView {
    /// Chart description for the forecast days.
    pub fn chart(&self) -> DualAxisChart {
        DualAxisChart::new(self.series.clone(), self.units)
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.units.temperature_symbol();
        writeln!(f, "{}", self.current.city_name)?;
        writeln!(f, "{}{}", self.current.rounded_temperature(), symbol)?;
        writeln!(f, "{}", self.current.condition_text)?;

        if self.summaries.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "{}-Day Forecast", self.summaries.len())?;
        for day in &self.summaries {
            writeln!(
                f,
                "{:<12} max {:>6.1}{}  min {:>6.1}{}  rain {:>5.1} {}  {}",
                format_label(day.date),
                day.max,
                symbol,
                day.min,
                symbol,
                day.precipitation_total,
                self.units.precipitation_symbol(),
                day.condition_text
            )?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum DashboardState {
    Idle,
    Loading {
        city: String,
    },
    Loaded(DashboardView),
    Failed {
        city: String,
        failure: Failure,
        error: DashboardError,
    },
}

impl DashboardState {
    pub fn name(&self) -> &'static str {
        match self {
            DashboardState::Idle => "idle",
            DashboardState::Loading { .. } => "loading",
            DashboardState::Loaded(_) => "loaded",
            DashboardState::Failed { .. } => "failed",
        }
    }

    pub fn view(&self) -> Option<&DashboardView> {
        match self {
            DashboardState::Loaded(view) => Some(view),
            _ => None,
        }
    }

    /// User-facing error line, present only in the failed state.
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            DashboardState::Failed { failure, .. } => Some(failure.message()),
            _ => None,
        }
    }
}

/// The weather dashboard for one user session.
///
/// # Examples
///
/// ```no_run
/// use weather_dashboard::{Dashboard, DashboardConfig, OpenWeatherClient, Units};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), weather_dashboard::DashboardError> {
/// let client = OpenWeatherClient::from_env(Units::Metric)?;
/// let mut dashboard = Dashboard::new(client, DashboardConfig::default())?;
///
/// let state = dashboard.refresh().await?;
/// match state.view() {
///     Some(view) => println!("{}", view),
///     None => println!("{}", state.error_message().unwrap_or_default()),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Dashboard<P> {
    provider: P,
    aggregator: DayAggregator,
    city: String,
    state: DashboardState,
}

impl<P: WeatherProvider> Dashboard<P> {
    /// Creates an idle dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Forecast`] when `config.window_size` is zero.
    pub fn new(provider: P, config: DashboardConfig) -> Result<Self, DashboardError> {
        Ok(Self {
            provider,
            aggregator: DayAggregator::new(config.window_size)?,
            city: config.city,
            state: DashboardState::Idle,
        })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Changes the city used by the next refresh. The current view is kept until then.
    pub fn set_city(&mut self, city: impl Into<String>) -> Result<(), DashboardError> {
        if let DashboardState::Loading { .. } = self.state {
            return Err(DashboardError::InvalidTransition {
                from: self.state.name(),
                action: "change the city",
            });
        }
        self.city = city.into();
        Ok(())
    }

    /// Enters `Loading` for the current city and returns the city to fetch.
    pub fn begin_refresh(&mut self) -> Result<String, DashboardError> {
        if let DashboardState::Loading { .. } = self.state {
            return Err(DashboardError::InvalidTransition {
                from: self.state.name(),
                action: "start a refresh",
            });
        }
        let city = self.city.trim().to_string();
        info!("Refreshing weather for '{}'", city);
        self.state = DashboardState::Loading { city: city.clone() };
        Ok(city)
    }

    /// Finishes a refresh with retrieved data, aggregating the forecast samples.
    ///
    /// A malformed forecast moves the dashboard to `Failed`; that is a state, not an `Err`.
    pub fn complete_refresh(
        &mut self,
        current: CurrentWeather,
        samples: &[Sample],
    ) -> Result<&DashboardState, DashboardError> {
        let city = self.take_loading_city("complete a refresh")?;

        self.state = match self.aggregator.aggregate(samples) {
            Ok(summaries) => {
                info!(
                    "Loaded {} forecast days for '{}' from {} samples",
                    summaries.len(),
                    city,
                    samples.len()
                );
                let series = build_series(&summaries);
                DashboardState::Loaded(DashboardView {
                    query: city,
                    units: self.provider.units(),
                    current,
                    summaries,
                    series,
                })
            }
            Err(e) => {
                warn!("Discarding forecast for '{}': {}", city, e);
                let error = DashboardError::from(e);
                DashboardState::Failed {
                    city,
                    failure: Failure::classify(&error),
                    error,
                }
            }
        };
        Ok(&self.state)
    }

    /// Finishes a refresh whose retrieval failed.
    pub fn fail_refresh(
        &mut self,
        error: impl Into<DashboardError>,
    ) -> Result<&DashboardState, DashboardError> {
        let city = self.take_loading_city("fail a refresh")?;
        let error = error.into();
        warn!("Refresh for '{}' failed: {}", city, error);
        self.state = DashboardState::Failed {
            city,
            failure: Failure::classify(&error),
            error,
        };
        Ok(&self.state)
    }

    /// Fetches current weather and forecast for the current city and updates the state.
    ///
    /// Retrieval and aggregation failures end in [`DashboardState::Failed`]; `Err` is only
    /// returned for an illegal transition (a refresh already in progress).
    pub async fn refresh(&mut self) -> Result<&DashboardState, DashboardError> {
        let city = self.begin_refresh()?;
        let fetched: Result<(CurrentWeather, Vec<Sample>), FetchError> = tokio::try_join!(
            self.provider.current_weather(&city),
            self.provider.forecast(&city)
        );
        match fetched {
            Ok((current, samples)) => self.complete_refresh(current, &samples),
            Err(e) => self.fail_refresh(e),
        }
    }

    fn take_loading_city(&mut self, action: &'static str) -> Result<String, DashboardError> {
        match &mut self.state {
            DashboardState::Loading { city } => Ok(std::mem::take(city)),
            other => Err(DashboardError::InvalidTransition {
                from: other.name(),
                action,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::error::ForecastError;

    #[derive(Debug, Clone, Copy)]
    enum Behavior {
        Succeed,
        NotFound,
        ServerDown,
    }

    #[derive(Debug)]
    struct FakeProvider {
        behavior: Behavior,
        samples: Vec<Sample>,
    }

    impl WeatherProvider for FakeProvider {
        fn units(&self) -> Units {
            Units::Metric
        }

        async fn current_weather(&self, city: &str) -> Result<CurrentWeather, FetchError> {
            match self.behavior {
                Behavior::NotFound => Err(FetchError::CityNotFound(city.to_string())),
                _ => Ok(CurrentWeather {
                    city_name: city.to_string(),
                    temperature: 31.6,
                    condition_text: "haze".to_string(),
                }),
            }
        }

        async fn forecast(&self, city: &str) -> Result<Vec<Sample>, FetchError> {
            match self.behavior {
                Behavior::Succeed => Ok(self.samples.clone()),
                Behavior::NotFound => Err(FetchError::CityNotFound(city.to_string())),
                Behavior::ServerDown => Err(FetchError::MissingField {
                    index: 0,
                    field: "weather[0].description",
                }),
            }
        }
    }

    fn sample(timestamp: &str, max: f64, rain: Option<f64>) -> Sample {
        Sample {
            timestamp: timestamp.into(),
            temperature: max - 1.0,
            temperature_min: max - 2.0,
            temperature_max: max,
            precipitation: rain,
            condition_text: "scattered clouds".to_string(),
        }
    }

    fn two_day_samples() -> Vec<Sample> {
        vec![
            sample("2024-06-01 12:00:00", 33.0, Some(0.5)),
            sample("2024-06-01 15:00:00", 34.0, None),
            sample("2024-06-02 12:00:00", 30.0, Some(4.0)),
        ]
    }

    fn dashboard(behavior: Behavior, samples: Vec<Sample>) -> Dashboard<FakeProvider> {
        Dashboard::new(FakeProvider { behavior, samples }, DashboardConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_refresh_loads_view() {
        let mut dash = dashboard(Behavior::Succeed, two_day_samples());
        assert_eq!(dash.state().name(), "idle");
        assert_eq!(dash.city(), DEFAULT_CITY);

        let state = dash.refresh().await.unwrap();
        let view = state.view().expect("loaded view");
        assert_eq!(view.query, "Kolkata");
        assert_eq!(view.summaries.len(), 2);
        assert_eq!(view.series.labels, vec!["Sat, Jun 1", "Sun, Jun 2"]);
        assert_eq!(view.series.temperature, vec![34.0, 30.0]);
        assert_eq!(view.series.precipitation, vec![0.5, 4.0]);
        assert_eq!(state.error_message(), None);

        let text = view.to_string();
        assert!(text.starts_with("Kolkata\n32°C\nhaze\n"));
        assert!(text.contains("2-Day Forecast"));
        assert!(text.contains("Sat, Jun 1"));

        assert_eq!(view.chart().datasets[0].values, vec![34.0, 30.0]);
    }

    #[tokio::test]
    async fn test_unknown_city_fails_with_not_found() {
        let mut dash = dashboard(Behavior::NotFound, Vec::new());
        dash.set_city("Atlantis").unwrap();

        let state = dash.refresh().await.unwrap();
        assert_eq!(state.name(), "failed");
        assert_eq!(state.error_message(), Some("City not found."));
        assert!(state.view().is_none());
    }

    #[tokio::test]
    async fn test_other_fetch_errors_are_unavailable() {
        let mut dash = dashboard(Behavior::ServerDown, Vec::new());
        let state = dash.refresh().await.unwrap();
        assert_eq!(state.error_message(), Some("Weather data unavailable."));
    }

    #[tokio::test]
    async fn test_malformed_forecast_aborts_update() {
        let mut samples = two_day_samples();
        samples.push(sample("garbage", 20.0, None));
        let mut dash = dashboard(Behavior::Succeed, samples);

        match dash.refresh().await.unwrap() {
            DashboardState::Failed { failure, error, .. } => {
                assert_eq!(*failure, Failure::Unavailable);
                assert!(matches!(
                    error,
                    DashboardError::Forecast(ForecastError::InvalidTimestamp { index: 3, .. })
                ));
            }
            other => panic!("expected failed state, got {}", other.name()),
        }
    }

    #[tokio::test]
    async fn test_failure_clears_previous_view() {
        let mut dash = dashboard(Behavior::Succeed, two_day_samples());
        assert!(dash.refresh().await.unwrap().view().is_some());

        dash.provider.behavior = Behavior::NotFound;
        dash.set_city("Nowhere").unwrap();
        let state = dash.refresh().await.unwrap();
        assert!(state.view().is_none());
        assert_eq!(state.error_message(), Some("City not found."));
    }

    #[test]
    fn test_empty_forecast_loads_without_days() {
        let mut dash = dashboard(Behavior::Succeed, Vec::new());
        dash.begin_refresh().unwrap();
        let current = CurrentWeather {
            city_name: "Kolkata".to_string(),
            temperature: 30.0,
            condition_text: "mist".to_string(),
        };
        let view = dash.complete_refresh(current, &[]).unwrap().view().unwrap();
        assert!(view.summaries.is_empty());
        assert!(view.series.is_empty());
        assert!(!view.to_string().contains("Forecast"));
    }

    #[test]
    fn test_illegal_transitions() {
        let mut dash = dashboard(Behavior::Succeed, Vec::new());
        let current = CurrentWeather {
            city_name: "Kolkata".to_string(),
            temperature: 30.0,
            condition_text: "mist".to_string(),
        };

        assert!(matches!(
            dash.complete_refresh(current.clone(), &[]),
            Err(DashboardError::InvalidTransition { from: "idle", .. })
        ));
        assert!(dash
            .fail_refresh(FetchError::CityNotFound("x".to_string()))
            .is_err());

        assert_eq!(dash.begin_refresh().unwrap(), "Kolkata");
        assert!(matches!(
            dash.begin_refresh(),
            Err(DashboardError::InvalidTransition { from: "loading", .. })
        ));
        assert!(dash.set_city("Paris").is_err());

        assert!(dash.complete_refresh(current, &[]).is_ok());
        assert!(dash.set_city("Paris").is_ok());
        assert_eq!(dash.city(), "Paris");
    }

    #[test]
    fn test_zero_window_is_rejected() {
        let provider = FakeProvider {
            behavior: Behavior::Succeed,
            samples: Vec::new(),
        };
        let config = DashboardConfig::builder().window_size(0).build();
        assert!(matches!(
            Dashboard::new(provider, config),
            Err(DashboardError::Forecast(ForecastError::InvalidWindowSize(0)))
        ));
    }
}
