//! Defines the unit systems a forecast can be requested in.

use serde::Serialize;
use std::fmt;

/// Unit system passed to the forecast service as the `units` query parameter.
///
/// The service performs any conversion; this crate only labels values with the matching
/// symbol. Precipitation is reported in millimetres regardless of the unit system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius.
    #[default]
    Metric,
    /// Fahrenheit.
    Imperial,
    /// Kelvin.
    Standard,
}

impl Units {
    pub(crate) fn query_value(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    /// Symbol appended to temperatures, e.g. `°C`.
    pub fn temperature_symbol(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => "K",
        }
    }

    /// Symbol appended to precipitation amounts.
    pub fn precipitation_symbol(&self) -> &'static str {
        "mm"
    }
}

/// Formats a `Units` variant as its query value.
///
/// # Examples
///
/// ```
/// use weather_dashboard::Units;
///
/// assert_eq!(Units::Metric.to_string(), "metric");
/// assert_eq!(format!("{}", Units::Imperial), "imperial");
/// ```
impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query_value())
    }
}
