use serde::{Deserialize, Serialize};

/// Unit system requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// Parse a query-string value. Anything other than `"imperial"` selects
    /// metric; unrecognized values never produce a validation error.
    pub fn from_param(value: &str) -> Self {
        match value {
            "imperial" => Units::Imperial,
            _ => Units::Metric,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current conditions in the facade's public shape.
///
/// `units` echoes what the caller requested, which also governs whether the
/// temperature/wind values came from the Celsius/kph or Fahrenheit/mph
/// family. Humidity has no unit-specific variant upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentReport {
    pub city: String,
    pub conditions: String,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub units: Units,
}

/// One day of a forecast in the facade's public shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Copied verbatim from upstream, never reparsed.
    pub date: String,
    pub conditions: String,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub units: Units,
}
