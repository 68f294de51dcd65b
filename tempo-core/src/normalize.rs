//! Reshaping of upstream envelopes into the facade's public payloads.
//!
//! Field selection follows the requested unit system: Celsius/kph for
//! metric, Fahrenheit/mph for imperial. Humidity is unit-agnostic upstream
//! and read from the same field on both branches.

use crate::{
    error::WeatherError,
    model::{CurrentReport, ForecastEntry, Units},
    upstream::{CurrentEnvelope, ForecastEnvelope},
};

/// Build the public current-conditions payload from an upstream envelope.
///
/// An envelope without a `current` section (upstream's error envelope)
/// yields [`WeatherError::Unavailable`].
pub fn current_report(
    envelope: CurrentEnvelope,
    city: &str,
    units: Units,
) -> Result<CurrentReport, WeatherError> {
    let current = envelope.current.ok_or(WeatherError::Unavailable)?;

    let (temperature, wind_speed) = match units {
        Units::Imperial => (current.temp_f, current.wind_mph),
        Units::Metric => (current.temp_c, current.wind_kph),
    };

    Ok(CurrentReport {
        city: city.to_owned(),
        conditions: current.condition.text,
        temperature,
        humidity: current.humidity,
        wind_speed,
        units,
    })
}

/// Build one public entry per upstream forecast day, preserving upstream
/// order. An empty day list is valid and yields an empty `Vec`.
pub fn forecast_reports(
    envelope: ForecastEnvelope,
    units: Units,
) -> Result<Vec<ForecastEntry>, WeatherError> {
    let days = envelope
        .forecast
        .and_then(|f| f.forecastday)
        .ok_or(WeatherError::Unavailable)?;

    let entries = days
        .into_iter()
        .map(|day| {
            let summary = day.day;

            let (temperature, wind_speed) = match units {
                Units::Imperial => (summary.avgtemp_f, summary.maxwind_mph),
                Units::Metric => (summary.avgtemp_c, summary.maxwind_kph),
            };

            ForecastEntry {
                date: day.date,
                conditions: summary.condition.text,
                temperature,
                humidity: summary.avghumidity,
                wind_speed,
                units,
            }
        })
        .collect();

    Ok(entries)
}
