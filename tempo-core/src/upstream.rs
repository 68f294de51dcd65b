use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::{error::WeatherError, model::Units};

/// Production endpoint root for weatherapi.com.
const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Thin client for the weatherapi.com HTTP API.
///
/// Holds only immutable configuration; cloning shares the underlying
/// connection pool. One call produces exactly one outbound GET, with no
/// retries and no timeout beyond the transport default.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different endpoint root (config override, tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    /// Fetch current conditions for a free-text location query.
    ///
    /// The `units` parameter is forwarded to upstream for compatibility;
    /// which field family is surfaced in the facade's output is decided
    /// locally from the envelope contents.
    pub async fn fetch_current(
        &self,
        city: &str,
        units: Units,
    ) -> Result<CurrentEnvelope, WeatherError> {
        let url = format!("{}/current.json", self.base_url);

        self.get_json(
            &url,
            &[("key", self.api_key.as_str()), ("q", city), ("units", units.as_str())],
            "current",
        )
        .await
    }

    /// Fetch a multi-day forecast. `days` is passed through unvalidated;
    /// upstream rejects values it does not support.
    pub async fn fetch_forecast(
        &self,
        city: &str,
        days: u32,
        units: Units,
    ) -> Result<ForecastEnvelope, WeatherError> {
        let url = format!("{}/forecast.json", self.base_url);
        let days = days.to_string();

        self.get_json(
            &url,
            &[
                ("key", self.api_key.as_str()),
                ("q", city),
                ("days", days.as_str()),
                ("units", units.as_str()),
            ],
            "forecast",
        )
        .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        what: &str,
    ) -> Result<T, WeatherError> {
        let res = self.http.get(url).query(query).send().await.map_err(|e| {
            WeatherError::Transport(format!(
                "Failed to send request to WeatherAPI.com ({what}): {e}"
            ))
        })?;

        let status = res.status();
        if !status.is_success() {
            // weatherapi.com ships its error detail as a JSON envelope, so a
            // non-success status still carries a parseable body.
            tracing::debug!(%status, what, "upstream returned non-success status");
        }

        let body = res.text().await.map_err(|e| {
            WeatherError::Transport(format!(
                "Failed to read WeatherAPI {what} response body: {e}"
            ))
        })?;

        serde_json::from_str(&body).map_err(|e| {
            WeatherError::Transport(format!("Failed to parse WeatherAPI {what} JSON: {e}"))
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct Condition {
    pub text: String,
}

/// `current` section of a current-conditions response. Upstream always
/// reports both unit families; selection happens during normalization.
#[derive(Debug, Deserialize)]
pub struct Observation {
    pub temp_c: f64,
    pub temp_f: f64,
    pub humidity: f64,
    pub wind_kph: f64,
    pub wind_mph: f64,
    pub condition: Condition,
}

/// Top-level shape of `current.json`. `current` is absent when upstream
/// answers with its error envelope.
#[derive(Debug, Deserialize)]
pub struct CurrentEnvelope {
    pub current: Option<Observation>,
}

/// Averaged/max figures for one forecast day.
#[derive(Debug, Deserialize)]
pub struct DaySummary {
    pub avgtemp_c: f64,
    pub avgtemp_f: f64,
    pub avghumidity: f64,
    pub maxwind_kph: f64,
    pub maxwind_mph: f64,
    pub condition: Condition,
}

#[derive(Debug, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub day: DaySummary,
}

#[derive(Debug, Deserialize)]
pub struct Forecast {
    pub forecastday: Option<Vec<ForecastDay>>,
}

/// Top-level shape of `forecast.json`. `forecast` is absent when upstream
/// answers with its error envelope.
#[derive(Debug, Deserialize)]
pub struct ForecastEnvelope {
    pub forecast: Option<Forecast>,
}
