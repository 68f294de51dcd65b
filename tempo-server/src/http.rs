//! HTTP surface of the weather facade.
//!
//! Two public routes forward a city query upstream and return the normalized
//! payload. Logical failures (missing city, transport failure, unavailable
//! data) are returned as a JSON error envelope with status 200; clients
//! distinguish outcomes by body shape, not status code.

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tempo_core::{Units, WeatherApiClient, normalize};
use tower_http::cors::{Any, CorsLayer};

const MISSING_CITY: &str = "City parameter is missing.";

/// Shared state for HTTP handlers. The client holds only immutable
/// configuration, so per-request clones need no synchronization.
#[derive(Clone)]
pub struct AppState {
    pub client: WeatherApiClient,
}

/// Query params for `/weather`.
#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    pub city: Option<String>,
    pub units: Option<String>,
}

/// Query params for `/forecast`.
#[derive(Debug, Deserialize)]
pub struct ForecastParams {
    pub city: Option<String>,
    pub units: Option<String>,
    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_days() -> u32 {
    1
}

/// JSON error envelope shared by all routes.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_reply(message: impl Into<String>) -> Response {
    Json(ErrorResponse { error: message.into() }).into_response()
}

/// GET /weather - current conditions for a city
async fn current_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Response {
    let Some(city) = params.city.filter(|c| !c.is_empty()) else {
        return error_reply(MISSING_CITY);
    };
    let units = Units::from_param(params.units.as_deref().unwrap_or_default());

    let result = state
        .client
        .fetch_current(&city, units)
        .await
        .and_then(|envelope| normalize::current_report(envelope, &city, units));

    match result {
        Ok(report) => Json(report).into_response(),
        Err(err) => error_reply(err.to_string()),
    }
}

/// GET /forecast - multi-day forecast for a city
async fn forecast(
    State(state): State<AppState>,
    Query(params): Query<ForecastParams>,
) -> Response {
    let Some(city) = params.city.filter(|c| !c.is_empty()) else {
        return error_reply(MISSING_CITY);
    };
    let units = Units::from_param(params.units.as_deref().unwrap_or_default());

    let result = state
        .client
        .fetch_forecast(&city, params.days, units)
        .await
        .and_then(|envelope| normalize::forecast_reports(envelope, units));

    match result {
        Ok(entries) => Json(entries).into_response(),
        Err(err) => error_reply(err.to_string()),
    }
}

/// GET /health - liveness check
async fn health_check() -> &'static str {
    "ok"
}

/// Create the HTTP router.
pub fn create_router(client: WeatherApiClient) -> Router {
    let state = AppState { client };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/weather", get(current_weather))
        .route("/forecast", get(forecast))
        .layer(cors)
        .with_state(state)
}

/// Bind and run the HTTP server until it exits.
pub async fn run(client: WeatherApiClient, listen: &str) -> anyhow::Result<()> {
    let app = create_router(client);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {listen}"))?;
    tracing::info!("HTTP server listening on {listen}");

    axum::serve(listener, app).await.context("HTTP server terminated")?;

    Ok(())
}
