//! Integration tests for WeatherApiClient against a mock upstream.

use serde_json::json;
use tempo_core::{Units, WeatherApiClient, WeatherError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn current_body() -> serde_json::Value {
    json!({
        "location": {"name": "London", "country": "United Kingdom"},
        "current": {
            "temp_c": 11.0,
            "temp_f": 51.8,
            "humidity": 82,
            "wind_kph": 13.0,
            "wind_mph": 8.1,
            "condition": {"text": "Light rain"}
        }
    })
}

fn forecast_body(dates: &[&str]) -> serde_json::Value {
    let days: Vec<serde_json::Value> = dates
        .iter()
        .map(|date| {
            json!({
                "date": date,
                "day": {
                    "avgtemp_c": 18.4, "avgtemp_f": 65.1,
                    "avghumidity": 70.0,
                    "maxwind_kph": 20.2, "maxwind_mph": 12.5,
                    "condition": {"text": "Partly cloudy"}
                }
            })
        })
        .collect();

    json!({"forecast": {"forecastday": days}})
}

#[tokio::test]
async fn fetch_current_forwards_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .and(query_param("key", "test-key"))
        .and(query_param("q", "London"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = WeatherApiClient::with_base_url("test-key".into(), server.uri());
    let envelope = client.fetch_current("London", Units::Metric).await.unwrap();

    assert!(envelope.current.is_some());
}

#[tokio::test]
async fn fetch_forecast_forwards_day_count_and_units() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(query_param("key", "test-key"))
        .and(query_param("q", "Paris"))
        .and(query_param("days", "3"))
        .and(query_param("units", "imperial"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(forecast_body(&["2026-08-06", "2026-08-07", "2026-08-08"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = WeatherApiClient::with_base_url("test-key".into(), server.uri());
    let envelope = client.fetch_forecast("Paris", 3, Units::Imperial).await.unwrap();

    let days = envelope.forecast.unwrap().forecastday.unwrap();
    assert_eq!(days.len(), 3);
}

#[tokio::test]
async fn error_envelope_is_returned_without_payload() {
    let server = MockServer::start().await;

    // weatherapi.com replies with a JSON error envelope and a non-2xx status;
    // the call itself is not a transport failure.
    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 1006, "message": "No matching location found."}
        })))
        .mount(&server)
        .await;

    let client = WeatherApiClient::with_base_url("test-key".into(), server.uri());
    let envelope = client.fetch_current("Nowhere", Units::Metric).await.unwrap();

    assert!(envelope.current.is_none());
}

#[tokio::test]
async fn non_json_body_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = WeatherApiClient::with_base_url("test-key".into(), server.uri());
    let err = client.fetch_current("London", Units::Metric).await.unwrap_err();

    assert!(matches!(err, WeatherError::Transport(_)));
    assert!(err.to_string().contains("Failed to parse WeatherAPI current JSON"));
}

#[tokio::test]
async fn unreachable_upstream_is_a_transport_error() {
    // Bind a listener to reserve a port, then drop it so connections are refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = WeatherApiClient::with_base_url("test-key".into(), format!("http://{addr}"));
    let err = client.fetch_current("London", Units::Metric).await.unwrap_err();

    assert!(matches!(err, WeatherError::Transport(_)));
    assert!(err.to_string().contains("Failed to send request to WeatherAPI.com (current)"));
}
