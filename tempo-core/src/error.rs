use thiserror::Error;

/// Failures surfaced by the facade.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The outbound call to the upstream provider failed before a weather
    /// payload could be read (unreachable host, timeout, unreadable or
    /// non-JSON body). Carries the underlying message verbatim.
    #[error("{0}")]
    Transport(String),

    /// Upstream answered with parseable JSON, but it carried no recognizable
    /// weather payload. The provider's own error detail is discarded.
    #[error("Weather data not available.")]
    Unavailable,
}
