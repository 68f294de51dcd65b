//! Core library for the `tempo` weather facade.
//!
//! This crate defines:
//! - Configuration handling
//! - The upstream weatherapi.com client
//! - Normalization of upstream envelopes into the public payload shapes
//!
//! It is used by `tempo-server`, but can also be reused by other binaries.

pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod upstream;

pub use config::Config;
pub use error::WeatherError;
pub use model::{CurrentReport, ForecastEntry, Units};
pub use upstream::WeatherApiClient;
