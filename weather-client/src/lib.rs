//! Client and validation library for checks against the OpenWeatherMap API.
//!
//! This crate defines:
//! - Configuration & credentials handling for check runs
//! - A narrow HTTP client for the current-weather endpoint
//! - Raw response capture with JSON-path field access
//! - The shared validation vocabulary used by every check
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or
//! check suites.

pub mod client;
pub mod config;
pub mod model;
pub mod response;
pub mod validate;

pub use client::{ClientError, WeatherClient};
pub use config::{ClientConfig, Settings};
pub use model::{Units, WeatherQuery, WeatherReport};
pub use response::ApiResponse;
pub use validate::ValidationError;
