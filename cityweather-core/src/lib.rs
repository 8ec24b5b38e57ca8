//! Core library for the `cityweather` tool.
//!
//! This crate defines:
//! - Location classification and Chinese place-name resolution
//! - The weather provider abstraction and its OpenWeather client
//! - Normalization of provider responses into shared domain models
//! - The `get_weather` tool surface and its text rendering
//!
//! It is used by `cityweather-cli`, but can also be embedded in other tool hosts.

pub mod config;
pub mod envelope;
pub mod error;
pub mod location;
pub mod model;
pub mod names;
pub mod normalize;
pub mod provider;
pub mod render;
pub mod request;
pub mod service;
pub mod tool;

#[cfg(test)]
mod testing;

pub use config::{Config, ProviderSettings};
pub use error::{Axis, RequestError, WeatherError};
pub use model::{
    CurrentConditions, ForecastHours, ForecastSnapshot, HourlyConditions, Location,
    WeatherSnapshot, WindDirection,
};
pub use names::NameTable;
pub use provider::{OpenWeatherClient, WeatherProvider};
pub use request::{WeatherQuery, WeatherRequest};
pub use service::{WeatherReport, WeatherService};
pub use tool::WeatherTool;
