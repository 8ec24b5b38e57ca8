use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    envelope::{CurrentEnvelope, ForecastEnvelope},
    error::WeatherError,
    model::ForecastHours,
};

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// One outbound request and one decode per call.
///
/// City queries take an already-resolved query term; implementations do no
/// classification or translation of their own.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentEnvelope, WeatherError>;

    async fn current_by_city(&self, query: &str) -> Result<CurrentEnvelope, WeatherError>;

    async fn forecast_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
        hours: ForecastHours,
    ) -> Result<ForecastEnvelope, WeatherError>;

    async fn forecast_by_city(
        &self,
        query: &str,
        hours: ForecastHours,
    ) -> Result<ForecastEnvelope, WeatherError>;
}
