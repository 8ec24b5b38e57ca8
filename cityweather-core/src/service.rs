use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::{
    config::ProviderSettings,
    error::WeatherError,
    location::{LocationQuery, classify, is_local_script},
    model::{ForecastHours, ForecastSnapshot, WeatherSnapshot},
    names::NameTable,
    normalize,
    provider::{OpenWeatherClient, WeatherProvider},
    request::WeatherQuery,
};

/// Result of one lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherReport {
    Current(WeatherSnapshot),
    Forecast(ForecastSnapshot),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Target<'a> {
    Coordinates { latitude: f64, longitude: f64 },
    City(&'a str),
}

/// Location text in, normalized snapshot out.
///
/// Holds no per-call state; clones share the provider and the name table.
#[derive(Debug, Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
    names: Arc<NameTable>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider, names: NameTable::builtin() }
    }

    /// Service backed by the OpenWeather client.
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self, WeatherError> {
        Ok(Self::new(Arc::new(OpenWeatherClient::new(settings)?)))
    }

    pub fn with_names(mut self, names: Arc<NameTable>) -> Self {
        self.names = names;
        self
    }

    #[instrument(skip(self))]
    pub async fn current(&self, location: &str) -> Result<WeatherSnapshot, WeatherError> {
        let envelope = match self.target(location)? {
            Target::Coordinates { latitude, longitude } => {
                self.provider.current_by_coordinates(latitude, longitude).await?
            }
            Target::City(query) => self.provider.current_by_city(query).await?,
        };

        let snapshot = normalize::current_snapshot(&envelope)?;
        info!(city = %snapshot.location.city, "current weather retrieved");
        Ok(snapshot)
    }

    #[instrument(skip(self))]
    pub async fn forecast(
        &self,
        location: &str,
        hours: ForecastHours,
    ) -> Result<ForecastSnapshot, WeatherError> {
        let envelope = match self.target(location)? {
            Target::Coordinates { latitude, longitude } => {
                self.provider.forecast_by_coordinates(latitude, longitude, hours).await?
            }
            Target::City(query) => self.provider.forecast_by_city(query, hours).await?,
        };

        let snapshot = normalize::forecast_snapshot(&envelope, hours, Utc::now())?;
        info!(
            city = %snapshot.location.city,
            steps = snapshot.steps.len(),
            "forecast retrieved"
        );
        Ok(snapshot)
    }

    pub async fn report(
        &self,
        location: &str,
        query: WeatherQuery,
    ) -> Result<WeatherReport, WeatherError> {
        match query {
            WeatherQuery::Current => self.current(location).await.map(WeatherReport::Current),
            WeatherQuery::Forecast(hours) => {
                self.forecast(location, hours).await.map(WeatherReport::Forecast)
            }
        }
    }

    fn target<'a>(&self, location: &'a str) -> Result<Target<'a>, WeatherError> {
        let target = match classify(location)? {
            LocationQuery::Coordinates { latitude, longitude } => {
                Target::Coordinates { latitude, longitude }
            }
            LocationQuery::Place(name) if is_local_script(name) => {
                Target::City(self.names.resolve(name))
            }
            LocationQuery::Place(name) => Target::City(name),
        };
        debug!(?target, "location classified");
        Ok(target)
    }
}
