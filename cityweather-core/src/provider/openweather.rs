use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    config::ProviderSettings,
    envelope::{CurrentEnvelope, ForecastEnvelope},
    error::WeatherError,
    model::ForecastHours,
};

use super::WeatherProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resource {
    Current,
    Forecast,
}

impl Resource {
    fn path(self) -> &'static str {
        match self {
            Resource::Current => "weather",
            Resource::Forecast => "forecast",
        }
    }
}

/// Client for the OpenWeatherMap 2.5 `weather` and `forecast` resources.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    lang: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(settings: &ProviderSettings) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(WeatherError::HttpClient)?;

        Ok(Self {
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            lang: settings.lang.clone(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        resource: Resource,
        mut params: Vec<(&'static str, String)>,
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{}", self.base_url, resource.path());
        debug!(%url, ?params, "requesting weather provider");

        params.push(("appid", self.api_key.clone()));
        params.push(("units", "metric".to_string()));
        params.push(("lang", self.lang.clone()));

        let res = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(transport_error)?;

        let status = res.status();
        if !status.is_success() {
            warn!(%status, resource = resource.path(), "weather provider rejected request");
            return Err(WeatherError::Rejected { status });
        }

        let body = res.text().await.map_err(transport_error)?;

        Ok(serde_json::from_str(&body)?)
    }
}

/// The request URL carries `appid`, so it is stripped before the error goes anywhere.
fn transport_error(err: reqwest::Error) -> WeatherError {
    let err = err.without_url();
    warn!(error = %err, "weather provider unreachable");
    if err.is_timeout() {
        WeatherError::Timeout(err)
    } else {
        WeatherError::Transport(err)
    }
}

fn coordinate_params(latitude: f64, longitude: f64) -> Vec<(&'static str, String)> {
    vec![("lat", latitude.to_string()), ("lon", longitude.to_string())]
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentEnvelope, WeatherError> {
        self.fetch(Resource::Current, coordinate_params(latitude, longitude)).await
    }

    async fn current_by_city(&self, query: &str) -> Result<CurrentEnvelope, WeatherError> {
        self.fetch(Resource::Current, vec![("q", query.to_string())]).await
    }

    async fn forecast_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
        hours: ForecastHours,
    ) -> Result<ForecastEnvelope, WeatherError> {
        let mut params = coordinate_params(latitude, longitude);
        params.push(("cnt", hours.to_string()));
        self.fetch(Resource::Forecast, params).await
    }

    async fn forecast_by_city(
        &self,
        query: &str,
        hours: ForecastHours,
    ) -> Result<ForecastEnvelope, WeatherError> {
        self.fetch(Resource::Forecast, vec![("q", query.to_string()), ("cnt", hours.to_string())])
            .await
    }
}
