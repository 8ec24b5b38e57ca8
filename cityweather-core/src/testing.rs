//! Fixtures and a recording provider for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::{
    envelope::{CurrentEnvelope, ForecastEnvelope},
    error::WeatherError,
    model::ForecastHours,
    provider::WeatherProvider,
};

pub const FIRST_STEP_DT: i64 = 1_700_000_000;
pub const STEP_SECS: i64 = 10_800;

pub fn current_body() -> Value {
    json!({
        "coord": { "lon": 116.4074, "lat": 39.9042 },
        "weather": [
            { "id": 800, "main": "Clear", "description": "晴", "icon": "01d" },
            { "id": 701, "main": "Mist", "description": "薄雾", "icon": "50d" }
        ],
        "base": "stations",
        "main": {
            "temp": 25.3, "feels_like": 26.1, "temp_min": 24.0, "temp_max": 27.0,
            "pressure": 1013, "humidity": 65
        },
        "visibility": 10000,
        "wind": { "speed": 3.2, "deg": 45 },
        "sys": { "country": "CN", "sunrise": 1642201200, "sunset": 1642237200 },
        "name": "Beijing",
        "dt": 1642248600,
        "cod": 200
    })
}

pub fn forecast_body(steps: usize) -> Value {
    let list: Vec<Value> = (0..steps)
        .map(|i| {
            let temp = 10.0 + i as f64;
            json!({
                "dt": FIRST_STEP_DT + i as i64 * STEP_SECS,
                "main": { "temp": temp, "feels_like": temp - 1.0, "pressure": 1008, "humidity": 70 },
                "weather": [{ "description": "小雨", "icon": "10n" }],
                "wind": { "speed": 5.5, "deg": 225 },
                "dt_txt": "ignored"
            })
        })
        .collect();

    json!({
        "cod": "200",
        "cnt": steps,
        "city": {
            "name": "Shanghai",
            "country": "CN",
            "coord": { "lat": 31.2222, "lon": 121.4581 }
        },
        "list": list
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CurrentByCoordinates(f64, f64),
    CurrentByCity(String),
    ForecastByCoordinates(f64, f64, u8),
    ForecastByCity(String, u8),
}

/// Answers every call from fixtures and records what it was asked.
#[derive(Debug)]
pub struct FakeProvider {
    calls: Mutex<Vec<Call>>,
    forecast_steps: usize,
    reject_with: Option<StatusCode>,
}

impl FakeProvider {
    pub fn new(forecast_steps: usize) -> Self {
        Self { calls: Mutex::new(Vec::new()), forecast_steps, reject_with: None }
    }

    pub fn rejecting(status: StatusCode) -> Self {
        Self { reject_with: Some(status), ..Self::new(0) }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), WeatherError> {
        self.calls.lock().unwrap().push(call);
        match self.reject_with {
            Some(status) => Err(WeatherError::Rejected { status }),
            None => Ok(()),
        }
    }

    fn current(&self) -> Result<CurrentEnvelope, WeatherError> {
        Ok(serde_json::from_value(current_body())?)
    }

    fn forecast(&self) -> Result<ForecastEnvelope, WeatherError> {
        Ok(serde_json::from_value(forecast_body(self.forecast_steps))?)
    }
}

#[async_trait]
impl WeatherProvider for FakeProvider {
    async fn current_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentEnvelope, WeatherError> {
        self.record(Call::CurrentByCoordinates(latitude, longitude))?;
        self.current()
    }

    async fn current_by_city(&self, query: &str) -> Result<CurrentEnvelope, WeatherError> {
        self.record(Call::CurrentByCity(query.to_string()))?;
        self.current()
    }

    async fn forecast_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
        hours: ForecastHours,
    ) -> Result<ForecastEnvelope, WeatherError> {
        self.record(Call::ForecastByCoordinates(latitude, longitude, hours.get()))?;
        self.forecast()
    }

    async fn forecast_by_city(
        &self,
        query: &str,
        hours: ForecastHours,
    ) -> Result<ForecastEnvelope, WeatherError> {
        self.record(Call::ForecastByCity(query.to_string(), hours.get()))?;
        self.forecast()
    }
}
