use serde::{Deserialize, Serialize};

use crate::{error::RequestError, model::ForecastHours};

/// The single inbound request shape: a location and an optional step count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRequest {
    pub location: String,
    /// 0 asks for current conditions, 1–12 for that many forecast steps.
    #[serde(default)]
    pub hours: i64,
}

/// What a validated request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherQuery {
    Current,
    Forecast(ForecastHours),
}

impl WeatherRequest {
    pub fn new(location: impl Into<String>, hours: i64) -> Self {
        Self { location: location.into(), hours }
    }

    pub fn from_json(arguments: serde_json::Value) -> Result<Self, RequestError> {
        Ok(serde_json::from_value(arguments)?)
    }

    /// Trimmed location, rejected when empty.
    pub fn location(&self) -> Result<&str, RequestError> {
        match self.location.trim() {
            "" => Err(RequestError::EmptyLocation),
            location => Ok(location),
        }
    }

    pub fn query(&self) -> Result<WeatherQuery, RequestError> {
        if self.hours == 0 {
            return Ok(WeatherQuery::Current);
        }

        u8::try_from(self.hours)
            .ok()
            .and_then(ForecastHours::new)
            .map(WeatherQuery::Forecast)
            .ok_or(RequestError::HoursOutOfRange(self.hours))
    }
}
