//! The `get_weather` tool: definition plus a handler that always answers in text.

use serde_json::{Value, json};
use tracing::warn;

use crate::{
    error::RequestError,
    model::ForecastHours,
    render,
    request::{WeatherQuery, WeatherRequest},
    service::WeatherService,
};

pub const TOOL_NAME: &str = "get_weather";

#[derive(Debug, Clone)]
pub struct WeatherTool {
    service: WeatherService,
}

impl WeatherTool {
    pub fn new(service: WeatherService) -> Self {
        Self { service }
    }

    pub fn name() -> &'static str {
        TOOL_NAME
    }

    pub fn description() -> &'static str {
        "获取指定位置的天气信息，支持实时天气和未来小时预报"
    }

    pub fn input_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "位置信息，可以是城市名（如：北京）或坐标（如：39.9042,116.4074）"
                },
                "hours": {
                    "type": "integer",
                    "description": "需要查询的小时数，0或不传表示查询实时天气，1-12表示查询未来小时预报",
                    "minimum": 0,
                    "maximum": ForecastHours::MAX,
                    "default": 0
                }
            },
            "required": ["location"]
        })
    }

    /// Name, description and input schema in one object. Needs no credentials.
    pub fn definition() -> Value {
        json!({
            "name": Self::name(),
            "description": Self::description(),
            "inputSchema": Self::input_schema(),
        })
    }

    /// Invalid arguments are errors; lookup failures come back as text.
    pub async fn call(&self, arguments: Value) -> Result<String, RequestError> {
        let request = WeatherRequest::from_json(arguments)?;
        self.handle(&request).await
    }

    pub async fn handle(&self, request: &WeatherRequest) -> Result<String, RequestError> {
        let location = request.location()?;
        let query = request.query()?;

        match self.service.report(location, query).await {
            Ok(report) => Ok(render::report(&report)),
            Err(err) => {
                warn!(error = %err, location, "weather lookup failed");
                let what = match query {
                    WeatherQuery::Current => "获取实时天气信息失败",
                    WeatherQuery::Forecast(_) => "获取小时级天气预报失败",
                };
                Ok(format!("❌ {what}: {}", err.user_message()))
            }
        }
    }
}
