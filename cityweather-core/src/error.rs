use std::{fmt, num::ParseFloatError};

use reqwest::StatusCode;
use thiserror::Error;

/// Which half of a "lat,lon" pair failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Failures of a single weather lookup.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("invalid {axis} {input:?}: {source}")]
    InvalidCoordinate {
        axis: Axis,
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("timed out waiting for the weather provider")]
    Timeout(#[source] reqwest::Error),

    #[error("failed to reach the weather provider: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("weather provider rejected the request with status {status}")]
    Rejected { status: StatusCode },

    #[error("failed to decode weather provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("weather provider returned an out-of-range timestamp: {0}")]
    InvalidTimestamp(i64),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl WeatherError {
    /// Network-level failures (timeouts included) that an outer layer may choose to retry.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Transport(_))
    }

    /// Text suitable for showing to the person who asked for the weather.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCoordinate { axis: Axis::Latitude, input, .. } => {
                format!("纬度格式无效: {input}")
            }
            Self::InvalidCoordinate { axis: Axis::Longitude, input, .. } => {
                format!("经度格式无效: {input}")
            }
            Self::Timeout(_) => "天气服务响应超时，请稍后重试".to_string(),
            Self::Transport(_) => "无法连接天气服务，请检查网络".to_string(),
            Self::Rejected { status } if *status == StatusCode::NOT_FOUND => {
                "未找到该地点，请检查城市名称或坐标".to_string()
            }
            Self::Rejected { status } => format!("天气服务请求失败，状态码: {}", status.as_u16()),
            Self::Decode(_) | Self::InvalidTimestamp(_) => "天气服务返回了无法解析的数据".to_string(),
            Self::HttpClient(_) => "天气客户端初始化失败".to_string(),
        }
    }
}

/// Rejections at the request boundary, before any lookup starts.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("location parameter is required")]
    EmptyLocation,

    #[error("hours parameter must be between 0 and 12, got {0}")]
    HoursOutOfRange(i64),

    #[error("failed to parse tool arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),
}
