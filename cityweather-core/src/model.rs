use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a reading applies, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One of the eight compass points a wind bearing is bucketed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl WindDirection {
    /// Clockwise from north, 45° apart.
    pub const ALL: [WindDirection; 8] = [
        WindDirection::N,
        WindDirection::NE,
        WindDirection::E,
        WindDirection::SE,
        WindDirection::S,
        WindDirection::SW,
        WindDirection::W,
        WindDirection::NW,
    ];

    /// Bucket a bearing in whole degrees.
    ///
    /// Each sector is 45° wide and centred on its named direction, so 0–22° and
    /// 338–360° are both north.
    pub fn from_degrees(degrees: i64) -> Self {
        let index = (degrees.saturating_add(22) / 45).rem_euclid(8) as usize;
        Self::ALL[index]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }

    /// Chinese label, used by the rendered text.
    pub fn local_label(&self) -> &'static str {
        match self {
            Self::N => "北",
            Self::NE => "东北",
            Self::E => "东",
            Self::SE => "东南",
            Self::S => "南",
            Self::SW => "西南",
            Self::W => "西",
            Self::NW => "西北",
        }
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: i32,
    pub wind_speed_mps: f64,
    pub wind_direction: WindDirection,
    pub description: String,
    pub icon_code: String,
}

/// A single forecast step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyConditions {
    pub time: DateTime<Utc>,
    #[serde(flatten)]
    pub conditions: CurrentConditions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: CurrentConditions,
    pub retrieved_at: DateTime<Utc>,
}

/// Forecast steps in chronological order, never more than were asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    pub location: Location,
    pub steps: Vec<HourlyConditions>,
    pub retrieved_at: DateTime<Utc>,
}

/// Number of forecast steps to return, always within `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ForecastHours(u8);

impl ForecastHours {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 12;

    pub fn new(hours: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&hours).then_some(Self(hours))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for ForecastHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
