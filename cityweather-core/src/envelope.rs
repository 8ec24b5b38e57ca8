//! Raw response bodies of the provider's `weather` and `forecast` resources.
//!
//! Only the fields the normalizer reads are modelled; everything else in the body is
//! ignored.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub pressure: i32,
    pub humidity: u8,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: f64,
    /// Bearing in degrees; the provider omits it in calm conditions.
    #[serde(default)]
    pub deg: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub country: String,
}

/// Body of the `weather` resource.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentEnvelope {
    #[serde(default)]
    pub coord: Coord,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub main: MainReadings,
    #[serde(default)]
    pub wind: Wind,
    #[serde(default)]
    pub sys: Sys,
    #[serde(default)]
    pub name: String,
    pub dt: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastCity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub coord: Coord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastStep {
    pub dt: i64,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub wind: Wind,
}

/// Body of the `forecast` resource; `list` is chronological.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEnvelope {
    pub city: ForecastCity,
    #[serde(default)]
    pub list: Vec<ForecastStep>,
}
