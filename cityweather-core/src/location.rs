//! Classifying free-form location text.

use crate::error::{Axis, WeatherError};

/// What a location string turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery<'a> {
    Coordinates { latitude: f64, longitude: f64 },
    Place(&'a str),
}

/// Split `input` into a coordinate pair or a place name.
///
/// A string with exactly one comma is a coordinate pair and both halves must parse;
/// a bad half is an error rather than a place name. Anything else is a place name.
pub fn classify(input: &str) -> Result<LocationQuery<'_>, WeatherError> {
    let mut parts = input.split(',');
    let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
        return Ok(LocationQuery::Place(input));
    };

    Ok(LocationQuery::Coordinates {
        latitude: parse_axis(lat, Axis::Latitude)?,
        longitude: parse_axis(lon, Axis::Longitude)?,
    })
}

fn parse_axis(raw: &str, axis: Axis) -> Result<f64, WeatherError> {
    let trimmed = raw.trim();
    trimmed.parse::<f64>().map_err(|source| WeatherError::InvalidCoordinate {
        axis,
        input: trimmed.to_string(),
        source,
    })
}

/// True when `name` contains at least one CJK unified ideograph.
pub fn is_local_script(name: &str) -> bool {
    name.chars().any(|c| ('\u{4E00}'..='\u{9FFF}').contains(&c))
}
