//! Provider envelopes to domain snapshots. No I/O happens here.

use chrono::{DateTime, Utc};

use crate::{
    envelope::{Condition, CurrentEnvelope, ForecastEnvelope, MainReadings, Wind},
    error::WeatherError,
    model::{
        CurrentConditions, ForecastHours, ForecastSnapshot, HourlyConditions, Location,
        WeatherSnapshot, WindDirection,
    },
};

pub fn wind_direction(degrees: f64) -> WindDirection {
    WindDirection::from_degrees(degrees as i64)
}

/// `retrieved_at` is the provider's observation time.
pub fn current_snapshot(envelope: &CurrentEnvelope) -> Result<WeatherSnapshot, WeatherError> {
    Ok(WeatherSnapshot {
        location: Location {
            city: envelope.name.clone(),
            country: envelope.sys.country.clone(),
            latitude: envelope.coord.lat,
            longitude: envelope.coord.lon,
        },
        current: conditions(&envelope.main, &envelope.wind, &envelope.weather),
        retrieved_at: unix_to_utc(envelope.dt)?,
    })
}

/// Keeps the first `hours` steps in provider order; a shorter list is kept whole.
pub fn forecast_snapshot(
    envelope: &ForecastEnvelope,
    hours: ForecastHours,
    retrieved_at: DateTime<Utc>,
) -> Result<ForecastSnapshot, WeatherError> {
    let steps = envelope
        .list
        .iter()
        .take(hours.as_usize())
        .map(|step| {
            Ok(HourlyConditions {
                time: unix_to_utc(step.dt)?,
                conditions: conditions(&step.main, &step.wind, &step.weather),
            })
        })
        .collect::<Result<Vec<_>, WeatherError>>()?;

    Ok(ForecastSnapshot {
        location: Location {
            city: envelope.city.name.clone(),
            country: envelope.city.country.clone(),
            latitude: envelope.city.coord.lat,
            longitude: envelope.city.coord.lon,
        },
        steps,
        retrieved_at,
    })
}

fn conditions(main: &MainReadings, wind: &Wind, weather: &[Condition]) -> CurrentConditions {
    let (description, icon_code) = weather
        .first()
        .map(|c| (c.description.clone(), c.icon.clone()))
        .unwrap_or_default();

    CurrentConditions {
        temperature_c: main.temp,
        feels_like_c: main.feels_like,
        humidity_pct: main.humidity,
        pressure_hpa: main.pressure,
        wind_speed_mps: wind.speed,
        wind_direction: wind_direction(wind.deg),
        description,
        icon_code,
    }
}

fn unix_to_utc(ts: i64) -> Result<DateTime<Utc>, WeatherError> {
    DateTime::from_timestamp(ts, 0).ok_or(WeatherError::InvalidTimestamp(ts))
}
