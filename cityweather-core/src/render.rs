//! Human-readable text for snapshots.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::{
    model::{ForecastSnapshot, Location, WeatherSnapshot},
    service::WeatherReport,
};

pub fn report(report: &WeatherReport) -> String {
    match report {
        WeatherReport::Current(snapshot) => current(snapshot),
        WeatherReport::Forecast(snapshot) => forecast(snapshot),
    }
}

/// Times are shown in the local time zone.
pub fn current(snapshot: &WeatherSnapshot) -> String {
    current_in(snapshot, &Local)
}

pub fn forecast(snapshot: &ForecastSnapshot) -> String {
    forecast_in(snapshot, &Local)
}

pub fn current_in<Tz: TimeZone>(snapshot: &WeatherSnapshot, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let c = &snapshot.current;

    [
        format!("📍 {}", place(&snapshot.location)),
        format!("🌡️  温度: {:.1}°C (体感: {:.1}°C)", c.temperature_c, c.feels_like_c),
        format!("💧 湿度: {}%", c.humidity_pct),
        format!("🌪️  风速: {:.1} m/s ({})", c.wind_speed_mps, c.wind_direction.local_label()),
        format!("🌡️  气压: {} hPa", c.pressure_hpa),
        format!("☁️  天气: {}", c.description),
        format!("🕐 更新时间: {}", timestamp(snapshot.retrieved_at, tz, "%Y-%m-%d %H:%M:%S")),
    ]
    .join("\n")
}

pub fn forecast_in<Tz: TimeZone>(snapshot: &ForecastSnapshot, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut lines = vec![format!(
        "📍 {} 未来{}个时段天气预报",
        place(&snapshot.location),
        snapshot.steps.len()
    )];

    if snapshot.steps.is_empty() {
        lines.push("暂无预报数据".to_string());
        return lines.join("\n");
    }

    lines.extend(snapshot.steps.iter().map(|step| {
        let c = &step.conditions;
        format!(
            "🕐 {}  🌡️ {:.1}°C (体感 {:.1}°C)  💧 {}%  🌪️ {:.1} m/s {}  ☁️ {}",
            timestamp(step.time, tz, "%m-%d %H:%M"),
            c.temperature_c,
            c.feels_like_c,
            c.humidity_pct,
            c.wind_speed_mps,
            c.wind_direction.local_label(),
            c.description,
        )
    }));
    lines.push(format!("更新时间: {}", timestamp(snapshot.retrieved_at, tz, "%Y-%m-%d %H:%M:%S")));

    lines.join("\n")
}

fn place(location: &Location) -> String {
    if location.country.is_empty() {
        location.city.clone()
    } else {
        format!("{}, {}", location.city, location.country)
    }
}

fn timestamp<Tz: TimeZone>(at: DateTime<Utc>, tz: &Tz, fmt: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format(fmt).to_string()
}
