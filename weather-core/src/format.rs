//! Rendering of [`WeatherRecord`]s for the terminal.
//!
//! Everything here is pure: callers supply the unit system the records were
//! fetched in and, for relative times, the reference "now".

use chrono::{DateTime, Utc};

use crate::{config::Units, model::WeatherRecord};

/// Pattern used for absolute timestamps. Always rendered in UTC.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TABLE_HEADERS: [&str; 5] = ["Location", "Temp", "Humidity", "Wind", "Conditions"];
const COLUMN_SEPARATOR: &str = " | ";
const HEADER_RULE_JOINT: &str = "-+-";

pub fn format_temperature(value: f64, units: Units) -> String {
    format!("{}{}", one_decimal(value), units.temperature_symbol())
}

pub fn format_wind_speed(value: f64, units: Units) -> String {
    format!("{} {}", one_decimal(value), units.wind_speed_unit())
}

pub fn format_pressure(value: f64) -> String {
    format!("{} hPa", whole(value))
}

pub fn format_humidity(value: f64) -> String {
    format!("{}%", whole(value))
}

/// One decimal place, exact halves rounded away from zero.
///
/// `format!` rounds ties to even. The only ties a double can hold exactly at
/// one decimal are odd quarters (`x.x25`, `x.x75`); anything else, like 0.15
/// stored as 0.1499..., is already rounded correctly by `format!`.
fn one_decimal(value: f64) -> String {
    let value = if is_odd_integer(value * 4.0) { (value * 10.0).round() / 10.0 } else { value };
    format!("{value:.1}")
}

/// No decimals, exact halves rounded away from zero.
fn whole(value: f64) -> String {
    let value = if is_odd_integer(value * 2.0) { value.round() } else { value };
    format!("{value:.0}")
}

fn is_odd_integer(x: f64) -> bool {
    x.fract() == 0.0 && x % 2.0 != 0.0
}

/// Uppercases the first character only: `"partly cloudy"` → `"Partly cloudy"`.
pub fn format_weather_description(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn format_date_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format(DATE_TIME_FORMAT).to_string()
}

/// Human phrase for `timestamp` seen from `now`, e.g. "3 hours ago" or "in 2 days".
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(timestamp);
    let phrase = humanize(delta.num_seconds().unsigned_abs() as f64);

    if delta.num_seconds() < 0 {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

fn humanize(seconds: f64) -> String {
    let minutes = seconds / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;

    let count = |n: f64, unit: &str| format!("{} {unit}", n.round() as i64);

    if seconds < 45.0 {
        "a few seconds".to_string()
    } else if seconds < 90.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        count(minutes, "minutes")
    } else if minutes < 90.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        count(hours, "hours")
    } else if hours < 36.0 {
        "a day".to_string()
    } else if days < 26.0 {
        count(days, "days")
    } else if days < 46.0 {
        "a month".to_string()
    } else if days < 320.0 {
        count(days / 30.4, "months")
    } else if days < 548.0 {
        "a year".to_string()
    } else {
        count(days / 365.0, "years")
    }
}

/// Seven labelled lines: location, temperature, humidity, wind, pressure,
/// conditions and how long ago the observation was made.
pub fn create_weather_summary(record: &WeatherRecord, units: Units, now: DateTime<Utc>) -> String {
    [
        format!("📍 Location: {}", record.location()),
        format!("🌡️  Temperature: {}", format_temperature(record.temperature(), units)),
        format!("💧 Humidity: {}", format_humidity(record.humidity())),
        format!("🌬️  Wind Speed: {}", format_wind_speed(record.wind_speed(), units)),
        format!("📊 Pressure: {}", format_pressure(record.pressure())),
        format!("☁️  Conditions: {}", format_weather_description(record.description())),
        format!("🕐 Updated: {}", format_relative_time(record.timestamp(), now)),
    ]
    .join("\n")
}

/// Every field, with the absolute observation time.
pub fn create_detailed_report(record: &WeatherRecord, units: Units) -> String {
    [
        format!("Location: {}", record.location()),
        format!("Temperature: {}", format_temperature(record.temperature(), units)),
        format!("Humidity: {}", format_humidity(record.humidity())),
        format!("Wind Speed: {}", format_wind_speed(record.wind_speed(), units)),
        format!("Pressure: {}", format_pressure(record.pressure())),
        format!("Conditions: {}", format_weather_description(record.description())),
        format!("Last Updated: {} UTC", format_date_time(record.timestamp())),
    ]
    .join("\n")
}

/// Comparison table, one row per record in input order.
///
/// Pressure and observation time are left out. Each column is as wide as
/// its longest cell (header included), measured in characters.
pub fn create_table_format(records: &[WeatherRecord], units: Units) -> String {
    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|r| {
            [
                r.location().to_string(),
                format_temperature(r.temperature(), units),
                format_humidity(r.humidity()),
                format_wind_speed(r.wind_speed(), units),
                format_weather_description(r.description()),
            ]
        })
        .collect();

    let widths: [usize; 5] = std::array::from_fn(|col| {
        rows.iter()
            .map(|row| row[col].chars().count())
            .chain(std::iter::once(TABLE_HEADERS[col].chars().count()))
            .max()
            .unwrap_or(0)
    });

    let format_row = |cells: &[&str]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR)
    };

    let separator = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join(HEADER_RULE_JOINT);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&TABLE_HEADERS[..]));
    lines.push(separator);
    lines.extend(rows.iter().map(|row| format_row(&row.each_ref().map(String::as_str)[..])));

    lines.join("\n")
}
