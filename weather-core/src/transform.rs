//! Mapping from the provider's current-weather payload to [`WeatherRecord`].

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::model::WeatherRecord;

/// Description used when the provider sends no condition entries.
pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub humidity: f64,
    pub pressure: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// Body of a successful `GET /weather` response.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherPayload {
    pub name: String,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub wind: Wind,
    /// Observation time, Unix epoch seconds on the wire.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub dt: DateTime<Utc>,
}

pub fn transform(payload: CurrentWeatherPayload) -> WeatherRecord {
    let description = payload
        .weather
        .into_iter()
        .next()
        .map(|c| c.description)
        .unwrap_or_else(|| UNKNOWN_DESCRIPTION.to_string());

    WeatherRecord::new(
        payload.name,
        payload.main.temp,
        payload.main.humidity,
        description,
        payload.wind.speed,
        payload.main.pressure,
        payload.dt,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const LONDON: &str = r#"{
        "name": "London",
        "main": { "temp": 20.5, "feels_like": 19.8, "humidity": 65, "pressure": 1013 },
        "weather": [
            { "id": 802, "main": "Clouds", "description": "scattered clouds" },
            { "id": 500, "main": "Rain", "description": "light rain" }
        ],
        "wind": { "speed": 5.2, "deg": 240 },
        "dt": 1701432000,
        "cod": 200
    }"#;

    fn parse(json: &str) -> CurrentWeatherPayload {
        serde_json::from_str(json).expect("payload should parse")
    }

    #[test]
    fn maps_fields_directly() {
        let record = transform(parse(LONDON));

        assert_eq!(record.location(), "London");
        assert_eq!(record.temperature(), 20.5);
        assert_eq!(record.humidity(), 65.0);
        assert_eq!(record.pressure(), 1013.0);
        assert_eq!(record.wind_speed(), 5.2);
        assert_eq!(record.description(), "scattered clouds");
    }

    #[test]
    fn epoch_seconds_become_utc_instant() {
        let record = transform(parse(LONDON));
        let expected = Utc.with_ymd_and_hms(2023, 12, 1, 12, 0, 0).unwrap();
        assert_eq!(record.timestamp(), expected);
    }

    #[test]
    fn empty_condition_list_yields_unknown() {
        let json = r#"{
            "name": "Reykjavik",
            "main": { "temp": -3.0, "humidity": 80, "pressure": 1002 },
            "weather": [],
            "wind": { "speed": 9.1 },
            "dt": 1701432000
        }"#;
        let record = transform(parse(json));
        assert_eq!(record.description(), UNKNOWN_DESCRIPTION);
    }

    #[test]
    fn missing_condition_list_yields_unknown() {
        let json = r#"{
            "name": "Nowhere",
            "main": { "temp": 1.0, "humidity": 10, "pressure": 990 },
            "wind": { "speed": 0.0 },
            "dt": 0
        }"#;
        let record = transform(parse(json));
        assert_eq!(record.description(), "Unknown");
    }

    #[test]
    fn humidity_outside_percent_range_passes_through() {
        let json = r#"{
            "name": "Sensor Glitch",
            "main": { "temp": 12.0, "humidity": 312.5, "pressure": 1000 },
            "weather": [{ "description": "mist" }],
            "wind": { "speed": 1.0 },
            "dt": 0
        }"#;
        let record = transform(parse(json));
        assert_eq!(record.humidity(), 312.5);
    }

    #[test]
    fn missing_numeric_field_fails_to_decode() {
        let json = r#"{ "name": "X", "main": { "temp": 1.0 }, "wind": { "speed": 1.0 }, "dt": 0 }"#;
        assert!(serde_json::from_str::<CurrentWeatherPayload>(json).is_err());
    }

    #[test]
    fn transform_is_deterministic() {
        let payload = parse(LONDON);
        assert_eq!(transform(payload.clone()), transform(payload));
    }
}
