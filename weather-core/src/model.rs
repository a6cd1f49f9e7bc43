use chrono::{DateTime, Utc};

/// Current weather for one location, normalized from the provider payload.
///
/// Temperature and wind speed are in whatever unit system was requested at
/// fetch time; the unit itself is not stored.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    location: String,
    temperature: f64,
    humidity: f64,
    description: String,
    wind_speed: f64,
    pressure: f64,
    timestamp: DateTime<Utc>,
}

impl WeatherRecord {
    pub fn new(
        location: impl Into<String>,
        temperature: f64,
        humidity: f64,
        description: impl Into<String>,
        wind_speed: f64,
        pressure: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            location: location.into(),
            temperature,
            humidity,
            description: description.into(),
            wind_speed,
            pressure,
            timestamp,
        }
    }

    /// Place name as resolved by the provider.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Percent. Passed through as sent; 0..=100 is expected but not checked.
    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    /// Hectopascals.
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// When the provider recorded the observation.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
