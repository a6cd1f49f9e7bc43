use thiserror::Error;

/// Errors produced while fetching weather from the provider.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider answered with a non-success status.
    /// Carries the provider's own message when it sent one.
    #[error("Weather API error: {0}")]
    Api(String),

    /// The provider answered 2xx but the body was not a weather payload.
    #[error("Weather API error: malformed response ({0})")]
    Decode(#[from] serde_json::Error),

    /// The provider could not be reached at all.
    #[error("Failed to fetch weather data")]
    Transport(#[from] TransportError),
}

impl WeatherError {
    /// True for every error where the provider was reached.
    pub fn is_api_error(&self) -> bool {
        matches!(self, WeatherError::Api(_) | WeatherError::Decode(_))
    }
}

/// Connection, DNS or timeout failure reported by an [`HttpTransport`](crate::transport::HttpTransport).
#[derive(Debug, Error)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        TransportError(e.to_string())
    }
}
