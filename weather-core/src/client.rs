use futures::future::try_join_all;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    config::{Config, Units},
    error::WeatherError,
    model::WeatherRecord,
    transform::{CurrentWeatherPayload, transform},
    transport::{HttpResponse, HttpTransport, ReqwestTransport},
};

/// Client for the provider's current-weather endpoint.
#[derive(Debug)]
pub struct WeatherClient {
    api_key: String,
    units: Units,
    base_url: String,
    transport: Box<dyn HttpTransport>,
}

/// Error body sent by the provider, e.g. `{"cod":"404","message":"city not found"}`.
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: Option<String>,
}

impl WeatherClient {
    /// Client talking to the real provider over HTTP.
    pub fn new(config: &Config) -> Self {
        Self::with_transport(config, Box::new(ReqwestTransport::new()))
    }

    pub fn with_transport(config: &Config, transport: Box<dyn HttpTransport>) -> Self {
        Self {
            api_key: config.api_key().to_string(),
            units: config.units,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Unit system requested from the provider.
    pub fn units(&self) -> Units {
        self.units
    }

    /// Current weather for one location.
    pub async fn fetch_one(&self, location: &str) -> Result<WeatherRecord, WeatherError> {
        let url = format!("{}/weather", self.base_url);
        debug!(location, units = %self.units, "fetching current weather");

        let res = self
            .transport
            .get(
                &url,
                &[
                    ("q", location),
                    ("appid", self.api_key.as_str()),
                    ("units", self.units.as_str()),
                ],
            )
            .await
            .inspect_err(|e| warn!(location, error = %e, "weather request failed"))?;

        if !res.is_success() {
            let err = WeatherError::Api(provider_message(&res));
            warn!(location, status = res.status, error = %err, "provider returned an error");
            return Err(err);
        }

        let payload: CurrentWeatherPayload = serde_json::from_str(&res.body)
            .inspect_err(|e| warn!(location, error = %e, "unreadable weather payload"))?;

        let record = transform(payload);
        debug!(location, resolved = record.location(), "weather fetched");
        Ok(record)
    }

    /// Current weather for every location, in input order.
    ///
    /// Requests run concurrently. The first failure fails the whole call and
    /// drops the requests still in flight; no partial results are returned.
    pub async fn fetch_many<S>(&self, locations: &[S]) -> Result<Vec<WeatherRecord>, WeatherError>
    where
        S: AsRef<str>,
    {
        debug!(count = locations.len(), "fetching weather for multiple locations");
        try_join_all(locations.iter().map(|l| self.fetch_one(l.as_ref()))).await
    }
}

fn provider_message(res: &HttpResponse) -> String {
    serde_json::from_str::<ProviderErrorBody>(&res.body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {}", res.status))
}
