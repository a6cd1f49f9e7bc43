use async_trait::async_trait;
use reqwest::Client;
use tracing::trace;

use super::{HttpResponse, HttpTransport};
use crate::error::TransportError;

/// [`HttpTransport`] over a shared `reqwest` client.
///
/// No timeout is configured; the client's defaults apply.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        let res = self.http.get(url).query(query).send().await?;

        let status = res.status();
        let body = res.text().await?;
        trace!(%status, bytes = body.len(), "response received");

        Ok(HttpResponse { status: status.as_u16(), body })
    }
}
