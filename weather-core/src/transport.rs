use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::TransportError;

pub mod http;

pub use http::ReqwestTransport;

/// Status and raw body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can perform a GET with query parameters.
///
/// A non-success status is still `Ok`; only failing to get a response at
/// all is a [`TransportError`].
#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, TransportError>;
}
