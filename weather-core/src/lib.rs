//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration (API key, unit system, default location)
//! - The HTTP transport abstraction and the provider client
//! - The transform from provider payloads into [`WeatherRecord`]s
//! - Pure formatting of records for the terminal
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod transform;
pub mod transport;

pub use client::WeatherClient;
pub use config::{Config, Units};
pub use error::{TransportError, WeatherError};
pub use model::WeatherRecord;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
