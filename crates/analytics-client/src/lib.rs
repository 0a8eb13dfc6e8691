//! Typed client for the Biyuya admin analytics API
//!
//! [`ApiClient`] is the authenticated HTTP gateway; [`AnalyticsClient`] is
//! the typed catalog of analytics queries built on top of it. Construct both
//! once at startup and share them.

pub mod analytics;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod transport;
pub mod types;

pub use analytics::AnalyticsClient;
pub use client::ApiClient;
pub use config::{load_config, ApiConfig};
pub use error::{ClientError, Result};
pub use transport::{HttpTransport, ReqwestTransport};
