//! Authenticated HTTP gateway for the admin API
//!
//! Every call the facade makes funnels through [`ApiClient::request`]: one
//! attempt per request, Basic auth attached, JSON decoded. No retries, no
//! timeouts, no recovery; failures propagate to the caller.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method};
use crate::ClientError;

/// Shared HTTP client for the admin API
///
/// Stateless apart from immutable configuration; construct once and share
/// via `Arc`.
pub struct ApiClient {
    config: ApiConfig,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig, transport: Arc<dyn HttpTransport>) -> Self {
        tracing::debug!("Created ApiClient for {}", config.base_url);
        Self { config, transport }
    }

    /// Issue a GET request to `base_url + endpoint`
    ///
    /// The endpoint must start with `/` and carry its query string already
    /// encoded.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> crate::Result<T> {
        self.request(Method::Get, endpoint, None).await
    }

    /// Issue a POST request with a JSON-encoded body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: Option<&B>,
    ) -> crate::Result<T> {
        let body = body.map(serde_json::to_string).transpose()?;
        self.request(Method::Post, endpoint, body).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> crate::Result<T> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        let request = HttpRequest {
            method,
            url,
            headers: self.auth_headers(),
            body,
        };

        let response = self.transport.send(request).await?;
        Self::decode(response)
    }

    /// Fixed headers carried on every request
    ///
    /// Empty credentials still produce a Basic token (`Basic Og==`), never
    /// an omitted header.
    fn auth_headers(&self) -> Vec<(String, String)> {
        let token = STANDARD.encode(format!(
            "{}:{}",
            self.config.username, self.config.password
        ));
        vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Authorization".to_string(), format!("Basic {}", token)),
        ]
    }

    fn decode<T: DeserializeOwned>(response: HttpResponse) -> crate::Result<T> {
        if !response.is_success() {
            return Err(ClientError::Api {
                message: format!("API Error: {}", response.status_text),
                status: response.status,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}
