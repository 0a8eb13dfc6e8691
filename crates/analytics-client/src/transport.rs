//! HTTP transport abstraction for testability

use async_trait::async_trait;

/// HTTP method used by a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// A fully-built HTTP request, ready to send
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    /// Canonical reason phrase, e.g. "Internal Server Error"
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over the HTTP layer for dependency injection
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HttpTransport: Send + Sync {
    /// Send the request and return the raw response
    async fn send(&self, request: HttpRequest) -> crate::Result<HttpResponse>;
}

/// Production transport using reqwest
#[derive(Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> crate::Result<HttpResponse> {
        tracing::debug!("{} {}", request.method, request.url);

        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            crate::ClientError::Transport(format!(
                "{} {} failed: {}",
                request.method, request.url, e
            ))
        })?;

        let status = response.status().as_u16();
        let status_text = response
            .status()
            .canonical_reason()
            .unwrap_or("")
            .to_string();
        let body = response
            .text()
            .await
            .map_err(|e| crate::ClientError::Transport(format!("Reading response body: {}", e)))?;

        tracing::debug!(
            "{} {} -> {} ({} bytes)",
            request.method,
            request.url,
            status,
            body.len()
        );
        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}
