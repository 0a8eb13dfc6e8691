//! Configuration for the analytics client

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Connection settings for the analytics API
///
/// Injected into [`crate::ApiClient`] at construction; the client never
/// reads the environment on its own. Fields left empty (by `Default` or by
/// an omitted config-file key) are unset until [`ApiConfig::resolve_env`]
/// fills them, so an explicit value always wins over the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the endpoint paths are appended to; empty until resolved
    #[serde(default)]
    pub base_url: String,
    /// Basic-auth username; empty string when unset
    #[serde(default)]
    pub username: String,
    /// Basic-auth password; empty string when unset
    #[serde(default)]
    pub password: String,
}

impl ApiConfig {
    /// Fill empty fields from the environment
    ///
    /// Reads `ADMIN_API_URL`, `ADMIN_API_USERNAME` and `ADMIN_API_PASSWORD`.
    /// An unset `ADMIN_API_URL` leaves the localhost default; unset
    /// credentials stay empty strings and still produce a Basic-auth header.
    /// Fields already set keep their value.
    pub fn resolve_env(&mut self) {
        if self.base_url.is_empty() {
            self.base_url = std::env::var("ADMIN_API_URL").unwrap_or_else(|_| default_base_url());
        }
        if self.username.is_empty() {
            if let Ok(username) = std::env::var("ADMIN_API_USERNAME") {
                self.username = username;
            }
        }
        if self.password.is_empty() {
            if let Ok(password) = std::env::var("ADMIN_API_PASSWORD") {
                self.password = password;
            }
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<ApiConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::ClientError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: ApiConfig = serde_json::from_str(&content)?;
    Ok(config)
}
