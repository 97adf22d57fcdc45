//! Platform API configuration from TOML (`[api]` section)

use serde::{Deserialize, Serialize};

/// Platform API connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL of the platform API (default: "http://localhost:3001").
    pub base_url: String,
    /// Bearer token (prefer `VENUE_PROVISION_API_TOKEN` over the file).
    pub token: Option<String>,
    /// Request timeout in seconds (default: 60).
    pub timeout_seconds: u64,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            token: None,
            timeout_seconds: 60,
        }
    }
}
