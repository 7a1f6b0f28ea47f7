//! Endpoint configuration from TOML (`[endpoint]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};

/// Base URL used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Raw endpoint configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Base URL of the chat service; `/chat` is appended
    pub api_url: String,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl FileEndpointConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let url = self.api_url.trim();
        if url.is_empty() {
            return Err(ConfigValidationError::EmptyApiUrl);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigValidationError::UnsupportedScheme(url.to_string()));
        }
        Ok(())
    }
}
