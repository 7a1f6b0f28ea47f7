//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod display;
mod endpoint;
mod repl;

pub use display::FileDisplayConfig;
pub use endpoint::{DEFAULT_API_URL, FileEndpointConfig};
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("endpoint.api_url cannot be empty")]
    EmptyApiUrl,

    #[error("endpoint.api_url must start with http:// or https:// (got '{0}')")]
    UnsupportedScheme(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat endpoint settings
    pub endpoint: FileEndpointConfig,
    /// Header and rendering settings
    pub display: FileDisplayConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.endpoint.validate()
    }
}
