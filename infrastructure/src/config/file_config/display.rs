//! Display configuration from TOML (`[display]` section)

use serde::{Deserialize, Serialize};

/// Raw display configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDisplayConfig {
    /// Header title
    pub title: String,
    /// Header subtitle
    pub subtitle: String,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileDisplayConfig {
    fn default() -> Self {
        Self {
            title: "Digital Twin".to_string(),
            subtitle: "AI-Powered Digital Assistant".to_string(),
            color: true,
        }
    }
}
