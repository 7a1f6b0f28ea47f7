//! Presentation-level configuration
//!
//! Configuration for the header, rendering and REPL behavior.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Display configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Header title
    pub title: String,
    /// Header subtitle
    pub subtitle: String,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Digital Twin".to_string(),
            subtitle: "AI-Powered Digital Assistant".to_string(),
            color: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show a spinner while waiting for a reply
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Resolve the history file location, expanding a leading `~/`.
    ///
    /// Falls back to `<data dir>/twin-chat/history.txt`.
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(raw) => match raw.strip_prefix("~/") {
                Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
                None => Some(PathBuf::from(raw)),
            },
            None => dirs::data_dir().map(|p| p.join("twin-chat").join("history.txt")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_history_path_is_used() {
        let config = ReplConfig {
            history_file: Some("/tmp/twin-history.txt".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.history_path(),
            Some(PathBuf::from("/tmp/twin-history.txt"))
        );
    }

    #[test]
    fn test_tilde_is_expanded() {
        let config = ReplConfig {
            history_file: Some("~/twin/history.txt".to_string()),
            ..Default::default()
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.history_path(), Some(home.join("twin/history.txt")));
        }
    }

    #[test]
    fn test_default_history_path_mentions_app() {
        if let Some(path) = ReplConfig::default().history_path() {
            assert!(path.to_string_lossy().contains("twin-chat"));
        }
    }
}
