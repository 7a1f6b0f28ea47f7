//! Infrastructure layer for twin-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigValidationError, FileConfig, FileDisplayConfig,
    FileEndpointConfig, FileReplConfig,
};
pub use http::HttpChatEndpoint;
pub use logging::JsonlConversationLogger;
