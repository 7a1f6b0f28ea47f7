//! Configuration file loading for twin-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `TWIN_API_URL`, then `NEXT_PUBLIC_API_URL`
//! 2. `--config <path>` specified file
//! 3. Project root: `./twin.toml` or `./.twin.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/twin-chat/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDisplayConfig, FileEndpointConfig, FileReplConfig,
};
pub use loader::{ConfigError, ConfigLoader};
