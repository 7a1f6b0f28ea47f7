//! Presentation layer for twin-chat
//!
//! This crate contains CLI definitions, the transcript formatter,
//! the loading indicator, and the interactive chat REPL.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand};
pub use cli::commands::{Cli, OutputFormat};
pub use config::{DisplayConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::SpinnerProgress;
