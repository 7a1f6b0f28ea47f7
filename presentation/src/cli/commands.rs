//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable transcript
    Text,
    /// Transcript as a JSON array of messages
    Json,
}

/// CLI arguments for twin
#[derive(Parser, Debug)]
#[command(name = "twin")]
#[command(author, version, about = "Chat with a digital twin over its /chat endpoint")]
#[command(long_about = r#"
twin is a terminal client for a Digital Twin chat service.

Each message is sent as one POST to <api-url>/chat. The first reply assigns a
session id, which is reused for the rest of the conversation.

Configuration is loaded from (in priority order):
1. TWIN_API_URL / NEXT_PUBLIC_API_URL   Environment
2. --config <path>                      Explicit config file
3. ./twin.toml                          Project-level config
4. ~/.config/twin-chat/config.toml      Global config

Example:
  twin "What projects have you worked on?"
  twin --api-url https://twin.example.com
"#)]
pub struct Cli {
    /// Send a single message and exit (starts interactive chat when omitted)
    pub message: Option<String>,

    /// Base URL of the chat service
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Header title shown in interactive mode
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Output format for one-shot mode
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the loading indicator
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append conversation events to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,
}
