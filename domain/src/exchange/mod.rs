//! Exchange lifecycle

use serde::{Deserialize, Serialize};

/// Assistant text appended when an exchange fails for any reason.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Whether a request to the chat endpoint is outstanding.
///
/// `Idle` is both the initial state and the state every exchange returns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExchangeState {
    #[default]
    Idle,
    AwaitingResponse,
}
