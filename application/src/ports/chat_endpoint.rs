//! Chat endpoint port
//!
//! Defines the request/response contract with the remote `/chat` service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use twin_domain::SessionId;

/// Errors that can occur while talking to the chat endpoint
///
/// The widget treats every variant the same way ("exchange failed"); the
/// distinction only exists for diagnostics.
#[derive(Error, Debug)]
pub enum EndpointError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Endpoint returned HTTP {code}")]
    Status { code: u16 },

    #[error("Could not decode response: {0}")]
    Decode(String),
}

/// Body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, session_id: Option<SessionId>) -> Self {
        Self {
            message: message.into(),
            session_id,
        }
    }
}

/// Successful body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub response: String,
}

/// Gateway to the remote chat service
///
/// Adapters live in the infrastructure layer.
#[async_trait]
pub trait ChatEndpoint: Send + Sync {
    /// Send one user turn and wait for the reply
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, EndpointError>;
}
