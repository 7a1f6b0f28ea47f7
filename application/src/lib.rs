//! Application layer for twin-chat
//!
//! This crate contains the chat widget use case and the port definitions
//! it talks through. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    chat_endpoint::{ChatEndpoint, ChatRequest, ChatResponse, EndpointError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{ExchangeProgress, NoProgress},
};
pub use use_cases::chat_widget::{ChatWidget, IgnoreReason, SubmitOutcome};
