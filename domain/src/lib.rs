//! Domain layer for twin-chat
//!
//! This crate contains the conversation entities and value objects.
//! It has no dependencies on transport, configuration, or presentation.
//!
//! # Core Concepts
//!
//! - **Transcript**: the append-only list of [`Message`]s shown to the user
//! - **Session**: the server-assigned [`SessionId`], adopted once and reused
//! - **Exchange**: one submission and its request/response cycle, guarded by
//!   [`ExchangeState`]

pub mod conversation;
pub mod core;
pub mod exchange;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use conversation::{
    entities::{Message, MessageId, MessageIdGenerator, Role},
    transcript::Transcript,
};
pub use self::core::error::DomainError;
pub use exchange::{ExchangeState, FALLBACK_REPLY};
pub use session::SessionId;
