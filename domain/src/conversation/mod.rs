//! Conversation domain.
//!
//! - [`entities::Message`] — a single turn shown in the transcript
//! - [`entities::MessageIdGenerator`] — local, strictly increasing ids
//! - [`transcript::Transcript`] — the append-only message list

pub mod entities;
pub mod transcript;
