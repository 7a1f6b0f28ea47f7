//! HTTP adapter for the chat endpoint.
//!
//! Provides [`HttpChatEndpoint`], a reqwest client that implements the
//! [`ChatEndpoint`](twin_application::ChatEndpoint) port.

mod endpoint;

pub use endpoint::HttpChatEndpoint;
