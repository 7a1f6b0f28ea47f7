//! Interactive chat module
//!
//! Provides a line-editor based chat interface backed by the chat widget.

mod command;
mod repl;

pub use command::ReplCommand;
pub use repl::ChatRepl;
