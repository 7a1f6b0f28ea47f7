//! Transcript rendering for the terminal

pub mod console;
