//! Loading indicators shown while an exchange is in flight

pub mod reporter;
