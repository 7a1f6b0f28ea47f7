//! Progress notification port
//!
//! Lets a front end show a loading indicator while an exchange is in flight.

/// Callback for exchange lifecycle updates
///
/// Implementations live in the presentation layer (spinner, plain text, ...).
pub trait ExchangeProgress: Send + Sync {
    /// Called after the user message is recorded, right before the request goes out
    fn on_exchange_start(&self);

    /// Called once the exchange has resolved, successfully or not
    fn on_exchange_end(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ExchangeProgress for NoProgress {
    fn on_exchange_start(&self) {}
    fn on_exchange_end(&self, _success: bool) {}
}
