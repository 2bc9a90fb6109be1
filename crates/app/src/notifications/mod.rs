//! Notifications
//!
//! Transient, user-facing messages. Delivery is fire-and-forget: a notifier
//! has no way to report failure back to the cart.

mod logging;

use mockall::automock;

pub use logging::TracingNotifier;

/// How prominently a message should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[automock]
pub trait Notifier: Send + Sync {
    /// Show `message` to the user.
    fn notify(&self, severity: Severity, message: &str);
}
