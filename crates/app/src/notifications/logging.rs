//! Notifier that writes messages to the log.

use tracing::{error, info, warn};

use super::{Notifier, Severity};

/// Emits notifications as log events under the `rocketshoes::toast` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => info!(target: "rocketshoes::toast", "{message}"),
            Severity::Warning => warn!(target: "rocketshoes::toast", "{message}"),
            Severity::Error => error!(target: "rocketshoes::toast", "{message}"),
        }
    }
}
