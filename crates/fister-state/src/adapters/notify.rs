//! Notifier Adapters
//!
//! Implementations of the `Notifier` trait.

use crate::domain::notification::{Notification, Severity};
use crate::ports::outbound::Notifier;

/// Forwards notifications to the log.
///
/// Used when no on-screen surface is attached (headless runs, tooling).
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => {
                tracing::info!(severity = %notification.severity, "{}", notification.message)
            }
            Severity::Error => {
                tracing::warn!(severity = %notification.severity, "{}", notification.message)
            }
        }
    }
}
