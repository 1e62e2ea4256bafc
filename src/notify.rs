//! Notification Capability
//!
//! Fire-and-forget transient messages triggered by store mutations.
//! The display surface (toasts) lives outside this crate; only the most
//! recent message is expected to be visible, nothing is queued.

use std::sync::Arc;

/// How the message should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Sink for transient user-facing messages
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, severity: Severity, message: &str) {
        (**self).notify(severity, message)
    }
}

/// Routes notifications to the log facade. Reasonable default when no
/// display surface is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => log::info!("{}", message),
            Severity::Error => log::error!("{}", message),
        }
    }
}
