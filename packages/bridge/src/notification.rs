//! Notification kinds (abstraction side of the bridge)
//!
//! `Notification` holds exactly one channel and forwards messages to it.
//! `AlertNotification` and `ReportNotification` wrap a `Notification` and
//! prepend their tag before delegating.

use patterns_shared::PatternError;

use crate::channel::NotificationType;

/// Tag prepended by [`AlertNotification`]
pub const ALERT_TAG: &str = "ALERT: ";

/// Tag prepended by [`ReportNotification`]
pub const REPORT_TAG: &str = "REPORT: ";

/// Caller-facing notification operation
pub trait Notifier {
    /// Send `message` through the underlying channel
    fn send(&self, message: &str) -> Result<(), PatternError>;
}

/// Base notification: forwards messages unchanged to its channel
pub struct Notification {
    /// Channel（実装側の抽象化）
    channel: Box<dyn NotificationType>,
}

impl Notification {
    pub fn new(channel: Box<dyn NotificationType>) -> Self {
        Self { channel }
    }
}

impl Notifier for Notification {
    fn send(&self, message: &str) -> Result<(), PatternError> {
        tracing::debug!("Forwarding notification ({} bytes)", message.len());
        self.channel.send(message)
    }
}

/// Notification that prefixes every message with [`ALERT_TAG`]
pub struct AlertNotification {
    inner: Notification,
}

impl AlertNotification {
    pub fn new(inner: Notification) -> Self {
        Self { inner }
    }
}

impl Notifier for AlertNotification {
    fn send(&self, message: &str) -> Result<(), PatternError> {
        self.inner.send(&tagged(ALERT_TAG, message))
    }
}

/// Notification that prefixes every message with [`REPORT_TAG`]
pub struct ReportNotification {
    inner: Notification,
}

impl ReportNotification {
    pub fn new(inner: Notification) -> Self {
        Self { inner }
    }
}

impl Notifier for ReportNotification {
    fn send(&self, message: &str) -> Result<(), PatternError> {
        self.inner.send(&tagged(REPORT_TAG, message))
    }
}

fn tagged(tag: &str, message: &str) -> String {
    format!("{tag}{message}")
}
