//! Bridge pattern exercise.
//!
//! Notification kinds (the abstraction side) are decoupled from delivery
//! channels (the implementation side). New channels need no change to the
//! notification kinds, and new kinds need no change to the channels.

pub mod channel;
pub mod legacy;
pub mod notification;

pub use channel::{Email, NotificationType, Push, Sms, UnimplementedNotificationType};
pub use legacy::LegacyNotification;
pub use notification::{
    ALERT_TAG, AlertNotification, Notification, Notifier, REPORT_TAG, ReportNotification,
};
