//! Delivery channels (implementation side of the bridge)
//!
//! ## 概要
//!
//! 各チャネルは `NotificationType` trait を実装し、チャネル固有の接頭辞と
//! メッセージを 1 行として自身の `LineSink` に出力する。
//!
//! - `Email`, `Sms`, `Push`: 具体的な実装（既定の出力先は stdout）
//! - `UnimplementedNotificationType`: 抽象操作のプレースホルダ（常に `NotImplemented`）

use std::sync::Arc;

use patterns_shared::{LineSink, PatternError, StdoutSink};

/// Delivery channel a [`Notification`](crate::Notification) forwards to.
///
/// The provided `send` is the abstract placeholder: a channel that does not
/// override it fails with [`PatternError::NotImplemented`].
#[cfg_attr(test, mockall::automock)]
pub trait NotificationType: Send + Sync {
    /// Deliver `message`, emitting exactly one line
    fn send(&self, _message: &str) -> Result<(), PatternError> {
        Err(PatternError::NotImplemented("NotificationType::send"))
    }
}

/// Channel that relies on the abstract placeholder
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedNotificationType;

impl NotificationType for UnimplementedNotificationType {}

/// E-mail channel
#[derive(Clone)]
pub struct Email {
    sink: Arc<dyn LineSink>,
}

impl Email {
    pub fn new() -> Self {
        Self::with_sink(Arc::new(StdoutSink))
    }

    pub fn with_sink(sink: Arc<dyn LineSink>) -> Self {
        Self { sink }
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationType for Email {
    fn send(&self, message: &str) -> Result<(), PatternError> {
        self.sink.emit_line(&format!("Sending Email: {message}"));
        Ok(())
    }
}

/// SMS channel
#[derive(Clone)]
pub struct Sms {
    sink: Arc<dyn LineSink>,
}

impl Sms {
    pub fn new() -> Self {
        Self::with_sink(Arc::new(StdoutSink))
    }

    pub fn with_sink(sink: Arc<dyn LineSink>) -> Self {
        Self { sink }
    }
}

impl Default for Sms {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationType for Sms {
    fn send(&self, message: &str) -> Result<(), PatternError> {
        self.sink.emit_line(&format!("Sending SMS: {message}"));
        Ok(())
    }
}

/// Push channel
#[derive(Clone)]
pub struct Push {
    sink: Arc<dyn LineSink>,
}

impl Push {
    pub fn new() -> Self {
        Self::with_sink(Arc::new(StdoutSink))
    }

    pub fn with_sink(sink: Arc<dyn LineSink>) -> Self {
        Self { sink }
    }
}

impl Default for Push {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationType for Push {
    fn send(&self, message: &str) -> Result<(), PatternError> {
        self.sink.emit_line(&format!("Sending Push: {message}"));
        Ok(())
    }
}
