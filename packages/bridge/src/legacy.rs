//! Tag-branching notifier kept for comparison with the bridge version.
//!
//! Every new channel means another arm in `send`, which is exactly what the
//! bridge in [`crate::notification`] avoids.

use std::sync::Arc;

use patterns_shared::{LineSink, PatternError, StdoutSink};

use crate::notification::Notifier;

/// Notifier that picks the channel by inspecting a type tag
pub struct LegacyNotification {
    tag: String,
    sink: Arc<dyn LineSink>,
}

impl LegacyNotification {
    /// Create a legacy notifier writing to stdout
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_sink(tag, Arc::new(StdoutSink))
    }

    pub fn with_sink(tag: impl Into<String>, sink: Arc<dyn LineSink>) -> Self {
        Self {
            tag: tag.into(),
            sink,
        }
    }
}

impl Notifier for LegacyNotification {
    fn send(&self, message: &str) -> Result<(), PatternError> {
        let line = match self.tag.as_str() {
            "email" => format!("Sending Email: {message}"),
            "sms" => format!("Sending SMS: {message}"),
            "push" => format!("Sending Push: {message}"),
            other => {
                return Err(PatternError::invalid(format!(
                    "Unknown notification type '{other}'"
                )));
            }
        };
        self.sink.emit_line(&line);
        Ok(())
    }
}
