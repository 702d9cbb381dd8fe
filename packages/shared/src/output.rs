//! Line-oriented output with a sink abstraction for testability.

use std::sync::{Mutex, PoisonError};

/// Destination for the one-line messages the exercises emit
pub trait LineSink: Send + Sync {
    /// Emit a single line (without trailing newline)
    fn emit_line(&self, line: &str);
}

/// Standard output sink (prints each line)
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn emit_line(&self, line: &str) {
        println!("{line}");
    }
}

/// In-memory sink for testing (records every emitted line)
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines emitted so far
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LineSink for MemorySink {
    fn emit_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}
