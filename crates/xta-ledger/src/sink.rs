//! Destinations for trace and report lines.

use std::sync::{Mutex, PoisonError};

/// Consumes one line of report text at a time.
///
/// Blank lines arrive as empty strings.
pub trait LogSink: Send + Sync {
    fn accept(&self, line: &str);
}

impl<F> LogSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn accept(&self, line: &str) {
        self(line)
    }
}

/// Prints every line to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn accept(&self, line: &str) {
        println!("{line}");
    }
}

/// Forwards every line as a `tracing` event at INFO level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn accept(&self, line: &str) {
        tracing::info!(target: "xta::report", "{line}");
    }
}

/// Keeps lines in memory for later inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line received so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Lines with surrounding whitespace removed.
    pub fn trimmed_lines(&self) -> Vec<String> {
        self.lines().iter().map(|l| l.trim().to_string()).collect()
    }

    /// Returns `true` if some line equals `text` once trimmed.
    pub fn has_line(&self, text: &str) -> bool {
        self.lines().iter().any(|l| l.trim() == text)
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for MemorySink {
    fn accept(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}
