//! Output channel port.
//!
//! The extension's log pane. It is passed into every component that writes
//! to it instead of living in a global, so each component can be tested on
//! its own.

use std::sync::Mutex;

/// Port for appending lines to the extension's output channel.
///
/// Implementations should be thread-safe and non-blocking where possible.
pub trait OutputChannelPort: Send + Sync {
    /// Append one line (without trailing newline).
    fn append_line(&self, line: &str);
}

/// Output channel that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOutputChannel;

impl OutputChannelPort for NoopOutputChannel {
    fn append_line(&self, _line: &str) {
        // Intentionally do nothing
    }
}

/// Output channel that keeps lines in memory.
///
/// Useful in tests and for adapters that render the log later.
#[derive(Debug, Default)]
pub struct MemoryOutputChannel {
    lines: Mutex<Vec<String>>,
}

impl MemoryOutputChannel {
    /// Create an empty channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines appended so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Whether any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

impl OutputChannelPort for MemoryOutputChannel {
    fn append_line(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}
