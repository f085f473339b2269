use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// Sentinel used when neither a component nor a logger could be captured.
pub const UNKNOWN: &str = "UNKNOWN";

/// One logical log entry, possibly spanning several physical lines.
///
/// Field names are part of the JSON contract consumed by the report viewer:
/// `id, timestamp, thread, component, severity, logger, message, raw_line`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: usize,
    pub timestamp: String,
    pub thread: String,
    pub component: String,
    pub severity: Severity,
    pub logger: String,
    pub message: String,
    pub raw_line: String,
}

impl LogRecord {
    /// Fold a continuation line into this record.
    pub fn absorb_continuation(&mut self, line: &str) {
        self.message.push(' ');
        self.message.push_str(line);
        self.raw_line.push('\n');
        self.raw_line.push_str(line);
    }
}
