use crate::classifier::{classify_line, LineFields};
use crate::record::{LogRecord, UNKNOWN};
use crate::severity::normalize_severity;
use crate::timestamp::normalize_timestamp;

/// Assembles [`LogRecord`]s from physical lines.
///
/// Header lines open a new record; anything else is stitched onto the most
/// recent record as a continuation (stack frames, wrapped messages). Lines
/// that arrive before the first header have nowhere to go and are dropped.
#[derive(Debug, Default)]
pub struct LogParser {
    records: Vec<LogRecord>,
    dropped: usize,
}

impl LogParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        match classify_line(line) {
            Some(fields) => {
                let id = self.records.len() + 1;
                self.records.push(build_record(id, fields, line));
            }
            None => match self.records.last_mut() {
                Some(last) => {
                    tracing::trace!(id = last.id, "continuation line absorbed");
                    last.absorb_continuation(line);
                }
                None => {
                    self.dropped += 1;
                    tracing::trace!(line, "dropping line before first record");
                }
            },
        }
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Lines discarded because no record had started yet.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn into_records(self) -> Vec<LogRecord> {
        self.records
    }
}

fn build_record(id: usize, fields: LineFields, line: &str) -> LogRecord {
    let LineFields { timestamp, thread, component, severity, logger, message, .. } = fields;

    let logger = logger
        .or_else(|| component.clone())
        .unwrap_or_else(|| UNKNOWN.to_string());
    let component = component
        .or_else(|| logger.rsplit('.').next().map(str::to_string))
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());

    LogRecord {
        id,
        timestamp: normalize_timestamp(&timestamp),
        thread,
        component,
        severity: normalize_severity(&severity),
        logger,
        message,
        raw_line: line.to_string(),
    }
}

/// Line boundaries: `\n`, a lone `\r`, and the other Unicode line and
/// record separators. `\r\n` leaves an empty piece that is skipped as blank.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Parse a whole `messages.log` body into ordered records with ids `1..=N`.
pub fn parse_logs(contents: &str) -> Vec<LogRecord> {
    let mut parser = LogParser::new();
    for line in contents.split(is_line_break) {
        parser.push_line(line);
    }
    tracing::debug!(
        records = parser.records().len(),
        dropped = parser.dropped(),
        "parsed log text"
    );
    parser.into_records()
}
