use crate::context::find_first_error_context;
use crate::error::TriageError;
use crate::parser::parse_logs;
use crate::record::LogRecord;
use crate::severity::{normalize_severity, Severity};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Record count plus one counter per severity seen.
///
/// Serializes flat, e.g. `{"total": 3, "ERROR": 1, "INFO": 2}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    #[serde(flatten)]
    pub by_severity: BTreeMap<String, usize>,
}

impl Summary {
    pub fn count(&self, severity: &str) -> usize {
        self.by_severity.get(severity).copied().unwrap_or(0)
    }
}

pub fn build_summary(logs: &[LogRecord]) -> Summary {
    let by_severity = logs
        .iter()
        .map(|r| r.severity.as_str().to_string())
        .counts()
        .into_iter()
        .collect();
    Summary { total: logs.len(), by_severity }
}

/// Severity and free-text selection over records.
///
/// An empty level set admits every severity. The search is a
/// case-insensitive substring match over timestamp, severity, thread,
/// component and message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    levels: Vec<Severity>,
    needle: Option<String>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit records of these severities; codes are normalized (`e` is ERROR).
    pub fn with_levels<I, S>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.levels.extend(
            levels
                .into_iter()
                .map(|l| l.as_ref().trim().to_string())
                .filter(|l| !l.is_empty())
                .map(|l| normalize_severity(&l)),
        );
        self
    }

    pub fn with_search(mut self, text: &str) -> Self {
        self.needle = Some(text.to_lowercase()).filter(|t| !t.is_empty());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty() && self.needle.is_none()
    }

    pub fn matches(&self, record: &LogRecord) -> bool {
        if !self.levels.is_empty() && !self.levels.contains(&record.severity) {
            return false;
        }
        match &self.needle {
            None => true,
            Some(needle) => format!(
                "{} {} {} {} {}",
                record.timestamp, record.severity, record.thread, record.component, record.message
            )
            .to_lowercase()
            .contains(needle.as_str()),
        }
    }

    pub fn apply<'a>(&self, logs: &'a [LogRecord]) -> Vec<&'a LogRecord> {
        logs.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Everything the log viewer needs for one uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub logs: Vec<LogRecord>,
    pub summary: Summary,
    pub first_error: Option<LogRecord>,
    pub pre_error_context: Vec<LogRecord>,
}

impl AnalysisReport {
    pub fn from_records(logs: Vec<LogRecord>, context_window: usize) -> Self {
        let summary = build_summary(&logs);
        let found = find_first_error_context(&logs, context_window);
        let first_error = found.first_error.cloned();
        let pre_error_context = found.context.to_vec();
        AnalysisReport { logs, summary, first_error, pre_error_context }
    }

    pub fn to_json_pretty(&self) -> Result<String, TriageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Parse `contents` and assemble the full report.
pub fn analyze(contents: &str, context_window: usize) -> AnalysisReport {
    let report = AnalysisReport::from_records(parse_logs(contents), context_window);
    tracing::debug!(
        total = report.summary.total,
        has_error = report.first_error.is_some(),
        context = report.pre_error_context.len(),
        "analysis complete"
    );
    report
}
