use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical severity vocabulary shared by every supported log convention.
///
/// Codes outside the known table are kept, uppercased, in `Other` so that a
/// new severity letter never turns into a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::Other(code) => code,
        }
    }

    /// ERROR and FATAL are the levels that open an error context.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error | Severity::Fatal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<Severity> for String {
    fn from(s: Severity) -> Self {
        match s {
            Severity::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl From<String> for Severity {
    fn from(s: String) -> Self {
        normalize_severity(&s)
    }
}

/// Map a raw severity code (any case) onto the canonical vocabulary.
///
/// Covers the single-letter Liberty codes (`A`, `I`, `W`, `E`, ...) and the
/// spelled-out names used by java.util.logging, log4j and syslog-style
/// sources.
pub fn normalize_severity(code: &str) -> Severity {
    let upper = code.to_uppercase();
    match upper.as_str() {
        "A" | "AUDIT" | "I" | "INFO" | "O" | "NOTICE" => Severity::Info,
        "C" | "CONFIG" | "W" | "WARN" | "WARNING" => Severity::Warn,
        "D" | "DEBUG" => Severity::Debug,
        "R" | "S" | "SEVERE" | "E" | "ERR" | "ERROR" => Severity::Error,
        "F" | "FATAL" => Severity::Fatal,
        "T" | "TRACE" => Severity::Trace,
        _ => Severity::Other(upper),
    }
}
