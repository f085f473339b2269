pub mod classifier;
pub mod context;
pub mod error;
pub mod input;
pub mod parser;
pub mod record;
pub mod render;
pub mod report;
pub mod severity;
pub mod timestamp;

pub use classifier::{classify_line, LineFields, LineShape};
pub use context::{find_first_error_context, ErrorContext, DEFAULT_CONTEXT_WINDOW};
pub use error::TriageError;
pub use parser::{parse_logs, LogParser};
pub use record::LogRecord;
pub use severity::{normalize_severity, Severity};
pub use timestamp::normalize_timestamp;
