use crate::record::LogRecord;

/// Number of records shown ahead of the first error when none is given.
pub const DEFAULT_CONTEXT_WINDOW: usize = 3;

/// The first ERROR/FATAL record and the records leading up to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorContext<'a> {
    pub first_error: Option<&'a LogRecord>,
    pub context: &'a [LogRecord],
}

impl ErrorContext<'_> {
    pub fn is_empty(&self) -> bool {
        self.first_error.is_none()
    }
}

/// Locate the first ERROR or FATAL record and up to `context_window`
/// records immediately before it, in their original order.
///
/// Later errors are not considered.
pub fn find_first_error_context(logs: &[LogRecord], context_window: usize) -> ErrorContext<'_> {
    match logs.iter().position(|r| r.severity.is_error()) {
        Some(index) => ErrorContext {
            first_error: Some(&logs[index]),
            context: &logs[index.saturating_sub(context_window)..index],
        },
        None => ErrorContext { first_error: None, context: &[] },
    }
}
