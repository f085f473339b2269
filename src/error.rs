use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input exceeds the {limit}-byte limit")]
    InputTooLarge { limit: u64 },
    #[error("json encode error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown section '{0}' (expected logs, summary or error)")]
    UnknownSection(String),
    #[error("unknown format '{0}' (expected json or table)")]
    UnknownFormat(String),
}
