use thiserror::Error;

/// Reasons a raw submission is rejected before it reaches the recorder.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmissionError {
    #[error("person name is required")]
    EmptyPerson,

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid date '{0}' (expected YYYY-MM-DD, today or yesterday)")]
    InvalidDate(String),

    #[error("invalid time '{0}' (expected HH:MM)")]
    InvalidTime(String),

    #[error("field given more than once: {0}")]
    DuplicateField(&'static str),

    #[error("unknown key: '{0}'")]
    UnknownKey(String),

    #[error("ambiguous key: '{key}' matches {candidates:?}")]
    AmbiguousKey {
        key: String,
        candidates: Vec<&'static str>,
    },
}
