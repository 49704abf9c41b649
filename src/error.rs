use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("fragment error: {0}")]
    Fragment(#[from] FragmentError),
}

/// Failures that abort a fragment parse. Only surfaced by the strict entry
/// points; `parse` turns them into an empty record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    #[error("malformed percent escape at byte {offset}")]
    MalformedEscape { offset: usize },
    #[error("percent-decoded value is not valid utf-8")]
    InvalidUtf8,
}
