// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Document parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Session cache corrupted: {0}")]
    CacheCorruption(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SearchError {
    /// Transport failures and non-2xx responses both count as network errors.
    pub fn is_network(&self) -> bool {
        matches!(self, SearchError::Network(_) | SearchError::Status { .. })
    }
}

/// Failures while turning a tagged document body into an [`Article`](crate::models::Article).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("required field <{0}> is missing")]
    MissingField(&'static str),

    #[error("field <{0}> must occur exactly once")]
    DuplicateField(&'static str),

    #[error("malformed markup: {0}")]
    Malformed(String),
}

impl ParseError {
    /// Tag name of the offending field, if the error concerns one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ParseError::MissingField(field) | ParseError::DuplicateField(field) => Some(field),
            ParseError::Malformed(_) => None,
        }
    }
}
