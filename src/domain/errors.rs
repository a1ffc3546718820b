//! Domain error types
//!
//! These errors are framework-agnostic. The call-number engine itself never
//! fails; these cover the layers around it (table loading, request limits).

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Validation error with message
    Validation(String),
    /// File system error (classification table loading)
    Io(String),
    /// Generic internal error
    Internal(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::Io(msg) => write!(f, "I/O error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Validation(format!("Invalid JSON: {}", e))
    }
}
