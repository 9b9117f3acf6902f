//! Error types for farmledger operations.
//!
//! Every fallible store or service operation returns [`FarmResult`]. The two
//! caller-visible failure modes are `NotFound` (an identifier did not resolve
//! to a row) and `Validation` (missing or malformed input, with the offending
//! field named in the message). Database failures are wrapped rather than
//! surfaced as panics.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FarmError {
    /// Referenced identifier does not resolve to a row
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// Missing required input or input that failed to parse
    #[error("{0}")]
    Validation(String),

    /// Database operation failed
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl FarmError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        FarmError::NotFound { entity, id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        FarmError::Validation(message.into())
    }

    /// Validation error naming the field that caused the failure
    pub fn invalid_field(field: &str, reason: &str) -> Self {
        FarmError::Validation(format!("{}: {}", field, reason))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FarmError::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, FarmError::Validation(_))
    }
}

pub type FarmResult<T> = Result<T, FarmError>;
