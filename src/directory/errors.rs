//! Directory error types
//!
//! Carries the string codes the response envelope exposes. Storage
//! detail stays inside the `Store` variant for logging; its Display is
//! deliberately generic so internals never leak to callers.

use thiserror::Error;
use uuid::Uuid;

use crate::store::StoreError;

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// One rejected field in a write payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Directory operation failures
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// Write payload rejected; nothing was applied
    #[error("Validation failed: {}", join_violations(.0))]
    Validation(Vec<FieldViolation>),

    /// No record with this id
    #[error("No partner with id {0}")]
    NotFound(Uuid),

    /// The storage adapter failed; detail is in the wrapped error
    #[error("Internal storage failure")]
    Store(StoreError),
}

impl DirectoryError {
    /// Stable machine-readable code for the response envelope
    pub fn code(&self) -> &'static str {
        match self {
            DirectoryError::Validation(_) => "VALIDATION_FAILED",
            DirectoryError::NotFound(_) => "PARTNER_NOT_FOUND",
            DirectoryError::Store(_) => "INTERNAL_ERROR",
        }
    }

    /// The per-field detail of a validation failure, if any
    pub fn violations(&self) -> Option<&[FieldViolation]> {
        match self {
            DirectoryError::Validation(violations) => Some(violations),
            _ => None,
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
