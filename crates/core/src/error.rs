// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tl-core operations.

use thiserror::Error;

/// All possible errors that can occur in tl-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("person not found: {0}")]
    PersonNotFound(String),

    #[error("role not found: '{name}' on {object_type}")]
    RoleNotFound { name: String, object_type: String },

    #[error("role '{role}' belongs to {expected}, not {actual}")]
    RoleMismatch {
        role: String,
        expected: String,
        actual: String,
    },

    #[error("invalid object type: '{0}'\n  hint: valid types are: audit, assessment")]
    InvalidObjectType(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: Not Started, In Progress, In Review, Completed, Rework Needed, Deprecated")]
    InvalidStatus(String),

    #[error("a person with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

impl Error {
    pub(crate) fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Error::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

/// A specialized Result type for tl-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
