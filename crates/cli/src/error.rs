// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::client::ClientError;

/// All possible errors that can occur in the tracklink library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'tl init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error(transparent)]
    Core(#[from] tl_core::Error),

    #[error("issue tracker error: {0}")]
    Client(#[from] ClientError),

    #[error("cannot delete {object}: it still has {count} assessment(s)")]
    HasChildren { object: String, count: usize },

    #[error("issue tracker is not configured\n  hint: set [issue_tracker] enabled and endpoint in .tracklink/config.toml")]
    TrackerNotConfigured,

    #[error("invalid role assignment '{0}'\n  hint: use 'Role Name=email1,email2'")]
    InvalidRoleAssignment(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("{0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        Error::Core(tl_core::Error::Database(e))
    }
}

/// A specialized Result type for tracklink operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
