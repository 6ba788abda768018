// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client for the external issue tracker.
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────┐     ┌─────────────┐
//! │  Hook / Sync │────►│   TrackerClient   │────►│   Tracker   │
//! │              │◄────│      (trait)      │◄────│     API     │
//! └──────────────┘     └───────────────────┘     └─────────────┘
//! ```
//!
//! [`HttpTrackerClient`] talks JSON over HTTP. Tests substitute their own
//! [`TrackerClient`] that records calls.

mod http;
mod types;

pub use http::HttpTrackerClient;
pub use types::{
    CreatedIssue, IssueFields, IssueState, IssueUpdate, NewIssue, SearchHit, SearchPage,
    SearchQuery,
};

/// Error type for tracker client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Request could not be sent or the response could not be read.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Tracker answered with a non-success status.
    #[error("tracker returned {code}: {body}")]
    Status { code: u16, body: String },

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Result type for tracker client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Operations the integration needs from an issue tracker.
pub trait TrackerClient {
    /// Create an issue and return its tracker id.
    fn create_issue(&self, issue: &NewIssue) -> ClientResult<CreatedIssue>;

    /// Update an existing issue.
    fn update_issue(&self, issue_id: &str, update: &IssueUpdate) -> ClientResult<()>;

    /// Fetch one page of issue states.
    fn search(&self, query: &SearchQuery) -> ClientResult<SearchPage>;
}

#[cfg(test)]
pub(crate) mod test_helpers;
