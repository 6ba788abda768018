// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wire types exchanged with the issue tracker.
//!
//! Every optional field is serialized as `null` rather than omitted: the
//! tracker treats a missing key as "leave unchanged" and `null` as "clear".

use serde::{Deserialize, Deserializer, Serialize};
use tl_core::TrackerStatus;

/// Payload for creating an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIssue {
    pub component_id: Option<String>,
    pub hotlist_ids: Vec<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub issue_type: Option<String>,
    pub priority: Option<String>,
    pub severity: Option<String>,
    pub status: TrackerStatus,
    pub reporter: Option<String>,
    pub assignee: Option<String>,
    pub verifier: Option<String>,
    pub ccs: Vec<String>,
    pub comment: String,
}

/// Field update sent when a tracked object changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueFields {
    pub status: TrackerStatus,
    pub component_id: Option<String>,
    pub severity: Option<String>,
    pub title: String,
    pub hotlist_ids: Vec<String>,
    pub priority: Option<String>,
    pub assignee: Option<String>,
    pub verifier: Option<String>,
    pub ccs: Vec<String>,
}

/// The state tuple compared and reconciled by status sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueState {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub issue_type: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
}

/// Body of an `update_issue` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IssueUpdate {
    Fields(IssueFields),
    State(IssueState),
}

/// Response of `create_issue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedIssue {
    #[serde(rename = "issueId", deserialize_with = "id_string")]
    pub issue_id: String,
}

/// Query for `search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub issue_ids: Vec<String>,
    pub page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

/// One issue returned by `search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "issueId", deserialize_with = "id_string")]
    pub issue_id: String,
    #[serde(rename = "issueState", default)]
    pub issue_state: IssueState,
}

/// One page of `search` results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub issues: Vec<SearchHit>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Issue ids come back as numbers from some trackers and strings from others.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Num(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s,
        Id::Num(n) => n.to_string(),
    })
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
