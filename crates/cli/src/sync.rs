// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Batch reconciliation of tracker issue states.
//!
//! Linked assessments are looked up in the tracker in chunks. Any issue whose
//! status, type, priority or severity has drifted from the local value is
//! pushed back to the local value.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tl_core::{Database, ObjectType};

use crate::client::{IssueState, IssueUpdate, SearchQuery, TrackerClient};
use crate::error::Result;
use crate::integration::payload::desired_state;

/// Default number of issue ids per search request.
pub const DEFAULT_BATCH_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    pub batch_size: usize,
}

impl Default for SyncOptions {
    fn default() -> Self {
        SyncOptions {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Outcome of a sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Issues returned by the tracker and compared.
    pub checked: usize,
    /// Issues that drifted and were updated.
    pub updated: usize,
    /// Failed searches and failed updates.
    pub failed: usize,
}

/// Collect the desired state of every enabled, linked assessment by issue id.
fn desired_states(db: &Database) -> Result<Vec<(String, IssueState)>> {
    let mut desired = Vec::new();
    for record in db.enabled_issue_tracker_issues(ObjectType::Assessment)? {
        let Some(issue_id) = record.issue_id.clone() else {
            continue;
        };
        let asmt = match db.get_assessment(record.object.id) {
            Ok(asmt) => asmt,
            Err(tl_core::Error::NotFound { .. }) => {
                tracing::warn!(
                    %issue_id,
                    object = %record.object,
                    "skipping record of missing assessment"
                );
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        desired.push((issue_id, desired_state(asmt.status, &record.info)));
    }
    Ok(desired)
}

/// Bring tracker issue states back in line with the local assessments.
pub fn sync_issue_tracker_statuses(
    db: &Database,
    client: &dyn TrackerClient,
    options: &SyncOptions,
) -> Result<SyncReport> {
    let desired = desired_states(db)?;
    let mut report = SyncReport::default();
    if desired.is_empty() {
        tracing::debug!("no linked assessments to sync");
        return Ok(report);
    }

    let batch_size = options.batch_size.max(1);
    for chunk in desired.chunks(batch_size) {
        let wanted: HashMap<&str, &IssueState> =
            chunk.iter().map(|(id, state)| (id.as_str(), state)).collect();
        let ids: Vec<String> = chunk.iter().map(|(id, _)| id.clone()).collect();
        sync_chunk(client, ids, &wanted, batch_size, &mut report);
    }

    tracing::info!(
        checked = report.checked,
        updated = report.updated,
        failed = report.failed,
        "issue tracker status sync finished"
    );
    Ok(report)
}

fn sync_chunk(
    client: &dyn TrackerClient,
    issue_ids: Vec<String>,
    wanted: &HashMap<&str, &IssueState>,
    page_size: usize,
    report: &mut SyncReport,
) {
    let mut query = SearchQuery {
        issue_ids,
        page_size,
        page_token: None,
    };
    let mut seen_tokens = HashSet::new();

    loop {
        let page = match client.search(&query) {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(error = %e, "issue search failed, skipping batch");
                report.failed += 1;
                return;
            }
        };

        for hit in &page.issues {
            let Some(desired) = wanted.get(hit.issue_id.as_str()) else {
                continue;
            };
            report.checked += 1;
            if hit.issue_state == **desired {
                continue;
            }
            let update = IssueUpdate::State((*desired).clone());
            match client.update_issue(&hit.issue_id, &update) {
                Ok(()) => {
                    tracing::debug!(issue_id = %hit.issue_id, "updated drifted issue state");
                    report.updated += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        issue_id = %hit.issue_id,
                        error = %e,
                        "unable to update issue state"
                    );
                    report.failed += 1;
                }
            }
        }

        match page.next_page_token {
            Some(token) if !seen_tokens.insert(token.clone()) => {
                tracing::warn!(%token, "tracker repeated page token, stopping batch");
                return;
            }
            Some(token) => query.page_token = Some(token),
            None => return,
        }
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
