// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker payload building for assessments.

use tl_core::{Assessment, AssessmentStatus, IssueTrackerInfo, IssueTrackerIssue, TrackerStatus};
use url::Url;

use crate::client::{IssueFields, IssueState, IssueUpdate, NewIssue};
use crate::error::{Error, Result};

use super::people::PeopleFields;

/// Comment attached to every issue created for an assessment.
pub fn initial_comment(assessment_url: &str) -> String {
    format!(
        "This bug was auto-generated to track an assessment. \
         Use the following link to find the assessment - {assessment_url}."
    )
}

/// Browser URL of an assessment under the application root.
pub fn assessment_url(app_url: &Url, assessment_id: i64) -> Result<String> {
    app_url
        .join(&format!("assessments/{assessment_id}"))
        .map(String::from)
        .map_err(|e| Error::Config(format!("cannot build assessment url: {}", e)))
}

fn hotlist_ids(info: &IssueTrackerInfo) -> Vec<String> {
    info.hotlist_id.iter().cloned().collect()
}

/// Payload for creating the tracker issue of an assessment.
pub fn build_new_issue(
    asmt: &Assessment,
    info: &IssueTrackerInfo,
    people: &PeopleFields,
    comment: String,
) -> NewIssue {
    NewIssue {
        component_id: info.component_id.clone(),
        hotlist_ids: hotlist_ids(info),
        title: asmt.title.clone(),
        issue_type: info.issue_type.clone(),
        priority: info.priority.clone(),
        severity: info.severity.clone(),
        status: asmt.status.into(),
        reporter: people.reporter.clone(),
        assignee: people.assignee.clone(),
        verifier: people.verifier.clone(),
        ccs: people.ccs.clone(),
        comment,
    }
}

/// Field update pushed when a tracked assessment changes.
pub fn build_fields_update(
    status: AssessmentStatus,
    record: &IssueTrackerIssue,
    people: &PeopleFields,
) -> IssueUpdate {
    let info = &record.info;
    IssueUpdate::Fields(IssueFields {
        status: status.into(),
        component_id: info.component_id.clone(),
        severity: info.severity.clone(),
        title: record.title.clone(),
        hotlist_ids: hotlist_ids(info),
        priority: info.priority.clone(),
        assignee: people.assignee.clone(),
        verifier: people.verifier.clone(),
        ccs: people.ccs.clone(),
    })
}

/// The tracker state an assessment should have.
pub fn desired_state(status: AssessmentStatus, info: &IssueTrackerInfo) -> IssueState {
    IssueState {
        status: Some(TrackerStatus::from(status).as_str().to_string()),
        issue_type: info.issue_type.clone(),
        priority: info.priority.clone(),
        severity: info.severity.clone(),
    }
}

/// State update pushed by status sync.
pub fn build_state_update(status: AssessmentStatus, info: &IssueTrackerInfo) -> IssueUpdate {
    IssueUpdate::State(desired_state(status, info))
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
