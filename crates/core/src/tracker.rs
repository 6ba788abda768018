// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue tracker settings and the records linking objects to external issues.
//!
//! Audits and assessments both carry an [`IssueTrackerInfo`] bag. For an
//! assessment the bag lives on its [`IssueTrackerIssue`] record, together with
//! the external issue id once one has been created.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::object::{AssessmentStatus, ObjectRef};

/// The issue tracker attribute bag carried by audits and assessments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTrackerInfo {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotlist_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

impl IssueTrackerInfo {
    /// Apply a patch, overwriting only the keys the patch carries.
    pub fn merge(&mut self, patch: &IssueTrackerPatch) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        merge_field(&mut self.component_id, &patch.component_id);
        merge_field(&mut self.hotlist_id, &patch.hotlist_id);
        merge_field(&mut self.issue_type, &patch.issue_type);
        merge_field(&mut self.priority, &patch.priority);
        merge_field(&mut self.severity, &patch.severity);
    }

    /// Replace the whole bag with the patch; keys it lacks become empty.
    pub fn replace(&mut self, patch: &IssueTrackerPatch) {
        *self = IssueTrackerInfo::from(patch.clone());
    }

    /// Fill keys that are still empty from `defaults`.
    ///
    /// `enabled` is never inherited.
    pub fn fill_from(&mut self, defaults: &IssueTrackerInfo) {
        fill_field(&mut self.component_id, &defaults.component_id);
        fill_field(&mut self.hotlist_id, &defaults.hotlist_id);
        fill_field(&mut self.issue_type, &defaults.issue_type);
        fill_field(&mut self.priority, &defaults.priority);
        fill_field(&mut self.severity, &defaults.severity);
    }
}

fn merge_field(target: &mut Option<String>, value: &Option<String>) {
    if let Some(v) = value {
        *target = Some(v.clone());
    }
}

fn fill_field(target: &mut Option<String>, fallback: &Option<String>) {
    if target.is_none() {
        target.clone_from(fallback);
    }
}

/// A partial issue tracker bag as sent by a mutation request.
///
/// Accepts the `issue_type`/`issue_priority`/`issue_severity` spelling as well
/// as the short field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTrackerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotlist_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "type")]
    pub issue_type: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "issue_priority"
    )]
    pub priority: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "issue_severity"
    )]
    pub severity: Option<String>,
}

impl IssueTrackerPatch {
    /// Shorthand for a patch that only flips the enabled flag.
    pub fn enabled(enabled: bool) -> Self {
        IssueTrackerPatch {
            enabled: Some(enabled),
            ..Default::default()
        }
    }

    /// True when the patch explicitly enables the integration.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }
}

impl From<IssueTrackerPatch> for IssueTrackerInfo {
    fn from(patch: IssueTrackerPatch) -> Self {
        IssueTrackerInfo {
            enabled: patch.enabled.unwrap_or(false),
            component_id: patch.component_id,
            hotlist_id: patch.hotlist_id,
            issue_type: patch.issue_type,
            priority: patch.priority,
            severity: patch.severity,
        }
    }
}

/// Local record linking a trackable object to an external issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueTrackerIssue {
    pub id: i64,
    pub object: ObjectRef,
    /// Title last pushed to the tracker.
    pub title: String,
    /// External issue id, absent until the issue has been created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_url: Option<String>,
    pub info: IssueTrackerInfo,
}

impl IssueTrackerIssue {
    /// A record that has not been persisted yet (`id == 0`).
    pub fn new(object: ObjectRef, title: String, info: IssueTrackerInfo) -> Self {
        IssueTrackerIssue {
            id: 0,
            object,
            title,
            issue_id: None,
            issue_url: None,
            info,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.info.enabled
    }

    /// True once an external issue exists for this record.
    pub fn has_external_issue(&self) -> bool {
        self.issue_id.is_some()
    }
}

/// Status of an issue in the external tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackerStatus {
    Assigned,
    Fixed,
    Verified,
    Obsolete,
}

impl TrackerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackerStatus::Assigned => "ASSIGNED",
            TrackerStatus::Fixed => "FIXED",
            TrackerStatus::Verified => "VERIFIED",
            TrackerStatus::Obsolete => "OBSOLETE",
        }
    }
}

impl fmt::Display for TrackerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<AssessmentStatus> for TrackerStatus {
    fn from(status: AssessmentStatus) -> Self {
        match status {
            AssessmentStatus::NotStarted
            | AssessmentStatus::InProgress
            | AssessmentStatus::ReworkNeeded => TrackerStatus::Assigned,
            AssessmentStatus::InReview => TrackerStatus::Fixed,
            AssessmentStatus::Completed => TrackerStatus::Verified,
            AssessmentStatus::Deprecated => TrackerStatus::Obsolete,
        }
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
