// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn bag() -> IssueTrackerInfo {
    IssueTrackerInfo {
        enabled: true,
        component_id: Some("11111".into()),
        hotlist_id: Some("222222".into()),
        issue_type: Some("BUG".into()),
        priority: Some("P2".into()),
        severity: Some("S2".into()),
    }
}

#[test]
fn merge_overwrites_only_present_keys() {
    let mut info = bag();
    info.merge(&IssueTrackerPatch {
        priority: Some("P4".into()),
        severity: Some("S3".into()),
        ..Default::default()
    });

    assert!(info.enabled);
    assert_eq!(info.component_id.as_deref(), Some("11111"));
    assert_eq!(info.issue_type.as_deref(), Some("BUG"));
    assert_eq!(info.priority.as_deref(), Some("P4"));
    assert_eq!(info.severity.as_deref(), Some("S3"));
}

#[test]
fn merge_can_disable() {
    let mut info = bag();
    info.merge(&IssueTrackerPatch::enabled(false));
    assert!(!info.enabled);
    assert_eq!(info.hotlist_id.as_deref(), Some("222222"));
}

#[test]
fn replace_drops_missing_keys() {
    let mut info = bag();
    info.replace(&IssueTrackerPatch {
        enabled: Some(true),
        component_id: Some("33".into()),
        ..Default::default()
    });

    assert_eq!(
        info,
        IssueTrackerInfo {
            enabled: true,
            component_id: Some("33".into()),
            ..Default::default()
        }
    );
}

#[test]
fn fill_from_keeps_own_values_and_enabled_flag() {
    let mut info = IssueTrackerInfo {
        enabled: false,
        priority: Some("P0".into()),
        ..Default::default()
    };
    info.fill_from(&bag());

    assert!(!info.enabled);
    assert_eq!(info.priority.as_deref(), Some("P0"));
    assert_eq!(info.component_id.as_deref(), Some("11111"));
    assert_eq!(info.severity.as_deref(), Some("S2"));
}

#[test]
fn patch_accepts_long_field_names() {
    let patch: IssueTrackerPatch = serde_json::from_str(
        r#"{"enabled": true, "issue_priority": "P4", "issue_severity": "S3", "issue_type": "PROCESS"}"#,
    )
    .unwrap();

    assert_eq!(patch.enabled, Some(true));
    assert_eq!(patch.priority.as_deref(), Some("P4"));
    assert_eq!(patch.severity.as_deref(), Some("S3"));
    assert_eq!(patch.issue_type.as_deref(), Some("PROCESS"));
}

#[test]
fn patch_without_enabled_converts_to_disabled_bag() {
    let info = IssueTrackerInfo::from(IssueTrackerPatch::default());
    assert!(!info.enabled);
}

#[parameterized(
    not_started = { AssessmentStatus::NotStarted, TrackerStatus::Assigned },
    in_progress = { AssessmentStatus::InProgress, TrackerStatus::Assigned },
    rework = { AssessmentStatus::ReworkNeeded, TrackerStatus::Assigned },
    in_review = { AssessmentStatus::InReview, TrackerStatus::Fixed },
    completed = { AssessmentStatus::Completed, TrackerStatus::Verified },
    deprecated = { AssessmentStatus::Deprecated, TrackerStatus::Obsolete },
)]
fn tracker_status_from_assessment(status: AssessmentStatus, expected: TrackerStatus) {
    assert_eq!(TrackerStatus::from(status), expected);
}

#[test]
fn tracker_status_serializes_upper_case() {
    assert_eq!(
        serde_json::to_string(&TrackerStatus::Assigned).unwrap(),
        "\"ASSIGNED\""
    );
}

#[test]
fn new_record_has_no_external_issue() {
    let record = IssueTrackerIssue::new(ObjectRef::assessment(1), "Title".into(), bag());
    assert!(record.is_enabled());
    assert!(!record.has_external_issue());
}
