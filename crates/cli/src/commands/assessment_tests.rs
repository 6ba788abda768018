// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::client::IssueUpdate;
use crate::commands::testing::TestContext;
use tl_core::acl::{ASSIGNEES, AUDIT_CAPTAINS};

fn assign(emails: &str) -> Vec<String> {
    vec![format!("{ASSIGNEES}={emails}")]
}

#[test]
fn test_new_assessment_creates_tracker_issue() {
    let ctx = TestContext::new();
    let audit_id = ctx.tracked_audit();
    let captain = ctx.person("captain@example.com");
    ctx.person("a1@example.com");
    ctx.person("a2@example.com");
    let role = ctx
        .db
        .role_by_name(ObjectType::Audit, AUDIT_CAPTAINS)
        .unwrap();
    ctx.db
        .add_acl_entry(captain, role.id, ObjectRef::audit(audit_id))
        .unwrap();

    let (asmt, record) = new_impl(
        &ctx.service(),
        audit_id,
        "Review logs",
        None,
        Some(IssueTrackerPatch::enabled(true)),
        &assign("a2@example.com,a1@example.com"),
    )
    .unwrap();

    assert_eq!(asmt.status, AssessmentStatus::NotStarted);
    assert_eq!(record.unwrap().issue_id.as_deref(), Some("1000"));
    let created = ctx.client.created.borrow();
    assert_eq!(created[0].reporter.as_deref(), Some("captain@example.com"));
    assert_eq!(created[0].assignee.as_deref(), Some("a1@example.com"));
    assert_eq!(created[0].ccs, vec!["a2@example.com".to_string()]);
}

#[test]
fn test_new_assessment_without_tracker_flags() {
    let ctx = TestContext::new();
    let audit_id = ctx.tracked_audit();

    let (_, record) = new_impl(&ctx.service(), audit_id, "Plain", None, None, &[]).unwrap();

    assert!(record.is_none());
    assert!(ctx.client.created.borrow().is_empty());
}

#[test]
fn test_edit_requires_a_change() {
    let ctx = TestContext::new();
    let audit_id = ctx.tracked_audit();
    let (asmt, _) = new_impl(&ctx.service(), audit_id, "A", None, None, &[]).unwrap();

    let err = edit_impl(&ctx.service(), asmt.id, None, None, None, false).unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_edit_status_pushes_update() {
    let ctx = TestContext::new();
    let audit_id = ctx.tracked_audit();
    let (asmt, _) = new_impl(
        &ctx.service(),
        audit_id,
        "A",
        None,
        Some(IssueTrackerPatch::enabled(true)),
        &[],
    )
    .unwrap();

    let (asmt, record) = edit_impl(
        &ctx.service(),
        asmt.id,
        None,
        Some(AssessmentStatus::Completed),
        None,
        false,
    )
    .unwrap();

    assert_eq!(asmt.status, AssessmentStatus::Completed);
    assert!(record.unwrap().is_enabled());
    let updated = ctx.client.updated.borrow();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].0, "1000");
}

#[test]
fn test_acl_replaces_assignees() {
    let ctx = TestContext::new();
    let audit_id = ctx.tracked_audit();
    ctx.person("a@example.com");
    ctx.person("b@example.com");
    let (asmt, _) = new_impl(
        &ctx.service(),
        audit_id,
        "A",
        None,
        Some(IssueTrackerPatch::enabled(true)),
        &assign("a@example.com"),
    )
    .unwrap();

    acl_impl(&ctx.service(), asmt.id, &assign("b@example.com")).unwrap();

    assert_eq!(
        ctx.db.acl_emails(asmt.object_ref(), ASSIGNEES).unwrap(),
        vec!["b@example.com".to_string()]
    );
    let updated = ctx.client.updated.borrow();
    assert_eq!(updated.len(), 1);
    let IssueUpdate::Fields(fields) = &updated[0].1 else {
        panic!("expected a fields update");
    };
    assert_eq!(fields.assignee.as_deref(), Some("b@example.com"));
}
