// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Test infrastructure for command testing without filesystem setup.
//!
//! `TestContext` wraps an in-memory database, a default config and a
//! recording tracker client, so command logic can run without a `.tracklink/`
//! directory or a live tracker.

use tl_core::acl::{ASSIGNEES, AUDIT_CAPTAINS};
use tl_core::{Database, IssueTrackerInfo, ObjectType};
use url::Url;
use yare::parameterized;

use crate::client::test_helpers::RecordingClient;
use crate::config::Config;
use crate::error::Error;
use crate::integration::{HookSettings, IssueTrackerHook};
use crate::service::ObjectService;

use super::{parse_role_assignment, resolve_acl};

/// Test context providing in-memory database, default config and a client.
pub struct TestContext {
    pub db: Database,
    pub config: Config,
    pub client: RecordingClient,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        TestContext {
            db: Database::open_in_memory().expect("Failed to create in-memory database"),
            config: Config::default(),
            client: RecordingClient::returning_id("1000"),
        }
    }

    /// Service whose hook talks to the recording client.
    pub fn service(&self) -> ObjectService<'_> {
        let url = Url::parse(&self.config.app_url).expect("default app url");
        ObjectService::new(
            &self.db,
            IssueTrackerHook::new(HookSettings::enabled(url), Some(&self.client)),
        )
    }

    /// Create an audit with the tracker bag enabled.
    pub fn tracked_audit(&self) -> i64 {
        self.db
            .create_audit(
                "Audit",
                &IssueTrackerInfo {
                    enabled: true,
                    ..Default::default()
                },
            )
            .expect("Failed to create audit")
            .id
    }

    pub fn person(&self, email: &str) -> i64 {
        self.db
            .create_person(email, None)
            .expect("Failed to create person")
            .id
    }
}

#[parameterized(
    single = { "Assignees=a@example.com", "Assignees", &["a@example.com"] },
    multiple = { "Assignees=a@example.com,b@example.com", "Assignees", &["a@example.com", "b@example.com"] },
    spaces = { " Audit Captains = a@example.com , b@example.com ", "Audit Captains", &["a@example.com", "b@example.com"] },
    empty = { "Verifiers=", "Verifiers", &[] },
)]
fn test_parse_role_assignment(input: &str, role: &str, emails: &[&str]) {
    let (parsed_role, parsed_emails) = parse_role_assignment(input).unwrap();
    assert_eq!(parsed_role, role);
    assert_eq!(parsed_emails, emails);
}

#[parameterized(
    no_equals = { "Assignees" },
    no_role = { "=a@example.com" },
)]
fn test_parse_role_assignment_invalid(input: &str) {
    assert!(matches!(
        parse_role_assignment(input),
        Err(Error::InvalidRoleAssignment(_))
    ));
}

#[test]
fn test_resolve_acl_maps_roles_and_people() {
    let ctx = TestContext::new();
    let a = ctx.person("a@example.com");
    let b = ctx.person("b@example.com");
    let role = ctx.db.role_by_name(ObjectType::Assessment, ASSIGNEES).unwrap();

    let specs = resolve_acl(
        &ctx.db,
        ObjectType::Assessment,
        &["Assignees=a@example.com,b@example.com,a@example.com".to_string()],
    )
    .unwrap();

    assert_eq!(specs.len(), 2);
    assert_eq!((specs[0].person_id, specs[0].role_id), (a, role.id));
    assert_eq!((specs[1].person_id, specs[1].role_id), (b, role.id));
}

#[test]
fn test_resolve_acl_unknown_person() {
    let ctx = TestContext::new();

    let err = resolve_acl(
        &ctx.db,
        ObjectType::Assessment,
        &["Assignees=ghost@example.com".to_string()],
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::Core(tl_core::Error::PersonNotFound(ref email)) if email == "ghost@example.com"
    ));
}

#[test]
fn test_resolve_acl_role_of_other_type() {
    let ctx = TestContext::new();
    ctx.person("a@example.com");

    let err = resolve_acl(
        &ctx.db,
        ObjectType::Assessment,
        &[format!("{AUDIT_CAPTAINS}=a@example.com")],
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::Core(tl_core::Error::RoleNotFound { .. })
    ));
}
