// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use crate::error::Error;

#[test]
fn test_add_person_trims_and_stores() {
    let ctx = TestContext::new();

    let person = add_impl(&ctx.db, "  a@example.com ", Some(" Alice ")).unwrap();

    assert_eq!(person.email, "a@example.com");
    assert_eq!(person.name.as_deref(), Some("Alice"));
    assert_eq!(ctx.db.get_person(person.id).unwrap(), person);
}

#[test]
fn test_add_person_blank_name_is_dropped() {
    let ctx = TestContext::new();

    let person = add_impl(&ctx.db, "a@example.com", Some("  ")).unwrap();

    assert!(person.name.is_none());
}

#[test]
fn test_add_person_duplicate_email() {
    let ctx = TestContext::new();
    add_impl(&ctx.db, "a@example.com", None).unwrap();

    let err = add_impl(&ctx.db, "a@example.com", None).unwrap_err();

    assert!(matches!(err, Error::Core(tl_core::Error::DuplicateEmail(_))));
}
