// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn acl_list_drops_duplicates_and_keeps_order() {
    let specs = acl_list([(1, 10), (2, 10), (1, 10), (1, 11)]);
    assert_eq!(
        specs,
        vec![
            AclSpec::new(1, 10),
            AclSpec::new(2, 10),
            AclSpec::new(1, 11)
        ]
    );
}

#[test]
fn acl_spec_uses_ac_role_id_on_the_wire() {
    let json = serde_json::to_value(AclSpec::new(3, 4)).unwrap();
    assert_eq!(json["person_id"], 3);
    assert_eq!(json["ac_role_id"], 4);
}

#[test]
fn builtin_roles_are_unique_per_object_type() {
    for (i, a) in BUILTIN_ROLES.iter().enumerate() {
        for b in &BUILTIN_ROLES[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn audit_captains_scoped_to_audit() {
    assert!(BUILTIN_ROLES.contains(&(ObjectType::Audit, AUDIT_CAPTAINS)));
    assert!(BUILTIN_ROLES.contains(&(ObjectType::Assessment, ASSIGNEES)));
    assert!(!BUILTIN_ROLES.contains(&(ObjectType::Assessment, AUDIT_CAPTAINS)));
}
