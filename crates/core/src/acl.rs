// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! People, access control roles and ACL entries.

use serde::{Deserialize, Serialize};

use crate::object::{ObjectRef, ObjectType};

pub const AUDIT_CAPTAINS: &str = "Audit Captains";
pub const AUDITORS: &str = "Auditors";
pub const CREATORS: &str = "Creators";
pub const ASSIGNEES: &str = "Assignees";
pub const VERIFIERS: &str = "Verifiers";
pub const PRIMARY_CONTACTS: &str = "Primary Contacts";
pub const SECONDARY_CONTACTS: &str = "Secondary Contacts";

/// Roles seeded into every database, as (object type, role name).
pub const BUILTIN_ROLES: &[(ObjectType, &str)] = &[
    (ObjectType::Audit, AUDIT_CAPTAINS),
    (ObjectType::Audit, AUDITORS),
    (ObjectType::Assessment, CREATORS),
    (ObjectType::Assessment, ASSIGNEES),
    (ObjectType::Assessment, VERIFIERS),
    (ObjectType::Assessment, PRIMARY_CONTACTS),
    (ObjectType::Assessment, SECONDARY_CONTACTS),
];

/// A user known to the system. The email doubles as the tracker identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A named role scoped to one object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessControlRole {
    pub id: i64,
    pub name: String,
    pub object_type: ObjectType,
    /// Built-in roles are internal; custom roles are not.
    pub internal: bool,
}

/// Assignment of a person to a role on a specific object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclEntry {
    pub id: i64,
    pub person_id: i64,
    pub role_id: i64,
    pub object: ObjectRef,
}

/// Requested ACL assignment, as carried by create and put requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AclSpec {
    pub person_id: i64,
    #[serde(rename = "ac_role_id")]
    pub role_id: i64,
}

impl AclSpec {
    pub fn new(person_id: i64, role_id: i64) -> Self {
        AclSpec { person_id, role_id }
    }
}

/// Build an ACL list from (person id, role id) pairs, dropping duplicates.
pub fn acl_list<I>(pairs: I) -> Vec<AclSpec>
where
    I: IntoIterator<Item = (i64, i64)>,
{
    let mut specs: Vec<AclSpec> = Vec::new();
    for (person_id, role_id) in pairs {
        let spec = AclSpec::new(person_id, role_id);
        if !specs.contains(&spec) {
            specs.push(spec);
        }
    }
    specs
}

#[cfg(test)]
#[path = "acl_tests.rs"]
mod tests;
