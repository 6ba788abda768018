// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker person fields derived from role membership.

use serde::Serialize;
use tl_core::acl::{ASSIGNEES, AUDIT_CAPTAINS};
use tl_core::{Assessment, Database, ObjectRef};

use crate::error::Result;

/// Reporter, assignee, verifier and CC list for a tracker issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeopleFields {
    pub reporter: Option<String>,
    pub assignee: Option<String>,
    pub verifier: Option<String>,
    pub ccs: Vec<String>,
}

impl PeopleFields {
    /// Build fields from sorted email lists.
    ///
    /// The first captain reports; the first assignee is both assignee and
    /// verifier; the remaining assignees are CC'd.
    pub fn from_emails(captains: &[String], assignees: &[String]) -> Self {
        let reporter = captains.first().cloned();
        let (assignee, ccs) = match assignees.split_first() {
            Some((first, rest)) => (Some(first.clone()), rest.to_vec()),
            None => (None, Vec::new()),
        };
        PeopleFields {
            reporter,
            verifier: assignee.clone(),
            assignee,
            ccs,
        }
    }
}

/// Derive person fields for an assessment from its and its audit's ACL.
pub fn people_fields(db: &Database, asmt: &Assessment) -> Result<PeopleFields> {
    let captains = db.acl_emails(ObjectRef::audit(asmt.audit_id), AUDIT_CAPTAINS)?;
    let assignees = db.acl_emails(asmt.object_ref(), ASSIGNEES)?;
    Ok(PeopleFields::from_emails(&captains, &assignees))
}

#[cfg(test)]
#[path = "people_tests.rs"]
mod tests;
