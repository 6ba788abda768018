// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;
use tl_core::{Assessment, Audit, IssueTrackerPatch, ObjectRef, ObjectType};

use crate::cli::{OutputFormat, TrackerArgs};
use crate::display::format_audit;
use crate::error::{Error, Result};
use crate::service::{NewAudit, Object, ObjectPatch, ObjectService};

use super::{print_json, resolve_acl, Context};

#[derive(Serialize)]
struct AuditDetails {
    #[serde(flatten)]
    audit: Audit,
    assessments: Vec<Assessment>,
}

pub fn new(title: &str, tracker: &TrackerArgs, roles: &[String]) -> Result<()> {
    let ctx = Context::open()?;
    let audit = new_impl(&ctx.service()?, title, tracker.to_patch(), roles)?;
    println!("Created audit {}: {}", audit.id, audit.title);
    Ok(())
}

pub(crate) fn new_impl(
    service: &ObjectService,
    title: &str,
    tracker: Option<IssueTrackerPatch>,
    roles: &[String],
) -> Result<Audit> {
    // Resolve first so a bad assignment leaves nothing behind
    let acl = resolve_acl(service.db(), ObjectType::Audit, roles)?;
    let audit = service.create_audit(NewAudit {
        title: title.to_string(),
        issue_tracker: tracker,
    })?;
    if acl.is_empty() {
        return Ok(audit);
    }
    let patch = ObjectPatch {
        access_control_list: Some(acl),
        ..Default::default()
    };
    expect_audit(service.put(audit.object_ref(), patch)?)
}

pub fn tracker(id: i64, tracker: &TrackerArgs, replace: bool) -> Result<()> {
    let ctx = Context::open()?;
    let audit = tracker_impl(&ctx.service()?, id, tracker.to_patch(), replace)?;
    println!("Updated audit {}", audit.id);
    Ok(())
}

/// Merge (or with `replace`, overwrite) the audit's issue tracker bag.
pub(crate) fn tracker_impl(
    service: &ObjectService,
    id: i64,
    tracker: Option<IssueTrackerPatch>,
    replace: bool,
) -> Result<Audit> {
    let Some(bag) = tracker else {
        return Err(Error::InvalidInput(
            "no issue tracker settings given".to_string(),
        ));
    };
    let patch = ObjectPatch {
        issue_tracker: Some(bag),
        ..Default::default()
    };
    let object = ObjectRef::audit(id);
    let updated = if replace {
        service.put(object, patch)?
    } else {
        service.modify_object(object, patch)?
    };
    expect_audit(updated)
}

pub fn show(id: i64, output: OutputFormat) -> Result<()> {
    let ctx = Context::open()?;
    let audit = ctx.db.get_audit(id)?;
    let assessments = ctx.db.list_assessments(id)?;
    match output {
        OutputFormat::Text => print!("{}", format_audit(&audit, assessments.len())),
        OutputFormat::Json => print_json(&AuditDetails { audit, assessments })?,
    }
    Ok(())
}

pub fn delete(id: i64) -> Result<()> {
    let ctx = Context::open()?;
    ctx.service()?.delete(ObjectRef::audit(id))?;
    println!("Deleted audit {}", id);
    Ok(())
}

fn expect_audit(object: Object) -> Result<Audit> {
    match object {
        Object::Audit(audit) => Ok(audit),
        Object::Assessment { assessment, .. } => Err(Error::InvalidInput(format!(
            "expected an audit, got assessment {}",
            assessment.id
        ))),
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
