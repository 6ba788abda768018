// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;
use tl_core::{
    Assessment, AssessmentStatus, IssueTrackerIssue, IssueTrackerPatch, ObjectRef, ObjectType,
};

use crate::cli::{OutputFormat, TrackerArgs};
use crate::display::format_assessment;
use crate::error::{Error, Result};
use crate::integration::{people_fields, PeopleFields};
use crate::service::{NewAssessment, Object, ObjectPatch, ObjectService};

use super::{print_json, resolve_acl, Context};

#[derive(Serialize)]
struct AssessmentDetails {
    #[serde(flatten)]
    assessment: Assessment,
    issue_tracker: Option<IssueTrackerIssue>,
    people: PeopleFields,
}

/// An assessment with its optional tracker record.
pub(crate) type Tracked = (Assessment, Option<IssueTrackerIssue>);

fn report(action: &str, (asmt, record): &Tracked) {
    println!("{} assessment {}: {}", action, asmt.id, asmt.title);
    if let Some(record) = record {
        match &record.issue_url {
            Some(url) if record.has_external_issue() => println!("Tracker issue: {}", url),
            _ if record.is_enabled() => println!("Tracker issue: pending"),
            _ => {}
        }
    }
}

pub fn new(
    audit_id: i64,
    title: &str,
    status: Option<AssessmentStatus>,
    tracker: &TrackerArgs,
    roles: &[String],
) -> Result<()> {
    let ctx = Context::open()?;
    let tracked = new_impl(
        &ctx.service()?,
        audit_id,
        title,
        status,
        tracker.to_patch(),
        roles,
    )?;
    report("Created", &tracked);
    Ok(())
}

pub(crate) fn new_impl(
    service: &ObjectService,
    audit_id: i64,
    title: &str,
    status: Option<AssessmentStatus>,
    tracker: Option<IssueTrackerPatch>,
    roles: &[String],
) -> Result<Tracked> {
    let access_control_list = resolve_acl(service.db(), ObjectType::Assessment, roles)?;
    service.create_assessment(NewAssessment {
        audit_id,
        title: title.to_string(),
        status,
        issue_tracker: tracker,
        access_control_list,
    })
}

pub fn edit(
    id: i64,
    title: Option<String>,
    status: Option<AssessmentStatus>,
    tracker: &TrackerArgs,
    replace: bool,
) -> Result<()> {
    let ctx = Context::open()?;
    let tracked = edit_impl(
        &ctx.service()?,
        id,
        title,
        status,
        tracker.to_patch(),
        replace,
    )?;
    report("Updated", &tracked);
    Ok(())
}

/// Modify an assessment; with `replace` the tracker bag is overwritten.
pub(crate) fn edit_impl(
    service: &ObjectService,
    id: i64,
    title: Option<String>,
    status: Option<AssessmentStatus>,
    tracker: Option<IssueTrackerPatch>,
    replace: bool,
) -> Result<Tracked> {
    if title.is_none() && status.is_none() && tracker.is_none() {
        return Err(Error::InvalidInput("nothing to change".to_string()));
    }
    let patch = ObjectPatch {
        title,
        status,
        issue_tracker: tracker,
        access_control_list: None,
    };
    let object = ObjectRef::assessment(id);
    let updated = if replace {
        service.put(object, patch)?
    } else {
        service.modify_object(object, patch)?
    };
    expect_assessment(updated)
}

pub fn acl(id: i64, roles: &[String]) -> Result<()> {
    let ctx = Context::open()?;
    let tracked = acl_impl(&ctx.service()?, id, roles)?;
    report("Updated", &tracked);
    Ok(())
}

/// Replace the assessment's ACL with the given role assignments.
pub(crate) fn acl_impl(service: &ObjectService, id: i64, roles: &[String]) -> Result<Tracked> {
    let acl = resolve_acl(service.db(), ObjectType::Assessment, roles)?;
    let patch = ObjectPatch {
        access_control_list: Some(acl),
        ..Default::default()
    };
    expect_assessment(service.put(ObjectRef::assessment(id), patch)?)
}

pub fn show(id: i64, output: OutputFormat) -> Result<()> {
    let ctx = Context::open()?;
    let object = ctx.service()?.get(ObjectRef::assessment(id))?;
    let (assessment, issue_tracker) = expect_assessment(object)?;
    let people = people_fields(&ctx.db, &assessment)?;
    match output {
        OutputFormat::Text => print!(
            "{}",
            format_assessment(&assessment, issue_tracker.as_ref(), &people)
        ),
        OutputFormat::Json => print_json(&AssessmentDetails {
            assessment,
            issue_tracker,
            people,
        })?,
    }
    Ok(())
}

pub fn delete(id: i64) -> Result<()> {
    let ctx = Context::open()?;
    ctx.service()?.delete(ObjectRef::assessment(id))?;
    println!("Deleted assessment {}", id);
    Ok(())
}

fn expect_assessment(object: Object) -> Result<Tracked> {
    match object {
        Object::Assessment {
            assessment,
            issue_tracker,
        } => Ok((assessment, issue_tracker)),
        Object::Audit(audit) => Err(Error::InvalidInput(format!(
            "expected an assessment, got audit {}",
            audit.id
        ))),
    }
}

#[cfg(test)]
#[path = "assessment_tests.rs"]
mod tests;
