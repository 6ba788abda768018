// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Object service: the create/modify/put/delete API for audits and assessments.
//!
//! Every mutation is stored first and then handed to the issue tracker hook.

use serde::Deserialize;
use tl_core::{
    AclSpec, Assessment, AssessmentStatus, Audit, Database, IssueTrackerInfo, IssueTrackerIssue,
    IssueTrackerPatch, ObjectRef, ObjectType,
};

use crate::error::{Error, Result};
use crate::integration::IssueTrackerHook;

/// Request to create an audit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewAudit {
    pub title: String,
    #[serde(default)]
    pub issue_tracker: Option<IssueTrackerPatch>,
}

/// Request to create an assessment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewAssessment {
    pub audit_id: i64,
    pub title: String,
    #[serde(default)]
    pub status: Option<AssessmentStatus>,
    #[serde(default)]
    pub issue_tracker: Option<IssueTrackerPatch>,
    #[serde(default)]
    pub access_control_list: Vec<AclSpec>,
}

/// Changes to an existing object. Unset fields are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<AssessmentStatus>,
    #[serde(default)]
    pub issue_tracker: Option<IssueTrackerPatch>,
    #[serde(default)]
    pub access_control_list: Option<Vec<AclSpec>>,
}

/// How a patch's issue tracker bag is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BagMode {
    Merge,
    Replace,
}

impl BagMode {
    fn apply(self, info: &mut IssueTrackerInfo, patch: &IssueTrackerPatch) {
        match self {
            BagMode::Merge => info.merge(patch),
            BagMode::Replace => info.replace(patch),
        }
    }
}

/// A stored object as returned by the service.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Audit(Audit),
    Assessment {
        assessment: Assessment,
        issue_tracker: Option<IssueTrackerIssue>,
    },
}

pub struct ObjectService<'a> {
    db: &'a Database,
    hook: IssueTrackerHook<'a>,
}

fn validate_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(Error::FieldEmpty { field: "title" });
    }
    Ok(title.to_string())
}

impl<'a> ObjectService<'a> {
    pub fn new(db: &'a Database, hook: IssueTrackerHook<'a>) -> Self {
        ObjectService { db, hook }
    }

    pub fn db(&self) -> &'a Database {
        self.db
    }

    pub fn create_audit(&self, req: NewAudit) -> Result<Audit> {
        let title = validate_title(&req.title)?;
        let info = req
            .issue_tracker
            .map(IssueTrackerInfo::from)
            .unwrap_or_default();
        let audit = self.db.create_audit(&title, &info)?;
        tracing::info!(audit = audit.id, "created audit");
        Ok(audit)
    }

    /// Create an assessment with its ACL, then run the create hook.
    pub fn create_assessment(
        &self,
        req: NewAssessment,
    ) -> Result<(Assessment, Option<IssueTrackerIssue>)> {
        let title = validate_title(&req.title)?;

        let tx = self.db.conn.unchecked_transaction()?;
        let asmt = self.db.create_assessment(
            req.audit_id,
            &title,
            req.status.unwrap_or_default(),
        )?;
        for spec in &req.access_control_list {
            self.db
                .add_acl_entry(spec.person_id, spec.role_id, asmt.object_ref())?;
        }
        tx.commit()?;
        tracing::info!(assessment = asmt.id, audit = asmt.audit_id, "created assessment");

        let record = self
            .hook
            .after_create(self.db, &asmt, req.issue_tracker.as_ref())?;
        Ok((asmt, record))
    }

    /// Partial update: issue tracker keys in the patch are merged into the
    /// stored bag.
    pub fn modify_object(&self, object: ObjectRef, patch: ObjectPatch) -> Result<Object> {
        self.update(object, patch, BagMode::Merge)
    }

    /// Replacing update: a given issue tracker bag or ACL replaces the stored one.
    pub fn put(&self, object: ObjectRef, patch: ObjectPatch) -> Result<Object> {
        self.update(object, patch, BagMode::Replace)
    }

    /// Load an object with its issue tracker record.
    pub fn get(&self, object: ObjectRef) -> Result<Object> {
        match object.object_type {
            ObjectType::Audit => Ok(Object::Audit(self.db.get_audit(object.id)?)),
            ObjectType::Assessment => Ok(Object::Assessment {
                assessment: self.db.get_assessment(object.id)?,
                issue_tracker: self.db.issue_tracker_issue_for(object)?,
            }),
        }
    }

    pub fn delete(&self, object: ObjectRef) -> Result<()> {
        let tx = self.db.conn.unchecked_transaction()?;
        match object.object_type {
            ObjectType::Audit => {
                let audit = self.db.get_audit(object.id)?;
                let count = self.db.list_assessments(audit.id)?.len();
                if count > 0 {
                    return Err(Error::HasChildren {
                        object: object.to_string(),
                        count,
                    });
                }
                self.db.delete_acl(object)?;
                self.db.delete_audit(audit.id)?;
            }
            ObjectType::Assessment => {
                let asmt = self.db.get_assessment(object.id)?;
                self.db.delete_acl(object)?;
                self.hook.after_delete(self.db, &asmt)?;
                self.db.delete_assessment(asmt.id)?;
            }
        }
        tx.commit()?;
        tracing::info!(%object, "deleted");
        Ok(())
    }

    fn update(&self, object: ObjectRef, patch: ObjectPatch, mode: BagMode) -> Result<Object> {
        match object.object_type {
            ObjectType::Audit => self.update_audit(object, patch, mode).map(Object::Audit),
            ObjectType::Assessment => self.update_assessment(object, patch, mode),
        }
    }

    fn update_audit(&self, object: ObjectRef, patch: ObjectPatch, mode: BagMode) -> Result<Audit> {
        if patch.status.is_some() {
            return Err(Error::InvalidInput(
                "audits do not have a status".to_string(),
            ));
        }

        let tx = self.db.conn.unchecked_transaction()?;
        let mut audit = self.db.get_audit(object.id)?;
        if let Some(title) = &patch.title {
            audit.title = validate_title(title)?;
        }
        if let Some(bag) = &patch.issue_tracker {
            mode.apply(&mut audit.issue_tracker, bag);
        }
        self.db.update_audit(&audit)?;
        if let Some(acl) = &patch.access_control_list {
            self.db.replace_acl(object, acl)?;
        }
        tx.commit()?;
        self.db.get_audit(audit.id).map_err(Error::from)
    }

    fn update_assessment(
        &self,
        object: ObjectRef,
        patch: ObjectPatch,
        mode: BagMode,
    ) -> Result<Object> {
        // Stores commit together before the hook sees them
        let tx = self.db.conn.unchecked_transaction()?;
        let mut asmt = self.db.get_assessment(object.id)?;
        if let Some(title) = &patch.title {
            asmt.title = validate_title(title)?;
        }
        if let Some(status) = patch.status {
            asmt.status = status;
        }
        self.db.update_assessment(&asmt)?;
        if let Some(acl) = &patch.access_control_list {
            self.db.replace_acl(object, acl)?;
        }
        let asmt = self.db.get_assessment(asmt.id)?;

        let existing = self.db.issue_tracker_issue_for(object)?;
        let record = match (existing, &patch.issue_tracker) {
            (Some(mut record), Some(bag)) => {
                mode.apply(&mut record.info, bag);
                Some(record)
            }
            (Some(record), None) => Some(record),
            (None, Some(bag)) => Some(IssueTrackerIssue::new(
                object,
                asmt.title.clone(),
                IssueTrackerInfo::from(bag.clone()),
            )),
            (None, None) => None,
        };
        tx.commit()?;

        let issue_tracker = match record {
            Some(record) => Some(self.hook.after_update(self.db, &asmt, record)?),
            None => None,
        };
        Ok(Object::Assessment {
            assessment: asmt,
            issue_tracker,
        })
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
