// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hooks that mirror assessment mutations to the external tracker.
//!
//! Tracker failures never fail the mutation that triggered them; they are
//! logged and the local record reflects what actually happened. Database
//! errors still propagate.

use tl_core::{
    Assessment, Audit, Database, IssueTrackerInfo, IssueTrackerIssue, IssueTrackerPatch,
};
use url::Url;

use crate::client::TrackerClient;
use crate::config::Config;
use crate::error::{Error, Result};

use super::payload::{assessment_url, build_fields_update, build_new_issue, initial_comment};
use super::people::people_fields;

pub const DEFAULT_ISSUE_TYPE: &str = "PROCESS";
pub const DEFAULT_PRIORITY: &str = "P2";
pub const DEFAULT_SEVERITY: &str = "S2";

/// Values used for fields neither the assessment nor its audit set.
fn creation_defaults() -> IssueTrackerInfo {
    IssueTrackerInfo {
        enabled: false,
        component_id: None,
        hotlist_id: None,
        issue_type: Some(DEFAULT_ISSUE_TYPE.to_string()),
        priority: Some(DEFAULT_PRIORITY.to_string()),
        severity: Some(DEFAULT_SEVERITY.to_string()),
    }
}

/// Settings the hook needs from configuration.
#[derive(Debug, Clone)]
pub struct HookSettings {
    /// Global switch for all tracker calls.
    pub enabled: bool,
    /// Application root used to link back to assessments.
    pub app_url: Url,
    /// Prefix for the browser URL of created issues.
    pub issue_url_base: String,
}

impl HookSettings {
    pub fn from_config(config: &Config) -> Result<Self> {
        let app_url = Url::parse(&config.app_url)
            .map_err(|e| Error::Config(format!("invalid app_url '{}': {}", config.app_url, e)))?;
        Ok(HookSettings {
            enabled: config.is_tracker_enabled(),
            app_url,
            issue_url_base: config.issue_tracker.issue_url_base.clone(),
        })
    }

    /// Settings with the global switch on, for wiring a client in-process.
    pub fn enabled(app_url: Url) -> Self {
        HookSettings {
            enabled: true,
            app_url,
            issue_url_base: "http://issuetracker/issues".to_string(),
        }
    }

    fn issue_url(&self, issue_id: &str) -> String {
        format!("{}/{}", self.issue_url_base.trim_end_matches('/'), issue_id)
    }
}

/// Issue tracker hook run by the object service after each mutation.
pub struct IssueTrackerHook<'a> {
    settings: HookSettings,
    client: Option<&'a dyn TrackerClient>,
}

impl<'a> IssueTrackerHook<'a> {
    pub fn new(settings: HookSettings, client: Option<&'a dyn TrackerClient>) -> Self {
        IssueTrackerHook { settings, client }
    }

    /// A hook that never calls the tracker.
    pub fn disabled(app_url: Url) -> Self {
        IssueTrackerHook {
            settings: HookSettings {
                enabled: false,
                ..HookSettings::enabled(app_url)
            },
            client: None,
        }
    }

    /// True when tracker calls are allowed for assessments of `audit`.
    pub fn is_issue_tracker_enabled(&self, audit: &Audit) -> bool {
        self.settings.enabled && self.client.is_some() && audit.issue_tracker.enabled
    }

    /// Handle a newly created assessment.
    ///
    /// Stores the requested bag and creates the external issue when both the
    /// request and the audit enable the integration. Returns the stored
    /// record, or `None` when no bag was requested.
    pub fn after_create(
        &self,
        db: &Database,
        asmt: &Assessment,
        requested: Option<&IssueTrackerPatch>,
    ) -> Result<Option<IssueTrackerIssue>> {
        let Some(patch) = requested else {
            return Ok(None);
        };

        let mut record = IssueTrackerIssue::new(
            asmt.object_ref(),
            asmt.title.clone(),
            IssueTrackerInfo::from(patch.clone()),
        );

        let audit = db.get_audit(asmt.audit_id)?;
        if record.is_enabled() && self.is_issue_tracker_enabled(&audit) {
            self.create_external(db, asmt, &audit, &mut record)?;
        } else if record.is_enabled() {
            tracing::debug!(
                assessment = asmt.id,
                audit = audit.id,
                "issue tracker disabled for audit, storing bag only"
            );
        }

        Ok(Some(db.upsert_issue_tracker_issue(&record)?))
    }

    /// Handle an updated assessment whose record is `record`.
    ///
    /// The record title follows the assessment title. Enabled records are
    /// pushed to the tracker, creating the external issue if it is missing.
    pub fn after_update(
        &self,
        db: &Database,
        asmt: &Assessment,
        mut record: IssueTrackerIssue,
    ) -> Result<IssueTrackerIssue> {
        record.title.clone_from(&asmt.title);

        let audit = db.get_audit(asmt.audit_id)?;
        if record.is_enabled() && self.is_issue_tracker_enabled(&audit) {
            match record.issue_id.clone() {
                Some(issue_id) => self.push_update(db, asmt, &record, &issue_id)?,
                None => self.create_external(db, asmt, &audit, &mut record)?,
            }
        }

        Ok(db.upsert_issue_tracker_issue(&record)?)
    }

    /// Handle a deleted assessment. The external issue is left as is.
    pub fn after_delete(&self, db: &Database, asmt: &Assessment) -> Result<()> {
        if let Some(record) = db.issue_tracker_issue_for(asmt.object_ref())? {
            tracing::info!(
                assessment = asmt.id,
                issue_id = record.issue_id.as_deref().unwrap_or("-"),
                "unlinking tracker issue of deleted assessment"
            );
        }
        db.delete_issue_tracker_issue(asmt.object_ref())?;
        Ok(())
    }

    fn create_external(
        &self,
        db: &Database,
        asmt: &Assessment,
        audit: &Audit,
        record: &mut IssueTrackerIssue,
    ) -> Result<()> {
        let Some(client) = self.client else {
            return Ok(());
        };

        record.info.fill_from(&audit.issue_tracker);
        record.info.fill_from(&creation_defaults());

        let people = people_fields(db, asmt)?;
        let url = assessment_url(&self.settings.app_url, asmt.id)?;
        let issue = build_new_issue(asmt, &record.info, &people, initial_comment(&url));

        match client.create_issue(&issue) {
            Ok(created) => {
                tracing::info!(
                    assessment = asmt.id,
                    issue_id = %created.issue_id,
                    "created tracker issue"
                );
                record.issue_url = Some(self.settings.issue_url(&created.issue_id));
                record.issue_id = Some(created.issue_id);
            }
            Err(e) => {
                tracing::error!(
                    assessment = asmt.id,
                    error = %e,
                    "unable to create tracker issue, disabling integration for assessment"
                );
                record.info.enabled = false;
            }
        }
        Ok(())
    }

    fn push_update(
        &self,
        db: &Database,
        asmt: &Assessment,
        record: &IssueTrackerIssue,
        issue_id: &str,
    ) -> Result<()> {
        let Some(client) = self.client else {
            return Ok(());
        };

        let people = people_fields(db, asmt)?;
        let update = build_fields_update(asmt.status, record, &people);
        match client.update_issue(issue_id, &update) {
            Ok(()) => tracing::info!(assessment = asmt.id, issue_id, "updated tracker issue"),
            Err(e) => tracing::warn!(
                assessment = asmt.id,
                issue_id,
                error = %e,
                "unable to update tracker issue"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "hook_tests.rs"]
mod tests;
