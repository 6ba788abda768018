// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod assessment;
pub mod audit;
pub mod init;
pub mod person;
pub mod role;
pub mod sync;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use serde::Serialize;
use tl_core::acl::acl_list;
use tl_core::{AclSpec, Database, ObjectType};

use crate::client::{HttpTrackerClient, TrackerClient};
use crate::config::{find_work_dir, get_db_path, Config};
use crate::error::{Error, Result};
use crate::integration::{HookSettings, IssueTrackerHook};
use crate::service::ObjectService;

/// Everything a command needs: the database, config and tracker client.
pub struct Context {
    pub db: Database,
    pub config: Config,
    client: Option<HttpTrackerClient>,
}

impl Context {
    /// Open the project found by walking up from the current directory.
    pub fn open() -> Result<Self> {
        let work_dir = find_work_dir()?;
        let config = Config::load(&work_dir)?;
        let db_path = get_db_path(&work_dir, &config);
        let db = Database::open(&db_path)?;
        let client = config.tracker_client()?;
        tracing::debug!(
            db = %db_path.display(),
            tracker = client.is_some(),
            "opened project"
        );
        Ok(Context {
            db,
            config,
            client,
        })
    }

    pub fn client(&self) -> Option<&dyn TrackerClient> {
        self.client.as_ref().map(|c| c as &dyn TrackerClient)
    }

    pub fn service(&self) -> Result<ObjectService<'_>> {
        let settings = HookSettings::from_config(&self.config)?;
        Ok(ObjectService::new(
            &self.db,
            IssueTrackerHook::new(settings, self.client()),
        ))
    }
}

/// Split `"Role Name=a@x.com,b@x.com"` into the role name and emails.
pub fn parse_role_assignment(input: &str) -> Result<(String, Vec<String>)> {
    let (role, emails) = input
        .split_once('=')
        .ok_or_else(|| Error::InvalidRoleAssignment(input.to_string()))?;
    let role = role.trim();
    if role.is_empty() {
        return Err(Error::InvalidRoleAssignment(input.to_string()));
    }
    let emails: Vec<String> = emails
        .split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(String::from)
        .collect();
    Ok((role.to_string(), emails))
}

/// Resolve role assignments against the roles of `object_type` and known people.
pub fn resolve_acl(
    db: &Database,
    object_type: ObjectType,
    assignments: &[String],
) -> Result<Vec<AclSpec>> {
    let mut pairs = Vec::new();
    for assignment in assignments {
        let (role_name, emails) = parse_role_assignment(assignment)?;
        let role = db.role_by_name(object_type, &role_name)?;
        for email in emails {
            let person = db
                .person_by_email(&email)?
                .ok_or(tl_core::Error::PersonNotFound(email))?;
            pairs.push((person.id, role.id));
        }
    }
    Ok(acl_list(pairs))
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
