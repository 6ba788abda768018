// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tracklink - Mirror audit assessments to an external issue tracker.
//!
//! This crate provides the functionality behind the `tl` CLI: project
//! configuration, the tracker client, the issue tracker integration hooks,
//! the object service and the batch status sync.
//!
//! # Main Components
//!
//! - [`ObjectService`] - create/modify/put/delete for audits and assessments
//! - [`IssueTrackerHook`] - mirrors assessment mutations to the tracker
//! - [`TrackerClient`] - the tracker API, with [`HttpTrackerClient`] as the
//!   HTTP implementation
//! - [`sync_issue_tracker_statuses`] - reconciles drifted tracker states
//! - [`Config`] - project configuration in `.tracklink/config.toml`
//!
//! # Embedding
//!
//! ```rust,ignore
//! use tracklink::{find_work_dir, get_db_path, Config, HookSettings, IssueTrackerHook, ObjectService};
//! use tl_core::Database;
//!
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let db = Database::open(&get_db_path(&work_dir, &config))?;
//! let client = config.tracker_client()?;
//! let hook = IssueTrackerHook::new(
//!     HookSettings::from_config(&config)?,
//!     client.as_ref().map(|c| c as &dyn tracklink::TrackerClient),
//! );
//! let service = ObjectService::new(&db, hook);
//! ```

mod cli;
mod commands;
mod display;

pub mod client;
pub mod config;
pub mod error;
pub mod integration;
pub mod service;
pub mod sync;

pub use cli::{
    AssessmentCommand, AuditCommand, Cli, Command, OutputFormat, PersonCommand, RoleArgs,
    RoleCommand, TrackerArgs,
};
pub use client::{ClientError, HttpTrackerClient, TrackerClient};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};
pub use integration::{HookSettings, IssueTrackerHook};
pub use service::{NewAssessment, NewAudit, Object, ObjectPatch, ObjectService};
pub use sync::{sync_issue_tracker_statuses, SyncOptions, SyncReport};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { path, app_url } => commands::init::run(path, app_url),
        Command::Person(PersonCommand::Add { email, name }) => {
            commands::person::add(&email, name.as_deref())
        }
        Command::Role(RoleCommand::Add { name, object_type }) => {
            commands::role::add(&name, object_type)
        }
        Command::Role(RoleCommand::List {
            object_type,
            output,
        }) => commands::role::list(object_type, output),
        Command::Audit(cmd) => run_audit(cmd),
        Command::Assessment(cmd) => run_assessment(cmd),
        Command::Sync { batch_size, output } => commands::sync::run(batch_size, output),
    }
}

fn run_audit(command: AuditCommand) -> Result<()> {
    match command {
        AuditCommand::New {
            title,
            tracker,
            roles,
        } => commands::audit::new(&title, &tracker, &roles.roles),
        AuditCommand::Tracker {
            id,
            tracker,
            replace,
        } => commands::audit::tracker(id, &tracker, replace),
        AuditCommand::Show { id, output } => commands::audit::show(id, output),
        AuditCommand::Delete { id } => commands::audit::delete(id),
    }
}

fn run_assessment(command: AssessmentCommand) -> Result<()> {
    match command {
        AssessmentCommand::New {
            audit_id,
            title,
            status,
            tracker,
            roles,
        } => commands::assessment::new(audit_id, &title, status, &tracker, &roles.roles),
        AssessmentCommand::Edit {
            id,
            title,
            status,
            tracker,
            replace,
        } => commands::assessment::edit(id, title, status, &tracker, replace),
        AssessmentCommand::Acl { id, roles } => commands::assessment::acl(id, &roles.roles),
        AssessmentCommand::Show { id, output } => commands::assessment::show(id, output),
        AssessmentCommand::Delete { id } => commands::assessment::delete(id),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
