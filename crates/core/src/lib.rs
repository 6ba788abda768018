// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tl-core: Shared library for the tracklink issue tracker bridge
//!
//! This crate provides the audit object model (audits, assessments, people,
//! access control) and its SQLite storage.

pub mod acl;
pub mod db;
pub mod error;
pub mod object;
pub mod tracker;

pub use acl::{AccessControlRole, AclEntry, AclSpec, Person};
pub use db::Database;
pub use error::{Error, Result};
pub use object::{Assessment, AssessmentStatus, Audit, ObjectRef, ObjectType};
pub use tracker::{IssueTrackerInfo, IssueTrackerIssue, IssueTrackerPatch, TrackerStatus};
