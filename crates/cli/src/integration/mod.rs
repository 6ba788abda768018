// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue tracker integration for assessments.
//!
//! This module provides:
//! - Derivation of tracker person fields from the ACL
//! - Payload building for create and update calls
//! - The hook that mirrors assessment mutations to the tracker
//!
//! The integration only acts when the global switch in config is on and the
//! assessment's audit has its issue tracker bag enabled.

pub mod hook;
pub mod payload;
pub mod people;

pub use hook::{HookSettings, IssueTrackerHook};
pub use people::{people_fields, PeopleFields};
