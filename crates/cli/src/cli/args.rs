// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` by every command that
//! accepts issue tracker settings.

use clap::Args;
use tl_core::IssueTrackerPatch;

/// Issue tracker bag arguments.
#[derive(Args, Clone, Debug, Default)]
pub struct TrackerArgs {
    /// Turn the issue tracker integration on
    #[arg(long, conflicts_with = "disable")]
    pub enable: bool,

    /// Turn the issue tracker integration off
    #[arg(long)]
    pub disable: bool,

    /// Tracker component id
    #[arg(long, value_name = "ID")]
    pub component: Option<String>,

    /// Tracker hotlist id
    #[arg(long, value_name = "ID")]
    pub hotlist: Option<String>,

    /// Issue type (e.g. PROCESS, BUG)
    #[arg(long, value_name = "TYPE")]
    pub issue_type: Option<String>,

    /// Issue priority (e.g. P0..P4)
    #[arg(long)]
    pub priority: Option<String>,

    /// Issue severity (e.g. S0..S4)
    #[arg(long)]
    pub severity: Option<String>,
}

impl TrackerArgs {
    /// True when no tracker flag was given.
    pub fn is_empty(&self) -> bool {
        !self.enable
            && !self.disable
            && self.component.is_none()
            && self.hotlist.is_none()
            && self.issue_type.is_none()
            && self.priority.is_none()
            && self.severity.is_none()
    }

    /// Convert to a patch, or `None` when no flag was given.
    pub fn to_patch(&self) -> Option<IssueTrackerPatch> {
        if self.is_empty() {
            return None;
        }
        let enabled = match (self.enable, self.disable) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        Some(IssueTrackerPatch {
            enabled,
            component_id: self.component.clone(),
            hotlist_id: self.hotlist.clone(),
            issue_type: self.issue_type.clone(),
            priority: self.priority.clone(),
            severity: self.severity.clone(),
        })
    }
}

/// Role assignment arguments.
#[derive(Args, Clone, Debug, Default)]
pub struct RoleArgs {
    /// Assign people to a role (repeatable)
    #[arg(long = "role", short = 'r', value_name = "ROLE=EMAILS")]
    pub roles: Vec<String>,
}
