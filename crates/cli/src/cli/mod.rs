// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand, ValueEnum};

pub use args::{RoleArgs, TrackerArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parse an object type name (audit or assessment).
fn object_type(s: &str) -> Result<tl_core::ObjectType, String> {
    s.parse().map_err(|e: tl_core::Error| e.to_string())
}

/// Parse an assessment status in display or snake case form.
fn assessment_status(s: &str) -> Result<tl_core::AssessmentStatus, String> {
    s.parse().map_err(|e: tl_core::Error| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "tl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Mirror audit assessments to an external issue tracker")]
#[command(
    long_about = "Mirror audit assessments to an external issue tracker.\n\n\
    Assessments are tracked locally with their access control list. When the\n\
    integration is enabled, every change is pushed to the tracker and\n\
    'tl sync' reconciles drifted issue states."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize tracklink in the current or given directory
    #[command(after_help = "\
Examples:
  tl init                                   Initialize in the current directory
  tl init ./project --app-url https://audit.example.com/")]
    Init {
        /// Directory to initialize (default: current directory)
        path: Option<String>,

        /// Application root URL used for links back to assessments
        #[arg(long)]
        app_url: Option<String>,
    },

    /// Manage people
    #[command(subcommand)]
    Person(PersonCommand),

    /// Manage access control roles
    #[command(subcommand)]
    Role(RoleCommand),

    /// Manage audits
    #[command(subcommand)]
    Audit(AuditCommand),

    /// Manage assessments
    #[command(subcommand)]
    Assessment(AssessmentCommand),

    /// Reconcile tracker issue states with local assessments
    #[command(after_help = "\
Examples:
  tl sync                    Sync all linked assessments
  tl sync --batch-size 20    Search 20 issues per request")]
    Sync {
        /// Issue ids per search request (default: from config)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        batch_size: Option<u64>,

        /// Output format
        #[arg(long, short = 'o', value_enum, default_value_t)]
        output: OutputFormat,
    },
}

/// People management commands.
#[derive(Subcommand)]
pub enum PersonCommand {
    /// Add a person
    Add {
        /// Email address, used as the tracker identity
        #[arg(value_parser = non_empty_string)]
        email: String,

        /// Display name
        #[arg(long)]
        name: Option<String>,
    },
}

/// Role management commands.
#[derive(Subcommand)]
pub enum RoleCommand {
    /// Add a custom role
    Add {
        /// Role name
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Object type the role applies to (audit, assessment)
        #[arg(long = "type", short = 't', value_parser = object_type)]
        object_type: tl_core::ObjectType,
    },

    /// List roles
    List {
        /// Only roles for this object type
        #[arg(long = "type", short = 't', value_parser = object_type)]
        object_type: Option<tl_core::ObjectType>,

        /// Output format
        #[arg(long, short = 'o', value_enum, default_value_t)]
        output: OutputFormat,
    },
}

/// Audit commands.
#[derive(Subcommand)]
pub enum AuditCommand {
    /// Create an audit
    #[command(after_help = "\
Examples:
  tl audit new \"Q3 audit\" --enable --component 11111 --priority P3")]
    New {
        #[arg(value_parser = non_empty_string)]
        title: String,

        #[command(flatten)]
        tracker: TrackerArgs,

        #[command(flatten)]
        roles: RoleArgs,
    },

    /// Change the issue tracker settings of an audit
    Tracker {
        id: i64,

        #[command(flatten)]
        tracker: TrackerArgs,

        /// Replace the whole bag instead of merging
        #[arg(long)]
        replace: bool,
    },

    /// Show an audit
    Show {
        id: i64,

        /// Output format
        #[arg(long, short = 'o', value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Delete an audit without assessments
    Delete { id: i64 },
}

/// Assessment commands.
#[derive(Subcommand)]
pub enum AssessmentCommand {
    /// Create an assessment
    #[command(after_help = "\
Examples:
  tl assessment new 1 \"Review logs\" -r \"Assignees=a@x.com,b@x.com\" --enable")]
    New {
        /// Audit the assessment belongs to
        audit_id: i64,

        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Initial status
        #[arg(long, value_parser = assessment_status)]
        status: Option<tl_core::AssessmentStatus>,

        #[command(flatten)]
        tracker: TrackerArgs,

        #[command(flatten)]
        roles: RoleArgs,
    },

    /// Edit an assessment
    #[command(after_help = "\
Examples:
  tl assessment edit 3 --status in_review
  tl assessment edit 3 --priority P1 --severity S1
  tl assessment edit 3 --replace --enable --priority P1")]
    Edit {
        id: i64,

        #[arg(long, value_parser = non_empty_string)]
        title: Option<String>,

        #[arg(long, value_parser = assessment_status)]
        status: Option<tl_core::AssessmentStatus>,

        #[command(flatten)]
        tracker: TrackerArgs,

        /// Replace the whole issue tracker bag instead of merging
        #[arg(long)]
        replace: bool,
    },

    /// Replace the access control list of an assessment
    Acl {
        id: i64,

        #[command(flatten)]
        roles: RoleArgs,
    },

    /// Show an assessment
    Show {
        id: i64,

        /// Output format
        #[arg(long, short = 'o', value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Delete an assessment (the tracker issue is left as is)
    Delete { id: i64 },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
