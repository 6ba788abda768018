// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tl_core::{AccessControlRole, Assessment, Audit, IssueTrackerInfo, IssueTrackerIssue};

use crate::integration::PeopleFields;
use crate::sync::SyncReport;

/// Render an issue tracker bag as `key: value` lines, skipping unset keys.
pub fn format_tracker_info(info: &IssueTrackerInfo) -> Vec<String> {
    let mut lines = vec![format!("enabled: {}", if info.enabled { "yes" } else { "no" })];
    let fields = [
        ("component", &info.component_id),
        ("hotlist", &info.hotlist_id),
        ("type", &info.issue_type),
        ("priority", &info.priority),
        ("severity", &info.severity),
    ];
    for (name, value) in fields {
        if let Some(value) = value {
            lines.push(format!("{name}: {value}"));
        }
    }
    lines
}

pub fn format_audit(audit: &Audit, assessment_count: usize) -> String {
    let mut out = format!("Audit {}: {}\n", audit.id, audit.title);
    out.push_str(&format!("Assessments: {}\n", assessment_count));
    out.push_str("\nIssue tracker:\n");
    for line in format_tracker_info(&audit.issue_tracker) {
        out.push_str(&format!("  {line}\n"));
    }
    out
}

/// Format an assessment with its tracker link and derived people.
pub fn format_assessment(
    asmt: &Assessment,
    record: Option<&IssueTrackerIssue>,
    people: &PeopleFields,
) -> String {
    let mut out = format!("Assessment {}: {}\n", asmt.id, asmt.title);
    out.push_str(&format!("Audit: {}\n", asmt.audit_id));
    out.push_str(&format!("Status: {}\n", asmt.status));

    if let Some(assignee) = &people.assignee {
        out.push_str(&format!("Assignee: {assignee}\n"));
    }
    if !people.ccs.is_empty() {
        out.push_str(&format!("CC: {}\n", people.ccs.join(", ")));
    }
    if let Some(reporter) = &people.reporter {
        out.push_str(&format!("Reporter: {reporter}\n"));
    }

    out.push_str("\nIssue tracker:\n");
    match record {
        None => out.push_str("  not tracked\n"),
        Some(record) => {
            match (&record.issue_id, &record.issue_url) {
                (Some(id), Some(url)) => out.push_str(&format!("  issue: {id} ({url})\n")),
                (Some(id), None) => out.push_str(&format!("  issue: {id}\n")),
                _ => out.push_str("  issue: none\n"),
            }
            for line in format_tracker_info(&record.info) {
                out.push_str(&format!("  {line}\n"));
            }
        }
    }
    out
}

pub fn format_role(role: &AccessControlRole) -> String {
    let kind = if role.internal { "built-in" } else { "custom" };
    format!("{:<4} {:<10} {} ({})", role.id, role.object_type.as_str(), role.name, kind)
}

pub fn format_sync_report(report: &SyncReport) -> String {
    format!(
        "Checked {} issue(s), updated {}, failed {}",
        report.checked, report.updated, report.failed
    )
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
