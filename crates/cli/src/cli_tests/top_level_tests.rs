// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing tests for init, person, role, audit and sync.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use tl_core::ObjectType;
use yare::parameterized;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn init_with_path_and_app_url() {
    let cli = parse(&["tl", "init", "proj", "--app-url", "https://a.example/"]).unwrap();
    match cli.command {
        Command::Init { path, app_url } => {
            assert_eq!(path.as_deref(), Some("proj"));
            assert_eq!(app_url.as_deref(), Some("https://a.example/"));
        }
        _ => panic!("expected init"),
    }
}

#[test]
fn person_add_with_name() {
    let cli = parse(&["tl", "person", "add", "a@example.com", "--name", "Alice"]).unwrap();
    match cli.command {
        Command::Person(PersonCommand::Add { email, name }) => {
            assert_eq!(email, "a@example.com");
            assert_eq!(name.as_deref(), Some("Alice"));
        }
        _ => panic!("expected person add"),
    }
}

#[test]
fn person_add_rejects_blank_email() {
    assert!(parse(&["tl", "person", "add", "  "]).is_err());
}

#[parameterized(
    audit = { "audit", ObjectType::Audit },
    assessment = { "assessment", ObjectType::Assessment },
    upper = { "Assessment", ObjectType::Assessment },
)]
fn role_add_type(value: &str, expected: ObjectType) {
    let cli = parse(&["tl", "role", "add", "Reviewers", "--type", value]).unwrap();
    match cli.command {
        Command::Role(RoleCommand::Add { object_type, .. }) => assert_eq!(object_type, expected),
        _ => panic!("expected role add"),
    }
}

#[test]
fn role_add_unknown_type() {
    assert!(parse(&["tl", "role", "add", "X", "-t", "issue"]).is_err());
}

#[test]
fn role_list_json() {
    let cli = parse(&["tl", "role", "list", "-o", "json"]).unwrap();
    match cli.command {
        Command::Role(RoleCommand::List {
            object_type,
            output,
        }) => {
            assert!(object_type.is_none());
            assert_eq!(output, OutputFormat::Json);
        }
        _ => panic!("expected role list"),
    }
}

#[test]
fn audit_tracker_replace() {
    let cli = parse(&["tl", "audit", "tracker", "4", "--replace", "--enable"]).unwrap();
    match cli.command {
        Command::Audit(AuditCommand::Tracker {
            id,
            tracker,
            replace,
        }) => {
            assert_eq!(id, 4);
            assert!(tracker.enable);
            assert!(replace);
        }
        _ => panic!("expected audit tracker"),
    }
}

#[parameterized(
    default = { &["tl", "sync"], None },
    explicit = { &["tl", "sync", "--batch-size", "20"], Some(20) },
)]
fn sync_batch_size(args: &[&str], expected: Option<u64>) {
    match parse(args).unwrap().command {
        Command::Sync { batch_size, .. } => assert_eq!(batch_size, expected),
        _ => panic!("expected sync"),
    }
}

#[test]
fn sync_rejects_zero_batch_size() {
    assert!(parse(&["tl", "sync", "--batch-size", "0"]).is_err());
}
