// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Tests for the public `run()` function.
//!
//! Most commands need a `.tracklink/` directory found from the current
//! directory, so they are covered by the integration tests that run the
//! binary. Here we check the routes that fail before touching the project.

use super::*;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_run_init_in_given_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().to_string_lossy().to_string();

    run(Command::Init {
        path: Some(path),
        app_url: None,
    })
    .unwrap();

    assert!(temp.path().join(".tracklink/config.toml").is_file());
}

#[test]
fn test_run_init_twice_reports_already_initialized() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().to_string_lossy().to_string();
    run(Command::Init {
        path: Some(path.clone()),
        app_url: None,
    })
    .unwrap();

    let err = run(Command::Init {
        path: Some(path),
        app_url: None,
    })
    .unwrap_err();

    assert!(matches!(
        err,
        Error::AlreadyInitialized(ref p) if PathBuf::from(p).ends_with(".tracklink")
    ));
}
