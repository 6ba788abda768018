// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::cell::RefCell;
use std::collections::VecDeque;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

use tracklink::client::{
    CreatedIssue, IssueUpdate, NewIssue, SearchPage, SearchQuery,
};
use tracklink::{ClientError, TrackerClient};

pub fn tl() -> Command {
    cargo_bin_cmd!("tl")
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    tl().arg("init").current_dir(temp.path()).assert().success();
    temp
}

/// Run `tl` in `temp` and return stdout, asserting success.
pub fn run_ok(temp: &TempDir, args: &[&str]) -> String {
    let output = tl().args(args).current_dir(temp.path()).output().unwrap();
    assert!(
        output.status.success(),
        "tl {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Tracker client that records every call and answers from canned data.
#[derive(Default)]
pub struct FakeTracker {
    pub created: RefCell<Vec<NewIssue>>,
    pub updated: RefCell<Vec<(String, IssueUpdate)>>,
    pub searches: RefCell<Vec<SearchQuery>>,
    pub issue_id: Option<String>,
    pub pages: RefCell<VecDeque<SearchPage>>,
}

impl FakeTracker {
    pub fn returning_id(issue_id: &str) -> Self {
        FakeTracker {
            issue_id: Some(issue_id.to_string()),
            ..Default::default()
        }
    }

    pub fn push_page(&self, page: SearchPage) {
        self.pages.borrow_mut().push_back(page);
    }
}

impl TrackerClient for FakeTracker {
    fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue, ClientError> {
        self.created.borrow_mut().push(issue.clone());
        match &self.issue_id {
            Some(issue_id) => Ok(CreatedIssue {
                issue_id: issue_id.clone(),
            }),
            None => Err(ClientError::Status {
                code: 500,
                body: "unavailable".to_string(),
            }),
        }
    }

    fn update_issue(&self, issue_id: &str, update: &IssueUpdate) -> Result<(), ClientError> {
        self.updated
            .borrow_mut()
            .push((issue_id.to_string(), update.clone()));
        Ok(())
    }

    fn search(&self, query: &SearchQuery) -> Result<SearchPage, ClientError> {
        self.searches.borrow_mut().push(query.clone());
        Ok(self.pages.borrow_mut().pop_front().unwrap_or_default())
    }
}
