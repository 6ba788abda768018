// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recording tracker client shared by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::{
    ClientError, ClientResult, CreatedIssue, IssueUpdate, NewIssue, SearchPage, SearchQuery,
    TrackerClient,
};

/// Records every call and answers from canned responses.
#[derive(Default)]
pub struct RecordingClient {
    pub created: RefCell<Vec<NewIssue>>,
    pub updated: RefCell<Vec<(String, IssueUpdate)>>,
    pub searches: RefCell<Vec<SearchQuery>>,
    /// Issue id returned by `create_issue`; `None` makes creation fail.
    pub next_issue_id: RefCell<Option<String>>,
    /// Pages returned by successive `search` calls.
    pub pages: RefCell<VecDeque<ClientResult<SearchPage>>>,
    pub fail_updates: bool,
}

impl RecordingClient {
    pub fn returning_id(issue_id: &str) -> Self {
        let client = RecordingClient::default();
        *client.next_issue_id.borrow_mut() = Some(issue_id.to_string());
        client
    }

    pub fn with_pages(pages: Vec<ClientResult<SearchPage>>) -> Self {
        let client = RecordingClient::default();
        *client.pages.borrow_mut() = pages.into();
        client
    }
}

fn unavailable() -> ClientError {
    ClientError::Status {
        code: 503,
        body: "unavailable".to_string(),
    }
}

impl TrackerClient for RecordingClient {
    fn create_issue(&self, issue: &NewIssue) -> ClientResult<CreatedIssue> {
        self.created.borrow_mut().push(issue.clone());
        match self.next_issue_id.borrow().clone() {
            Some(issue_id) => Ok(CreatedIssue { issue_id }),
            None => Err(unavailable()),
        }
    }

    fn update_issue(&self, issue_id: &str, update: &IssueUpdate) -> ClientResult<()> {
        self.updated
            .borrow_mut()
            .push((issue_id.to_string(), update.clone()));
        if self.fail_updates {
            return Err(unavailable());
        }
        Ok(())
    }

    fn search(&self, query: &SearchQuery) -> ClientResult<SearchPage> {
        self.searches.borrow_mut().push(query.clone());
        self.pages
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(SearchPage::default()))
    }
}
