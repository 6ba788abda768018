// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP implementation of [`TrackerClient`] using reqwest's blocking client.
//!
//! Endpoints, relative to the configured base URL:
//! - `POST issues` creates an issue
//! - `PUT issues/{id}` updates an issue
//! - `POST issues:search` searches by id

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use super::types::{CreatedIssue, IssueUpdate, NewIssue, SearchPage, SearchQuery};
use super::{ClientError, ClientResult, TrackerClient};

/// Tracker client speaking JSON over HTTP.
pub struct HttpTrackerClient {
    client: Client,
    /// Base URL, always ending in `/`.
    endpoint: Url,
    token: Option<String>,
}

impl HttpTrackerClient {
    pub fn new(endpoint: &str, timeout: Duration, token: Option<String>) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tracklink/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpTrackerClient {
            client,
            endpoint: normalize_endpoint(endpoint)?,
            token,
        })
    }

    /// Resolve a path relative to the endpoint.
    pub(crate) fn url(&self, path: &str) -> ClientResult<Url> {
        // "./" keeps paths like "issues:search" from parsing as a URL scheme
        Ok(self.endpoint.join(&format!("./{path}"))?)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        let response = self.authorize(request).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClientError::Status {
                code: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let body = self.send(request)?.text()?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Parse the endpoint and make sure relative joins stay underneath it.
fn normalize_endpoint(endpoint: &str) -> ClientResult<Url> {
    let mut url = Url::parse(endpoint)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

impl TrackerClient for HttpTrackerClient {
    fn create_issue(&self, issue: &NewIssue) -> ClientResult<CreatedIssue> {
        let url = self.url("issues")?;
        tracing::debug!(%url, title = %issue.title, "creating tracker issue");
        self.send_json(self.client.post(url).json(issue))
    }

    fn update_issue(&self, issue_id: &str, update: &IssueUpdate) -> ClientResult<()> {
        let url = self.url(&format!("issues/{issue_id}"))?;
        tracing::debug!(%url, "updating tracker issue");
        self.send(self.client.put(url).json(update))?;
        Ok(())
    }

    fn search(&self, query: &SearchQuery) -> ClientResult<SearchPage> {
        let url = self.url("issues:search")?;
        tracing::debug!(%url, ids = query.issue_ids.len(), "searching tracker issues");
        self.send_json(self.client.post(url).json(query))
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
