// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.tracklink/config.toml` and includes:
//! - `app_url`: Root URL of the application, used for links back to assessments
//! - `workspace`: Optional path to store the database in a different location
//! - `[issue_tracker]`: Connection settings for the external issue tracker

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::HttpTrackerClient;
use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".tracklink";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "tracklink.db";

/// Environment variable that overrides `issue_tracker.token`.
pub const TOKEN_ENV_VAR: &str = "TRACKLINK_TRACKER_TOKEN";

/// Project configuration stored in `.tracklink/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Root URL of the application; assessment links are built from it.
    #[serde(default = "default_app_url")]
    pub app_url: String,
    /// Optional path for the database (relative to project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    /// External issue tracker settings.
    #[serde(default)]
    pub issue_tracker: IssueTrackerConfig,
}

/// Settings for the external issue tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueTrackerConfig {
    /// Global switch. When false no tracker calls are made at all.
    #[serde(default)]
    pub enabled: bool,
    /// Base URL of the tracker API (e.g. `https://tracker.example.com/api/`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Prefix used to build the browser URL of a created issue.
    #[serde(default = "default_issue_url_base")]
    pub issue_url_base: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Bearer token sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Number of issue ids per search request during status sync (default: 100).
    #[serde(default = "default_search_batch_size")]
    pub search_batch_size: usize,
}

fn default_app_url() -> String {
    "http://localhost:8080/".to_string()
}

fn default_issue_url_base() -> String {
    "http://issuetracker/issues".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_search_batch_size() -> usize {
    100
}

impl Default for IssueTrackerConfig {
    fn default() -> Self {
        IssueTrackerConfig {
            enabled: false,
            endpoint: None,
            issue_url_base: default_issue_url_base(),
            timeout_secs: default_timeout_secs(),
            token: None,
            search_batch_size: default_search_batch_size(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app_url: default_app_url(),
            workspace: None,
            issue_tracker: IssueTrackerConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the given `.tracklink/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the given `.tracklink/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Checks URLs and the enabled/endpoint combination.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.app_url)
            .map_err(|e| Error::Config(format!("invalid app_url '{}': {}", self.app_url, e)))?;

        let tracker = &self.issue_tracker;
        if let Some(endpoint) = &tracker.endpoint {
            url::Url::parse(endpoint).map_err(|e| {
                Error::Config(format!("invalid issue_tracker.endpoint '{}': {}", endpoint, e))
            })?;
        }
        if tracker.enabled && tracker.endpoint.is_none() {
            return Err(Error::Config(
                "issue_tracker.enabled requires issue_tracker.endpoint".to_string(),
            ));
        }
        if tracker.search_batch_size == 0 {
            return Err(Error::Config(
                "issue_tracker.search_batch_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns true if tracker calls should be made.
    pub fn is_tracker_enabled(&self) -> bool {
        self.issue_tracker.enabled && self.issue_tracker.endpoint.is_some()
    }

    /// Token from the environment, falling back to the config file.
    pub fn tracker_token(&self) -> Option<String> {
        std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|t| !t.is_empty())
            .or_else(|| self.issue_tracker.token.clone())
    }

    /// Build the HTTP tracker client, or `None` when the tracker is disabled.
    pub fn tracker_client(&self) -> Result<Option<HttpTrackerClient>> {
        let endpoint = match (&self.issue_tracker.endpoint, self.issue_tracker.enabled) {
            (Some(endpoint), true) => endpoint,
            _ => return Ok(None),
        };
        let client = HttpTrackerClient::new(
            endpoint,
            Duration::from_secs(self.issue_tracker.timeout_secs),
            self.tracker_token(),
        )?;
        Ok(Some(client))
    }
}

/// Find the .tracklink directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    let current = std::env::current_dir()?;
    find_work_dir_from(&current)
}

/// Find the .tracklink directory by walking up from `start`.
pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the database path from config
pub fn get_db_path(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.workspace {
        Some(workspace) => {
            let workspace_path = Path::new(workspace);
            if workspace_path.is_absolute() {
                workspace_path.join(DB_FILE_NAME)
            } else {
                // Relative to work_dir's parent (the project root)
                work_dir
                    .parent()
                    .unwrap_or(work_dir)
                    .join(workspace)
                    .join(DB_FILE_NAME)
            }
        }
        None => work_dir.join(DB_FILE_NAME),
    }
}

/// Initialize a new .tracklink directory at the given path
pub fn init_work_dir(path: &Path, config: &Config) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    config.validate()?;
    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;

    Ok(work_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
