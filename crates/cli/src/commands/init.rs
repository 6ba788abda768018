// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use tl_core::Database;

use crate::config::{get_db_path, init_work_dir, Config};
use crate::error::Result;

pub fn run(path: Option<String>, app_url: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    let work_dir = run_impl(&target_path, app_url)?;
    println!("Initialized tracklink at {}", work_dir.display());
    Ok(())
}

/// Create the work dir, write config and create the database.
pub(crate) fn run_impl(target_path: &Path, app_url: Option<String>) -> Result<PathBuf> {
    let mut config = Config::default();
    if let Some(url) = app_url {
        config.app_url = url;
    }

    let work_dir = init_work_dir(target_path, &config)?;
    let db_path = get_db_path(&work_dir, &config);
    Database::open(&db_path)?;
    tracing::info!(path = %work_dir.display(), "initialized");
    Ok(work_dir)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
