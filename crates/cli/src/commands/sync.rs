// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::OutputFormat;
use crate::display::format_sync_report;
use crate::error::{Error, Result};
use crate::sync::{sync_issue_tracker_statuses, SyncOptions};

use super::{print_json, Context};

pub fn run(batch_size: Option<u64>, output: OutputFormat) -> Result<()> {
    let ctx = Context::open()?;
    let client = ctx.client().ok_or(Error::TrackerNotConfigured)?;

    let batch_size = match batch_size {
        Some(n) => usize::try_from(n)
            .map_err(|_| Error::InvalidInput(format!("batch size {n} is too large")))?,
        None => ctx.config.issue_tracker.search_batch_size,
    };
    let report = sync_issue_tracker_statuses(&ctx.db, client, &SyncOptions { batch_size })?;

    match output {
        OutputFormat::Text => println!("{}", format_sync_report(&report)),
        OutputFormat::Json => print_json(&report)?,
    }
    Ok(())
}
