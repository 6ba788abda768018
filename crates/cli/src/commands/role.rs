// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tl_core::{AccessControlRole, Database, ObjectType};

use crate::cli::OutputFormat;
use crate::display::format_role;
use crate::error::Result;

use super::{print_json, Context};

pub fn add(name: &str, object_type: ObjectType) -> Result<()> {
    let ctx = Context::open()?;
    let role = add_impl(&ctx.db, name, object_type)?;
    println!("Added role {} '{}' on {}", role.id, role.name, role.object_type);
    Ok(())
}

/// Custom roles are never internal.
pub(crate) fn add_impl(
    db: &Database,
    name: &str,
    object_type: ObjectType,
) -> Result<AccessControlRole> {
    Ok(db.create_role(name, object_type, false)?)
}

pub fn list(object_type: Option<ObjectType>, output: OutputFormat) -> Result<()> {
    let ctx = Context::open()?;
    let roles = ctx.db.list_roles(object_type)?;
    match output {
        OutputFormat::Json => print_json(&roles)?,
        OutputFormat::Text => {
            for role in &roles {
                println!("{}", format_role(role));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "role_tests.rs"]
mod tests;
