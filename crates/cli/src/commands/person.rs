// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tl_core::{Database, Person};

use crate::error::Result;

use super::Context;

pub fn add(email: &str, name: Option<&str>) -> Result<()> {
    let ctx = Context::open()?;
    let person = add_impl(&ctx.db, email, name)?;
    println!("Added person {} ({})", person.id, person.email);
    Ok(())
}

pub(crate) fn add_impl(db: &Database, email: &str, name: Option<&str>) -> Result<Person> {
    let name = name.map(str::trim).filter(|n| !n.is_empty());
    Ok(db.create_person(email, name)?)
}

#[cfg(test)]
#[path = "person_tests.rs"]
mod tests;
