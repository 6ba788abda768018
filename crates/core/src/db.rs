// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed storage for the audit object model.
//!
//! The [`Database`] struct provides all data access operations for people,
//! audits, assessments, access control and issue tracker records.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

use crate::acl::{AccessControlRole, AclEntry, AclSpec, Person, BUILTIN_ROLES};
use crate::error::{Error, Result};
use crate::object::{Assessment, AssessmentStatus, Audit, ObjectRef, ObjectType};
use crate::tracker::{IssueTrackerInfo, IssueTrackerIssue};

/// SQL schema for the tracklink database.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS people (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL UNIQUE,
    name TEXT,
    created_at TEXT NOT NULL
);

-- Audits carry the default issue tracker bag for their assessments
CREATE TABLE IF NOT EXISTS audits (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    it_enabled INTEGER NOT NULL DEFAULT 0,
    it_component_id TEXT,
    it_hotlist_id TEXT,
    it_issue_type TEXT,
    it_priority TEXT,
    it_severity TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS assessments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    audit_id INTEGER NOT NULL,
    title TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'Not Started',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (audit_id) REFERENCES audits(id)
);

CREATE TABLE IF NOT EXISTS access_control_roles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    object_type TEXT NOT NULL,
    internal INTEGER NOT NULL DEFAULT 0,
    UNIQUE (name, object_type)
);

-- object_type/object_id is polymorphic, so no foreign key on the object
CREATE TABLE IF NOT EXISTS access_control_list (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    person_id INTEGER NOT NULL,
    role_id INTEGER NOT NULL,
    object_type TEXT NOT NULL,
    object_id INTEGER NOT NULL,
    UNIQUE (person_id, role_id, object_type, object_id),
    FOREIGN KEY (person_id) REFERENCES people(id),
    FOREIGN KEY (role_id) REFERENCES access_control_roles(id)
);

CREATE TABLE IF NOT EXISTS issuetracker_issues (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    object_type TEXT NOT NULL,
    object_id INTEGER NOT NULL,
    title TEXT NOT NULL,
    issue_id TEXT,
    issue_url TEXT,
    enabled INTEGER NOT NULL DEFAULT 0,
    component_id TEXT,
    hotlist_id TEXT,
    issue_type TEXT,
    priority TEXT,
    severity TEXT,
    UNIQUE (object_type, object_id)
);

CREATE INDEX IF NOT EXISTS idx_assessments_audit ON assessments(audit_id);
CREATE INDEX IF NOT EXISTS idx_acl_object ON access_control_list(object_type, object_id);
CREATE INDEX IF NOT EXISTS idx_iti_enabled ON issuetracker_issues(object_type, enabled);
"#;

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid value '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

/// Run schema creation and all migrations on a database connection.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    migrate_seed_builtin_roles(conn)?;
    Ok(())
}

/// Migration: insert any built-in role that is missing.
fn migrate_seed_builtin_roles(conn: &Connection) -> Result<()> {
    let mut stmt = conn.prepare(
        "INSERT OR IGNORE INTO access_control_roles (name, object_type, internal)
         VALUES (?1, ?2, 1)",
    )?;
    for (object_type, name) in BUILTIN_ROLES {
        stmt.execute(params![name, object_type.as_str()])?;
    }
    Ok(())
}

const PERSON_COLUMNS: &str = "id, email, name";
const AUDIT_COLUMNS: &str = "id, title, it_enabled, it_component_id, it_hotlist_id,
    it_issue_type, it_priority, it_severity, created_at, updated_at";
const ASSESSMENT_COLUMNS: &str = "id, audit_id, title, status, created_at, updated_at";
const ROLE_COLUMNS: &str = "id, name, object_type, internal";
const ITI_COLUMNS: &str = "id, object_type, object_id, title, issue_id, issue_url, enabled,
    component_id, hotlist_id, issue_type, priority, severity";

fn person_from_row(row: &Row<'_>) -> rusqlite::Result<Person> {
    Ok(Person {
        id: row.get(0)?,
        email: row.get(1)?,
        name: row.get(2)?,
    })
}

fn audit_from_row(row: &Row<'_>) -> rusqlite::Result<Audit> {
    let created_str: String = row.get(8)?;
    let updated_str: String = row.get(9)?;
    Ok(Audit {
        id: row.get(0)?,
        title: row.get(1)?,
        issue_tracker: IssueTrackerInfo {
            enabled: row.get(2)?,
            component_id: row.get(3)?,
            hotlist_id: row.get(4)?,
            issue_type: row.get(5)?,
            priority: row.get(6)?,
            severity: row.get(7)?,
        },
        created_at: parse_timestamp(&created_str, "created_at")?,
        updated_at: parse_timestamp(&updated_str, "updated_at")?,
    })
}

fn assessment_from_row(row: &Row<'_>) -> rusqlite::Result<Assessment> {
    let status_str: String = row.get(3)?;
    let created_str: String = row.get(4)?;
    let updated_str: String = row.get(5)?;
    Ok(Assessment {
        id: row.get(0)?,
        audit_id: row.get(1)?,
        title: row.get(2)?,
        status: parse_db::<AssessmentStatus>(&status_str, "status")?,
        created_at: parse_timestamp(&created_str, "created_at")?,
        updated_at: parse_timestamp(&updated_str, "updated_at")?,
    })
}

fn role_from_row(row: &Row<'_>) -> rusqlite::Result<AccessControlRole> {
    let type_str: String = row.get(2)?;
    Ok(AccessControlRole {
        id: row.get(0)?,
        name: row.get(1)?,
        object_type: parse_db(&type_str, "object_type")?,
        internal: row.get(3)?,
    })
}

fn iti_from_row(row: &Row<'_>) -> rusqlite::Result<IssueTrackerIssue> {
    let type_str: String = row.get(1)?;
    Ok(IssueTrackerIssue {
        id: row.get(0)?,
        object: ObjectRef {
            object_type: parse_db(&type_str, "object_type")?,
            id: row.get(2)?,
        },
        title: row.get(3)?,
        issue_id: row.get(4)?,
        issue_url: row.get(5)?,
        info: IssueTrackerInfo {
            enabled: row.get(6)?,
            component_id: row.get(7)?,
            hotlist_id: row.get(8)?,
            issue_type: row.get(9)?,
            priority: row.get(10)?,
            severity: row.get(11)?,
        },
    })
}

/// SQLite database connection with object model operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    // ─────────────────────────────────────────────────────────────────────
    // People
    // ─────────────────────────────────────────────────────────────────────

    /// Create a person. Emails are unique.
    pub fn create_person(&self, email: &str, name: Option<&str>) -> Result<Person> {
        let email = email.trim();
        if email.is_empty() {
            return Err(Error::InvalidInput("email cannot be empty".to_string()));
        }
        if self.person_by_email(email)?.is_some() {
            return Err(Error::DuplicateEmail(email.to_string()));
        }
        self.conn.execute(
            "INSERT INTO people (email, name, created_at) VALUES (?1, ?2, ?3)",
            params![email, name, Utc::now().to_rfc3339()],
        )?;
        Ok(Person {
            id: self.conn.last_insert_rowid(),
            email: email.to_string(),
            name: name.map(str::to_string),
        })
    }

    pub fn get_person(&self, id: i64) -> Result<Person> {
        self.conn
            .query_row(
                &format!("SELECT {PERSON_COLUMNS} FROM people WHERE id = ?1"),
                params![id],
                person_from_row,
            )
            .optional()?
            .ok_or_else(|| Error::PersonNotFound(id.to_string()))
    }

    pub fn person_by_email(&self, email: &str) -> Result<Option<Person>> {
        Ok(self
            .conn
            .query_row(
                &format!("SELECT {PERSON_COLUMNS} FROM people WHERE email = ?1"),
                params![email],
                person_from_row,
            )
            .optional()?)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Audits
    // ─────────────────────────────────────────────────────────────────────

    pub fn create_audit(&self, title: &str, info: &IssueTrackerInfo) -> Result<Audit> {
        let now = Utc::now();
        self.conn.execute(
            "INSERT INTO audits (title, it_enabled, it_component_id, it_hotlist_id,
             it_issue_type, it_priority, it_severity, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
            params![
                title,
                info.enabled,
                info.component_id,
                info.hotlist_id,
                info.issue_type,
                info.priority,
                info.severity,
                now.to_rfc3339(),
            ],
        )?;
        self.get_audit(self.conn.last_insert_rowid())
    }

    pub fn get_audit(&self, id: i64) -> Result<Audit> {
        self.conn
            .query_row(
                &format!("SELECT {AUDIT_COLUMNS} FROM audits WHERE id = ?1"),
                params![id],
                audit_from_row,
            )
            .optional()?
            .ok_or_else(|| Error::not_found("audit", id))
    }

    /// Persist title and issue tracker bag of an audit.
    pub fn update_audit(&self, audit: &Audit) -> Result<()> {
        let info = &audit.issue_tracker;
        let affected = self.conn.execute(
            "UPDATE audits SET title = ?1, it_enabled = ?2, it_component_id = ?3,
             it_hotlist_id = ?4, it_issue_type = ?5, it_priority = ?6, it_severity = ?7,
             updated_at = ?8 WHERE id = ?9",
            params![
                audit.title,
                info.enabled,
                info.component_id,
                info.hotlist_id,
                info.issue_type,
                info.priority,
                info.severity,
                Utc::now().to_rfc3339(),
                audit.id,
            ],
        )?;
        if affected == 0 {
            return Err(Error::not_found("audit", audit.id));
        }
        Ok(())
    }

    pub fn delete_audit(&self, id: i64) -> Result<()> {
        let affected = self
            .conn
            .execute("DELETE FROM audits WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(Error::not_found("audit", id));
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Assessments
    // ─────────────────────────────────────────────────────────────────────

    pub fn create_assessment(
        &self,
        audit_id: i64,
        title: &str,
        status: AssessmentStatus,
    ) -> Result<Assessment> {
        // Surface a clean error instead of a foreign key violation
        self.get_audit(audit_id)?;
        let now = Utc::now();
        self.conn.execute(
            "INSERT INTO assessments (audit_id, title, status, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)",
            params![audit_id, title, status.as_str(), now.to_rfc3339()],
        )?;
        self.get_assessment(self.conn.last_insert_rowid())
    }

    pub fn get_assessment(&self, id: i64) -> Result<Assessment> {
        self.conn
            .query_row(
                &format!("SELECT {ASSESSMENT_COLUMNS} FROM assessments WHERE id = ?1"),
                params![id],
                assessment_from_row,
            )
            .optional()?
            .ok_or_else(|| Error::not_found("assessment", id))
    }

    pub fn update_assessment(&self, asmt: &Assessment) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE assessments SET title = ?1, status = ?2, updated_at = ?3 WHERE id = ?4",
            params![
                asmt.title,
                asmt.status.as_str(),
                Utc::now().to_rfc3339(),
                asmt.id
            ],
        )?;
        if affected == 0 {
            return Err(Error::not_found("assessment", asmt.id));
        }
        Ok(())
    }

    pub fn delete_assessment(&self, id: i64) -> Result<()> {
        let affected = self
            .conn
            .execute("DELETE FROM assessments WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(Error::not_found("assessment", id));
        }
        Ok(())
    }

    /// List the assessments of an audit, ordered by id.
    pub fn list_assessments(&self, audit_id: i64) -> Result<Vec<Assessment>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ASSESSMENT_COLUMNS} FROM assessments WHERE audit_id = ?1 ORDER BY id"
        ))?;
        let rows = stmt
            .query_map(params![audit_id], assessment_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Roles and ACL
    // ─────────────────────────────────────────────────────────────────────

    pub fn create_role(
        &self,
        name: &str,
        object_type: ObjectType,
        internal: bool,
    ) -> Result<AccessControlRole> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput("role name cannot be empty".to_string()));
        }
        if self.role_by_name(object_type, name).is_ok() {
            return Err(Error::InvalidInput(format!(
                "role '{name}' already exists on {object_type}"
            )));
        }
        self.conn.execute(
            "INSERT INTO access_control_roles (name, object_type, internal) VALUES (?1, ?2, ?3)",
            params![name, object_type.as_str(), internal],
        )?;
        Ok(AccessControlRole {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            object_type,
            internal,
        })
    }

    pub fn get_role(&self, id: i64) -> Result<AccessControlRole> {
        self.conn
            .query_row(
                &format!("SELECT {ROLE_COLUMNS} FROM access_control_roles WHERE id = ?1"),
                params![id],
                role_from_row,
            )
            .optional()?
            .ok_or_else(|| Error::not_found("role", id))
    }

    pub fn role_by_name(&self, object_type: ObjectType, name: &str) -> Result<AccessControlRole> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {ROLE_COLUMNS} FROM access_control_roles
                     WHERE object_type = ?1 AND name = ?2"
                ),
                params![object_type.as_str(), name],
                role_from_row,
            )
            .optional()?
            .ok_or_else(|| Error::RoleNotFound {
                name: name.to_string(),
                object_type: object_type.to_string(),
            })
    }

    /// List roles, optionally restricted to one object type.
    pub fn list_roles(&self, object_type: Option<ObjectType>) -> Result<Vec<AccessControlRole>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ROLE_COLUMNS} FROM access_control_roles
             WHERE ?1 IS NULL OR object_type = ?1
             ORDER BY object_type, id"
        ))?;
        let rows = stmt
            .query_map(params![object_type.map(|t| t.as_str())], role_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn check_role_scope(&self, role_id: i64, object: ObjectRef) -> Result<()> {
        let role = self.get_role(role_id)?;
        if role.object_type != object.object_type {
            return Err(Error::RoleMismatch {
                role: role.name,
                expected: role.object_type.to_string(),
                actual: object.object_type.to_string(),
            });
        }
        Ok(())
    }

    /// Assign a person to a role on an object.
    pub fn add_acl_entry(&self, person_id: i64, role_id: i64, object: ObjectRef) -> Result<AclEntry> {
        self.get_person(person_id)?;
        self.check_role_scope(role_id, object)?;
        self.conn.execute(
            "INSERT OR IGNORE INTO access_control_list (person_id, role_id, object_type, object_id)
             VALUES (?1, ?2, ?3, ?4)",
            params![person_id, role_id, object.object_type.as_str(), object.id],
        )?;
        let id: i64 = self.conn.query_row(
            "SELECT id FROM access_control_list
             WHERE person_id = ?1 AND role_id = ?2 AND object_type = ?3 AND object_id = ?4",
            params![person_id, role_id, object.object_type.as_str(), object.id],
            |row| row.get(0),
        )?;
        Ok(AclEntry {
            id,
            person_id,
            role_id,
            object,
        })
    }

    /// Replace the whole ACL of an object with `specs`, atomically.
    ///
    /// Joins the caller's transaction when one is already open.
    pub fn replace_acl(&self, object: ObjectRef, specs: &[AclSpec]) -> Result<()> {
        let tx = if self.conn.is_autocommit() {
            Some(self.conn.unchecked_transaction()?)
        } else {
            None
        };
        self.delete_acl(object)?;
        for spec in specs {
            self.add_acl_entry(spec.person_id, spec.role_id, object)?;
        }
        if let Some(tx) = tx {
            tx.commit()?;
        }
        Ok(())
    }

    pub fn acl_entries(&self, object: ObjectRef) -> Result<Vec<AclEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, person_id, role_id FROM access_control_list
             WHERE object_type = ?1 AND object_id = ?2 ORDER BY id",
        )?;
        let rows = stmt
            .query_map(params![object.object_type.as_str(), object.id], |row| {
                Ok(AclEntry {
                    id: row.get(0)?,
                    person_id: row.get(1)?,
                    role_id: row.get(2)?,
                    object,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Emails of everyone holding `role_name` on `object`, sorted ascending.
    pub fn acl_emails(&self, object: ObjectRef, role_name: &str) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.email FROM access_control_list acl
             JOIN access_control_roles r ON r.id = acl.role_id
             JOIN people p ON p.id = acl.person_id
             WHERE acl.object_type = ?1 AND acl.object_id = ?2 AND r.name = ?3
             ORDER BY p.email",
        )?;
        let rows = stmt
            .query_map(
                params![object.object_type.as_str(), object.id, role_name],
                |row| row.get(0),
            )?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    pub fn delete_acl(&self, object: ObjectRef) -> Result<()> {
        self.conn.execute(
            "DELETE FROM access_control_list WHERE object_type = ?1 AND object_id = ?2",
            params![object.object_type.as_str(), object.id],
        )?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Issue tracker records
    // ─────────────────────────────────────────────────────────────────────

    /// Insert or update the record for `record.object`, returning the stored row.
    pub fn upsert_issue_tracker_issue(
        &self,
        record: &IssueTrackerIssue,
    ) -> Result<IssueTrackerIssue> {
        let info = &record.info;
        self.conn.execute(
            "INSERT INTO issuetracker_issues (object_type, object_id, title, issue_id, issue_url,
             enabled, component_id, hotlist_id, issue_type, priority, severity)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
             ON CONFLICT (object_type, object_id) DO UPDATE SET
                title = excluded.title,
                issue_id = excluded.issue_id,
                issue_url = excluded.issue_url,
                enabled = excluded.enabled,
                component_id = excluded.component_id,
                hotlist_id = excluded.hotlist_id,
                issue_type = excluded.issue_type,
                priority = excluded.priority,
                severity = excluded.severity",
            params![
                record.object.object_type.as_str(),
                record.object.id,
                record.title,
                record.issue_id,
                record.issue_url,
                info.enabled,
                info.component_id,
                info.hotlist_id,
                info.issue_type,
                info.priority,
                info.severity,
            ],
        )?;
        self.issue_tracker_issue_for(record.object)?
            .ok_or_else(|| Error::not_found("issue tracker record", record.object))
    }

    pub fn issue_tracker_issue_for(&self, object: ObjectRef) -> Result<Option<IssueTrackerIssue>> {
        Ok(self
            .conn
            .query_row(
                &format!(
                    "SELECT {ITI_COLUMNS} FROM issuetracker_issues
                     WHERE object_type = ?1 AND object_id = ?2"
                ),
                params![object.object_type.as_str(), object.id],
                iti_from_row,
            )
            .optional()?)
    }

    /// Enabled records of `object_type` that are linked to an external issue.
    pub fn enabled_issue_tracker_issues(
        &self,
        object_type: ObjectType,
    ) -> Result<Vec<IssueTrackerIssue>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ITI_COLUMNS} FROM issuetracker_issues
             WHERE object_type = ?1 AND enabled = 1 AND issue_id IS NOT NULL
             ORDER BY id"
        ))?;
        let rows = stmt
            .query_map(params![object_type.as_str()], iti_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn delete_issue_tracker_issue(&self, object: ObjectRef) -> Result<()> {
        self.conn.execute(
            "DELETE FROM issuetracker_issues WHERE object_type = ?1 AND object_id = ?2",
            params![object.object_type.as_str(), object.id],
        )?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
