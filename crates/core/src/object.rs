// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Trackable objects: audits and the assessments that belong to them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::tracker::IssueTrackerInfo;

/// Kind of object that can carry an ACL and an issue tracker bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    Audit,
    Assessment,
}

impl ObjectType {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Audit => "Audit",
            ObjectType::Assessment => "Assessment",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "audit" => Ok(ObjectType::Audit),
            "assessment" => Ok(ObjectType::Assessment),
            _ => Err(Error::InvalidObjectType(s.to_string())),
        }
    }
}

/// Reference to a stored object by type and id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectRef {
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub id: i64,
}

impl ObjectRef {
    pub fn audit(id: i64) -> Self {
        ObjectRef {
            object_type: ObjectType::Audit,
            id,
        }
    }

    pub fn assessment(id: i64) -> Self {
        ObjectRef {
            object_type: ObjectType::Assessment,
            id,
        }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.object_type, self.id)
    }
}

/// Workflow status of an assessment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentStatus {
    /// Initial state for new assessments.
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    /// Waiting for a verifier.
    #[serde(rename = "In Review")]
    InReview,
    Completed,
    /// Sent back by a verifier.
    #[serde(rename = "Rework Needed")]
    ReworkNeeded,
    Deprecated,
}

impl AssessmentStatus {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentStatus::NotStarted => "Not Started",
            AssessmentStatus::InProgress => "In Progress",
            AssessmentStatus::InReview => "In Review",
            AssessmentStatus::Completed => "Completed",
            AssessmentStatus::ReworkNeeded => "Rework Needed",
            AssessmentStatus::Deprecated => "Deprecated",
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssessmentStatus {
    type Err = Error;

    /// Accepts both the display form ("In Review") and snake case ("in_review").
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace(['_', '-'], " ").as_str() {
            "not started" => Ok(AssessmentStatus::NotStarted),
            "in progress" => Ok(AssessmentStatus::InProgress),
            "in review" => Ok(AssessmentStatus::InReview),
            "completed" => Ok(AssessmentStatus::Completed),
            "rework needed" => Ok(AssessmentStatus::ReworkNeeded),
            "deprecated" => Ok(AssessmentStatus::Deprecated),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// An audit groups assessments and holds the default issue tracker settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audit {
    pub id: i64,
    pub title: String,
    pub issue_tracker: IssueTrackerInfo,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Audit {
    pub fn object_ref(&self) -> ObjectRef {
        ObjectRef::audit(self.id)
    }
}

/// A unit of audit work that may be mirrored to the external tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: i64,
    pub audit_id: i64,
    pub title: String,
    pub status: AssessmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Assessment {
    pub fn object_ref(&self) -> ObjectRef {
        ObjectRef::assessment(self.id)
    }
}

#[cfg(test)]
#[path = "object_tests.rs"]
mod tests;
