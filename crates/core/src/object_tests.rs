// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    audit = { "audit", ObjectType::Audit },
    audit_capitalized = { "Audit", ObjectType::Audit },
    assessment = { "assessment", ObjectType::Assessment },
    assessment_upper = { "ASSESSMENT", ObjectType::Assessment },
)]
fn object_type_parse(input: &str, expected: ObjectType) {
    assert_eq!(input.parse::<ObjectType>().unwrap(), expected);
}

#[test]
fn object_type_parse_invalid() {
    assert!(matches!(
        "control".parse::<ObjectType>(),
        Err(Error::InvalidObjectType(_))
    ));
}

#[test]
fn object_type_round_trips_through_display() {
    for ty in [ObjectType::Audit, ObjectType::Assessment] {
        assert_eq!(ty.to_string().parse::<ObjectType>().unwrap(), ty);
    }
}

#[parameterized(
    not_started = { "Not Started", AssessmentStatus::NotStarted },
    in_progress_snake = { "in_progress", AssessmentStatus::InProgress },
    in_review = { "In Review", AssessmentStatus::InReview },
    completed = { "completed", AssessmentStatus::Completed },
    rework_kebab = { "rework-needed", AssessmentStatus::ReworkNeeded },
    deprecated = { "Deprecated", AssessmentStatus::Deprecated },
)]
fn assessment_status_parse(input: &str, expected: AssessmentStatus) {
    assert_eq!(input.parse::<AssessmentStatus>().unwrap(), expected);
}

#[test]
fn assessment_status_parse_invalid() {
    assert!(matches!(
        "Verified".parse::<AssessmentStatus>(),
        Err(Error::InvalidStatus(_))
    ));
}

#[test]
fn assessment_status_default_is_not_started() {
    assert_eq!(AssessmentStatus::default(), AssessmentStatus::NotStarted);
}

#[test]
fn assessment_status_serializes_display_form() {
    let json = serde_json::to_string(&AssessmentStatus::ReworkNeeded).unwrap();
    assert_eq!(json, "\"Rework Needed\"");
}

#[test]
fn object_ref_display() {
    assert_eq!(ObjectRef::assessment(7).to_string(), "Assessment 7");
    assert_eq!(ObjectRef::audit(1).to_string(), "Audit 1");
}
