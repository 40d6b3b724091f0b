/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for entity enums

use entity::*;
use sea_orm::ActiveEnum;

#[test]
fn test_user_role_values() {
    assert_eq!(user::UserRole::Student.to_value(), 0);
    assert_eq!(user::UserRole::Recruiter.to_value(), 1);
    assert_eq!(
        user::UserRole::try_from_value(&1).unwrap(),
        user::UserRole::Recruiter
    );
    assert!(user::UserRole::try_from_value(&7).is_err());
    assert_eq!(user::UserRole::default(), user::UserRole::Student);
}

#[test]
fn test_user_role_serde() {
    assert_eq!(
        serde_json::to_string(&user::UserRole::Recruiter).unwrap(),
        "\"recruiter\""
    );
    assert_eq!(
        serde_json::from_str::<user::UserRole>("\"student\"").unwrap(),
        user::UserRole::Student
    );
}

#[test]
fn test_application_status_values() {
    assert_eq!(application::ApplicationStatus::Pending.to_value(), 0);
    assert_eq!(application::ApplicationStatus::Rejected.to_value(), 2);
    assert_eq!(
        application::ApplicationStatus::default(),
        application::ApplicationStatus::Pending
    );
}
