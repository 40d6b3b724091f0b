/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for user entity

use chrono::NaiveDate;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

fn test_user(user_id: Uuid) -> user::Model {
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    user::Model {
        id: user_id,
        fullname: "Test User".to_owned(),
        email: "test@example.com".to_owned(),
        phone_number: "+49 123 456789".to_owned(),
        password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_owned(),
        profile_bio: None,
        profile_skills: Some("rust,sql".to_owned()),
        profile_resume: None,
        profile_resume_original_name: None,
        profile_photo: None,
        role: user::UserRole::Student,
        created_at: naive_date,
    }
}

#[tokio::test]
async fn test_user_entity_basic() -> Result<(), DbErr> {
    let user_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![test_user(user_id)]])
        .into_connection();

    let result = user::Entity::find_by_id(user_id).one(&db).await?;

    assert!(result.is_some());
    let user = result.unwrap();
    assert_eq!(user.fullname, "Test User");
    assert_eq!(user.email, "test@example.com");
    assert_eq!(user.role, user::UserRole::Student);

    Ok(())
}

#[tokio::test]
async fn test_user_find_by_email() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();

    let result = user::Entity::find()
        .filter(user::Column::Email.eq("missing@example.com"))
        .one(&db)
        .await?;

    assert!(result.is_none());

    Ok(())
}

#[test]
fn test_user_serialization_hides_password() {
    let user = test_user(Uuid::new_v4());

    let json = serde_json::to_string(&user).unwrap();
    assert!(json.contains("test@example.com"));
    assert!(!json.contains("argon2id"));
    assert!(!json.contains("\"password\""));
}
