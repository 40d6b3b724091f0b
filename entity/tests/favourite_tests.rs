/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for favourite entity

use chrono::NaiveDate;
use entity::*;
use sea_orm::{Condition, DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

#[tokio::test]
async fn test_favourite_lookup_by_pair() -> Result<(), DbErr> {
    let user_id = Uuid::new_v4();
    let job_id = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![favourite::Model {
            id: Uuid::new_v4(),
            user_id,
            job_id,
            created_at: naive_date,
        }]])
        .into_connection();

    let result = favourite::Entity::find()
        .filter(
            Condition::all()
                .add(favourite::Column::UserId.eq(user_id))
                .add(favourite::Column::JobId.eq(job_id)),
        )
        .one(&db)
        .await?;

    let favourite = result.expect("favourite should be found");
    assert_eq!(favourite.user_id, user_id);
    assert_eq!(favourite.job_id, job_id);

    Ok(())
}
