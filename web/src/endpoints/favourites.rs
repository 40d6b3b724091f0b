/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::jobs::JobWithCompany;
use crate::error::{WebError, WebResult};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use jobboard_core::database::get_favourites_with_jobs;
use jobboard_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct FavouriteWithJob {
    #[serde(flatten)]
    pub favourite: MFavourite,
    pub job: Option<JobWithCompany>,
}

fn already_favourite() -> WebError {
    WebError::Conflict("This job is already in favourites".to_string())
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    job: Result<Path<Uuid>, PathRejection>,
) -> WebResult<Json<BaseResponse<MFavourite>>> {
    let Path(job_id) = job?;

    let job = EJob::find_by_id(job_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Job"))?;

    let txn = state.db.begin().await?;

    let existing_favourite = EFavourite::find()
        .filter(
            Condition::all()
                .add(CFavourite::UserId.eq(user.id))
                .add(CFavourite::JobId.eq(job.id)),
        )
        .one(&txn)
        .await?;

    if existing_favourite.is_some() {
        return Err(already_favourite());
    }

    let favourite = AFavourite {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.id),
        job_id: Set(job.id),
        created_at: Set(Utc::now().naive_utc()),
    };

    let favourite = favourite
        .insert(&txn)
        .await
        .map_err(|e| WebError::on_unique_violation(e, already_favourite()))?;

    txn.commit().await?;

    let res = BaseResponse {
        error: false,
        message: favourite,
    };

    Ok(Json(res))
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<Vec<FavouriteWithJob>>>> {
    let favourites = get_favourites_with_jobs(&state.db, user.id).await?;

    if favourites.is_empty() {
        return Err(WebError::not_found("Favourites"));
    }

    let favourites = favourites
        .into_iter()
        .map(|(favourite, job)| FavouriteWithJob {
            favourite,
            job: job.map(JobWithCompany::from),
        })
        .collect();

    let res = BaseResponse {
        error: false,
        message: favourites,
    };

    Ok(Json(res))
}
