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
use entity::application::ApplicationStatus;
use jobboard_core::database::get_applications_with_jobs;
use jobboard_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct ApplicationWithJob {
    #[serde(flatten)]
    pub application: MApplication,
    pub job: Option<JobWithCompany>,
}

fn already_applied() -> WebError {
    WebError::Conflict("You have already applied for this job".to_string())
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    job: Result<Path<Uuid>, PathRejection>,
) -> WebResult<Json<BaseResponse<MApplication>>> {
    let Path(job_id) = job?;

    let job = EJob::find_by_id(job_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Job"))?;

    let txn = state.db.begin().await?;

    let existing_application = EApplication::find()
        .filter(
            Condition::all()
                .add(CApplication::ApplicantId.eq(user.id))
                .add(CApplication::JobId.eq(job.id)),
        )
        .one(&txn)
        .await?;

    if existing_application.is_some() {
        return Err(already_applied());
    }

    let application = AApplication {
        id: Set(Uuid::new_v4()),
        job_id: Set(job.id),
        applicant_id: Set(user.id),
        status: Set(ApplicationStatus::Pending),
        created_at: Set(Utc::now().naive_utc()),
    };

    let application = application
        .insert(&txn)
        .await
        .map_err(|e| WebError::on_unique_violation(e, already_applied()))?;

    txn.commit().await?;

    tracing::info!("User {} applied for job {}", user.id, job.id);

    let res = BaseResponse {
        error: false,
        message: application,
    };

    Ok(Json(res))
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<Vec<ApplicationWithJob>>>> {
    let applications = get_applications_with_jobs(&state.db, user.id).await?;

    if applications.is_empty() {
        return Err(WebError::not_found("Applications"));
    }

    let res = BaseResponse {
        error: false,
        message: applications
            .into_iter()
            .map(|(application, job)| ApplicationWithJob {
                application,
                job: job.map(JobWithCompany::from),
            })
            .collect(),
    };

    Ok(Json(res))
}
