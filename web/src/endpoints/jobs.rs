/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use chrono::Utc;
use jobboard_core::database::{get_job_with_company, get_jobs_by_owner};
use jobboard_core::input::require_fields;
use jobboard_core::search::{JobFilter, find_jobs};
use jobboard_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeJobRequest {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub salary: i64,
    pub location: String,
    pub job_type: String,
    pub experience_level: i32,
    pub position: i32,
    pub company_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JobWithCompany {
    #[serde(flatten)]
    pub job: MJob,
    pub company: Option<MCompany>,
}

impl From<(MJob, Option<MCompany>)> for JobWithCompany {
    fn from((job, company): (MJob, Option<MCompany>)) -> Self {
        JobWithCompany { job, company }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JobWithApplications {
    #[serde(flatten)]
    pub job: MJob,
    pub applications: Vec<MApplication>,
}

pub async fn get(
    state: State<Arc<ServerState>>,
    filter: Result<Query<JobFilter>, QueryRejection>,
) -> WebResult<Json<BaseResponse<Vec<JobWithCompany>>>> {
    let Query(filter) = filter?;

    let jobs = find_jobs(&state.db, &filter, state.cli.strict_salary_range).await?;

    if jobs.is_empty() {
        return Err(WebError::not_found("Jobs"));
    }

    let res = BaseResponse {
        error: false,
        message: jobs.into_iter().map(JobWithCompany::from).collect(),
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    payload: Result<Json<MakeJobRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<JobWithCompany>>> {
    let Json(body) = payload?;

    require_fields(&[
        ("title", Some(body.title.as_str())),
        ("description", Some(body.description.as_str())),
        ("requirements", Some(body.requirements.as_str())),
        ("location", Some(body.location.as_str())),
        ("job_type", Some(body.job_type.as_str())),
    ])?;

    if body.salary < 0 || body.position < 1 || body.experience_level < 0 {
        return Err(WebError::BadRequest(
            "Salary and experience level must not be negative, position must be at least 1"
                .to_string(),
        ));
    }

    let company = ECompany::find_by_id(body.company_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Company"))?;

    let job = AJob {
        id: Set(Uuid::new_v4()),
        title: Set(body.title.trim().to_string()),
        description: Set(body.description),
        requirements: Set(body.requirements),
        salary: Set(body.salary),
        location: Set(body.location.trim().to_string()),
        job_type: Set(body.job_type.trim().to_string()),
        experience_level: Set(body.experience_level),
        position: Set(body.position),
        company_id: Set(company.id),
        user_id: Set(user.id),
        created_at: Set(Utc::now().naive_utc()),
    };

    let job = job.insert(&state.db).await.map_err(|e| match e {
        DbErr::RecordNotInserted => WebError::BadRequest("Job not created".to_string()),
        e => e.into(),
    })?;

    tracing::info!("User {} posted job {}", user.id, job.id);

    let res = BaseResponse {
        error: false,
        message: JobWithCompany {
            job,
            company: Some(company),
        },
    };

    Ok(Json(res))
}

pub async fn get_job(
    state: State<Arc<ServerState>>,
    job: Result<Path<Uuid>, PathRejection>,
) -> WebResult<Json<BaseResponse<JobWithApplications>>> {
    let Path(job_id) = job?;

    let (job, applications) = EJob::find_by_id(job_id)
        .find_with_related(entity::application::Entity)
        .all(&state.db)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| WebError::not_found("Job"))?;

    let res = BaseResponse {
        error: false,
        message: JobWithApplications { job, applications },
    };

    Ok(Json(res))
}

pub async fn get_user_jobs(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<Vec<JobWithCompany>>>> {
    let jobs = get_jobs_by_owner(&state.db, user.id).await?;

    if jobs.is_empty() {
        return Err(WebError::not_found("Jobs"));
    }

    let res = BaseResponse {
        error: false,
        message: jobs.into_iter().map(JobWithCompany::from).collect(),
    };

    Ok(Json(res))
}

pub async fn delete(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    job: Result<Path<Uuid>, PathRejection>,
) -> WebResult<Json<BaseResponse<JobWithCompany>>> {
    let Path(job_id) = job?;

    let (job, company) = get_job_with_company(&state.db, job_id)
        .await?
        .ok_or_else(|| WebError::not_found("Job"))?;

    if job.user_id != user.id {
        return Err(WebError::Forbidden(
            "Only the owner can delete this job".to_string(),
        ));
    }

    let result = EJob::delete_by_id(job.id).exec(&state.db).await?;

    if result.rows_affected == 0 {
        return Err(WebError::not_found("Job"));
    }

    tracing::info!("User {} deleted job {}", user.id, job.id);

    let res = BaseResponse {
        error: false,
        message: JobWithCompany { job, company },
    };

    Ok(Json(res))
}
