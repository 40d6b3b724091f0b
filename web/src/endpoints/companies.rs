/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use jobboard_core::input::require_fields;
use jobboard_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeCompanyRequest {
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub logo: Option<String>,
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<Vec<MCompany>>>> {
    let companies = ECompany::find()
        .filter(CCompany::UserId.eq(user.id))
        .order_by_asc(CCompany::Name)
        .all(&state.db)
        .await?;

    if companies.is_empty() {
        return Err(WebError::not_found("Companies"));
    }

    let res = BaseResponse {
        error: false,
        message: companies,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    payload: Result<Json<MakeCompanyRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MCompany>>> {
    let Json(body) = payload?;

    require_fields(&[("name", Some(body.name.as_str()))])?;
    let name = body.name.trim().to_string();

    let existing_company = ECompany::find()
        .filter(CCompany::Name.eq(name.clone()))
        .one(&state.db)
        .await?;

    if existing_company.is_some() {
        return Err(WebError::already_exists("Company"));
    }

    let company = ACompany {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        description: Set(body.description),
        website: Set(body.website),
        location: Set(body.location),
        logo: Set(body.logo),
        user_id: Set(user.id),
        created_at: Set(Utc::now().naive_utc()),
    };

    let company = company
        .insert(&state.db)
        .await
        .map_err(|e| WebError::on_unique_violation(e, WebError::already_exists("Company")))?;

    let res = BaseResponse {
        error: false,
        message: company,
    };

    Ok(Json(res))
}

pub async fn get_company(
    state: State<Arc<ServerState>>,
    company: Result<Path<Uuid>, PathRejection>,
) -> WebResult<Json<BaseResponse<MCompany>>> {
    let Path(company_id) = company?;

    let company = ECompany::find_by_id(company_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Company"))?;

    let res = BaseResponse {
        error: false,
        message: company,
    };

    Ok(Json(res))
}
