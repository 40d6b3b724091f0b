/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::auth::encode_jwt;
use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use chrono::{NaiveDateTime, Utc};
use email_address::EmailAddress;
use entity::user::UserRole;
use jobboard_core::input::require_fields;
use jobboard_core::types::*;
use password_auth::{generate_hash, verify_password};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct MakeUserRequest {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
    pub profile_bio: Option<String>,
    pub profile_skills: Option<String>,
    pub profile_resume: Option<String>,
    pub profile_resume_original_name: Option<String>,
    pub profile_photo: Option<String>,
    pub role: Option<UserRole>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeLoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user; the password hash never leaves the server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: Uuid,
    pub fullname: String,
    pub email: String,
    pub phone_number: String,
    pub profile_bio: Option<String>,
    pub profile_skills: Option<String>,
    pub profile_resume: Option<String>,
    pub profile_resume_original_name: Option<String>,
    pub profile_photo: Option<String>,
    pub role: UserRole,
    pub created_at: NaiveDateTime,
}

impl From<MUser> for UserResponse {
    fn from(user: MUser) -> Self {
        UserResponse {
            id: user.id,
            fullname: user.fullname,
            email: user.email,
            phone_number: user.phone_number,
            profile_bio: user.profile_bio,
            profile_skills: user.profile_skills,
            profile_resume: user.profile_resume,
            profile_resume_original_name: user.profile_resume_original_name,
            profile_photo: user.profile_photo,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user: UserResponse,
}

pub async fn post_register(
    state: State<Arc<ServerState>>,
    payload: Result<Json<MakeUserRequest>, JsonRejection>,
) -> WebResult<Json<RegisterResponse>> {
    let Json(body) = payload?;

    if state.cli.disable_registration {
        return Err(WebError::registration_disabled());
    }

    if let Err(e) = require_fields(&[
        ("fullname", body.fullname.as_deref()),
        ("email", body.email.as_deref()),
        ("phone_number", body.phone_number.as_deref()),
        ("password", body.password.as_deref()),
    ]) {
        tracing::debug!("Rejected registration: {:?}", e);
        return Err(e.into());
    }

    let email = body.email.unwrap_or_default().trim().to_string();

    if !EmailAddress::is_valid(&email) {
        return Err(WebError::invalid_email());
    }

    let password_hash = generate_hash(body.password.unwrap_or_default());

    let txn = state.db.begin().await?;

    let existing_user = EUser::find()
        .filter(CUser::Email.eq(email.clone()))
        .one(&txn)
        .await?;

    if existing_user.is_some() {
        return Err(WebError::user_already_exists());
    }

    let user = AUser {
        id: Set(Uuid::new_v4()),
        fullname: Set(body.fullname.unwrap_or_default().trim().to_string()),
        email: Set(email),
        phone_number: Set(body.phone_number.unwrap_or_default().trim().to_string()),
        password: Set(password_hash),
        profile_bio: Set(body.profile_bio),
        profile_skills: Set(body.profile_skills),
        profile_resume: Set(body.profile_resume),
        profile_resume_original_name: Set(body.profile_resume_original_name),
        profile_photo: Set(body.profile_photo),
        role: Set(body.role.unwrap_or_default()),
        created_at: Set(Utc::now().naive_utc()),
    };

    let user = user
        .insert(&txn)
        .await
        .map_err(|e| WebError::on_unique_violation(e, WebError::user_already_exists()))?;

    txn.commit().await?;

    tracing::info!("Registered user {}", user.id);

    Ok(Json(RegisterResponse {
        success: true,
        message: "User Created Successfully".to_string(),
        user: user.into(),
    }))
}

pub async fn post_login(
    state: State<Arc<ServerState>>,
    payload: Result<Json<MakeLoginRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<String>>> {
    let Json(body) = payload?;

    let user = EUser::find()
        .filter(CUser::Email.eq(body.email.trim()))
        .one(&state.db)
        .await?
        .ok_or_else(WebError::invalid_credentials)?;

    verify_password(body.password, &user.password).map_err(|_| WebError::invalid_credentials())?;

    let token = encode_jwt(&state, user.id).map_err(|e| {
        tracing::error!("Failed to encode token: {}", e);
        WebError::failed_to_generate_token()
    })?;

    let res = BaseResponse {
        error: false,
        message: token,
    };

    Ok(Json(res))
}
