/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum::http::HeaderValue;
use axum_test::TestServer;
use chrono::NaiveDate;
use entity::application::ApplicationStatus;
use entity::user::UserRole;
use jobboard_core::types::*;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;
use web::auth::encode_jwt;
use web::create_router;

pub const RECRUITER_ID: Uuid = Uuid::from_u128(0x1);
pub const STUDENT_ID: Uuid = Uuid::from_u128(0x2);
pub const COMPANY_ID: Uuid = Uuid::from_u128(0x10);
pub const JOB_ID: Uuid = Uuid::from_u128(0x20);

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "debug".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        serve_url: "http://127.0.0.1:5173".to_string(),
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        db_max_connections: 20,
        db_min_connections: 2,
        jwt_secret: Some("test_jwt".to_string()),
        jwt_secret_file: None,
        jwt_expiry_hours: 24,
        disable_registration: false,
        strict_salary_range: false,
        report_errors: false,
        sentry_dsn: None,
    }
}

pub fn create_mock_state(db: DatabaseConnection) -> Arc<ServerState> {
    create_mock_state_with_cli(db, create_mock_cli())
}

pub fn create_mock_state_with_cli(db: DatabaseConnection, cli: Cli) -> Arc<ServerState> {
    Arc::new(ServerState {
        db,
        cli,
        jwt_secret: "test_jwt".to_string(),
    })
}

pub fn create_server(state: Arc<ServerState>) -> TestServer {
    TestServer::new(create_router(state)).unwrap()
}

pub fn bearer(state: &ServerState, user_id: Uuid) -> HeaderValue {
    let token = encode_jwt(state, user_id).unwrap();
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}

fn created_at() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn test_user(id: Uuid, role: UserRole) -> MUser {
    MUser {
        id,
        fullname: "Test User".to_string(),
        email: format!("{}@example.com", id.simple()),
        phone_number: "0123456789".to_string(),
        password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        profile_bio: None,
        profile_skills: None,
        profile_resume: None,
        profile_resume_original_name: None,
        profile_photo: None,
        role,
        created_at: created_at(),
    }
}

pub fn test_company() -> MCompany {
    MCompany {
        id: COMPANY_ID,
        name: "Acme".to_string(),
        description: Some("Rockets and anvils".to_string()),
        website: None,
        location: Some("Berlin".to_string()),
        logo: None,
        user_id: RECRUITER_ID,
        created_at: created_at(),
    }
}

pub fn test_job(owner: Uuid) -> MJob {
    MJob {
        id: JOB_ID,
        title: "Backend Engineer".to_string(),
        description: "Build the job board".to_string(),
        requirements: "Rust, SQL".to_string(),
        salary: 60000,
        location: "Berlin".to_string(),
        job_type: "Full Time".to_string(),
        experience_level: 2,
        position: 1,
        company_id: COMPANY_ID,
        user_id: owner,
        created_at: created_at(),
    }
}

pub fn test_favourite(user_id: Uuid) -> MFavourite {
    MFavourite {
        id: Uuid::from_u128(0x30),
        user_id,
        job_id: JOB_ID,
        created_at: created_at(),
    }
}

pub fn test_application(applicant_id: Uuid) -> MApplication {
    MApplication {
        id: Uuid::from_u128(0x40),
        job_id: JOB_ID,
        applicant_id,
        status: ApplicationStatus::Pending,
        created_at: created_at(),
    }
}
