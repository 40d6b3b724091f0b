/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use entity::user::UserRole;
use jobboard_core::types::*;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::json;

fn new_company() -> serde_json::Value {
    json!({
        "name": "Acme",
        "description": "Rockets and anvils",
        "location": "Berlin"
    })
}

#[tokio::test]
async fn test_get_company() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![common::test_company()]])
        .into_connection();
    let server = common::create_server(common::create_mock_state(db));

    let response = server
        .get(&format!("/api/companies/{}", common::COMPANY_ID))
        .await;

    response.assert_status_ok();
    let body: BaseResponse<MCompany> = response.json();
    assert_eq!(body.message.name, "Acme");
}

#[tokio::test]
async fn test_get_company_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MCompany>::new()])
        .into_connection();
    let server = common::create_server(common::create_mock_state(db));

    let response = server
        .get(&format!("/api/companies/{}", common::COMPANY_ID))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: BaseResponse<String> = response.json();
    assert_eq!(body.message, "Company not found");
}

#[tokio::test]
async fn test_create_company() {
    let recruiter = common::test_user(common::RECRUITER_ID, UserRole::Recruiter);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![recruiter]])
        .append_query_results([Vec::<MCompany>::new()])
        .append_query_results([vec![common::test_company()]])
        .into_connection();
    let state = common::create_mock_state(db);
    let token = common::bearer(&state, common::RECRUITER_ID);
    let server = common::create_server(state);

    let response = server
        .post("/api/companies")
        .add_header(AUTHORIZATION, token)
        .json(&new_company())
        .await;

    response.assert_status_ok();
    let body: BaseResponse<MCompany> = response.json();
    assert_eq!(body.message.name, "Acme");
    assert_eq!(body.message.user_id, common::RECRUITER_ID);
}

#[tokio::test]
async fn test_create_company_name_taken() {
    let recruiter = common::test_user(common::RECRUITER_ID, UserRole::Recruiter);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![recruiter]])
        .append_query_results([vec![common::test_company()]])
        .into_connection();
    let state = common::create_mock_state(db);
    let token = common::bearer(&state, common::RECRUITER_ID);
    let server = common::create_server(state);

    let response = server
        .post("/api/companies")
        .add_header(AUTHORIZATION, token)
        .json(&new_company())
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: BaseResponse<String> = response.json();
    assert_eq!(body.message, "Company already exists");
}

#[tokio::test]
async fn test_create_company_blank_name() {
    let recruiter = common::test_user(common::RECRUITER_ID, UserRole::Recruiter);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![recruiter]])
        .into_connection();
    let state = common::create_mock_state(db);
    let token = common::bearer(&state, common::RECRUITER_ID);
    let server = common::create_server(state);

    let response = server
        .post("/api/companies")
        .add_header(AUTHORIZATION, token)
        .json(&json!({ "name": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_own_companies() {
    let recruiter = common::test_user(common::RECRUITER_ID, UserRole::Recruiter);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![recruiter]])
        .append_query_results([vec![common::test_company()]])
        .into_connection();
    let state = common::create_mock_state(db);
    let token = common::bearer(&state, common::RECRUITER_ID);
    let server = common::create_server(state);

    let response = server
        .get("/api/companies")
        .add_header(AUTHORIZATION, token)
        .await;

    response.assert_status_ok();
    let body: BaseResponse<Vec<MCompany>> = response.json();
    assert_eq!(body.message.len(), 1);
    assert_eq!(body.message[0].id, common::COMPANY_ID);
}

#[tokio::test]
async fn test_list_own_companies_empty() {
    let student = common::test_user(common::STUDENT_ID, UserRole::Student);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![student]])
        .append_query_results([Vec::<MCompany>::new()])
        .into_connection();
    let state = common::create_mock_state(db);
    let token = common::bearer(&state, common::STUDENT_ID);
    let server = common::create_server(state);

    let response = server
        .get("/api/companies")
        .add_header(AUTHORIZATION, token)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
