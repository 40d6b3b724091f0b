/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::StatusCode;
use jobboard_core::types::BaseResponse;
use sea_orm::{DatabaseBackend, MockDatabase};

#[tokio::test]
async fn test_health() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let server = common::create_server(common::create_mock_state(db));

    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let body: BaseResponse<String> = response.json();
    assert!(!body.error);
    assert_eq!(body.message, "200 ALIVE");
}

#[tokio::test]
async fn test_unknown_route_returns_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let server = common::create_server(common::create_mock_state(db));

    let response = server.get("/api/nothing-here").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: BaseResponse<String> = response.json();
    assert!(body.error);
}

#[tokio::test]
async fn test_protected_route_without_header() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let server = common::create_server(common::create_mock_state(db));

    let response = server.get("/api/user/favourites").await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_protected_route_with_garbage_token() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let server = common::create_server(common::create_mock_state(db));

    let response = server
        .get("/api/user/jobs")
        .add_header(
            axum::http::header::AUTHORIZATION,
            axum::http::HeaderValue::from_static("Bearer not-a-token"),
        )
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}
