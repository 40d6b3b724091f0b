/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod endpoints;
pub mod error;

use axum::routing::{get, post};
use axum::{Router, middleware};
use http::HeaderValue;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use jobboard_core::types::ServerState;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

fn cors_layer(state: &ServerState) -> CorsLayer {
    let allow_origin = match HeaderValue::from_str(&state.cli.serve_url) {
        Ok(origin) => AllowOrigin::exact(origin),
        Err(e) => {
            tracing::warn!("Invalid serve url {}: {}", state.cli.serve_url, e);
            AllowOrigin::any()
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers(vec![AUTHORIZATION, ACCEPT, CONTENT_TYPE])
}

pub fn create_router(state: Arc<ServerState>) -> Router {
    let authenticated = Router::new()
        .route("/api/jobs", post(endpoints::jobs::post))
        .route("/api/jobs/{job}", axum::routing::delete(endpoints::jobs::delete))
        .route("/api/jobs/{job}/favourite", post(endpoints::favourites::post))
        .route("/api/jobs/{job}/apply", post(endpoints::applications::post))
        .route("/api/user/jobs", get(endpoints::jobs::get_user_jobs))
        .route("/api/user/favourites", get(endpoints::favourites::get))
        .route("/api/user/applications", get(endpoints::applications::get))
        .route(
            "/api/companies",
            get(endpoints::companies::get).post(endpoints::companies::post),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            auth::authorize,
        ));

    Router::new()
        .route("/api/jobs", get(endpoints::jobs::get))
        .route("/api/jobs/{job}", get(endpoints::jobs::get_job))
        .route(
            "/api/companies/{company}",
            get(endpoints::companies::get_company),
        )
        .route("/api/user/register", post(endpoints::auth::post_register))
        .route("/api/user/login", post(endpoints::auth::post_login))
        .route("/api/health", get(endpoints::get_health))
        .merge(authenticated)
        .fallback(endpoints::handle_404)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state))
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);

    axum::serve(listener, app).await
}
