/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;

use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, patch, post, put};
use axum::{Router, middleware};
use jobboard_core::types::ServerState;
use std::future::Future;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use endpoints::*;

pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/api/jobs", post(jobs::post_job))
        .route(
            "/api/jobs/{id}",
            put(jobs::put_job).delete(jobs::delete_job),
        )
        .route("/api/jobs/{id}/close", patch(jobs::patch_job_close))
        .route("/api/jobs/{id}/reopen", patch(jobs::patch_job_reopen))
        .route("/api/jobs/stats/overview", get(jobs::get_job_stats))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            authorization::authorize,
        ))
        .route("/api/jobs", get(jobs::get_jobs))
        .route("/api/jobs/{id}", get(jobs::get_job))
        .route(
            "/api/jobs/search/suggestions",
            get(jobs::get_job_suggestions),
        )
        .route("/api/auth/login", post(auth::post_login))
        .route("/api/auth/register", post(auth::post_register))
        .route("/api/auth/check", get(auth::get_check))
        .route("/api/health", get(get_health))
        .fallback(handle_404)
        .with_state(state)
}

pub fn cors_layer(state: &ServerState) -> CorsLayer {
    let origins = state
        .cli
        .cors_origin_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(vec![AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true)
}

pub async fn serve_web(
    state: Arc<ServerState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);

    let app = create_router(Arc::clone(&state))
        .layer(cors_layer(&state))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
