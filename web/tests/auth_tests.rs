/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderValue, StatusCode};
use chrono::Utc;
use entity::user::UserRole;
use jobboard_core::types::*;
use jsonwebtoken::{EncodingKey, Header, encode};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::{Value, json};
use std::sync::Arc;
use web::authorization::{Claims, decode_jwt};

fn empty_state() -> Arc<ServerState> {
    common::create_mock_state(MockDatabase::new(DatabaseBackend::Postgres))
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let server = common::create_server(empty_state());

    let response = server.get("/api/jobs/stats/overview").await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let body = response.json::<BaseResponse<String>>();
    assert!(body.error);
    assert_eq!(body.message, "Access denied. No token provided");

    let response = server.post("/api/jobs").json(&json!({})).await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_rejects_malformed_header() {
    let server = common::create_server(empty_state());

    let response = server
        .patch(&format!("/api/jobs/{}/close", uuid::Uuid::new_v4()))
        .add_header(AUTHORIZATION, HeaderValue::from_static("Token abc"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body = response.json::<BaseResponse<String>>();
    assert_eq!(body.message, "Invalid Authorization header");
}

#[tokio::test]
async fn test_protected_route_rejects_invalid_tokens() {
    let state = empty_state();
    let server = common::create_server(Arc::clone(&state));
    let user = common::sample_user();

    let now = Utc::now().timestamp() as usize;
    let expired = Claims {
        id: user.id,
        email: user.email.clone(),
        role: UserRole::Hr,
        name: None,
        iat: now - 7200,
        exp: now - 3600,
    };
    let expired = encode(
        &Header::default(),
        &expired,
        &EncodingKey::from_secret(common::JWT_SECRET.as_ref()),
    )
    .unwrap();

    let response = server
        .get("/api/jobs/stats/overview")
        .add_header(AUTHORIZATION, common::bearer(&expired))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<BaseResponse<String>>().message,
        "Invalid token"
    );

    let mut foreign_cli = common::create_mock_cli();
    foreign_cli.jwt_secret = Some("other-secret".to_string());
    let foreign = ServerState {
        db: MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        cli: foreign_cli,
        jwt_secret: "other-secret".to_string(),
    };
    let forged = common::token_for(&foreign, &user);

    let response = server
        .get("/api/jobs/stats/overview")
        .add_header(AUTHORIZATION, common::bearer(&forged))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = server
        .get("/api/jobs/stats/overview")
        .add_header(AUTHORIZATION, common::bearer("not-a-jwt"))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_accepts_valid_token() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([common::count_row(0), common::count_row(0), common::count_row(0)])
        .append_query_results([
            Vec::<std::collections::BTreeMap<&str, sea_orm::Value>>::new(),
            Vec::new(),
        ])
        .append_query_results([Vec::<MJob>::new()]);
    let state = common::create_mock_state(db);
    let token = common::token_for(&state, &common::sample_user());
    let server = common::create_server(state);

    let response = server
        .get("/api/jobs/stats/overview")
        .add_header(AUTHORIZATION, common::bearer(&token))
        .await;

    response.assert_status(StatusCode::OK);
    let body = response.json::<BaseResponse<Value>>();
    assert_eq!(body.message["total"], 0);
    assert_eq!(body.message["closedPercentage"], 0);
}

#[tokio::test]
async fn test_login() {
    let user = common::sample_user();
    let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![user.clone()]]);
    let state = common::create_mock_state(db);
    let server = common::create_server(Arc::clone(&state));

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": " HR@example.com ", "password": "secret1" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body = response.json::<BaseResponse<Value>>();
    assert_eq!(body.message["user"]["email"], "hr@example.com");
    assert!(body.message["user"].get("password").is_none());

    let token = body.message["token"].as_str().unwrap();
    let claims = decode_jwt(&state, token).unwrap();
    assert_eq!(claims.id, user.id);
    assert_eq!(claims.role, UserRole::Hr);
    assert_eq!(claims.name.as_deref(), Some("Hiring Manager"));
    assert_eq!(claims.exp - claims.iat, 168 * 3600);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![common::sample_user()]]);
    let server = common::create_server(common::create_mock_state(db));

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "hr@example.com", "password": "wrong-password" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<BaseResponse<String>>().message,
        "Invalid email or password"
    );
}

#[tokio::test]
async fn test_login_unknown_user() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([Vec::<MUser>::new()]);
    let server = common::create_server(common::create_mock_state(db));

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "nobody@example.com", "password": "secret1" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let server = common::create_server(empty_state());

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "hr@example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MUser>::new()])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }]);
    let server = common::create_server(common::create_mock_state(db));

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": "hr@example.com", "password": "secret1", "name": "Hiring Manager" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<BaseResponse<Value>>();
    assert_eq!(body.message["user"]["role"], "hr");
    assert!(body.message["token"].as_str().is_some());
}

#[tokio::test]
async fn test_register_existing_user() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![common::sample_user()]]);
    let server = common::create_server(common::create_mock_state(db));

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": "hr@example.com", "password": "secret1" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<BaseResponse<String>>().message,
        "User already exists"
    );
}

#[tokio::test]
async fn test_register_email_taken_concurrently() {
    // the lookup misses, then the insert hits the unique email
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MUser>::new()])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }]);
    let server = common::create_server(common::create_mock_state(db));

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": "hr@example.com", "password": "secret1" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<BaseResponse<String>>().message,
        "User already exists"
    );
}

#[tokio::test]
async fn test_register_validation() {
    let server = common::create_server(empty_state());

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": "not-an-email", "password": "secret1" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": "hr@example.com", "password": "short" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_disabled() {
    let mut cli = common::create_mock_cli();
    cli.disable_registration = true;
    let state = Arc::new(ServerState {
        db: MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        cli,
        jwt_secret: common::JWT_SECRET.to_string(),
    });
    let server = common::create_server(state);

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": "hr@example.com", "password": "secret1" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<BaseResponse<String>>().message,
        "Registration is disabled"
    );
}

#[tokio::test]
async fn test_check_without_token() {
    let server = common::create_server(empty_state());

    let response = server.get("/api/auth/check").await;
    response.assert_status(StatusCode::OK);

    let body = response.json::<BaseResponse<Value>>();
    assert_eq!(body.message["isAuthenticated"], false);
    assert!(body.message.get("user").is_none());
}

#[tokio::test]
async fn test_check_with_token() {
    let user = common::sample_user();
    let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![user.clone()]]);
    let state = common::create_mock_state(db);
    let token = common::token_for(&state, &user);
    let server = common::create_server(state);

    let response = server
        .get("/api/auth/check")
        .add_header(AUTHORIZATION, common::bearer(&token))
        .await;

    response.assert_status(StatusCode::OK);
    let body = response.json::<BaseResponse<Value>>();
    assert_eq!(body.message["isAuthenticated"], true);
    assert_eq!(body.message["user"]["email"], "hr@example.com");
}

#[tokio::test]
async fn test_check_with_deleted_user() {
    let user = common::sample_user();
    let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([Vec::<MUser>::new()]);
    let state = common::create_mock_state(db);
    let token = common::token_for(&state, &user);
    let server = common::create_server(state);

    let response = server
        .get("/api/auth/check")
        .add_header(AUTHORIZATION, common::bearer(&token))
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.json::<BaseResponse<Value>>().message["isAuthenticated"],
        false
    );
}
