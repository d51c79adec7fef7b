/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum::http::HeaderValue;
use axum_test::TestServer;
use chrono::{NaiveDate, NaiveDateTime};
use entity::job::{EmploymentType, ExperienceLevel, JobStatus};
use entity::user::UserRole;
use jobboard_core::types::*;
use sea_orm::{DatabaseConnection, MockDatabase, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

pub const JWT_SECRET: &str = "test-jwt-secret";

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 5000,
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_secret: Some(JWT_SECRET.to_string()),
        jwt_secret_file: None,
        token_ttl_hours: 168,
        cors_origins: "http://localhost:5173,http://localhost:5174,http://localhost:3000"
            .to_string(),
        disable_registration: false,
        sentry_dsn: None,
    }
}

pub fn create_state(db: DatabaseConnection) -> Arc<ServerState> {
    Arc::new(ServerState {
        db,
        cli: create_mock_cli(),
        jwt_secret: JWT_SECRET.to_string(),
    })
}

pub fn create_mock_state(db: MockDatabase) -> Arc<ServerState> {
    create_state(db.into_connection())
}

pub fn create_server(state: Arc<ServerState>) -> TestServer {
    TestServer::new(web::create_router(state)).unwrap()
}

pub fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn sample_user() -> MUser {
    MUser {
        id: Uuid::new_v4(),
        email: "hr@example.com".to_string(),
        password: password_auth::generate_hash("secret1"),
        role: UserRole::Hr,
        name: Some("Hiring Manager".to_string()),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn sample_job(status: JobStatus) -> MJob {
    MJob {
        id: Uuid::new_v4(),
        title: "Backend Engineer".to_string(),
        description: "Build and run our APIs".to_string(),
        location: "Remote".to_string(),
        salary: "Not specified".to_string(),
        employment_type: EmploymentType::FullTime,
        status,
        is_active: true,
        shareable_link: "/jobs/backend-engineer-k3v9x0a2b".to_string(),
        closed_at: None,
        closed_by: None,
        applicants: vec![],
        skills: vec!["rust".to_string()],
        experience_level: ExperienceLevel::Mid,
        company: "Our Company".to_string(),
        department: "Engineering".to_string(),
        views: 0,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn count_row(n: i64) -> Vec<BTreeMap<&'static str, Value>> {
    vec![BTreeMap::from([("num_items", Value::BigInt(Some(n)))])]
}

pub fn token_for(state: &ServerState, user: &MUser) -> String {
    web::authorization::encode_jwt(state, user).unwrap()
}

pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}
