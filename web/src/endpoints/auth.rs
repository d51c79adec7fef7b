/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use email_address::EmailAddress;
use entity::user::UserRole;
use jobboard_core::input::{normalize_email, validate_password};
use jobboard_core::lifecycle::now;
use jobboard_core::types::*;
use password_auth::{generate_hash, verify_password};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, SqlErr, TryInsertResult,
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};
use uuid::Uuid;

use crate::authorization::{bearer_token, decode_jwt, encode_jwt};
use crate::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct MakeLoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct MakeUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub token: String,
    pub user: MUser,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub is_authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<MUser>,
}

/// Verified in place of a real hash when the email is unknown, so both
/// outcomes cost one argon2 run.
static DUMMY_HASH: LazyLock<String> = LazyLock::new(|| generate_hash("jobboard-unknown-user"));

fn check_credentials(user: Option<MUser>, password: &str) -> WebResult<MUser> {
    let Some(user) = user else {
        let _ = verify_password(password, &DUMMY_HASH);
        return Err(WebError::invalid_credentials());
    };

    if verify_password(password, &user.password).is_err() {
        tracing::warn!(user_id = %user.id, "Failed login attempt");
        return Err(WebError::invalid_credentials());
    }

    Ok(user)
}

fn issue_token(state: &ServerState, user: MUser) -> WebResult<AuthResponse> {
    let token = encode_jwt(state, &user).map_err(|e| {
        tracing::error!("Failed to encode token: {}", e);
        WebError::failed_to_generate_token()
    })?;

    Ok(AuthResponse { token, user })
}

pub async fn post_login(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeLoginRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<AuthResponse>>> {
    let Json(body) = body?;

    let (email, password) = match (body.email, body.password) {
        (Some(email), Some(password)) if !email.trim().is_empty() && !password.is_empty() => {
            (normalize_email(&email), password)
        }
        _ => {
            return Err(WebError::BadRequest(
                "Please provide both email and password".to_string(),
            ));
        }
    };

    let user = EUser::find()
        .filter(CUser::Email.eq(email))
        .one(&state.db)
        .await?;

    let user = check_credentials(user, &password)?;

    let res = BaseResponse {
        error: false,
        message: issue_token(&state, user)?,
    };

    Ok(Json(res))
}

pub async fn post_register(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeUserRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<AuthResponse>>)> {
    if state.cli.disable_registration {
        return Err(WebError::registration_disabled());
    }

    let Json(body) = body?;

    let (email, password) = match (body.email, body.password) {
        (Some(email), Some(password)) => (normalize_email(&email), password),
        _ => {
            return Err(WebError::BadRequest(
                "Please provide both email and password".to_string(),
            ));
        }
    };

    if !EmailAddress::is_valid(&email) {
        return Err(WebError::invalid_email());
    }

    validate_password(&password)?;

    let existing = EUser::find()
        .filter(CUser::Email.eq(email.clone()))
        .one(&state.db)
        .await?;

    if existing.is_some() {
        return Err(WebError::already_exists("User"));
    }

    let now = now();
    let user = MUser {
        id: Uuid::new_v4(),
        email,
        password: generate_hash(password),
        role: UserRole::Hr,
        name: body.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
        created_at: now,
        updated_at: now,
    };

    // a concurrent registration of the same email inserts nothing
    let inserted = EUser::insert(user.clone().into_active_model())
        .on_conflict(OnConflict::column(CUser::Email).do_nothing().to_owned())
        .do_nothing()
        .exec_without_returning(&state.db)
        .await;

    match inserted {
        Ok(TryInsertResult::Inserted(rows)) if rows > 0 => {}
        Ok(_) => return Err(WebError::already_exists("User")),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            return Err(WebError::already_exists("User"));
        }
        Err(e) => return Err(e.into()),
    }

    tracing::info!(user_id = %user.id, "User registered");

    let res = BaseResponse {
        error: false,
        message: issue_token(&state, user)?,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn get_check(
    state: State<Arc<ServerState>>,
    headers: HeaderMap,
) -> Json<BaseResponse<CheckResponse>> {
    let user = match bearer_token(&headers).ok().map(|t| decode_jwt(&state, t)) {
        Some(Ok(claims)) => match EUser::find_by_id(claims.id).one(&state.db).await {
            Ok(user) => user,
            Err(e) => {
                tracing::error!("Failed to look up user during auth check: {}", e);
                None
            }
        },
        _ => None,
    };

    Json(BaseResponse {
        error: false,
        message: CheckResponse {
            is_authenticated: user.is_some(),
            user,
        },
    })
}
