/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{Duration, Utc};
use entity::user::UserRole;
use jobboard_core::types::*;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::WebError;

/// Identity carried by a bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub name: Option<String>,
    pub iat: usize,
    pub exp: usize,
}

/// Extracts the token of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, WebError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| WebError::Unauthorized("Access denied. No token provided".to_string()))?
        .to_str()
        .map_err(|_| WebError::Unauthorized("Invalid Authorization header".to_string()))?;

    let mut parts = header.split_whitespace();

    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(WebError::Unauthorized(
            "Invalid Authorization header".to_string(),
        )),
    }
}

pub async fn authorize(
    state: State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, WebError> {
    let token = bearer_token(req.headers())?;

    let claims = decode_jwt(&state, token).map_err(|e| {
        tracing::debug!("Rejected bearer token: {}", e);
        WebError::Unauthorized("Invalid token".to_string())
    })?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

pub fn encode_jwt(
    state: &ServerState,
    user: &MUser,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let expire = Duration::hours(state.cli.token_ttl_hours);

    let claims = Claims {
        id: user.id,
        email: user.email.clone(),
        role: user.role,
        name: user.name.clone(),
        iat: now.timestamp() as usize,
        exp: (now + expire).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.jwt_secret.as_ref()),
    )
}

pub fn decode_jwt(state: &ServerState, jwt: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        jwt,
        &DecodingKey::from_secret(state.jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}
