/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub role: String,
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub is_authenticated: bool,
    pub user: Option<UserResponse>,
}

#[derive(Serialize, Deserialize, Debug)]
struct MakeLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct MakeUserRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

pub async fn post_login(
    config: RequestConfig,
    email: String,
    password: String,
) -> Result<BaseResponse<AuthResponse>, String> {
    let req = MakeLoginRequest { email, password };

    let client = get_client(config, "auth/login".to_string(), RequestType::POST, false)?;
    send(client.json(&req)).await
}

pub async fn post_register(
    config: RequestConfig,
    email: String,
    password: String,
    name: Option<String>,
) -> Result<BaseResponse<AuthResponse>, String> {
    let req = MakeUserRequest {
        email,
        password,
        name,
    };

    let client = get_client(config, "auth/register".to_string(), RequestType::POST, false)?;
    send(client.json(&req)).await
}

pub async fn get_check(config: RequestConfig) -> Result<BaseResponse<CheckResponse>, String> {
    send(get_client(config, "auth/check".to_string(), RequestType::GET, false)?).await
}
