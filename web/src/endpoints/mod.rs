/*
* SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
*
* SPDX-License-Identifier: AGPL-3.0-only
*/

pub mod auth;
pub mod jobs;

use crate::error::{WebError, WebResult};
use axum::extract::{Json, State};
use jobboard_core::types::*;
use std::sync::Arc;

pub async fn handle_404() -> WebError {
    WebError::NotFound("Not Found".to_string())
}

pub async fn get_health(state: State<Arc<ServerState>>) -> WebResult<Json<BaseResponse<String>>> {
    state.db.ping().await?;

    let res = BaseResponse {
        error: false,
        message: "200 ALIVE".to_string(),
    };

    Ok(Json(res))
}
