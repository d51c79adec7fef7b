/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use entity::job::JobStatus;
use jobboard_core::jobs::*;
use jobboard_core::lifecycle::now;
use jobboard_core::types::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::authorization::Claims;
use crate::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SuggestionQuery {
    pub query: Option<String>,
}

fn parse_job_id(id: &str) -> WebResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| WebError::not_found("Job"))
}

async fn load_job(state: &ServerState, id: &str) -> WebResult<MJob> {
    let id = parse_job_id(id)?;

    get_active_job(&state.db, id)
        .await?
        .ok_or_else(|| WebError::not_found("Job"))
}

async fn store_job(
    state: &ServerState,
    previous: &MJob,
    next: MJob,
    claims: &Claims,
) -> WebResult<MJob> {
    save_job(&state.db, previous, next, Some(claims.id))
        .await?
        .ok_or_else(WebError::concurrent_modification)
}

pub async fn get_jobs(
    state: State<Arc<ServerState>>,
    query: Result<Query<JobQuery>, QueryRejection>,
) -> WebResult<Json<BaseResponse<JobListing>>> {
    let Query(query) = query?;
    let filter = JobFilter::try_from(query)?;

    let listing = list_jobs(&state.db, &filter).await?;

    Ok(Json(BaseResponse {
        error: false,
        message: listing,
    }))
}

pub async fn get_job(
    state: State<Arc<ServerState>>,
    Path(identifier): Path<String>,
) -> WebResult<Json<BaseResponse<MJob>>> {
    let job = find_job_by_identifier(&state.db, &identifier)
        .await?
        .ok_or_else(|| WebError::not_found("Job"))?;

    // a job deactivated between lookup and increment counts as gone
    let job = increment_views(&state.db, job.id)
        .await?
        .ok_or_else(|| WebError::not_found("Job"))?;

    Ok(Json(BaseResponse {
        error: false,
        message: job,
    }))
}

pub async fn post_job(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Claims>,
    body: Result<Json<NewJob>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<MJob>>)> {
    let Json(body) = body?;
    let job = body.into_model(now())?;

    let job = insert_job(&state.db, job, Some(claims.id)).await?;
    tracing::info!(job_id = %job.id, user_id = %claims.id, "Job created");

    Ok((
        StatusCode::CREATED,
        Json(BaseResponse {
            error: false,
            message: job,
        }),
    ))
}

pub async fn put_job(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    body: Result<Json<JobChanges>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MJob>>> {
    let Json(body) = body?;
    let job = load_job(&state, &id).await?;

    let next = body.apply(job.clone())?;
    let job = store_job(&state, &job, next, &claims).await?;

    Ok(Json(BaseResponse {
        error: false,
        message: job,
    }))
}

pub async fn delete_job(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> WebResult<Json<BaseResponse<String>>> {
    let job = load_job(&state, &id).await?;

    let mut next = job.clone();
    next.is_active = false;
    store_job(&state, &job, next, &claims).await?;
    tracing::info!(job_id = %job.id, user_id = %claims.id, "Job deleted");

    Ok(Json(BaseResponse {
        error: false,
        message: "Job deleted successfully".to_string(),
    }))
}

pub async fn patch_job_close(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> WebResult<Json<BaseResponse<MJob>>> {
    let job = load_job(&state, &id).await?;

    if job.status == JobStatus::Closed {
        return Err(WebError::BadRequest("Job is already closed".to_string()));
    }

    let mut next = job.clone();
    next.status = JobStatus::Closed;
    let job = store_job(&state, &job, next, &claims).await?;

    Ok(Json(BaseResponse {
        error: false,
        message: job,
    }))
}

pub async fn patch_job_reopen(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> WebResult<Json<BaseResponse<MJob>>> {
    let job = load_job(&state, &id).await?;

    if job.status == JobStatus::Open {
        return Err(WebError::BadRequest("Job is already open".to_string()));
    }

    let mut next = job.clone();
    next.status = JobStatus::Open;
    let job = store_job(&state, &job, next, &claims).await?;

    Ok(Json(BaseResponse {
        error: false,
        message: job,
    }))
}

pub async fn get_job_stats(
    state: State<Arc<ServerState>>,
    Extension(_claims): Extension<Claims>,
) -> WebResult<Json<BaseResponse<JobStatsOverview>>> {
    let overview = job_stats_overview(&state.db).await?;

    Ok(Json(BaseResponse {
        error: false,
        message: overview,
    }))
}

pub async fn get_job_suggestions(
    state: State<Arc<ServerState>>,
    query: Result<Query<SuggestionQuery>, QueryRejection>,
) -> WebResult<Json<BaseResponse<Vec<JobSuggestion>>>> {
    let Query(query) = query?;
    let suggestions = suggest_jobs(&state.db, query.query.as_deref().unwrap_or_default()).await?;

    Ok(Json(BaseResponse {
        error: false,
        message: suggestions,
    }))
}
