/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: String,
    pub employment_type: String,
    pub status: String,
    pub shareable_link: String,
    pub closed_at: Option<String>,
    pub closed_by: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience_level: String,
    pub company: String,
    pub department: String,
    pub views: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default)]
pub struct JobCounts {
    pub total: u64,
    pub open: u64,
    pub closed: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JobListResponse {
    pub jobs: Vec<JobResponse>,
    pub count: usize,
    pub total: u64,
    pub pagination: Pagination,
    pub stats: JobCounts,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GroupCount {
    pub value: String,
    pub count: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub id: String,
    pub title: String,
    pub status: String,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JobStatsResponse {
    pub total: u64,
    pub open: u64,
    pub closed: u64,
    pub closed_percentage: u64,
    pub by_employment_type: Vec<GroupCount>,
    pub by_experience_level: Vec<GroupCount>,
    pub recent_activity: Vec<RecentActivity>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JobSuggestion {
    pub id: String,
    pub title: String,
    pub location: String,
    pub employment_type: String,
}

/// Listing parameters, sent as the query string of `GET /api/jobs`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_all: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
}

/// Job fields for create and edit. Unset fields are left out of the body.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

pub async fn get_jobs(
    config: RequestConfig,
    query: &JobListQuery,
) -> Result<BaseResponse<JobListResponse>, String> {
    let client = get_client(config, "jobs".to_string(), RequestType::GET, false)?;
    send(client.query(query)).await
}

/// Fetches every page of a listing.
pub async fn get_all_jobs(
    config: RequestConfig,
    query: &JobListQuery,
) -> Result<(Vec<JobResponse>, JobCounts), String> {
    let mut query = query.clone();
    query.limit = Some(100);
    query.page = Some(1);

    let mut jobs = Vec::new();

    loop {
        let res = get_jobs(config.clone(), &query).await?;

        if res.error {
            return Err("Failed to list jobs.".to_string());
        }

        let listing = res.message;
        jobs.extend(listing.jobs);

        let page = query.page.unwrap_or(1);
        if page >= listing.pagination.total_pages {
            return Ok((jobs, listing.stats));
        }

        query.page = Some(page + 1);
    }
}

pub async fn get_job(
    config: RequestConfig,
    identifier: String,
) -> Result<BaseResponse<JobResponse>, String> {
    send(get_client(
        config,
        format!("jobs/{}", identifier),
        RequestType::GET,
        false,
    )?)
    .await
}

pub async fn post_job(
    config: RequestConfig,
    job: &JobRequest,
) -> Result<BaseResponse<JobResponse>, String> {
    let client = get_client(config, "jobs".to_string(), RequestType::POST, true)?;
    send(client.json(job)).await
}

pub async fn put_job(
    config: RequestConfig,
    id: String,
    job: &JobRequest,
) -> Result<BaseResponse<JobResponse>, String> {
    let client = get_client(config, format!("jobs/{}", id), RequestType::PUT, true)?;
    send(client.json(job)).await
}

pub async fn delete_job(config: RequestConfig, id: String) -> Result<BaseResponse<String>, String> {
    send(get_client(
        config,
        format!("jobs/{}", id),
        RequestType::DELETE,
        true,
    )?)
    .await
}

pub async fn patch_job_close(
    config: RequestConfig,
    id: String,
) -> Result<BaseResponse<JobResponse>, String> {
    send(get_client(
        config,
        format!("jobs/{}/close", id),
        RequestType::PATCH,
        true,
    )?)
    .await
}

pub async fn patch_job_reopen(
    config: RequestConfig,
    id: String,
) -> Result<BaseResponse<JobResponse>, String> {
    send(get_client(
        config,
        format!("jobs/{}/reopen", id),
        RequestType::PATCH,
        true,
    )?)
    .await
}

pub async fn get_job_stats(config: RequestConfig) -> Result<BaseResponse<JobStatsResponse>, String> {
    send(get_client(
        config,
        "jobs/stats/overview".to_string(),
        RequestType::GET,
        true,
    )?)
    .await
}

pub async fn get_job_suggestions(
    config: RequestConfig,
    query: String,
) -> Result<BaseResponse<Vec<JobSuggestion>>, String> {
    let client = get_client(
        config,
        "jobs/search/suggestions".to_string(),
        RequestType::GET,
        false,
    )?;
    send(client.query(&[("query", query)])).await
}

/// Narrows a fetched job list the way the listing endpoint does: `status` is
/// `open`, `closed`, `draft` or `all`, and every search term must appear in
/// the title or description.
pub fn filter_jobs(jobs: &[JobResponse], status: &str, search: Option<&str>) -> Vec<JobResponse> {
    let terms = search
        .map(|search| {
            search
                .split_whitespace()
                .map(str::to_lowercase)
                .collect::<Vec<String>>()
        })
        .unwrap_or_default();

    jobs.iter()
        .filter(|job| status == "all" || job.status == status)
        .filter(|job| {
            let text = format!("{} {}", job.title, job.description).to_lowercase();
            terms.iter().all(|term| text.contains(term.as_str()))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, description: &str, status: &str) -> JobResponse {
        JobResponse {
            id: format!("{}-id", title),
            title: title.to_string(),
            description: description.to_string(),
            location: "Remote".to_string(),
            salary: "Not specified".to_string(),
            employment_type: "Full-time".to_string(),
            status: status.to_string(),
            shareable_link: "/jobs/x-abcdefghi".to_string(),
            closed_at: None,
            closed_by: None,
            skills: vec![],
            experience_level: "Mid".to_string(),
            company: "Our Company".to_string(),
            department: "General".to_string(),
            views: 0,
            created_at: "2024-06-01T12:00:00".to_string(),
            updated_at: "2024-06-01T12:00:00".to_string(),
        }
    }

    fn jobs() -> Vec<JobResponse> {
        vec![
            job("Backend Engineer", "Rust services", "open"),
            job("Frontend Engineer", "React and TypeScript", "closed"),
            job("Data Analyst", "SQL dashboards", "open"),
        ]
    }

    #[test]
    fn test_filter_by_status() {
        assert_eq!(filter_jobs(&jobs(), "open", None).len(), 2);
        assert_eq!(filter_jobs(&jobs(), "closed", None).len(), 1);
        assert_eq!(filter_jobs(&jobs(), "all", None).len(), 3);
        assert!(filter_jobs(&jobs(), "draft", None).is_empty());
    }

    #[test]
    fn test_filter_by_search() {
        let found = filter_jobs(&jobs(), "all", Some("ENGINEER"));
        assert_eq!(found.len(), 2);

        let found = filter_jobs(&jobs(), "all", Some("engineer rust"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Backend Engineer");

        let found = filter_jobs(&jobs(), "open", Some("react"));
        assert!(found.is_empty());

        assert_eq!(filter_jobs(&jobs(), "all", Some("   ")).len(), 3);
    }

    #[test]
    fn test_parse_listing() {
        let body = r#"{
            "error": false,
            "message": {
                "jobs": [],
                "count": 0,
                "total": 0,
                "pagination": { "page": 1, "limit": 50, "totalPages": 0 },
                "stats": { "total": 4, "open": 3, "closed": 1 }
            }
        }"#;

        let res = decode_body::<JobListResponse>(body.as_bytes()).unwrap();
        assert_eq!(res.message.pagination.total_pages, 0);
        assert_eq!(res.message.stats.open, 3);
    }

    #[test]
    fn test_list_query_skips_unset() {
        let query = JobListQuery {
            show_all: Some(true),
            status: Some("closed".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, serde_json::json!({ "status": "closed", "showAll": true }));
    }
}
