/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use entity::job::{EmploymentType, ExperienceLevel, JobStatus};
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, IntoActiveModel, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use super::consts::*;
use super::input::*;
use super::lifecycle::{apply_lifecycle_rules, now};
use super::types::*;

const SEARCH_SQL: &str = "to_tsvector('english', \"title\" || ' ' || \"description\") @@ plainto_tsquery('english', $1)";

/// Raw listing parameters as they arrive in the query string.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobQuery {
    pub status: Option<String>,
    pub show_all: Option<String>,
    pub search: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub experience_level: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
    ClosedAt,
    Title,
    Location,
    Views,
}

impl SortField {
    pub fn column(&self) -> CJob {
        match self {
            SortField::CreatedAt => CJob::CreatedAt,
            SortField::UpdatedAt => CJob::UpdatedAt,
            SortField::ClosedAt => CJob::ClosedAt,
            SortField::Title => CJob::Title,
            SortField::Location => CJob::Location,
            SortField::Views => CJob::Views,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSort {
    pub field: SortField,
    pub descending: bool,
}

impl JobSort {
    pub fn order(&self) -> Order {
        if self.descending { Order::Desc } else { Order::Asc }
    }
}

impl Default for JobSort {
    fn default() -> Self {
        JobSort {
            field: SortField::CreatedAt,
            descending: true,
        }
    }
}

impl FromStr for JobSort {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, descending) = match s.strip_prefix('-') {
            Some(key) => (key, true),
            None => (s, false),
        };

        let field = match key {
            "createdAt" => SortField::CreatedAt,
            "updatedAt" => SortField::UpdatedAt,
            "closedAt" => SortField::ClosedAt,
            "title" => SortField::Title,
            "location" => SortField::Location,
            "views" => SortField::Views,
            _ => return Err(InputError::invalid("sort", format!("unknown key `{}`", s))),
        };

        Ok(JobSort { field, descending })
    }
}

/// Validated listing filter.
#[derive(Debug, Clone, PartialEq)]
pub struct JobFilter {
    pub status: Option<JobStatus>,
    pub search: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub experience_level: Option<ExperienceLevel>,
    pub sort: JobSort,
    pub limit: u64,
    pub page: u64,
}

impl Default for JobFilter {
    fn default() -> Self {
        JobFilter {
            status: Some(JobStatus::Open),
            search: None,
            location: None,
            employment_type: None,
            experience_level: None,
            sort: JobSort::default(),
            limit: DEFAULT_PAGE_LIMIT,
            page: 1,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn enum_param<T: FromStr<Err = String>>(
    field: &str,
    value: Option<String>,
) -> Result<Option<T>, InputError> {
    match non_empty(value) {
        None => Ok(None),
        Some(v) if v == FILTER_ALL => Ok(None),
        Some(v) => v
            .parse::<T>()
            .map(Some)
            .map_err(|e| InputError::invalid(field, e)),
    }
}

impl TryFrom<JobQuery> for JobFilter {
    type Error = InputError;

    fn try_from(query: JobQuery) -> Result<Self, Self::Error> {
        // Without showAll the listing is restricted to open jobs, whatever status says.
        let status = if query.show_all.as_deref() == Some("true") {
            enum_param::<JobStatus>("status", query.status)?
        } else {
            Some(JobStatus::Open)
        };

        let sort = match non_empty(query.sort) {
            Some(sort) => sort.parse()?,
            None => JobSort::default(),
        };

        let limit = positive_param("limit", query.limit.as_deref(), DEFAULT_PAGE_LIMIT)?
            .min(MAX_PAGE_LIMIT);
        let page = positive_param("page", query.page.as_deref(), 1)?;

        // the offset is bound as a signed bigint
        match (page - 1).checked_mul(limit) {
            Some(offset) if offset <= i64::MAX as u64 => {}
            _ => return Err(InputError::invalid("page", "is out of range")),
        }

        Ok(JobFilter {
            status,
            search: non_empty(query.search),
            location: non_empty(query.location),
            employment_type: enum_param("employmentType", query.employment_type)?,
            experience_level: enum_param("experienceLevel", query.experience_level)?,
            sort,
            limit,
            page,
        })
    }
}

impl JobFilter {
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    pub fn condition(&self) -> Condition {
        let mut condition = Condition::all().add(CJob::IsActive.eq(true));

        if let Some(status) = self.status {
            condition = condition.add(CJob::Status.eq(status));
        }

        if let Some(search) = &self.search {
            condition = condition.add(Expr::cust_with_values(SEARCH_SQL, [search.clone()]));
        }

        if let Some(location) = &self.location {
            condition = condition.add(contains_ignore_case(CJob::Location, location));
        }

        if let Some(employment_type) = self.employment_type {
            condition = condition.add(CJob::EmploymentType.eq(employment_type));
        }

        if let Some(experience_level) = self.experience_level {
            condition = condition.add(CJob::ExperienceLevel.eq(experience_level));
        }

        condition
    }
}

/// Case-insensitive substring match with the needle taken literally.
pub fn contains_ignore_case(column: CJob, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));

    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('\\'))
}

/// LIKE pattern for the title fallback lookup: `senior-rust-dev` becomes
/// `%senior_rust_dev%`, where `_` stands in for a hyphen or a space.
pub fn title_pattern(identifier: &str) -> Option<String> {
    let pieces = identifier
        .split('-')
        .map(|piece| {
            piece
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<String>>();

    if pieces.is_empty() {
        None
    } else {
        Some(format!("%{}%", pieces.join("_")))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCounts {
    pub total: u64,
    pub open: u64,
    pub closed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub jobs: Vec<MJob>,
    pub count: usize,
    pub total: u64,
    pub pagination: Pagination,
    pub stats: JobCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct GroupCount {
    pub value: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub id: Uuid,
    pub title: String,
    pub status: JobStatus,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatsOverview {
    pub total: u64,
    pub open: u64,
    pub closed: u64,
    pub closed_percentage: u64,
    pub by_employment_type: Vec<GroupCount>,
    pub by_experience_level: Vec<GroupCount>,
    pub recent_activity: Vec<RecentActivity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSuggestion {
    pub id: Uuid,
    pub title: String,
    pub location: String,
    pub employment_type: EmploymentType,
}

/// Body of a job creation request.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub status: Option<JobStatus>,
    pub skills: Option<Vec<String>>,
    pub experience_level: Option<ExperienceLevel>,
    pub company: Option<String>,
    pub department: Option<String>,
}

impl NewJob {
    pub fn into_model(self, now: NaiveDateTime) -> Result<MJob, InputError> {
        Ok(MJob {
            id: Uuid::new_v4(),
            title: required_text("title", self.title.as_deref())?,
            description: required_text("description", self.description.as_deref())?,
            location: required_text("location", self.location.as_deref())?,
            salary: text_or(self.salary.as_deref(), DEFAULT_SALARY),
            employment_type: self.employment_type.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            is_active: true,
            shareable_link: String::new(),
            closed_at: None,
            closed_by: None,
            applicants: vec![],
            skills: clean_skills(self.skills.unwrap_or_default()),
            experience_level: self.experience_level.unwrap_or_default(),
            company: text_or(self.company.as_deref(), DEFAULT_COMPANY),
            department: text_or(self.department.as_deref(), DEFAULT_DEPARTMENT),
            views: 0,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Partial update of a job. Link, closing metadata and counters are derived
/// and cannot be set here.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub status: Option<JobStatus>,
    pub skills: Option<Vec<String>>,
    pub experience_level: Option<ExperienceLevel>,
    pub company: Option<String>,
    pub department: Option<String>,
}

impl JobChanges {
    pub fn apply(self, mut job: MJob) -> Result<MJob, InputError> {
        if let Some(title) = self.title {
            job.title = required_text("title", Some(&title))?;
        }

        if let Some(description) = self.description {
            job.description = required_text("description", Some(&description))?;
        }

        if let Some(location) = self.location {
            job.location = required_text("location", Some(&location))?;
        }

        if let Some(salary) = self.salary {
            job.salary = text_or(Some(&salary), DEFAULT_SALARY);
        }

        if let Some(company) = self.company {
            job.company = text_or(Some(&company), DEFAULT_COMPANY);
        }

        if let Some(department) = self.department {
            job.department = text_or(Some(&department), DEFAULT_DEPARTMENT);
        }

        if let Some(skills) = self.skills {
            job.skills = clean_skills(skills);
        }

        job.employment_type = self.employment_type.unwrap_or(job.employment_type);
        job.status = self.status.unwrap_or(job.status);
        job.experience_level = self.experience_level.unwrap_or(job.experience_level);

        Ok(job)
    }
}

pub async fn list_jobs(db: &DatabaseConnection, filter: &JobFilter) -> Result<JobListing, DbErr> {
    let condition = filter.condition();

    let jobs = EJob::find()
        .filter(condition.clone())
        .order_by(filter.sort.field.column(), filter.sort.order())
        .order_by_asc(CJob::Id)
        .offset(filter.offset())
        .limit(filter.limit)
        .all(db)
        .await?;

    let total = EJob::find().filter(condition).count(db).await?;
    let stats = count_jobs(db).await?;

    Ok(JobListing {
        count: jobs.len(),
        jobs,
        total,
        pagination: Pagination {
            page: filter.page,
            limit: filter.limit,
            total_pages: total.div_ceil(filter.limit),
        },
        stats,
    })
}

/// Totals over all active jobs.
pub async fn count_jobs(db: &DatabaseConnection) -> Result<JobCounts, DbErr> {
    let total = EJob::find()
        .filter(CJob::IsActive.eq(true))
        .count(db)
        .await?;

    let open = EJob::find()
        .filter(CJob::IsActive.eq(true))
        .filter(CJob::Status.eq(JobStatus::Open))
        .count(db)
        .await?;

    let closed = EJob::find()
        .filter(CJob::IsActive.eq(true))
        .filter(CJob::Status.eq(JobStatus::Closed))
        .count(db)
        .await?;

    Ok(JobCounts {
        total,
        open,
        closed,
    })
}

pub async fn get_active_job(db: &DatabaseConnection, id: Uuid) -> Result<Option<MJob>, DbErr> {
    EJob::find_by_id(id)
        .filter(CJob::IsActive.eq(true))
        .one(db)
        .await
}

/// Resolves a job by id, shareable link or sanitized title, in that order.
pub async fn find_job_by_identifier(
    db: &DatabaseConnection,
    identifier: &str,
) -> Result<Option<MJob>, DbErr> {
    if let Ok(id) = Uuid::parse_str(identifier) {
        if let Some(job) = get_active_job(db, id).await? {
            return Ok(Some(job));
        }
    }

    let slug = identifier.strip_prefix(LINK_PREFIX).unwrap_or(identifier);
    let by_link = EJob::find()
        .filter(CJob::IsActive.eq(true))
        .filter(CJob::ShareableLink.eq(format!("{}{}", LINK_PREFIX, slug)))
        .one(db)
        .await?;

    if by_link.is_some() {
        return Ok(by_link);
    }

    let Some(pattern) = title_pattern(slug) else {
        return Ok(None);
    };

    EJob::find()
        .filter(CJob::IsActive.eq(true))
        .filter(Expr::expr(Func::lower(Expr::col(CJob::Title))).like(pattern))
        .order_by_desc(CJob::CreatedAt)
        .one(db)
        .await
}

/// Increments the view counter in a single statement and returns the updated job.
pub async fn increment_views(db: &DatabaseConnection, id: Uuid) -> Result<Option<MJob>, DbErr> {
    let updated = EJob::update_many()
        .col_expr(CJob::Views, Expr::col(CJob::Views).add(1))
        .filter(CJob::Id.eq(id))
        .filter(CJob::IsActive.eq(true))
        .exec_with_returning(db)
        .await?;

    Ok(updated.into_iter().next())
}

pub async fn insert_job(
    db: &DatabaseConnection,
    job: MJob,
    actor: Option<Uuid>,
) -> Result<MJob, DbErr> {
    let job = apply_lifecycle_rules(None, job, actor, now());

    job.into_active_model().reset_all().insert(db).await
}

/// Writes `next` over `previous` if the stored row is still the one that was
/// read. Returns `None` when a concurrent write got there first. The view
/// counter is only ever changed by [`increment_views`], so it is left out of
/// the update and taken from the stored row.
pub async fn save_job(
    db: &DatabaseConnection,
    previous: &MJob,
    next: MJob,
    actor: Option<Uuid>,
) -> Result<Option<MJob>, DbErr> {
    let next = apply_lifecycle_rules(Some(previous), next, actor, now());

    let mut model = next.clone().into_active_model().reset_all();
    model.views = NotSet;

    let updated = EJob::update_many()
        .set(model)
        .filter(CJob::Id.eq(previous.id))
        .filter(CJob::UpdatedAt.eq(previous.updated_at))
        .exec_with_returning(db)
        .await?;

    let Some(stored) = updated.into_iter().next() else {
        tracing::warn!(job_id = %previous.id, "Job was modified concurrently");
        return Ok(None);
    };

    Ok(Some(MJob {
        views: stored.views,
        ..next
    }))
}

async fn group_counts(db: &DatabaseConnection, column: CJob) -> Result<Vec<GroupCount>, DbErr> {
    let mut groups = EJob::find()
        .select_only()
        .column_as(column, "value")
        .column_as(Expr::col(CJob::Id).count(), "count")
        .filter(CJob::IsActive.eq(true))
        .group_by(column)
        .into_model::<GroupCount>()
        .all(db)
        .await?;

    groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    Ok(groups)
}

pub fn closed_percentage(counts: &JobCounts) -> u64 {
    if counts.total == 0 {
        return 0;
    }

    (counts.closed as f64 / counts.total as f64 * 100.0).round() as u64
}

pub async fn job_stats_overview(db: &DatabaseConnection) -> Result<JobStatsOverview, DbErr> {
    let counts = count_jobs(db).await?;
    let by_employment_type = group_counts(db, CJob::EmploymentType).await?;
    let by_experience_level = group_counts(db, CJob::ExperienceLevel).await?;

    let recent_activity = EJob::find()
        .filter(CJob::IsActive.eq(true))
        .order_by_desc(CJob::UpdatedAt)
        .limit(RECENT_ACTIVITY_LIMIT)
        .all(db)
        .await?
        .into_iter()
        .map(|job| RecentActivity {
            id: job.id,
            title: job.title,
            status: job.status,
            updated_at: job.updated_at,
        })
        .collect();

    Ok(JobStatsOverview {
        total: counts.total,
        open: counts.open,
        closed: counts.closed,
        closed_percentage: closed_percentage(&counts),
        by_employment_type,
        by_experience_level,
        recent_activity,
    })
}

pub async fn suggest_jobs(
    db: &DatabaseConnection,
    query: &str,
) -> Result<Vec<JobSuggestion>, DbErr> {
    let query = query.trim();

    if query.chars().count() < SUGGESTION_MIN_LEN {
        return Ok(vec![]);
    }

    let jobs = EJob::find()
        .filter(CJob::IsActive.eq(true))
        .filter(
            Condition::any()
                .add(contains_ignore_case(CJob::Title, query))
                .add(contains_ignore_case(CJob::Description, query))
                .add(contains_ignore_case(CJob::Location, query)),
        )
        .limit(SUGGESTION_LIMIT)
        .all(db)
        .await?;

    Ok(jobs
        .into_iter()
        .map(|job| JobSuggestion {
            id: job.id,
            title: job.title,
            location: job.location,
            employment_type: job.employment_type,
        })
        .collect())
}
