/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Status lifecycle of a job posting.
//!
//! Every write path passes the job through [`apply_lifecycle_rules`] so the
//! shareable link, the closing metadata and the timestamps stay consistent.

use chrono::{NaiveDateTime, SubsecRound, Utc};
use entity::job::JobStatus;
use rand::Rng;
use uuid::Uuid;

use super::consts::*;
use super::types::MJob;

/// Current time at the precision the datastore keeps.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(6)
}

pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;

    for c in title.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c);
            in_whitespace = false;
        }
    }

    slug.chars().take(SLUG_MAX_LEN).collect()
}

pub fn generate_suffix() -> String {
    let mut rng = rand::rng();

    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect()
}

pub fn shareable_link_for(title: &str) -> String {
    format!("{}{}-{}", LINK_PREFIX, slugify(title), generate_suffix())
}

/// Derives link, closing metadata and timestamps of `next` from the stored
/// `previous` version (if any).
pub fn apply_lifecycle_rules(
    previous: Option<&MJob>,
    mut next: MJob,
    actor: Option<Uuid>,
    now: NaiveDateTime,
) -> MJob {
    match previous {
        Some(previous) => {
            next.shareable_link = previous.shareable_link.clone();
            next.created_at = previous.created_at;
        }
        None => {
            if next.shareable_link.is_empty() {
                next.shareable_link = shareable_link_for(&next.title);
            }
        }
    }

    if next.status == JobStatus::Closed {
        match previous.filter(|p| p.status == JobStatus::Closed) {
            Some(previous) => {
                next.closed_at = previous.closed_at.or(Some(now));
                next.closed_by = previous.closed_by;
            }
            None => {
                next.closed_at = Some(now);
                next.closed_by = actor;
            }
        }
    } else {
        next.closed_at = None;
        next.closed_by = None;
    }

    next.updated_at = now;
    next
}
