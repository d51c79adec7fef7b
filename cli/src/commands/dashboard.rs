/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::job::print_job_row;
use crate::input::*;
use clap::ValueEnum;
use connector::jobs::*;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusFilter {
    Open,
    Closed,
    All,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::Open => "open",
            StatusFilter::Closed => "closed",
            StatusFilter::All => "all",
        }
    }
}

fn print_groups(title: &str, groups: &[GroupCount]) {
    println!("===== {} =====", title);

    for group in groups {
        println!("{:<12} {}", group.value, group.count);
    }

    println!();
}

pub async fn handle(status: StatusFilter, search: Option<String>) {
    let config = request_config();

    let query = JobListQuery {
        show_all: Some(true),
        ..Default::default()
    };

    let (jobs, _) = or_exit(get_all_jobs(config.clone(), &query).await);
    let shown = filter_jobs(&jobs, status.as_str(), search.as_deref());

    let open = jobs.iter().filter(|job| job.status == "open").count();
    let closed = jobs.iter().filter(|job| job.status == "closed").count();

    println!("===== Dashboard =====");
    println!("Total: {}", jobs.len());
    println!("Open: {}", open);
    println!("Closed: {}", closed);
    println!("Showing: {} ({})", shown.len(), status.as_str());
    println!();

    for job in &shown {
        print_job_row(job);
    }

    if !shown.is_empty() {
        println!();
    }

    let stats = handle_response(get_job_stats(config).await, "Failed to load statistics");

    println!("===== Statistics =====");
    println!("Closed: {}%", stats.closed_percentage);
    println!();

    print_groups("Employment Type", &stats.by_employment_type);
    print_groups("Experience Level", &stats.by_experience_level);

    println!("===== Recent Activity =====");
    for activity in stats.recent_activity {
        println!(
            "{}  {:<7}  {}",
            activity.updated_at, activity.status, activity.title
        );
    }
}
