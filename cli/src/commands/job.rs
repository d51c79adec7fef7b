/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::input::*;
use clap::{Args, Subcommand};
use connector::jobs::*;
use std::process::exit;

#[derive(Args, Debug, Default)]
pub struct JobFields {
    #[arg(short, long)]
    title: Option<String>,
    #[arg(short, long)]
    description: Option<String>,
    #[arg(short, long)]
    location: Option<String>,
    #[arg(long)]
    salary: Option<String>,
    #[arg(short, long)]
    employment_type: Option<String>,
    #[arg(short = 'x', long)]
    experience_level: Option<String>,
    #[arg(short, long)]
    status: Option<String>,
    /// Comma separated list of skills
    #[arg(long)]
    skills: Option<String>,
    #[arg(short, long)]
    company: Option<String>,
    #[arg(long)]
    department: Option<String>,
}

impl JobFields {
    fn into_request(self) -> JobRequest {
        JobRequest {
            title: self.title,
            description: self.description,
            location: self.location,
            salary: self.salary,
            employment_type: self.employment_type,
            status: self.status,
            skills: self.skills.as_deref().map(split_list),
            experience_level: self.experience_level,
            company: self.company,
            department: self.department,
        }
    }

    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.salary.is_none()
            && self.employment_type.is_none()
            && self.experience_level.is_none()
            && self.status.is_none()
            && self.skills.is_none()
            && self.company.is_none()
            && self.department.is_none()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    List {
        #[arg(short, long)]
        status: Option<String>,
        /// Include closed and draft jobs
        #[arg(short, long)]
        all: bool,
        #[arg(long)]
        search: Option<String>,
        #[arg(short, long)]
        location: Option<String>,
        #[arg(short, long)]
        employment_type: Option<String>,
        #[arg(short = 'x', long)]
        experience_level: Option<String>,
        /// Sort key such as `-createdAt` or `title`
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        limit: Option<u64>,
        #[arg(short, long)]
        page: Option<u64>,
    },
    Show {
        /// Job id, shareable link or title slug
        identifier: String,
        #[arg(long)]
        json: bool,
    },
    Suggest {
        query: String,
    },
    Create {
        #[command(flatten)]
        fields: JobFields,
    },
    Edit {
        id: String,
        #[command(flatten)]
        fields: JobFields,
    },
    Close {
        id: String,
    },
    Reopen {
        id: String,
    },
    Delete {
        id: String,
    },
}

pub fn print_job_row(job: &JobResponse) {
    println!(
        "{:<36}  {:<7}  {:<30}  {:<20}  {}",
        job.id,
        job.status,
        truncate(&job.title, 30),
        truncate(&job.location, 20),
        job.employment_type
    );
}

fn print_job(job: &JobResponse) {
    println!("===== Job =====");
    println!("ID: {}", job.id);
    println!("Title: {}", job.title);
    println!("Company: {}", job.company);
    println!("Department: {}", job.department);
    println!("Location: {}", job.location);
    println!("Salary: {}", job.salary);
    println!("Employment Type: {}", job.employment_type);
    println!("Experience Level: {}", job.experience_level);
    println!("Status: {}", job.status);
    println!("Skills: {}", job.skills.join(", "));
    println!("Link: {}", job.shareable_link);
    println!("Views: {}", job.views);
    println!("Created At: {}", job.created_at);
    println!("Updated At: {}", job.updated_at);

    if let Some(closed_at) = &job.closed_at {
        println!("Closed At: {}", closed_at);
    }

    println!();
    println!("{}", job.description);
}

pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    let mut short = text.chars().take(width.saturating_sub(3)).collect::<String>();
    short.push_str("...");
    short
}

pub async fn handle(cmd: Commands) {
    match cmd {
        Commands::List {
            status,
            all,
            search,
            location,
            employment_type,
            experience_level,
            sort,
            limit,
            page,
        } => {
            let query = JobListQuery {
                status,
                show_all: all.then_some(true),
                search,
                location,
                employment_type,
                experience_level,
                sort,
                limit,
                page,
            };

            let listing = handle_response(
                get_jobs(request_config(), &query).await,
                "Failed to list jobs",
            );

            if listing.jobs.is_empty() {
                println!("No jobs found.");
                return;
            }

            for job in &listing.jobs {
                print_job_row(job);
            }

            println!();
            println!(
                "Page {}/{} ({} of {} jobs)",
                listing.pagination.page,
                listing.pagination.total_pages,
                listing.count,
                listing.total
            );
        }

        Commands::Show { identifier, json } => {
            let job = handle_response(
                get_job(request_config(), identifier).await,
                "Failed to show job",
            );

            if json {
                println!(
                    "{}",
                    or_exit(serde_json::to_string_pretty(&job).map_err(|e| e.to_string()))
                );
            } else {
                print_job(&job);
            }
        }

        Commands::Suggest { query } => {
            let suggestions = handle_response(
                get_job_suggestions(request_config(), query).await,
                "Failed to get suggestions",
            );

            if suggestions.is_empty() {
                println!("No suggestions.");
            }

            for suggestion in suggestions {
                println!(
                    "{}  {} ({}, {})",
                    suggestion.id, suggestion.title, suggestion.location, suggestion.employment_type
                );
            }
        }

        Commands::Create { mut fields } => {
            fields.title = fields.title.or_else(|| Some(ask_for_input("Title")));
            fields.description = fields
                .description
                .or_else(|| Some(ask_for_input("Description")));
            fields.location = fields.location.or_else(|| Some(ask_for_input("Location")));

            let job = handle_response(
                post_job(request_config(), &fields.into_request()).await,
                "Failed to create job",
            );

            println!("Job created.");
            println!("ID: {}", job.id);
            println!("Link: {}", job.shareable_link);
        }

        Commands::Edit { id, fields } => {
            if fields.is_empty() {
                eprintln!("Nothing to change.");
                exit(1);
            }

            let job = handle_response(
                put_job(request_config(), id, &fields.into_request()).await,
                "Failed to edit job",
            );

            println!("Job updated.");
            print_job(&job);
        }

        Commands::Close { id } => {
            let job = handle_response(
                patch_job_close(request_config(), id).await,
                "Failed to close job",
            );

            println!("Job \"{}\" closed.", job.title);
        }

        Commands::Reopen { id } => {
            let job = handle_response(
                patch_job_reopen(request_config(), id).await,
                "Failed to reopen job",
            );

            println!("Job \"{}\" reopened.", job.title);
        }

        Commands::Delete { id } => {
            let message = handle_response(
                delete_job(request_config(), id).await,
                "Failed to delete job",
            );

            println!("{}", message);
        }
    }
}
