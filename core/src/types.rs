/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug, Clone)]
#[command(name = "JobBoard", display_name = "JobBoard", bin_name = "jobboard-server", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "JOBBOARD_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "JOBBOARD_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "JOBBOARD_PORT", value_parser = port_in_range, default_value_t = 5000)]
    pub port: u16,
    #[arg(long, env = "JOBBOARD_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "JOBBOARD_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "JOBBOARD_JWT_SECRET")]
    pub jwt_secret: Option<String>,
    #[arg(long, env = "JOBBOARD_JWT_SECRET_FILE")]
    pub jwt_secret_file: Option<String>,
    #[arg(long, env = "JOBBOARD_TOKEN_TTL_HOURS", value_parser = greater_than_zero::<i64>, default_value = "168")]
    pub token_ttl_hours: i64,
    #[arg(
        long,
        env = "JOBBOARD_CORS_ORIGINS",
        default_value = "http://localhost:5173,http://localhost:5174,http://localhost:3000"
    )]
    pub cors_origins: String,
    #[arg(long, env = "JOBBOARD_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
    #[arg(long, env = "JOBBOARD_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
}

impl Cli {
    pub fn cors_origin_list(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
    pub jwt_secret: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type EJob = job::Entity;
pub type EUser = user::Entity;

pub type MJob = job::Model;
pub type MUser = user::Model;

pub type AJob = job::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CJob = job::Column;
pub type CUser = user::Column;
