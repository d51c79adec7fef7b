/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod input;
pub mod jobs;
pub mod lifecycle;
pub mod types;

use anyhow::{Context, Result};
use database::connect_db;
use input::load_secret;
use std::sync::Arc;
use types::*;

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    tracing::info!("Starting JobBoard Server on {}:{}", cli.ip, cli.port);

    let jwt_secret = if let Some(file) = &cli.jwt_secret_file {
        load_secret(file).context("Failed to read jwt secret from file")?
    } else if let Some(secret) = &cli.jwt_secret {
        secret.clone()
    } else {
        anyhow::bail!("No jwt secret provided")
    };

    if jwt_secret.is_empty() {
        anyhow::bail!("JWT secret is empty");
    }

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState {
        db,
        cli,
        jwt_secret,
    }))
}
