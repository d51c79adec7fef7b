/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use clap::Parser;
use jobboard_core::init_state;
use jobboard_core::types::Cli;
use std::future::Future;
use tracing_subscriber::EnvFilter;

/// Resolves once `signal` fires. A listener that cannot be installed keeps
/// the server running instead of shutting it down.
async fn wait_for_signal<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}

async fn shutdown_signal() {
    wait_for_signal(tokio::signal::ctrl_c()).await;
}

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .init();

    let _guard = cli
        .sentry_dsn
        .clone()
        .map(|dsn| sentry::init((dsn, sentry::ClientOptions::default())));

    let state = init_state(cli).await?;

    web::serve_web(state.clone(), shutdown_signal()).await?;

    state.db.close_by_ref().await?;
    tracing::info!("Server stopped");

    Ok(())
}
