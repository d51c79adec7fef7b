/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::config::*;
use crate::input::*;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use connector::*;
use std::io;
use std::process::exit;

#[derive(Parser, Debug)]
#[command(name = "JobBoard", display_name = "JobBoard", bin_name = "jobboard", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    cmd: Option<MainCommands>,
    #[arg(long, value_enum)]
    generate_completions: Option<Shell>,
}

#[derive(Subcommand, Debug)]
enum MainCommands {
    Config {
        key: String,
        value: Option<String>,
    },
    Status,
    Register {
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        name: Option<String>,
    },
    Login {
        #[arg(short, long)]
        email: Option<String>,
    },
    Logout,
    Job {
        #[command(subcommand)]
        cmd: job::Commands,
    },
    Dashboard {
        #[arg(short, long, default_value = "all")]
        status: dashboard::StatusFilter,
        #[arg(long)]
        search: Option<String>,
    },
}

fn ensure_server_url() {
    let server_url = or_exit(set_get_value(ConfigKey::Server, None, true));

    if server_url.is_none() {
        or_exit(set_get_value(
            ConfigKey::Server,
            Some(ask_for_input("Server URL")),
            true,
        ));
    }
}

pub async fn run_cli() -> std::io::Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.generate_completions {
        let mut app = Cli::command();
        let bin_name = app.get_name().to_string();
        generate(shell, &mut app, bin_name, &mut io::stdout());
        return Ok(());
    }

    let Some(cmd) = cli.cmd else {
        Cli::command().print_help()?;
        exit(1);
    };

    match cmd {
        MainCommands::Config { key, value } => {
            or_exit(set_get_value_from_string(key, value, false));
        }

        MainCommands::Status => {
            let config = request_config();

            handle_response(health(config.clone()).await, "Server is not reachable");
            println!("Server Online.");

            let check = handle_response(auth::get_check(config).await, "Session check failed");

            match check.user {
                Some(user) if check.is_authenticated => {
                    println!("Logged in as {} ({}).", user.email, user.role);
                }
                _ => {
                    eprintln!("Not logged in. Use `jobboard login` to log in.");
                    exit(1);
                }
            }
        }

        MainCommands::Register { email, name } => {
            ensure_server_url();

            let email = email.unwrap_or_else(|| ask_for_input("Email"));
            let name = name.or_else(|| ask_for_optional("Name"));
            let password = ask_for_password();

            let res = handle_response(
                auth::post_register(request_config(), email, password, name).await,
                "Registration failed",
            );

            or_exit(set_get_value(ConfigKey::AuthToken, Some(res.token), true));
            println!("Registered and logged in as {}.", res.user.email);
        }

        MainCommands::Login { email } => {
            ensure_server_url();

            let email = email.unwrap_or_else(|| ask_for_input("Email"));
            let password = ask_for_password();

            let res = handle_response(
                auth::post_login(request_config(), email, password).await,
                "Login failed",
            );

            or_exit(set_get_value(ConfigKey::AuthToken, Some(res.token), true));
            println!("Logged in as {}.", res.user.email);
        }

        MainCommands::Logout => {
            or_exit(set_get_value(ConfigKey::AuthToken, Some(String::new()), true));
            println!("Logged out.");
        }

        MainCommands::Job { cmd } => job::handle(cmd).await,
        MainCommands::Dashboard { status, search } => dashboard::handle(status, search).await,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_job_list() {
        let cli = Cli::try_parse_from([
            "jobboard", "job", "list", "--all", "--status", "closed", "--limit", "10",
        ])
        .unwrap();

        assert!(matches!(cli.cmd, Some(MainCommands::Job { .. })));
    }

    #[test]
    fn test_parse_dashboard_status() {
        let cli = Cli::try_parse_from(["jobboard", "dashboard", "--status", "closed"]).unwrap();

        match cli.cmd {
            Some(MainCommands::Dashboard { status, search }) => {
                assert_eq!(status, dashboard::StatusFilter::Closed);
                assert_eq!(search, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        assert!(Cli::try_parse_from(["jobboard", "dashboard", "--status", "archived"]).is_err());
    }
}
