/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::config::*;
use connector::{BaseResponse, RequestConfig};
use rpassword::read_password;
use std::io::{self, Write};
use std::process::exit;

/// Prints the error and terminates with a non-zero exit code.
pub fn or_exit<T>(result: Result<T, String>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("{}", e);
        exit(1);
    })
}

/// Unwraps a server response, printing `failure` and exiting when it
/// carries an error.
pub fn handle_response<T>(res: Result<BaseResponse<T>, String>, failure: &str) -> T {
    match res {
        Ok(res) if !res.error => res.message,
        Ok(_) => {
            eprintln!("{}", failure);
            exit(1);
        }
        Err(e) => {
            eprintln!("{}: {}", failure, e);
            exit(1);
        }
    }
}

fn read_line(prompt: &str) -> Result<String, String> {
    print!("{}: ", prompt);
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut inp = String::new();
    io::stdin()
        .read_line(&mut inp)
        .map_err(|_| format!("Failed to read {}.", prompt))?;

    Ok(inp.trim().to_string())
}

pub fn ask_for_input(prompt: &str) -> String {
    let inp = or_exit(read_line(prompt));

    if inp.is_empty() {
        eprintln!("{} cannot be empty.", prompt);
        exit(1);
    }

    inp
}

/// Prompts for a value that may be left blank.
pub fn ask_for_optional(prompt: &str) -> Option<String> {
    let inp = or_exit(read_line(&format!("{} (optional)", prompt)));
    Some(inp).filter(|inp| !inp.is_empty())
}

pub fn ask_for_password() -> String {
    print!("Password: ");
    or_exit(io::stdout().flush().map_err(|e| e.to_string()));
    let inp = or_exit(read_password().map_err(|_| "Failed to read password.".to_string()));

    if inp.is_empty() {
        eprintln!("Password cannot be empty.");
        exit(1);
    }

    inp
}

pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn get_request_config(config: Config) -> Result<RequestConfig, String> {
    let server_url = config
        .get(&ConfigKey::Server)
        .cloned()
        .flatten()
        .ok_or_else(|| "Server URL not set. Use `jobboard config server <url>` to set it.".to_string())?;

    let token = config
        .get(&ConfigKey::AuthToken)
        .cloned()
        .flatten()
        .filter(|token| !token.is_empty());

    Ok(RequestConfig { server_url, token })
}

pub fn request_config() -> RequestConfig {
    or_exit(load_config().and_then(get_request_config))
}
