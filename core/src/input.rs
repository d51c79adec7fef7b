/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::fmt;

use super::consts::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Missing(String),
    Invalid { field: String, reason: String },
}

impl InputError {
    pub fn missing(field: &str) -> Self {
        InputError::Missing(field.to_string())
    }

    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        InputError::Invalid {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Missing(field) => write!(f, "{} is required", field),
            InputError::Invalid { field, reason } => write!(f, "Invalid {}: {}", field, reason),
        }
    }
}

impl std::error::Error for InputError {}

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

pub fn load_secret(f: &str) -> std::io::Result<String> {
    let s = std::fs::read_to_string(f)?;
    Ok(s.trim().replace(char::from(25), ""))
}

/// Parses an optional positive integer query parameter.
pub fn positive_param(field: &str, value: Option<&str>, default: u64) -> Result<u64, InputError> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => match v.parse::<u64>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(InputError::invalid(field, "must be a positive integer")),
        },
    }
}

pub fn required_text(field: &str, value: Option<&str>) -> Result<String, InputError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(InputError::missing(field)),
    }
}

/// Trimmed value, or `default` for missing and blank input.
pub fn text_or(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

pub fn clean_skills(skills: Vec<String>) -> Vec<String> {
    skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn validate_password(password: &str) -> Result<(), InputError> {
    let len = password.chars().count();

    if len < *PASSWORD_LENGTH.start() {
        return Err(InputError::invalid(
            "password",
            format!(
                "must be at least {} characters long",
                PASSWORD_LENGTH.start()
            ),
        ));
    }

    if len > *PASSWORD_LENGTH.end() {
        return Err(InputError::invalid(
            "password",
            format!("cannot exceed {} characters", PASSWORD_LENGTH.end()),
        ));
    }

    Ok(())
}

/// Escapes `%`, `_` and `\` so user input matches literally inside a LIKE pattern.
pub fn escape_like(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());

    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }

        escaped.push(c);
    }

    escaped
}
