/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

pub type Config = HashMap<ConfigKey, Option<String>>;

#[derive(Clone, Copy, Debug, EnumIter, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ConfigKey {
    AuthToken,
    Server,
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::iter()
            .find(|key| key.to_string() == s.to_lowercase())
            .ok_or_else(|| format!("Invalid key: {}", s))
    }
}

fn get_config_file() -> Result<PathBuf, String> {
    let mut config_dir =
        dirs::config_dir().ok_or_else(|| "Could not find configuration directory".to_string())?;
    config_dir.push("jobboard");
    config_dir.push("config.toml");
    Ok(config_dir)
}

pub fn parse_config(contents: &str) -> Result<Config, String> {
    toml::from_str(contents).map_err(|e| format!("Failed to parse configuration file: {}", e))
}

pub fn load_config() -> Result<Config, String> {
    let config_file = get_config_file()?;

    if !config_file.exists() {
        return Ok(ConfigKey::iter().map(|key| (key, None)).collect());
    }

    let contents = fs::read_to_string(&config_file)
        .map_err(|e| format!("Failed to read configuration file: {}", e))?;
    parse_config(&contents)
}

pub fn save_config(config: &Config) -> Result<(), String> {
    let config_file = get_config_file()?;

    if let Some(config_dir) = config_file.parent() {
        fs::create_dir_all(config_dir)
            .map_err(|e| format!("Failed to create configuration directory: {}", e))?;
    }

    let contents = toml::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize configuration: {}", e))?;
    fs::write(config_file, contents).map_err(|e| format!("Failed to write configuration file: {}", e))
}

/// Reads `key`, or stores `value` under it when given.
pub fn set_get_value(
    key: ConfigKey,
    value: Option<String>,
    quiet: bool,
) -> Result<Option<String>, String> {
    let mut config = load_config()?;

    if let Some(value) = value {
        config.insert(key, Some(value.clone()));
        save_config(&config)?;

        if !quiet {
            println!("{} set to \"{}\"", key, value);
        }

        return Ok(Some(value));
    }

    let value = config
        .get(&key)
        .cloned()
        .flatten()
        .filter(|value| !value.is_empty());

    if !quiet {
        println!("{}", value.as_deref().unwrap_or("[unset]"));
    }

    Ok(value)
}

pub fn set_get_value_from_string(
    key: String,
    value: Option<String>,
    quiet: bool,
) -> Result<Option<String>, String> {
    let key = key.parse::<ConfigKey>().map_err(|e| {
        let valid_keys = ConfigKey::iter()
            .map(|key| key.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        format!("{}\nValid keys are: {}", e, valid_keys)
    })?;

    set_get_value(key, value, quiet)
}
