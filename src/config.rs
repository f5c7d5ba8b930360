// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management

use crate::power::MinPowerStrategy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search strategy for min-power queries
    pub search: MinPowerStrategy,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Default export format (dot, json)
    pub export_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: MinPowerStrategy::Bisect,
            log_level: "info".to_string(),
            export_format: "dot".to_string(),
        }
    }
}

/// Location of the per-user configuration file
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "hyperpolymath", "delivery-network")
        .map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration from disk or use defaults
///
/// An explicit path must exist; the per-user file is optional.
pub fn load(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => read(path),
        None => match default_path() {
            Some(path) if path.exists() => read(&path),
            _ => Ok(Config::default()),
        },
    }
}

fn read(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
