// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod components;
pub mod export;
pub mod info;
pub mod min_power;
pub mod path;

use crate::loader::{graph_from_file, Network};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;

/// Output settings shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Print machine-readable JSON instead of text
    pub json: bool,
    /// Allow ANSI colors in text output
    pub color: bool,
}

impl OutputOptions {
    /// Print a negative result ("no path", "unreachable")
    pub fn print_miss(&self, message: &str) {
        if self.color {
            println!("{}", message.yellow());
        } else {
            println!("{message}");
        }
    }

    /// Print a JSON value followed by a newline
    pub fn print_json(&self, value: &serde_json::Value) -> Result<()> {
        println!(
            "{}",
            serde_json::to_string_pretty(value).context("Failed to serialize output")?
        );
        Ok(())
    }
}

/// Load a network description for a command
pub(crate) fn load_network(file: &Path) -> Result<Network> {
    graph_from_file(file).with_context(|| format!("Failed to load network from {}", file.display()))
}

/// Render a path as `a -> b -> c`
pub(crate) fn format_path(path: &[u32]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
