// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Min-power command - smallest power that connects two nodes

use super::{format_path, load_network, OutputOptions};
use crate::power::MinPowerStrategy;
use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;
use tracing::info;

/// Run the min-power command
pub fn run(
    file: &Path,
    src: u32,
    dest: u32,
    strategy: MinPowerStrategy,
    output: OutputOptions,
) -> Result<()> {
    let graph = load_network(file)?;
    info!("Computing min power {} -> {} ({})", src, dest, strategy);

    let found = graph
        .min_power_with(&src, &dest, strategy)
        .with_context(|| format!("Cannot route {src} -> {dest}"))?;

    if output.json {
        return output.print_json(&json!({
            "src": src,
            "dest": dest,
            "power": found.as_ref().map(|f| f.power),
            "path": found.as_ref().map(|f| &f.path),
        }));
    }

    match found {
        Some(found) => println!("min power {}: {}", found.power, format_path(&found.path)),
        None => output.print_miss(&format!("{src} and {dest} are unreachable")),
    }
    Ok(())
}
