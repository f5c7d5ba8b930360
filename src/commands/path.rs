// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Path command - finds a route that a vehicle of given power can drive

use super::{format_path, load_network, OutputOptions};
use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;
use tracing::info;

/// Run the path command
pub fn run(file: &Path, src: u32, dest: u32, power: u64, output: OutputOptions) -> Result<()> {
    let graph = load_network(file)?;
    info!("Searching path {} -> {} with power {}", src, dest, power);

    let path = graph
        .get_path_with_power(&src, &dest, power)
        .with_context(|| format!("Cannot route {src} -> {dest}"))?;

    if output.json {
        return output.print_json(&json!({
            "src": src,
            "dest": dest,
            "power": power,
            "path": path,
        }));
    }

    match path {
        Some(path) => println!("{}", format_path(&path)),
        None => output.print_miss(&format!("no path from {src} to {dest} with power {power}")),
    }
    Ok(())
}
