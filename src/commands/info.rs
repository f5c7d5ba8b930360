// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Info command - prints a network and its adjacency lists

use super::{load_network, OutputOptions};
use anyhow::Result;
use serde_json::json;
use std::path::Path;
use tracing::info;

/// Run the info command
pub fn run(file: &Path, output: OutputOptions) -> Result<()> {
    info!("Reading {}", file.display());
    let graph = load_network(file)?;

    if output.json {
        return output.print_json(&json!({
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "components": graph.connected_components().len(),
            "power_thresholds": graph.power_thresholds(),
        }));
    }

    print!("{graph}");
    if graph.is_empty() {
        println!();
    }
    Ok(())
}
