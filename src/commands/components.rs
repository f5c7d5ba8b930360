// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Components command - lists groups of mutually reachable nodes

use super::{load_network, OutputOptions};
use anyhow::Result;
use std::path::Path;

/// Run the components command
pub fn run(file: &Path, output: OutputOptions) -> Result<()> {
    let graph = load_network(file)?;
    let components = graph.connected_components_set();

    if output.json {
        return output.print_json(&serde_json::to_value(&components)?);
    }

    println!("Found {} component(s):", components.len());
    for component in &components {
        let members: Vec<String> = component.iter().map(ToString::to_string).collect();
        println!("  {}", members.join(" "));
    }
    Ok(())
}
