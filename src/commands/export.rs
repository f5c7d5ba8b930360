// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Export command - exports a network to various formats

use super::load_network;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Graphviz DOT format
    Dot,
    /// JSON format
    Json,
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Ok(Self::Dot),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown export format: {}. Supported: dot, json", other),
        }
    }
}

impl ExportFormat {
    /// Get file extension for format
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Json => "json",
        }
    }
}

/// Run the export command
pub fn run(file: &Path, format: &str, output: Option<PathBuf>) -> Result<()> {
    let export_format: ExportFormat = format.parse()?;
    info!("Exporting {} as {}", file.display(), export_format.extension());

    let graph = load_network(file)?;
    if graph.is_empty() {
        eprintln!("Warning: network has no nodes.");
    }

    let content = match export_format {
        ExportFormat::Dot => graph.to_dot(),
        ExportFormat::Json => graph.to_json()?,
    };

    match output {
        Some(path) => {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
