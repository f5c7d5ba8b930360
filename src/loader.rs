// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Network description parsing
//!
//! ```text
//! n m
//! node1 node2 required_power [distance]   (m lines)
//! ```
//!
//! Nodes are named `1..=n` and all of them are present in the resulting graph,
//! including those without edges. A missing distance defaults to 1.

use crate::error::{NetworkError, Result};
use crate::graph::Graph;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Graph type produced by the loader
pub type Network = Graph<u32, u64>;

/// Largest node count a network description may declare
///
/// Every declared node is allocated before any edge line is read, so the
/// header alone decides the memory footprint.
pub const MAX_NODES: u32 = 1_000_000;

/// Read a network description from a file
///
/// # Errors
///
/// Returns [`NetworkError::Io`] if the file cannot be read and
/// [`NetworkError::Malformed`] if its contents do not parse.
pub fn graph_from_file(path: &Path) -> Result<Network> {
    let text = fs::read_to_string(path).map_err(|source| NetworkError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_network(&text)?;
    debug!("loaded {}", path.display());
    Ok(graph)
}

/// Parse a network description
///
/// Blank lines are ignored, as is anything after the last edge line.
///
/// # Errors
///
/// Returns [`NetworkError::Malformed`] with the offending line number when a
/// line has the wrong number of fields, a field is not a non-negative integer,
/// `n` exceeds [`MAX_NODES`], a node lies outside `1..=n`, or fewer than `m`
/// edge lines are present.
pub fn parse_network(text: &str) -> Result<Network> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| NetworkError::malformed(1, "missing header `n m`"))?;
    let fields: Vec<&str> = header.split_whitespace().collect();
    let [nodes, edges] = fields[..] else {
        return Err(NetworkError::malformed(
            header_line,
            format!("expected `n m`, found {} fields", fields.len()),
        ));
    };
    let node_total: u32 = parse_field(header_line, nodes, "node count")?;
    let edge_total: usize = parse_field(header_line, edges, "edge count")?;
    if node_total > MAX_NODES {
        return Err(NetworkError::malformed(
            header_line,
            format!("node count {node_total} exceeds limit of {MAX_NODES}"),
        ));
    }

    let mut graph = Graph::new(1..=node_total);
    let mut last_line = header_line;

    for read in 0..edge_total {
        let (line_no, line) = lines.next().ok_or_else(|| {
            NetworkError::malformed(
                last_line + 1,
                format!("expected {edge_total} edge lines, found {read}"),
            )
        })?;
        last_line = line_no;

        let fields: Vec<&str> = line.split_whitespace().collect();
        let (node1, node2, power, distance) = match fields[..] {
            [a, b, p] => (a, b, p, None),
            [a, b, p, d] => (a, b, p, Some(d)),
            _ => {
                return Err(NetworkError::malformed(
                    line_no,
                    format!(
                        "expected `node1 node2 power [distance]`, found {} fields",
                        fields.len()
                    ),
                ))
            }
        };

        let node1 = parse_node(line_no, node1, node_total)?;
        let node2 = parse_node(line_no, node2, node_total)?;
        let power: u64 = parse_field(line_no, power, "power")?;
        let distance: u64 = match distance {
            Some(raw) => parse_field(line_no, raw, "distance")?,
            None => 1,
        };

        graph.add_edge_with_distance(node1, node2, power, distance);
    }

    debug!(
        "parsed network with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

impl FromStr for Network {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self> {
        parse_network(s)
    }
}

fn parse_field<T>(line: usize, raw: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse()
        .map_err(|e| NetworkError::malformed(line, format!("invalid {what} `{raw}`: {e}")))
}

fn parse_node(line: usize, raw: &str, node_total: u32) -> Result<u32> {
    let node: u32 = parse_field(line, raw, "node")?;
    if node == 0 || node > node_total {
        return Err(NetworkError::malformed(
            line,
            format!("node {node} outside 1..={node_total}"),
        ));
    }
    Ok(node)
}
