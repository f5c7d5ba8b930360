// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types for the delivery network library
//!
//! "No path" and "unreachable" are not errors: queries report them as `Ok(None)`.
//! Errors are reserved for input that cannot be interpreted at all.

use std::path::PathBuf;
use thiserror::Error;

/// Library result alias
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors raised while building or querying a delivery network
#[derive(Debug, Error)]
pub enum NetworkError {
    /// A query referenced a node that is not part of the graph
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// The network description does not match the expected format
    #[error("malformed network description at line {line}: {reason}")]
    Malformed {
        /// 1-based line number where parsing failed
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// The network description could not be read
    #[error("failed to read {}", path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The graph could not be serialized
    #[error("failed to export graph: {0}")]
    Export(#[from] serde_json::Error),
}

impl NetworkError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }
}
