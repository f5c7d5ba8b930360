// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Delivery network library - power-constrained routing
//!
//! A delivery network is an undirected graph whose edges demand a minimum
//! power from whoever crosses them. This crate answers two questions about
//! such a network: can a vehicle with a given power get from one node to
//! another, and what is the least power that makes the trip possible.
//!
//! ```
//! use delivery_network::graph::Graph;
//!
//! let mut network: Graph<u32> = Graph::new(1..=3);
//! network.add_edge(1, 2, 10);
//! network.add_edge(2, 3, 5);
//! network.add_edge(1, 3, 20);
//!
//! let found = network.min_power(&1, &3).unwrap().unwrap();
//! assert_eq!(found.power, 10);
//! assert_eq!(found.path, vec![1, 2, 3]);
//! assert_eq!(network.get_path_with_power(&1, &3, 4).unwrap(), None);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod graph;
pub mod loader;
pub mod power;

/// Prelude for common imports
pub mod prelude {
    pub use crate::error::{NetworkError, Result};
    pub use crate::graph::{Adjacency, Edge, Graph, NodeId, Power};
    pub use crate::loader::{graph_from_file, parse_network, Network};
    pub use crate::power::{MinPowerStrategy, PowerPath};
}
