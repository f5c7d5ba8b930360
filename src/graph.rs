// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph store for delivery networks
//!
//! An undirected multigraph whose edges carry a required power and a distance.
//! Every edge insertion writes one adjacency entry on each endpoint, so the
//! adjacency relation is always symmetric.

use crate::error::Result;
use petgraph::dot::Dot;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use tracing::trace;

/// Identifier of a network location
pub trait NodeId: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> NodeId for T {}

/// Numeric type used for required power and distance
///
/// Only a partial order is needed: floating-point powers work, and values
/// that do not compare with themselves (NaN) never become search thresholds.
pub trait Power: Copy + PartialOrd + Default + fmt::Debug {}

impl<T: Copy + PartialOrd + Default + fmt::Debug> Power for T {}

/// One entry of a node's adjacency list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjacency<N, P> {
    /// Node at the other end of the edge
    pub neighbor: N,
    /// Minimum power needed to cross the edge
    pub required_power: P,
    /// Length of the edge (carried, never used for routing)
    pub distance: P,
}

/// An undirected edge as it was inserted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<N, P> {
    /// First endpoint
    pub from: N,
    /// Second endpoint
    pub to: N,
    /// Minimum power needed to cross the edge
    pub required_power: P,
    /// Length of the edge
    pub distance: P,
}

/// A delivery network
#[derive(Debug, Clone)]
pub struct Graph<N, P = u64> {
    /// Nodes in insertion order
    nodes: Vec<N>,
    /// Adjacency list per node
    adjacency: HashMap<N, Vec<Adjacency<N, P>>>,
    /// Edges in insertion order
    edges: Vec<Edge<N, P>>,
}

impl<N, P> Default for Graph<N, P> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            adjacency: HashMap::new(),
            edges: Vec::new(),
        }
    }
}

impl<N: NodeId, P: Power> Graph<N, P> {
    /// Create a graph whose node set is exactly `nodes`, with no edges
    ///
    /// Repeated identifiers collapse into a single node.
    #[must_use]
    pub fn new(nodes: impl IntoIterator<Item = N>) -> Self {
        let mut graph = Self::default();
        for node in nodes {
            graph.insert_node(node);
        }
        graph
    }

    /// Add a node if it is not already present; returns whether it was added
    pub fn insert_node(&mut self, node: N) -> bool {
        match self.adjacency.entry(node) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                self.nodes.push(slot.key().clone());
                slot.insert(Vec::new());
                true
            }
        }
    }

    /// Add an edge of distance 1
    pub fn add_edge(&mut self, node1: N, node2: N, required_power: P)
    where
        P: From<u8>,
    {
        self.add_edge_with_distance(node1, node2, required_power, P::from(1));
    }

    /// Add an edge, creating either endpoint if it is missing
    ///
    /// Parallel edges and self-loops are stored as given.
    pub fn add_edge_with_distance(&mut self, node1: N, node2: N, required_power: P, distance: P) {
        for endpoint in [&node1, &node2] {
            if self.insert_node(endpoint.clone()) {
                trace!("created node {:?} on first edge reference", endpoint);
            }
        }

        self.adjacency
            .entry(node1.clone())
            .or_default()
            .push(Adjacency {
                neighbor: node2.clone(),
                required_power,
                distance,
            });
        self.adjacency
            .entry(node2.clone())
            .or_default()
            .push(Adjacency {
                neighbor: node1.clone(),
                required_power,
                distance,
            });

        self.edges.push(Edge {
            from: node1,
            to: node2,
            required_power,
            distance,
        });
    }

    /// Get node count
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check whether `node` belongs to the node set
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// All nodes, in insertion order
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// All edges, in insertion order
    #[must_use]
    pub fn edges(&self) -> &[Edge<N, P>] {
        &self.edges
    }

    /// Adjacency list of `node` (empty for unknown nodes)
    #[must_use]
    pub fn neighbors(&self, node: &N) -> &[Adjacency<N, P>] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Partition the nodes into connected components, ignoring power
    ///
    /// Components appear in the order of their first node; nodes within a
    /// component appear in traversal order.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<N>> {
        let mut visited: HashSet<&N> = HashSet::with_capacity(self.nodes.len());
        let mut components = Vec::new();

        for start in &self.nodes {
            if !visited.insert(start) {
                continue;
            }

            let mut component = Vec::new();
            let mut stack = vec![start];
            while let Some(node) = stack.pop() {
                component.push(node.clone());
                for adjacent in self.neighbors(node) {
                    if visited.insert(&adjacent.neighbor) {
                        stack.push(&adjacent.neighbor);
                    }
                }
            }
            components.push(component);
        }

        components
    }

    /// Connected components as a set of sets, for order-independent comparison
    #[must_use]
    pub fn connected_components_set(&self) -> BTreeSet<BTreeSet<N>> {
        self.connected_components()
            .into_iter()
            .map(|component| component.into_iter().collect())
            .collect()
    }

    /// Export to DOT format for Graphviz
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut dot_graph: UnGraph<String, String> =
            UnGraph::with_capacity(self.nodes.len(), self.edges.len());
        let mut indices: HashMap<&N, NodeIndex> = HashMap::with_capacity(self.nodes.len());

        for node in &self.nodes {
            indices.insert(node, dot_graph.add_node(format!("{node:?}")));
        }

        for edge in &self.edges {
            if let (Some(&a), Some(&b)) = (indices.get(&edge.from), indices.get(&edge.to)) {
                let label = format!("p={:?} d={:?}", edge.required_power, edge.distance);
                dot_graph.add_edge(a, b, label);
            }
        }

        format!("{}", Dot::new(&dot_graph))
    }

    /// Export to JSON
    pub fn to_json(&self) -> Result<String>
    where
        N: Serialize,
        P: Serialize,
    {
        #[derive(Serialize)]
        struct Export<'a, N, P> {
            nodes: &'a [N],
            edges: &'a [Edge<N, P>],
        }

        let export = Export {
            nodes: &self.nodes,
            edges: &self.edges,
        };
        Ok(serde_json::to_string_pretty(&export)?)
    }
}

impl<N: NodeId, P: Power> fmt::Display for Graph<N, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "The graph is empty");
        }

        writeln!(
            f,
            "The graph has {} nodes and {} edges.",
            self.node_count(),
            self.edge_count()
        )?;
        for node in &self.nodes {
            let entries: Vec<String> = self
                .neighbors(node)
                .iter()
                .map(|a| format!("({:?}, {:?}, {:?})", a.neighbor, a.required_power, a.distance))
                .collect();
            writeln!(f, "{:?}-->[{}]", node, entries.join(", "))?;
        }
        Ok(())
    }
}
