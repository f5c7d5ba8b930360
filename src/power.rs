// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Power-constrained path queries
//!
//! A traveler with power `p` may cross any edge whose required power is at
//! most `p`. Reachability is monotone in `p`, so the minimum power between two
//! nodes is always one of the required powers present in the graph; both
//! search strategies only ever try those values.

use crate::error::{NetworkError, Result};
use crate::graph::{Graph, NodeId, Power};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, trace};

/// How `min_power` walks the candidate thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MinPowerStrategy {
    /// Binary search over the sorted distinct required powers
    #[default]
    Bisect,
    /// Lower the budget one threshold at a time from the maximum until it fails
    Scan,
}

impl fmt::Display for MinPowerStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bisect => write!(f, "bisect"),
            Self::Scan => write!(f, "scan"),
        }
    }
}

/// Minimum power between two nodes, with a path that achieves it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerPath<N, P> {
    /// Smallest budget that connects the two nodes
    pub power: P,
    /// Nodes from source to destination, both included
    pub path: Vec<N>,
}

impl<N: NodeId, P: Power> Graph<N, P> {
    /// Find a path from `src` to `dest` using only edges within `power`
    ///
    /// Returns `Ok(None)` when no such path exists. The path is the first one
    /// found by depth-first search, not the shortest.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::UnknownNode`] if either node is not in the graph.
    pub fn get_path_with_power(&self, src: &N, dest: &N, power: P) -> Result<Option<Vec<N>>> {
        self.require_node(src)?;
        self.require_node(dest)?;

        let path = self.search_path(src, dest, power);
        debug!(
            "path {:?} -> {:?} with power {:?}: {}",
            src,
            dest,
            power,
            if path.is_some() { "found" } else { "none" }
        );
        Ok(path)
    }

    /// Smallest power connecting `src` and `dest`, using [`MinPowerStrategy::Bisect`]
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::UnknownNode`] if either node is not in the graph.
    pub fn min_power(&self, src: &N, dest: &N) -> Result<Option<PowerPath<N, P>>> {
        self.min_power_with(src, dest, MinPowerStrategy::default())
    }

    /// Smallest power connecting `src` and `dest`
    ///
    /// Returns `Ok(None)` when the nodes lie in different connected components.
    /// When `src == dest` the result is `P::default()` with the path `[src]`.
    /// That value is a convention rather than a computed minimum: no edge is
    /// crossed, so graphs with negative powers still report the default.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::UnknownNode`] if either node is not in the graph.
    pub fn min_power_with(
        &self,
        src: &N,
        dest: &N,
        strategy: MinPowerStrategy,
    ) -> Result<Option<PowerPath<N, P>>> {
        self.require_node(src)?;
        self.require_node(dest)?;

        if src == dest {
            return Ok(Some(PowerPath {
                power: P::default(),
                path: vec![src.clone()],
            }));
        }

        let thresholds = self.power_thresholds();
        let Some(&upper) = thresholds.last() else {
            debug!("no edges, {:?} and {:?} are unreachable", src, dest);
            return Ok(None);
        };
        let Some(witness) = self.search_path(src, dest, upper) else {
            debug!("{:?} and {:?} are unreachable at any power", src, dest);
            return Ok(None);
        };

        let found = match strategy {
            MinPowerStrategy::Bisect => self.bisect(src, dest, &thresholds, witness),
            MinPowerStrategy::Scan => self.scan(src, dest, &thresholds, witness),
        };
        debug!(
            "min power {:?} -> {:?} = {:?} ({} strategy, {} candidates)",
            src,
            dest,
            found.power,
            strategy,
            thresholds.len()
        );
        Ok(Some(found))
    }

    /// Distinct required powers, ascending
    #[must_use]
    pub fn power_thresholds(&self) -> Vec<P> {
        let mut thresholds: Vec<P> = self
            .edges()
            .iter()
            .map(|edge| edge.required_power)
            .filter(|power| power.partial_cmp(power).is_some())
            .collect();
        thresholds.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        thresholds.dedup();
        thresholds
    }

    fn require_node(&self, node: &N) -> Result<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(NetworkError::UnknownNode(format!("{node:?}")))
        }
    }

    // `thresholds` is non-empty and its last value admits `witness`.
    fn bisect(&self, src: &N, dest: &N, thresholds: &[P], witness: Vec<N>) -> PowerPath<N, P> {
        let mut low = 0;
        let mut high = thresholds.len() - 1;
        let mut best = witness;

        while low < high {
            let mid = low + (high - low) / 2;
            match self.search_path(src, dest, thresholds[mid]) {
                Some(path) => {
                    high = mid;
                    best = path;
                }
                None => low = mid + 1,
            }
        }

        PowerPath {
            power: thresholds[high],
            path: best,
        }
    }

    fn scan(&self, src: &N, dest: &N, thresholds: &[P], witness: Vec<N>) -> PowerPath<N, P> {
        let mut found = PowerPath {
            power: thresholds[thresholds.len() - 1],
            path: witness,
        };

        for &power in thresholds.iter().rev().skip(1) {
            match self.search_path(src, dest, power) {
                Some(path) => found = PowerPath { power, path },
                None => break,
            }
        }

        found
    }

    /// Iterative depth-first search
    ///
    /// Each stack frame holds a node and the index of the next adjacency entry
    /// to try, so the frames spell out the current path and the visiting order
    /// matches the recursive formulation.
    fn search_path(&self, src: &N, dest: &N, power: P) -> Option<Vec<N>> {
        if src == dest {
            return Some(vec![src.clone()]);
        }

        let mut visited: HashSet<&N> = HashSet::new();
        visited.insert(src);
        let mut stack: Vec<(&N, usize)> = vec![(src, 0)];

        while let Some((node, cursor)) = stack.last().copied() {
            let Some(adjacent) = self.neighbors(node).get(cursor) else {
                stack.pop();
                continue;
            };
            if let Some(frame) = stack.last_mut() {
                frame.1 += 1;
            }

            let within_budget = adjacent.required_power <= power;
            if !within_budget {
                trace!(
                    "skip {:?} -> {:?}: needs {:?}",
                    node,
                    adjacent.neighbor,
                    adjacent.required_power
                );
                continue;
            }
            if !visited.insert(&adjacent.neighbor) {
                continue;
            }

            if adjacent.neighbor == *dest {
                let mut path: Vec<N> = stack.iter().map(|(n, _)| (*n).clone()).collect();
                path.push(dest.clone());
                return Some(path);
            }
            stack.push((&adjacent.neighbor, 0));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph<u32, u64> {
        let mut graph = Graph::new(1..=3);
        graph.add_edge(1, 2, 10);
        graph.add_edge(2, 3, 5);
        graph.add_edge(1, 3, 20);
        graph
    }

    fn assert_valid_path(graph: &Graph<u32, u64>, path: &[u32], power: u64) {
        for pair in path.windows(2) {
            assert!(
                graph
                    .neighbors(&pair[0])
                    .iter()
                    .any(|a| a.neighbor == pair[1] && a.required_power <= power),
                "no edge {} -> {} within power {}",
                pair[0],
                pair[1],
                power
            );
        }
    }

    #[test]
    fn test_triangle_min_power() {
        let graph = triangle();

        let found = graph.min_power(&1, &3).unwrap().unwrap();
        assert_eq!(found.power, 10);
        assert_eq!(found.path, vec![1, 2, 3]);
    }

    #[test]
    fn test_triangle_insufficient_power() {
        let graph = triangle();

        assert_eq!(graph.get_path_with_power(&1, &3, 4).unwrap(), None);
        assert_eq!(graph.get_path_with_power(&2, &3, 5).unwrap(), Some(vec![2, 3]));
    }

    #[test]
    fn test_path_respects_budget() {
        let graph = triangle();

        let path = graph.get_path_with_power(&1, &3, 20).unwrap().unwrap();
        assert_eq!(path.first(), Some(&1));
        assert_eq!(path.last(), Some(&3));
        assert_valid_path(&graph, &path, 20);

        let path = graph.get_path_with_power(&1, &3, 10).unwrap().unwrap();
        assert_eq!(path, vec![1, 2, 3]);
    }

    #[test]
    fn test_same_node() {
        let graph = triangle();

        assert_eq!(graph.get_path_with_power(&2, &2, 0).unwrap(), Some(vec![2]));
        let found = graph.min_power(&2, &2).unwrap().unwrap();
        assert_eq!(found.power, 0);
        assert_eq!(found.path, vec![2]);
    }

    #[test]
    fn test_disjoint_groups_unreachable() {
        let mut graph: Graph<u32> = Graph::default();
        graph.add_edge(1, 2, 1);
        graph.add_edge(3, 4, 1);

        assert_eq!(graph.min_power(&1, &4).unwrap(), None);
        assert_eq!(graph.get_path_with_power(&1, &4, u64::MAX).unwrap(), None);
    }

    #[test]
    fn test_isolated_node_without_edges() {
        let graph: Graph<u32> = Graph::new([1, 2]);

        assert_eq!(graph.min_power(&1, &2).unwrap(), None);
        assert!(graph.power_thresholds().is_empty());
    }

    #[test]
    fn test_unknown_node_is_an_error() {
        let graph = triangle();

        let err = graph.get_path_with_power(&1, &9, 100).unwrap_err();
        assert!(matches!(err, NetworkError::UnknownNode(ref id) if id == "9"));
        assert!(graph.min_power(&9, &1).is_err());
    }

    #[test]
    fn test_parallel_edges_pick_lower_power() {
        let mut graph: Graph<u32> = Graph::default();
        graph.add_edge_with_distance(1, 2, 50, 1);
        graph.add_edge_with_distance(1, 2, 7, 30);

        let found = graph.min_power(&1, &2).unwrap().unwrap();
        assert_eq!(found.power, 7);
        assert_eq!(found.path, vec![1, 2]);
        assert_eq!(graph.get_path_with_power(&1, &2, 6).unwrap(), None);
    }

    #[test]
    fn test_self_loop_does_not_break_traversal() {
        let mut graph: Graph<u32> = Graph::default();
        graph.add_edge(1, 1, 1);
        graph.add_edge(1, 2, 3);
        graph.add_edge(2, 2, 100);

        assert_eq!(graph.get_path_with_power(&1, &2, 3).unwrap(), Some(vec![1, 2]));
        assert_eq!(graph.min_power(&1, &2).unwrap().unwrap().power, 3);
    }

    #[test]
    fn test_strategies_agree() {
        let mut graph: Graph<u32> = Graph::new(1..=6);
        graph.add_edge(1, 2, 4);
        graph.add_edge(2, 3, 9);
        graph.add_edge(3, 4, 2);
        graph.add_edge(1, 5, 12);
        graph.add_edge(5, 4, 3);
        graph.add_edge(4, 6, 7);

        for src in 1..=6 {
            for dest in 1..=6 {
                let bisect = graph
                    .min_power_with(&src, &dest, MinPowerStrategy::Bisect)
                    .unwrap();
                let scan = graph
                    .min_power_with(&src, &dest, MinPowerStrategy::Scan)
                    .unwrap();
                assert_eq!(
                    bisect.as_ref().map(|found| found.power),
                    scan.as_ref().map(|found| found.power),
                    "{src} -> {dest}"
                );

                if let Some(found) = scan {
                    assert_eq!(found.path.first(), Some(&src));
                    assert_eq!(found.path.last(), Some(&dest));
                    assert_valid_path(&graph, &found.path, found.power);
                }
            }
        }
        assert_eq!(graph.min_power(&1, &6).unwrap().unwrap().power, 9);
    }

    #[test]
    fn test_float_powers() {
        let mut graph: Graph<&str, f64> = Graph::default();
        graph.add_edge_with_distance("depot", "a", 0.5, 1.0);
        graph.add_edge_with_distance("a", "b", 2.25, 1.0);
        graph.add_edge_with_distance("depot", "b", 3.75, 1.0);
        graph.add_edge_with_distance("b", "c", f64::NAN, 1.0);

        let found = graph.min_power(&"depot", &"b").unwrap().unwrap();
        assert!((found.power - 2.25).abs() < f64::EPSILON);
        assert_eq!(found.path, vec!["depot", "a", "b"]);
        assert_eq!(graph.power_thresholds().len(), 3);
        assert_eq!(graph.min_power(&"depot", &"c").unwrap(), None);
    }

    #[test]
    fn test_same_node_uses_default_power() {
        let mut graph: Graph<u32, f64> = Graph::default();
        graph.add_edge_with_distance(1, 1, -5.0, 1.0);

        let found = graph.min_power(&1, &1).unwrap().unwrap();
        assert!(found.power.abs() < f64::EPSILON);
        assert_eq!(found.path, vec![1]);
    }

    #[test]
    fn test_scan_witness_on_triangle() {
        let graph = triangle();

        let found = graph
            .min_power_with(&1, &3, MinPowerStrategy::Scan)
            .unwrap()
            .unwrap();
        assert_eq!(found.power, 10);
        assert_eq!(found.path, vec![1, 2, 3]);
        assert_valid_path(&graph, &found.path, found.power);
    }

    #[test]
    fn test_long_chain_does_not_overflow_stack() {
        let mut graph: Graph<u32> = Graph::default();
        for node in 0..50_000 {
            graph.add_edge(node, node + 1, u64::from(node % 17));
        }

        let found = graph.min_power(&0, &50_000).unwrap().unwrap();
        assert_eq!(found.power, 16);
        assert_eq!(found.path.len(), 50_001);
    }

    #[test]
    fn test_queries_are_repeatable() {
        let graph = triangle();

        let first = graph.min_power(&3, &1).unwrap();
        let second = graph.min_power(&3, &1).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            graph.get_path_with_power(&1, &3, 4).unwrap(),
            graph.get_path_with_power(&1, &3, 4).unwrap()
        );
    }
}
