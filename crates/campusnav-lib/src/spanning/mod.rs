//! Minimum spanning trees over the campus graph.
//!
//! This module provides:
//! - [`TreeAlgorithm`] - Supported spanning-tree algorithms (Kruskal, Prim)
//! - [`TreeRequest`] - Algorithm choice, optional Prim start, pruning toggle
//! - [`SpanningTree`] - Tree edges with their total weight
//! - [`plan_tree`] - Main entry point: build a tree and prune fringe branches
//!
//! # Strategy Pattern
//!
//! Each algorithm is wrapped in a [`SpanningTreeStrategy`] implementation so
//! callers can pick one at runtime via [`select_strategy`]. Both strategies
//! produce a tree with the same total weight on a connected graph; the edge
//! sets may differ when weights tie.
//!
//! # Example
//!
//! ```ignore
//! use campusnav_lib::{load_campus, plan_tree, TreeRequest};
//!
//! let campus = load_campus("campus_map.geojson")?;
//! let tree = plan_tree(&campus, &TreeRequest::kruskal())?;
//! println!("{} edges, {:.0} m", tree.edge_count(), tree.total_weight);
//! ```

mod kruskal;
mod prim;
mod prune;
mod strategy;
mod union_find;

pub use kruskal::kruskal;
pub use prim::prim;
pub use prune::prune_tree;
pub use strategy::{select_strategy, KruskalStrategy, PrimStrategy, SpanningTreeStrategy};
pub use union_find::UnionFind;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::info;

use crate::campus::Campus;
use crate::error::Result;
use crate::graph::{Graph, NodeIndex};

/// Supported spanning-tree algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TreeAlgorithm {
    /// Sorted edges merged through a union-find.
    #[default]
    Kruskal,
    /// Frontier expansion from a start node.
    Prim,
}

impl fmt::Display for TreeAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            TreeAlgorithm::Kruskal => "kruskal",
            TreeAlgorithm::Prim => "prim",
        };
        f.write_str(value)
    }
}

impl FromStr for TreeAlgorithm {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "kruskal" => Ok(TreeAlgorithm::Kruskal),
            "prim" => Ok(TreeAlgorithm::Prim),
            other => Err(format!("unknown spanning tree algorithm: {other}")),
        }
    }
}

/// Undirected tree edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeEdge {
    pub a: String,
    pub b: String,
    pub weight: f64,
}

impl TreeEdge {
    /// Endpoints in lexicographic order.
    pub fn canonical(&self) -> (&str, &str) {
        if self.a <= self.b {
            (&self.a, &self.b)
        } else {
            (&self.b, &self.a)
        }
    }
}

/// Spanning tree (or forest) produced by one of the strategies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTree {
    pub algorithm: TreeAlgorithm,
    pub edges: Vec<TreeEdge>,
    pub total_weight: f64,
    /// Whether fringe branches have been removed.
    pub pruned: bool,
}

impl SpanningTree {
    /// Empty, zero-weight tree.
    pub fn empty(algorithm: TreeAlgorithm) -> Self {
        Self {
            algorithm,
            edges: Vec::new(),
            total_weight: 0.0,
            pruned: false,
        }
    }

    pub(crate) fn from_indexed(
        graph: &Graph,
        algorithm: TreeAlgorithm,
        edges: Vec<(NodeIndex, NodeIndex, f64)>,
    ) -> Self {
        let total_weight = edges.iter().map(|(_, _, weight)| weight).sum();
        let edges = edges
            .into_iter()
            .map(|(a, b, weight)| TreeEdge {
                a: graph.node_id(a).to_string(),
                b: graph.node_id(b).to_string(),
                weight,
            })
            .collect();
        Self {
            algorithm,
            edges,
            total_weight,
            pruned: false,
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns true if the tree contains an edge between the two ids.
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.edges
            .iter()
            .any(|edge| (edge.a == a && edge.b == b) || (edge.a == b && edge.b == a))
    }
}

/// High-level spanning-tree request.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRequest {
    pub algorithm: TreeAlgorithm,
    /// Prim start node name; ignored by Kruskal. Defaults to the first
    /// node that has a walkway edge.
    pub start: Option<String>,
    /// Remove non-building dead ends after the tree is built.
    pub prune: bool,
}

impl Default for TreeRequest {
    fn default() -> Self {
        Self {
            algorithm: TreeAlgorithm::Kruskal,
            start: None,
            prune: true,
        }
    }
}

impl TreeRequest {
    /// Pruned Kruskal tree.
    pub fn kruskal() -> Self {
        Self::default()
    }

    /// Pruned Prim tree from the default start node.
    pub fn prim() -> Self {
        Self {
            algorithm: TreeAlgorithm::Prim,
            ..Self::default()
        }
    }

    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn unpruned(mut self) -> Self {
        self.prune = false;
        self
    }
}

/// Build the requested spanning tree and, unless disabled, prune it.
///
/// An unknown Prim start name is reported as [`crate::Error::UnknownNode`].
/// An empty graph yields an empty, zero-weight tree.
pub fn plan_tree(campus: &Campus, request: &TreeRequest) -> Result<SpanningTree> {
    let strategy = select_strategy(campus, request)?;
    let tree = strategy.build(campus.graph());
    info!(
        algorithm = %tree.algorithm,
        edges = tree.edge_count(),
        total_weight = tree.total_weight,
        "built spanning tree"
    );

    if !request.prune {
        return Ok(tree);
    }

    let pruned = prune_tree(&tree, |id| campus.is_building(id));
    info!(
        removed = tree.edge_count() - pruned.edge_count(),
        edges = pruned.edge_count(),
        total_weight = pruned.total_weight,
        "pruned spanning tree"
    );
    Ok(pruned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_round_trips_through_strings() {
        assert_eq!("Prim".parse::<TreeAlgorithm>(), Ok(TreeAlgorithm::Prim));
        assert_eq!(TreeAlgorithm::Kruskal.to_string(), "kruskal");
        assert!("boruvka".parse::<TreeAlgorithm>().is_err());
    }

    #[test]
    fn canonical_orders_endpoints() {
        let edge = TreeEdge {
            a: "z".to_string(),
            b: "a".to_string(),
            weight: 1.0,
        };
        assert_eq!(edge.canonical(), ("a", "z"));
    }

    #[test]
    fn request_builders_set_fields() {
        let request = TreeRequest::prim().with_start("Gym").unpruned();
        assert_eq!(request.algorithm, TreeAlgorithm::Prim);
        assert_eq!(request.start.as_deref(), Some("Gym"));
        assert!(!request.prune);
        assert!(TreeRequest::kruskal().prune);
    }
}
