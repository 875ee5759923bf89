//! Spanning-tree strategies implementing the Strategy pattern.
//!
//! This module provides the `SpanningTreeStrategy` trait and implementations
//! for Kruskal and Prim. The strategy pattern lets `plan_tree` stay agnostic
//! of the algorithm in use.

use crate::campus::Campus;
use crate::error::Result;
use crate::graph::{Graph, NodeIndex};

use super::{kruskal, prim, SpanningTree, TreeAlgorithm, TreeRequest};

/// Trait for spanning-tree strategies.
///
/// Implementations only read the graph and keep all working state local to
/// a call, so one strategy can serve concurrent requests.
pub trait SpanningTreeStrategy: Send + Sync {
    /// The algorithm identifier for this strategy.
    fn algorithm(&self) -> TreeAlgorithm;

    /// Build an unpruned spanning tree over `graph`.
    fn build(&self, graph: &Graph) -> SpanningTree;
}

/// Edge-sorting strategy backed by a union-find.
#[derive(Debug, Clone, Default)]
pub struct KruskalStrategy;

impl SpanningTreeStrategy for KruskalStrategy {
    fn algorithm(&self) -> TreeAlgorithm {
        TreeAlgorithm::Kruskal
    }

    fn build(&self, graph: &Graph) -> SpanningTree {
        kruskal(graph)
    }
}

/// Frontier-expansion strategy.
#[derive(Debug, Clone, Default)]
pub struct PrimStrategy {
    start: Option<NodeIndex>,
}

impl PrimStrategy {
    /// Start from a specific node instead of the first one.
    pub fn from_node(start: NodeIndex) -> Self {
        Self { start: Some(start) }
    }
}

impl SpanningTreeStrategy for PrimStrategy {
    fn algorithm(&self) -> TreeAlgorithm {
        TreeAlgorithm::Prim
    }

    fn build(&self, graph: &Graph) -> SpanningTree {
        prim(graph, self.start)
    }
}

/// Select the strategy for a request, resolving Prim's start name.
pub fn select_strategy(
    campus: &Campus,
    request: &TreeRequest,
) -> Result<Box<dyn SpanningTreeStrategy>> {
    match request.algorithm {
        TreeAlgorithm::Kruskal => Ok(Box::new(KruskalStrategy)),
        TreeAlgorithm::Prim => match request.start.as_deref() {
            Some(name) => Ok(Box::new(PrimStrategy::from_node(
                campus.resolve_index(name)?,
            ))),
            None => Ok(Box::new(PrimStrategy::default())),
        },
    }
}
