use crate::graph::Graph;

use super::union_find::UnionFind;
use super::{SpanningTree, TreeAlgorithm};

/// Kruskal's algorithm.
///
/// Every undirected edge is taken once, sorted by weight with a stable sort
/// (ties keep adjacency order), and accepted when its endpoints still belong
/// to different sets. On a disconnected graph the result is a spanning forest.
pub fn kruskal(graph: &Graph) -> SpanningTree {
    let node_count = graph.len();
    if node_count == 0 {
        return SpanningTree::empty(TreeAlgorithm::Kruskal);
    }

    let mut edges = graph.edges();
    edges.sort_by(|a, b| a.2.total_cmp(&b.2));

    let mut sets = UnionFind::new(node_count);
    let mut accepted = Vec::with_capacity(node_count - 1);
    for (a, b, weight) in edges {
        if sets.union(a, b) {
            accepted.push((a, b, weight));
            if accepted.len() == node_count - 1 {
                break;
            }
        }
    }

    SpanningTree::from_indexed(graph, TreeAlgorithm::Kruskal, accepted)
}
