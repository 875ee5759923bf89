use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{Graph, NodeIndex};
use crate::ordering::FloatOrd;

use super::{SpanningTree, TreeAlgorithm};

/// Prim's algorithm from `start`.
///
/// Without an explicit start the first node with at least one walkway edge
/// is used, so an unconnected building listed early in the map does not
/// collapse the result to an empty tree.
///
/// The frontier is a binary heap of candidate edges; entries whose far
/// endpoint was visited after they were queued are discarded on pop. Only the
/// component containing the start node is spanned.
///
/// Equal weights are ordered by far-endpoint id, then near-endpoint id, so
/// the chosen edge set does not depend on heap internals.
pub fn prim(graph: &Graph, start: Option<NodeIndex>) -> SpanningTree {
    let node_count = graph.len();
    let Some(start) = start.or_else(|| first_connected(graph)) else {
        return SpanningTree::empty(TreeAlgorithm::Prim);
    };
    if start >= node_count {
        return SpanningTree::empty(TreeAlgorithm::Prim);
    }

    let mut visited = vec![false; node_count];
    let mut visited_count = 1;
    let mut frontier = BinaryHeap::new();
    let mut accepted = Vec::with_capacity(node_count - 1);

    visited[start] = true;
    push_frontier(graph, &visited, &mut frontier, start);

    while visited_count < node_count {
        let Some(entry) = frontier.pop() else {
            break;
        };
        if visited[entry.far] {
            continue;
        }

        visited[entry.far] = true;
        visited_count += 1;
        accepted.push((entry.near, entry.far, entry.weight.0));
        push_frontier(graph, &visited, &mut frontier, entry.far);
    }

    SpanningTree::from_indexed(graph, TreeAlgorithm::Prim, accepted)
}

fn first_connected(graph: &Graph) -> Option<NodeIndex> {
    (0..graph.len()).find(|&node| !graph.neighbours(node).is_empty())
}

fn push_frontier<'g>(
    graph: &'g Graph,
    visited: &[bool],
    frontier: &mut BinaryHeap<FrontierEntry<'g>>,
    node: NodeIndex,
) {
    for edge in graph.neighbours(node) {
        if !visited[edge.target] {
            frontier.push(FrontierEntry {
                weight: FloatOrd(edge.distance),
                near: node,
                far: edge.target,
                near_id: graph.node_id(node),
                far_id: graph.node_id(edge.target),
            });
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry<'g> {
    weight: FloatOrd,
    near: NodeIndex,
    far: NodeIndex,
    near_id: &'g str,
    far_id: &'g str,
}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on every key so BinaryHeap pops the smallest entry.
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.far_id.cmp(self.far_id))
            .then_with(|| other.near_id.cmp(self.near_id))
    }
}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
