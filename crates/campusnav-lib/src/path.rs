use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{Graph, NodeIndex};
use crate::ordering::FloatOrd;

/// Result of a successful search over dense node indices.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedPath {
    pub nodes: Vec<NodeIndex>,
    pub distance: f64,
}

/// Run Dijkstra's algorithm between two node indices.
///
/// The queue uses lazy deletion: a node may be queued several times with
/// stale distances and is skipped once it has been finalized. The search
/// stops as soon as `goal` is popped. Returns `None` when `goal` is
/// unreachable or either index is out of range.
///
/// When several shortest paths exist, equal priorities are ordered by node
/// index. Other implementations may legitimately pick a different path of the
/// same length.
pub fn find_route_dijkstra(
    graph: &Graph,
    start: NodeIndex,
    goal: NodeIndex,
) -> Option<IndexedPath> {
    let node_count = graph.len();
    if start >= node_count || goal >= node_count {
        return None;
    }
    if start == goal {
        return Some(IndexedPath {
            nodes: vec![start],
            distance: 0.0,
        });
    }

    let mut distances = vec![f64::INFINITY; node_count];
    let mut parents: Vec<Option<NodeIndex>> = vec![None; node_count];
    let mut finalized = vec![false; node_count];
    let mut queue = BinaryHeap::new();

    distances[start] = 0.0;
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        let current = entry.node;
        if finalized[current] {
            continue;
        }
        finalized[current] = true;

        if current == goal {
            break;
        }

        let current_distance = distances[current];
        for edge in graph.neighbours(current) {
            let next = edge.target;
            if finalized[next] {
                continue;
            }

            let next_cost = current_distance + edge.distance;
            if next_cost < distances[next] {
                distances[next] = next_cost;
                parents[next] = Some(current);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    if distances[goal].is_infinite() {
        return None;
    }

    Some(IndexedPath {
        nodes: reconstruct_path(&parents, start, goal),
        distance: distances[goal],
    })
}

fn reconstruct_path(
    parents: &[Option<NodeIndex>],
    start: NodeIndex,
    goal: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeIndex,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeIndex, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
