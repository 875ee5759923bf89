use std::collections::{HashMap, HashSet};

use super::SpanningTree;

/// Remove fringe branches: chains of non-building nodes ending in a leaf.
///
/// Leaves that are not buildings are removed repeatedly until a fixed point,
/// since dropping a leaf can expose the next node inward as a new leaf.
/// Surviving edges keep their original order and weight. A tree made only of
/// non-building nodes prunes down to an empty, zero-weight result.
pub fn prune_tree<F>(tree: &SpanningTree, is_building: F) -> SpanningTree
where
    F: Fn(&str) -> bool,
{
    let mut adjacency: HashMap<&str, HashSet<&str>> = HashMap::new();
    for edge in &tree.edges {
        adjacency.entry(&edge.a).or_default().insert(&edge.b);
        adjacency.entry(&edge.b).or_default().insert(&edge.a);
    }

    loop {
        let leaves: Vec<&str> = adjacency
            .iter()
            .filter(|(node, neighbours)| neighbours.len() == 1 && !is_building(**node))
            .map(|(node, _)| *node)
            .collect();
        if leaves.is_empty() {
            break;
        }

        for leaf in leaves {
            let Some(neighbours) = adjacency.remove(leaf) else {
                continue;
            };
            for neighbour in neighbours {
                if let Some(links) = adjacency.get_mut(neighbour) {
                    links.remove(leaf);
                    if links.is_empty() {
                        adjacency.remove(neighbour);
                    }
                }
            }
        }
    }

    let edges: Vec<_> = tree
        .edges
        .iter()
        .filter(|edge| {
            adjacency
                .get(edge.a.as_str())
                .is_some_and(|links| links.contains(edge.b.as_str()))
        })
        .cloned()
        .collect();
    let total_weight = edges.iter().map(|edge| edge.weight).sum();

    SpanningTree {
        algorithm: tree.algorithm,
        edges,
        total_weight,
        pruned: true,
    }
}
