use serde::Serialize;
use tracing::debug;

use crate::campus::Campus;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::path::find_route_dijkstra;

/// Shortest walking route between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Node ids from source to destination, inclusive.
    pub steps: Vec<String>,
    /// Total length in meters.
    pub total_distance: f64,
}

impl Route {
    /// Number of edges walked.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&str> {
        self.steps.first().map(String::as_str)
    }

    pub fn goal(&self) -> Option<&str> {
        self.steps.last().map(String::as_str)
    }
}

/// Shortest path between two exact node ids of a graph.
///
/// Unknown ids produce [`Error::UnknownNode`] and disconnected endpoints
/// produce [`Error::NoPathExists`]. Both are ordinary per-query results; the
/// graph is never modified, so later queries are unaffected.
pub fn shortest_path(graph: &Graph, source: &str, destination: &str) -> Result<Route> {
    let start = graph.index_of(source).ok_or_else(|| unknown(source))?;
    let goal = graph.index_of(destination).ok_or_else(|| unknown(destination))?;

    let path = find_route_dijkstra(graph, start, goal).ok_or_else(|| Error::NoPathExists {
        start: source.to_string(),
        goal: destination.to_string(),
    })?;

    Ok(Route {
        steps: path
            .nodes
            .iter()
            .map(|&index| graph.node_id(index).to_string())
            .collect(),
        total_distance: path.distance,
    })
}

/// Shortest path between two user-supplied names on a campus.
///
/// Names are resolved leniently (see [`Campus::resolve_name`]) and unknown
/// names carry "did you mean" suggestions.
pub fn plan_route(campus: &Campus, from: &str, to: &str) -> Result<Route> {
    let start = campus.resolve_index(from)?;
    let goal = campus.resolve_index(to)?;
    let graph = campus.graph();

    let route = shortest_path(graph, graph.node_id(start), graph.node_id(goal))?;
    debug!(
        from = route.start().unwrap_or_default(),
        to = route.goal().unwrap_or_default(),
        hops = route.hop_count(),
        meters = route.total_distance,
        "planned route"
    );
    Ok(route)
}

fn unknown(name: &str) -> Error {
    Error::UnknownNode {
        name: name.to_string(),
        suggestions: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_and_unreachable_are_distinct() {
        let graph = Graph::from_edges([("a", "b", 1.0), ("x", "y", 1.0)]);

        let error = shortest_path(&graph, "a", "zzz").expect_err("unknown");
        assert!(matches!(error, Error::UnknownNode { ref name, .. } if name == "zzz"));

        let error = shortest_path(&graph, "a", "y").expect_err("unreachable");
        assert!(matches!(error, Error::NoPathExists { .. }));

        // A failed query leaves the graph usable.
        let route = shortest_path(&graph, "x", "y").expect("route");
        assert_eq!(route.steps, vec!["x", "y"]);
    }

    #[test]
    fn same_source_and_destination_is_trivial() {
        let graph = Graph::from_edges([("a", "b", 1.0)]);
        let route = shortest_path(&graph, "b", "b").expect("trivial");
        assert_eq!(route.steps, vec!["b"]);
        assert_eq!(route.total_distance, 0.0);
        assert_eq!(route.hop_count(), 0);
    }
}
