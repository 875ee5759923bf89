//! Campus navigation library entry points.
//!
//! This crate parses a campus GeoJSON map into a weighted walking graph
//! (buildings plus path junctions, edges weighted by great-circle distance),
//! answers shortest-route queries with Dijkstra's algorithm, and builds
//! minimum spanning trees with Kruskal or Prim followed by pruning of
//! non-building dead ends. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod campus;
pub mod dataset;
pub mod document;
pub mod error;
pub mod geo;
pub mod graph;
mod ordering;
pub mod output;
pub mod path;
pub mod routing;
pub mod spanning;
pub mod spatial;

pub use campus::{build_campus, build_campus_with_options, Campus, GraphBuildOptions};
pub use dataset::{default_map_path, load_campus, load_document, resolve_map_path};
pub use document::{Feature, Geometry, MapDocument};
pub use error::{Error, Result};
pub use geo::{haversine_distance, Coordinate};
pub use graph::{Edge, Graph, NodeIndex};
pub use output::{RenderMode, RouteStep, RouteSummary, TreeEdgeView, TreeSummary};
pub use path::{find_route_dijkstra, IndexedPath};
pub use routing::{plan_route, shortest_path, Route};
pub use spanning::{
    kruskal, plan_tree, prim, prune_tree, select_strategy, SpanningTree, SpanningTreeStrategy,
    TreeAlgorithm, TreeEdge, TreeRequest,
};
pub use spatial::BuildingIndex;
