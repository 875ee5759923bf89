//! Campus graph construction from a parsed map document.
//!
//! Building nodes come from named point features; path nodes are synthesised
//! for every distinct pathway vertex that does not coincide with a building.
//! The resulting [`Campus`] bundles the walking graph, the coordinate table and
//! the set of building ids, and is immutable once built.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info, warn};

use crate::document::MapDocument;
use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::graph::{Graph, GraphBuilder, NodeIndex, DUPLICATE_WEIGHT_TOLERANCE};
use crate::spatial::BuildingIndex;

/// Default snapping tolerance in degrees, applied per axis.
pub const SNAP_TOLERANCE_DEG: f64 = 1e-7;

/// Decimal places used to deduplicate pathway vertices.
pub const COORDINATE_PRECISION: i32 = 8;

/// Reserved point name that marks the map container rather than a building.
pub const CONTAINER_SENTINEL: &str = "Container";

/// Maximum similarity-ranked suggestions returned for unknown names.
const MAX_SUGGESTIONS: usize = 3;

/// Minimum normalised similarity for a name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.6;

/// Tunables for [`build_campus`].
#[derive(Debug, Clone, PartialEq)]
pub struct GraphBuildOptions {
    pub snap_tolerance: f64,
    pub coordinate_precision: i32,
    pub duplicate_tolerance: f64,
    /// Compared case-insensitively against point names.
    pub container_name: String,
    /// Property keys tried in order when reading a point's name.
    pub name_properties: Vec<String>,
}

impl Default for GraphBuildOptions {
    fn default() -> Self {
        Self {
            snap_tolerance: SNAP_TOLERANCE_DEG,
            coordinate_precision: COORDINATE_PRECISION,
            duplicate_tolerance: DUPLICATE_WEIGHT_TOLERANCE,
            container_name: CONTAINER_SENTINEL.to_string(),
            name_properties: vec!["Name".to_string(), "name".to_string()],
        }
    }
}

/// Walking graph plus the lookup tables derived alongside it.
#[derive(Debug, Clone, Default)]
pub struct Campus {
    graph: Graph,
    coordinates: HashMap<String, Coordinate>,
    buildings: BTreeSet<String>,
}

impl Campus {
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Coordinate table covering buildings and path nodes.
    pub fn coordinates(&self) -> &HashMap<String, Coordinate> {
        &self.coordinates
    }

    /// Building ids in lexicographic order.
    pub fn buildings(&self) -> &BTreeSet<String> {
        &self.buildings
    }

    pub fn coordinate(&self, id: &str) -> Option<Coordinate> {
        self.coordinates.get(id).copied()
    }

    pub fn is_building(&self, id: &str) -> bool {
        self.buildings.contains(id)
    }

    /// Resolve a user-supplied name to a graph node id.
    ///
    /// Exact ids win; otherwise building names are matched ignoring ASCII
    /// case and surrounding whitespace.
    pub fn resolve_name(&self, name: &str) -> Option<&str> {
        if let Some(index) = self.graph.index_of(name) {
            return Some(self.graph.node_id(index));
        }
        let wanted = name.trim();
        self.buildings
            .iter()
            .find(|building| building.eq_ignore_ascii_case(wanted))
            .map(String::as_str)
    }

    /// Resolve a name to its dense index, or an `UnknownNode` error with suggestions.
    pub fn resolve_index(&self, name: &str) -> Result<NodeIndex> {
        self.resolve_name(name)
            .and_then(|id| self.graph.index_of(id))
            .ok_or_else(|| Error::UnknownNode {
                name: name.to_string(),
                suggestions: self.fuzzy_building_matches(name, MAX_SUGGESTIONS),
            })
    }

    /// Building names most similar to `name`, best first.
    pub fn fuzzy_building_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let wanted = name.trim().to_lowercase();
        let mut scored: Vec<(f64, &String)> = self
            .buildings
            .iter()
            .map(|building| {
                let candidate = building.to_lowercase();
                let mut score = strsim::normalized_damerau_levenshtein(&wanted, &candidate)
                    .max(strsim::jaro_winkler(&wanted, &candidate) - 0.1);
                if !wanted.is_empty() && candidate.contains(&wanted) {
                    score = score.max(0.9);
                }
                (score, building)
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, building)| building.clone())
            .collect()
    }
}

/// Build the campus graph using [`GraphBuildOptions::default`].
pub fn build_campus(document: &MapDocument) -> Result<Campus> {
    build_campus_with_options(document, &GraphBuildOptions::default())
}

/// Build the campus graph from a parsed document.
///
/// Buildings are registered first, in document order, followed by path nodes
/// in the order their vertices are first encountered along the lines.
pub fn build_campus_with_options(
    document: &MapDocument,
    options: &GraphBuildOptions,
) -> Result<Campus> {
    let mut builder = GraphBuilder::new(options.duplicate_tolerance);
    let mut coordinates: HashMap<String, Coordinate> = HashMap::new();
    let mut buildings: BTreeSet<String> = BTreeSet::new();
    let mut index = BuildingIndex::new(options.snap_tolerance);

    for (feature, coordinate) in document.points() {
        let Some(name) = building_name(feature, options) else {
            debug!(lon = coordinate.lon, lat = coordinate.lat, "skipping unnamed point");
            continue;
        };
        if !buildings.insert(name.to_string()) {
            debug!(building = name, "duplicate building point ignored");
            continue;
        }
        builder.add_node(name);
        coordinates.insert(name.to_string(), coordinate);
        index.insert(name, coordinate);
    }

    for kind in document.unsupported_geometries() {
        warn!(geometry = kind, "ignoring unsupported geometry");
    }

    let scale = 10f64.powi(options.coordinate_precision);
    let mut path_nodes: HashMap<(i64, i64), NodeIndex> = HashMap::new();
    let mut next_path_id = 0usize;
    let mut path_node_count = 0usize;

    for segment in document.line_segments() {
        if segment.len() < 2 {
            return Err(Error::malformed(format!(
                "line segment with {} vertex(es); at least two are required",
                segment.len()
            )));
        }

        let mut previous: Option<(NodeIndex, Coordinate)> = None;
        for vertex in segment {
            let node = if let Some(building) = index.snap(vertex) {
                builder.add_node(building)
            } else {
                let key = (
                    (vertex.lon * scale).round() as i64,
                    (vertex.lat * scale).round() as i64,
                );
                *path_nodes.entry(key).or_insert_with(|| {
                    let mut id = format!("node_{next_path_id}");
                    next_path_id += 1;
                    // A building may already own this name.
                    while builder.contains(&id) {
                        debug!(node = %id, "path node id taken by a building, skipping");
                        id = format!("node_{next_path_id}");
                        next_path_id += 1;
                    }
                    path_node_count += 1;
                    coordinates.insert(id.clone(), *vertex);
                    builder.add_node(&id)
                })
            };

            if let Some((prev_node, prev_coord)) = previous {
                builder.add_edge(prev_node, node, prev_coord.distance_to(vertex));
            }
            previous = Some((node, *vertex));
        }
    }

    let graph = builder.finish();
    info!(
        buildings = buildings.len(),
        path_nodes = path_node_count,
        nodes = graph.len(),
        edges = graph.edge_count(),
        "built campus graph"
    );

    Ok(Campus {
        graph,
        coordinates,
        buildings,
    })
}

fn building_name<'a>(
    feature: &'a crate::document::Feature,
    options: &GraphBuildOptions,
) -> Option<&'a str> {
    let name = options
        .name_properties
        .iter()
        .find_map(|key| feature.property_str(key))?
        .trim();
    if name.is_empty() || name.eq_ignore_ascii_case(&options.container_name) {
        return None;
    }
    Some(name)
}
