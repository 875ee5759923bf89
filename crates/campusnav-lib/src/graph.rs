use std::collections::HashMap;
use std::sync::Arc;

/// Dense index assigned to every node id when the graph is built.
pub type NodeIndex = usize;

/// Default tolerance under which two parallel edges are considered duplicates.
pub const DUPLICATE_WEIGHT_TOLERANCE: f64 = 0.001;

/// Edge within the walking graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: NodeIndex,
    /// Great-circle length of the segment in meters.
    pub distance: f64,
}

/// Undirected adjacency-list graph keyed by string node ids.
///
/// Node ids are mapped to dense [`NodeIndex`] values in insertion order so the
/// search and spanning-tree algorithms can work on plain vectors. The data is
/// shared behind an [`Arc`]; cloning a graph is cheap and the value is
/// immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    inner: Arc<GraphData>,
}

#[derive(Debug, Default)]
struct GraphData {
    ids: Vec<String>,
    index: HashMap<String, NodeIndex>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    /// Build a graph from explicit `(a, b, distance)` triples.
    ///
    /// Nodes are created in first-seen order. Parallel edges whose weights lie
    /// within [`DUPLICATE_WEIGHT_TOLERANCE`] of an existing one are dropped.
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, f64)>,
    {
        let mut builder = GraphBuilder::new(DUPLICATE_WEIGHT_TOLERANCE);
        for (a, b, distance) in edges {
            let a = builder.add_node(a);
            let b = builder.add_node(b);
            builder.add_edge(a, b, distance);
        }
        builder.finish()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.inner.ids.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.inner.ids.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count
    }

    /// Dense index of a node id.
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.inner.index.get(id).copied()
    }

    /// Returns true if the graph contains the node id.
    pub fn contains(&self, id: &str) -> bool {
        self.inner.index.contains_key(id)
    }

    /// Node id for a dense index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn node_id(&self, index: NodeIndex) -> &str {
        &self.inner.ids[index]
    }

    /// Node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.inner.ids.iter().map(String::as_str)
    }

    /// Outgoing edges of a node; empty for an unknown index.
    pub fn neighbours(&self, index: NodeIndex) -> &[Edge] {
        self.inner
            .adjacency
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// `(neighbour id, weight)` pairs of a node id, in insertion order.
    pub fn neighbours_of(&self, id: &str) -> Vec<(&str, f64)> {
        self.index_of(id)
            .map(|index| {
                self.neighbours(index)
                    .iter()
                    .map(|edge| (self.node_id(edge.target), edge.distance))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Weight of the first edge stored between two node ids.
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        let (a, b) = (self.index_of(a)?, self.index_of(b)?);
        self.neighbours(a)
            .iter()
            .find(|edge| edge.target == b)
            .map(|edge| edge.distance)
    }

    /// Returns true if any edge connects the two node ids.
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// Every undirected edge exactly once as `(lower index, higher index, weight)`.
    ///
    /// Ordering follows the adjacency lists of the lower endpoint, so it is
    /// stable for a given graph.
    pub fn edges(&self) -> Vec<(NodeIndex, NodeIndex, f64)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (source, list) in self.inner.adjacency.iter().enumerate() {
            for edge in list {
                if source < edge.target {
                    edges.push((source, edge.target, edge.distance));
                }
            }
        }
        edges
    }
}

/// Mutable accumulator used while a graph is being assembled.
#[derive(Debug)]
pub(crate) struct GraphBuilder {
    data: GraphData,
    duplicate_tolerance: f64,
}

impl GraphBuilder {
    pub(crate) fn new(duplicate_tolerance: f64) -> Self {
        Self {
            data: GraphData::default(),
            duplicate_tolerance,
        }
    }

    /// Return the index for `id`, creating the node on first sight.
    pub(crate) fn add_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&index) = self.data.index.get(id) {
            return index;
        }
        let index = self.data.ids.len();
        self.data.ids.push(id.to_string());
        self.data.index.insert(id.to_string(), index);
        self.data.adjacency.push(Vec::new());
        index
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.data.index.contains_key(id)
    }

    /// Insert an undirected edge in both directions.
    ///
    /// Returns `false` when the edge is a self-loop or duplicates an existing
    /// edge between the same pair within the configured tolerance.
    pub(crate) fn add_edge(&mut self, a: NodeIndex, b: NodeIndex, distance: f64) -> bool {
        if a == b {
            return false;
        }

        let tolerance = self.duplicate_tolerance;
        let duplicate = self.data.adjacency[a]
            .iter()
            .any(|edge| edge.target == b && (edge.distance - distance).abs() <= tolerance);
        if duplicate {
            return false;
        }

        self.data.adjacency[a].push(Edge {
            target: b,
            distance,
        });
        self.data.adjacency[b].push(Edge {
            target: a,
            distance,
        });
        self.data.edge_count += 1;
        true
    }

    pub(crate) fn finish(self) -> Graph {
        Graph {
            inner: Arc::new(self.data),
        }
    }
}
