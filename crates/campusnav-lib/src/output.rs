use std::fmt::Write;

use serde::Serialize;

use crate::campus::Campus;
use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::routing::Route;
use crate::spanning::{SpanningTree, TreeAlgorithm};

/// Average walking pace used for time estimates, in meters per minute.
pub const WALKING_SPEED_M_PER_MIN: f64 = 80.0;

/// Estimated walking time in minutes, rounded to one decimal place.
pub fn walking_minutes(meters: f64) -> f64 {
    (meters / WALKING_SPEED_M_PER_MIN * 10.0).round() / 10.0
}

/// Human-readable distance: whole meters below one kilometer, otherwise
/// kilometers with two decimals.
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{:.0} m", meters)
    } else {
        format!("{:.2} km", meters / 1000.0)
    }
}

/// Presentation style for turning a summary into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    PlainText,
    RichText,
}

/// Step taken along a walking route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: String,
    pub building: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
}

/// Structured representation of a route that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub start: String,
    pub goal: String,
    pub hops: usize,
    pub total_distance: f64,
    pub walking_minutes: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`Route`] into a summary annotated with campus data.
    pub fn from_route(campus: &Campus, route: &Route) -> Result<Self> {
        let (Some(start), Some(goal)) = (route.start(), route.goal()) else {
            return Err(Error::EmptyRoute);
        };

        let steps = route
            .steps
            .iter()
            .enumerate()
            .map(|(index, id)| RouteStep {
                index,
                id: id.clone(),
                building: campus.is_building(id),
                coordinate: campus.coordinate(id),
            })
            .collect();

        Ok(Self {
            start: start.to_string(),
            goal: goal.to_string(),
            hops: route.hop_count(),
            total_distance: route.total_distance,
            walking_minutes: walking_minutes(route.total_distance),
            steps,
        })
    }

    /// Drop intermediate path nodes, keeping only building steps.
    pub fn buildings_only(mut self) -> Self {
        self.steps.retain(|step| step.building);
        self
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::PlainText => self.render_plain(),
            RenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, {}, ~{:.1} min walk)",
            self.start,
            self.goal,
            self.hops,
            format_distance(self.total_distance),
            self.walking_minutes
        );
        for step in &self.steps {
            let marker = if step.building { "*" } else { " " };
            let _ = writeln!(buffer, "{:>3}:{} {}", step.index, marker, step.id);
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route**: _{} → {}_ ({}, ~{:.1} min)",
            self.start,
            self.goal,
            format_distance(self.total_distance),
            self.walking_minutes
        );
        let joined = self
            .steps
            .iter()
            .map(|step| {
                if step.building {
                    format!("**{}**", step.id)
                } else {
                    step.id.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" → ");
        let _ = writeln!(buffer, "{joined}");
        buffer
    }
}

/// Tree edge annotated for map display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TreeEdgeView {
    pub node1: String,
    pub node2: String,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coord1: Option<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coord2: Option<Coordinate>,
    /// Both endpoints are buildings.
    pub is_building_edge: bool,
}

/// Structured representation of a spanning tree for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TreeSummary {
    pub algorithm: TreeAlgorithm,
    pub pruned: bool,
    pub total_weight: f64,
    pub edge_count: usize,
    /// Every tree edge, including those through path nodes.
    pub all_edges: Vec<TreeEdgeView>,
    /// Only edges whose endpoints are both buildings.
    pub edges: Vec<TreeEdgeView>,
    pub building_edges_weight: f64,
    pub buildings_connected_directly: usize,
}

impl TreeSummary {
    pub fn from_tree(campus: &Campus, tree: &SpanningTree) -> Self {
        let all_edges: Vec<TreeEdgeView> = tree
            .edges
            .iter()
            .map(|edge| TreeEdgeView {
                node1: edge.a.clone(),
                node2: edge.b.clone(),
                weight: edge.weight,
                coord1: campus.coordinate(&edge.a),
                coord2: campus.coordinate(&edge.b),
                is_building_edge: campus.is_building(&edge.a) && campus.is_building(&edge.b),
            })
            .collect();

        let edges: Vec<TreeEdgeView> = all_edges
            .iter()
            .filter(|edge| edge.is_building_edge)
            .cloned()
            .collect();
        let building_edges_weight = edges.iter().map(|edge| edge.weight).sum();

        Self {
            algorithm: tree.algorithm,
            pruned: tree.pruned,
            total_weight: tree.total_weight,
            edge_count: tree.edge_count(),
            buildings_connected_directly: edges.len(),
            all_edges,
            edges,
            building_edges_weight,
        }
    }

    /// Keep only building-to-building edges in the listing.
    pub fn buildings_only(mut self) -> Self {
        self.all_edges.retain(|edge| edge.is_building_edge);
        self
    }

    /// Render the tree; building-to-building edges are marked with `*`.
    pub fn render(&self, mode: RenderMode) -> String {
        let mut buffer = String::new();
        let pruned = if self.pruned { ", pruned" } else { "" };
        let title = match mode {
            RenderMode::PlainText => "Minimum spanning tree",
            RenderMode::RichText => "**Minimum spanning tree**",
        };
        let _ = writeln!(
            buffer,
            "{title} ({}{pruned}): {} edges, {}",
            self.algorithm,
            self.edge_count,
            format_distance(self.total_weight)
        );

        for edge in &self.all_edges {
            let marker = if edge.is_building_edge { "*" } else { "-" };
            let _ = writeln!(
                buffer,
                " {} {} <-> {} ({})",
                marker,
                edge.node1,
                edge.node2,
                format_distance(edge.weight)
            );
        }
        if self.edges.is_empty() {
            let _ = writeln!(buffer, "No direct building-to-building connections.");
        } else {
            let _ = writeln!(
                buffer,
                "Direct building connections: {} ({})",
                self.buildings_connected_directly,
                format_distance(self.building_edges_weight)
            );
        }
        buffer
    }
}
