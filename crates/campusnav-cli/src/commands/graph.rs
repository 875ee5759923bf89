use std::path::Path;

use anyhow::Result;

use campusnav_lib::Campus;

use crate::output::{print_graph_stats, GraphStats, OutputFormat};

pub fn graph_stats(campus: &Campus) -> GraphStats {
    let graph = campus.graph();
    let isolated_buildings = campus
        .buildings()
        .iter()
        .filter(|name| graph.neighbours_of(name).is_empty())
        .cloned()
        .collect();

    GraphStats {
        nodes: graph.len(),
        edges: graph.edge_count(),
        buildings: campus.buildings().len(),
        path_nodes: graph.len() - campus.buildings().len(),
        isolated_buildings,
        total_walkway_length: graph.edges().iter().map(|(_, _, weight)| weight).sum(),
    }
}

/// Handle the graph subcommand.
pub fn handle_graph_command(map: Option<&Path>, format: OutputFormat) -> Result<()> {
    let campus = super::load_map(map)?;
    print_graph_stats(&graph_stats(&campus), format)
}
