// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs parses arguments and
// dispatches here.

pub mod buildings;
pub mod graph;
pub mod mst;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};

use campusnav_lib::{load_campus, resolve_map_path, Campus};

/// Resolve the map path and build the campus graph.
pub fn load_map(map: Option<&Path>) -> Result<Campus> {
    let path = resolve_map_path(map).context("failed to locate the campus map")?;
    load_campus(&path).with_context(|| format!("failed to load campus map from {}", path.display()))
}
