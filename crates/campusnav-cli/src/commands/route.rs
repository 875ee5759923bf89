//! Route command handler for computing walks between buildings.

use std::path::Path;

use anyhow::{Context, Result};

use campusnav_lib::{plan_route, RouteSummary};

use crate::output::{print_route, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting building name or node id.
    pub from: String,
    /// Destination building name or node id.
    pub to: String,
    /// Hide intermediate path nodes.
    pub buildings_only: bool,
}

/// Handle the route subcommand.
pub fn handle_route_command(
    map: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let campus = super::load_map(map)?;

    let route = plan_route(&campus, &args.from, &args.to)?;
    let mut summary =
        RouteSummary::from_route(&campus, &route).context("failed to summarise route")?;
    if args.buildings_only {
        summary = summary.buildings_only();
    }

    print_route(&summary, format)
}
