//! Spanning-tree command handler.

use std::path::Path;

use anyhow::Result;

use campusnav_lib::{plan_tree, TreeAlgorithm, TreeRequest, TreeSummary};

use crate::output::{print_tree, OutputFormat};

/// Arguments for the mst command.
#[derive(Debug, Clone, Default)]
pub struct MstCommandArgs {
    pub algorithm: TreeAlgorithm,
    /// Prim start node; ignored by Kruskal.
    pub start: Option<String>,
    /// Keep dead-end path branches.
    pub no_prune: bool,
    /// List only building-to-building edges.
    pub buildings_only: bool,
}

impl MstCommandArgs {
    /// Convert CLI args to a library request.
    pub fn to_request(&self) -> TreeRequest {
        TreeRequest {
            algorithm: self.algorithm,
            start: self.start.clone(),
            prune: !self.no_prune,
        }
    }
}

/// Handle the mst subcommand.
pub fn handle_mst_command(
    map: Option<&Path>,
    format: OutputFormat,
    args: &MstCommandArgs,
) -> Result<()> {
    let campus = super::load_map(map)?;

    if args.start.is_some() && args.algorithm == TreeAlgorithm::Kruskal {
        tracing::warn!("--start only applies to prim; ignoring it");
    }

    let tree = plan_tree(&campus, &args.to_request())?;
    let mut summary = TreeSummary::from_tree(&campus, &tree);
    if args.buildings_only {
        summary = summary.buildings_only();
    }

    print_tree(&summary, format)
}
