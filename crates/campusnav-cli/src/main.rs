use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use campusnav_cli::commands::buildings::handle_buildings_command;
use campusnav_cli::commands::graph::handle_graph_command;
use campusnav_cli::commands::mst::{handle_mst_command, MstCommandArgs};
use campusnav_cli::commands::route::{handle_route_command, RouteCommandArgs};
use campusnav_cli::logging::{init_logging, LogFormat};
use campusnav_cli::output::OutputFormat;
use campusnav_lib::{Error as LibError, TreeAlgorithm};

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus walking routes and spanning trees")]
struct Cli {
    /// Path to the campus GeoJSON map (file or directory).
    #[arg(long, global = true, env = "CAMPUSNAV_MAP")]
    map: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log format written to stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest walking route between two locations.
    Route(RouteArgs),
    /// Build a minimum spanning tree of the walkway network.
    Mst(MstArgs),
    /// List buildings on the map.
    Buildings,
    /// Show graph size statistics.
    Graph,
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Starting building name.
    #[arg(long = "from")]
    from: String,
    /// Destination building name.
    #[arg(long = "to")]
    to: String,
    /// Only list buildings along the route.
    #[arg(long)]
    buildings_only: bool,
}

#[derive(Args, Debug)]
struct MstArgs {
    /// Spanning-tree algorithm (kruskal or prim).
    #[arg(long, default_value = "kruskal")]
    algorithm: TreeAlgorithm,
    /// Start node for prim.
    #[arg(long)]
    start: Option<String>,
    /// Keep dead-end path branches.
    #[arg(long)]
    no_prune: bool,
    /// Only list building-to-building edges.
    #[arg(long)]
    buildings_only: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            if let Some(hint) = hint_for(&error) {
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let map = cli.map.as_deref();
    match cli.command {
        Command::Route(args) => handle_route_command(
            map,
            cli.format,
            &RouteCommandArgs {
                from: args.from,
                to: args.to,
                buildings_only: args.buildings_only,
            },
        ),
        Command::Mst(args) => handle_mst_command(
            map,
            cli.format,
            &MstCommandArgs {
                algorithm: args.algorithm,
                start: args.start,
                no_prune: args.no_prune,
                buildings_only: args.buildings_only,
            },
        ),
        Command::Buildings => handle_buildings_command(map, cli.format),
        Command::Graph => handle_graph_command(map, cli.format),
    }
}

fn hint_for(error: &anyhow::Error) -> Option<&'static str> {
    let cause = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<LibError>())?;
    match cause {
        LibError::UnknownNode { .. } => {
            Some("Run `campusnav-cli buildings` to list known building names.")
        }
        LibError::NoPathExists { .. } => {
            Some("The two locations are on walkways that never meet.")
        }
        LibError::MapNotFound { .. } | LibError::DataDirUnavailable => {
            Some("Pass --map <PATH> or set CAMPUSNAV_MAP to a campus GeoJSON file.")
        }
        LibError::MalformedInput { .. } | LibError::Json(_) => {
            Some("The map must be a GeoJSON FeatureCollection.")
        }
        _ => None,
    }
}
