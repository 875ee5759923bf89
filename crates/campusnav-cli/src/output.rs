//! Output formatting for command results.
//!
//! `text` is styled for terminals (colors follow [`ColorPalette::detect`]),
//! `rich` reuses the library's Markdown-flavoured renderers, and `json`
//! prints the serialised summaries unchanged.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use campusnav_lib::output::walking_minutes;
use campusnav_lib::{RenderMode, RouteSummary, TreeSummary};

use crate::terminal::{format_with_separators, supports_unicode, ColorPalette};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Styled text for terminals.
    #[default]
    Text,
    /// Markdown-flavoured text.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

/// Print a serialisable value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Distance in whole meters with thousand separators, e.g. `1,204 m`.
pub fn format_meters(meters: f64) -> String {
    format!("{} m", format_with_separators(meters.max(0.0).round() as u64))
}

/// Render a route summary in the requested format.
pub fn print_route(summary: &RouteSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(summary)?,
        OutputFormat::Rich => print!("{}", summary.render(RenderMode::RichText)),
        OutputFormat::Text => print!(
            "{}",
            format_route_text(summary, &ColorPalette::detect(), supports_unicode())
        ),
    }
    Ok(())
}

/// Styled route listing with start and goal badges.
pub fn format_route_text(summary: &RouteSummary, palette: &ColorPalette, unicode: bool) -> String {
    let (branch, last) = if unicode { ("├─", "└─") } else { ("|-", "`-") };
    let mut buffer = String::new();

    let _ = writeln!(
        buffer,
        "Route from {} to {} ({} hops):",
        summary.start, summary.goal, summary.hops
    );

    let count = summary.steps.len();
    for (position, step) in summary.steps.iter().enumerate() {
        let connector = if position + 1 == count { last } else { branch };
        let tag = if step.id == summary.start && position == 0 {
            format!("{} STRT {} ", palette.start, palette.reset)
        } else if step.id == summary.goal && position + 1 == count {
            format!("{} GOAL {} ", palette.goal, palette.reset)
        } else {
            String::new()
        };
        let name = if step.building {
            format!("{}{}{}", palette.building, step.id, palette.reset)
        } else {
            format!("{}{}{}", palette.muted, step.id, palette.reset)
        };
        let _ = writeln!(
            buffer,
            " {}{}{} {}{}",
            palette.muted, connector, palette.reset, tag, name
        );
    }

    let _ = writeln!(
        buffer,
        "\nTotal distance: {}{}{}",
        palette.distance,
        format_meters(summary.total_distance),
        palette.reset
    );
    let _ = writeln!(
        buffer,
        "Walking time: {}~{:.1} min{}",
        palette.time, summary.walking_minutes, palette.reset
    );
    buffer
}

/// Render a spanning-tree summary in the requested format.
pub fn print_tree(summary: &TreeSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(summary)?,
        OutputFormat::Rich => print!("{}", summary.render(RenderMode::RichText)),
        OutputFormat::Text => print!("{}", summary.render(RenderMode::PlainText)),
    }
    Ok(())
}

/// One row of the `buildings` listing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BuildingEntry {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
    /// Number of walkway connections.
    pub connections: usize,
}

/// Render the building listing.
pub fn print_buildings(entries: &[BuildingEntry], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Rich => {
            println!("| Building | Longitude | Latitude | Connections |");
            println!("|---|---|---|---|");
            for entry in entries {
                println!(
                    "| {} | {:.6} | {:.6} | {} |",
                    entry.name, entry.lon, entry.lat, entry.connections
                );
            }
        }
        OutputFormat::Text => {
            print!("{}", format_buildings_text(entries, &ColorPalette::detect()))
        }
    }
    Ok(())
}

pub fn format_buildings_text(entries: &[BuildingEntry], palette: &ColorPalette) -> String {
    let width = entries.iter().map(|entry| entry.name.len()).max().unwrap_or(0);
    let mut buffer = String::new();
    let _ = writeln!(buffer, "{} buildings:", entries.len());
    for entry in entries {
        let note = if entry.connections == 0 {
            format!(" {}(unconnected){}", palette.muted, palette.reset)
        } else {
            String::new()
        };
        let _ = writeln!(
            buffer,
            "  {}{:<width$}{}  {:>11.6}, {:>10.6}{}",
            palette.building, entry.name, palette.reset, entry.lon, entry.lat, note
        );
    }
    buffer
}

/// Size statistics for the `graph` command.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub buildings: usize,
    pub path_nodes: usize,
    pub isolated_buildings: Vec<String>,
    pub total_walkway_length: f64,
}

pub fn print_graph_stats(stats: &GraphStats, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(stats);
    }

    println!(
        "Nodes: {} ({} buildings, {} path nodes)",
        stats.nodes, stats.buildings, stats.path_nodes
    );
    println!("Edges: {}", stats.edges);
    println!(
        "Walkway length: {} (~{:.1} min to walk all of it)",
        format_meters(stats.total_walkway_length),
        walking_minutes(stats.total_walkway_length)
    );
    if !stats.isolated_buildings.is_empty() {
        println!(
            "Unconnected buildings: {}",
            stats.isolated_buildings.join(", ")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusnav_lib::RouteStep;

    fn summary() -> RouteSummary {
        let step = |index: usize, id: &str, building: bool| RouteStep {
            index,
            id: id.to_string(),
            building,
            coordinate: None,
        };
        RouteSummary {
            start: "Library".to_string(),
            goal: "Gym".to_string(),
            hops: 2,
            total_distance: 1234.4,
            walking_minutes: 15.4,
            steps: vec![
                step(0, "Library", true),
                step(1, "node_0", false),
                step(2, "Gym", true),
            ],
        }
    }

    #[test]
    fn plain_route_text_has_badges_and_totals() {
        let text = format_route_text(&summary(), &ColorPalette::plain(), false);
        assert!(text.starts_with("Route from Library to Gym (2 hops):"));
        assert!(text.contains(" |-  STRT  Library"));
        assert!(text.contains(" |- node_0"));
        assert!(text.contains(" `-  GOAL  Gym"));
        assert!(text.contains("Total distance: 1,234 m"));
        assert!(text.contains("Walking time: ~15.4 min"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn colored_route_text_uses_escape_codes() {
        let text = format_route_text(&summary(), &ColorPalette::colored(), true);
        assert!(text.contains('\x1b'));
        assert!(text.contains("└─"));
    }

    #[test]
    fn unconnected_buildings_are_flagged() {
        let entries = vec![BuildingEntry {
            name: "Observatory".to_string(),
            lon: -84.39,
            lat: 33.78,
            connections: 0,
        }];
        let text = format_buildings_text(&entries, &ColorPalette::plain());
        assert!(text.starts_with("1 buildings:"));
        assert!(text.contains("(unconnected)"));
    }
}
