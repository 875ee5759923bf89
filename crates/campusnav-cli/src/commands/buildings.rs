use std::path::Path;

use anyhow::Result;

use campusnav_lib::Campus;

use crate::output::{print_buildings, BuildingEntry, OutputFormat};

/// Building rows in alphabetical order.
pub fn building_entries(campus: &Campus) -> Vec<BuildingEntry> {
    campus
        .buildings()
        .iter()
        .filter_map(|name| {
            let coordinate = campus.coordinate(name)?;
            Some(BuildingEntry {
                name: name.clone(),
                lon: coordinate.lon,
                lat: coordinate.lat,
                connections: campus.graph().neighbours_of(name).len(),
            })
        })
        .collect()
}

/// Handle the buildings subcommand.
pub fn handle_buildings_command(map: Option<&Path>, format: OutputFormat) -> Result<()> {
    let campus = super::load_map(map)?;
    print_buildings(&building_entries(&campus), format)
}
