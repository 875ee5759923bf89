//! Shared fixtures for the integration tests.

use std::path::PathBuf;

use campusnav_lib::{build_campus, Campus, Coordinate, Feature, MapDocument};

/// Path to the sample campus map under `docs/fixtures`.
#[allow(dead_code)]
pub fn fixture_map_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/campus_map.geojson")
}

#[allow(dead_code)]
pub fn c(lon: f64, lat: f64) -> Coordinate {
    Coordinate::new(lon, lat)
}

/// Three buildings one degree apart, joined A -> B -> C, with a path-only
/// stub B -> D.
#[allow(dead_code)]
pub fn abc_document() -> MapDocument {
    MapDocument::new(vec![
        Feature::point(Some("A"), c(0.0, 0.0)),
        Feature::point(Some("B"), c(0.0, 1.0)),
        Feature::point(Some("C"), c(1.0, 1.0)),
        Feature::line(vec![c(0.0, 0.0), c(0.0, 1.0), c(1.0, 1.0)]),
        Feature::line(vec![c(0.0, 1.0), c(-1.0, 1.0)]),
    ])
}

#[allow(dead_code)]
pub fn abc_campus() -> Campus {
    build_campus(&abc_document()).expect("scenario builds")
}

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64, relative: f64) {
    let error = ((actual - expected) / expected).abs();
    assert!(
        error <= relative,
        "expected {expected} within {relative}, got {actual}"
    );
}
