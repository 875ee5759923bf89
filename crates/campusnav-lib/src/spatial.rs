//! KD-tree index over building coordinates.
//!
//! Pathway vertices are snapped onto a building when both their longitude and
//! latitude lie within the snapping tolerance of the building's coordinate.
//! The tree is queried with the circle that circumscribes that per-axis box,
//! and candidates are then filtered with the exact per-axis test. When several
//! buildings qualify, the one recorded first wins.

use kiddo::float::kdtree::KdTree;
use kiddo::SquaredEuclidean;
use tracing::debug;

use crate::geo::Coordinate;

/// KD-tree bucket size (kiddo default).
const BUCKET_SIZE: usize = 32;

/// Widens the query circle slightly so box corners survive rounding.
const RADIUS_SLACK: f64 = 1.0 + 1e-6;

/// Spatial lookup from coordinates to building names.
pub struct BuildingIndex {
    tree: KdTree<f64, usize, 2, BUCKET_SIZE, u32>,
    entries: Vec<(String, Coordinate)>,
    tolerance: f64,
}

impl BuildingIndex {
    /// Create an empty index snapping within `tolerance` degrees per axis.
    pub fn new(tolerance: f64) -> Self {
        Self {
            tree: KdTree::new(),
            entries: Vec::new(),
            tolerance,
        }
    }

    /// Record a building. Insertion order decides ties in [`snap`](Self::snap).
    pub fn insert(&mut self, name: impl Into<String>, coordinate: Coordinate) {
        let index = self.entries.len();
        self.tree.add(&coordinate.as_array(), index);
        self.entries.push((name.into(), coordinate));
    }

    /// Name of the earliest-recorded building coinciding with `coordinate`.
    pub fn snap(&self, coordinate: &Coordinate) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }

        let squared_radius = 2.0 * self.tolerance * self.tolerance * RADIUS_SLACK;
        let hit = self
            .tree
            .within::<SquaredEuclidean>(&coordinate.as_array(), squared_radius)
            .into_iter()
            .map(|neighbour| neighbour.item)
            .filter(|&index| self.entries[index].1.within(coordinate, self.tolerance))
            .min()?;

        let name = self.entries[hit].0.as_str();
        debug!(building = name, lon = coordinate.lon, lat = coordinate.lat, "snapped vertex");
        Some(name)
    }

    /// Number of indexed buildings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no building has been indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for BuildingIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildingIndex")
            .field("buildings", &self.entries.len())
            .field("tolerance", &self.tolerance)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_within_tolerance_only() {
        let mut index = BuildingIndex::new(1e-7);
        index.insert("Library", Coordinate::new(125.4846, 7.0859));

        assert_eq!(
            index.snap(&Coordinate::new(125.484_600_05, 7.085_899_95)),
            Some("Library")
        );
        assert_eq!(index.snap(&Coordinate::new(125.4847, 7.0859)), None);
    }

    #[test]
    fn box_corner_is_inside() {
        let mut index = BuildingIndex::new(1e-7);
        index.insert("Gym", Coordinate::new(10.0, 10.0));
        assert_eq!(
            index.snap(&Coordinate::new(10.0 + 0.99e-7, 10.0 - 0.99e-7)),
            Some("Gym")
        );
    }

    #[test]
    fn earliest_building_wins_ties() {
        let mut index = BuildingIndex::new(1e-7);
        index.insert("First", Coordinate::new(1.0, 1.0));
        index.insert("Second", Coordinate::new(1.0, 1.0));
        assert_eq!(index.snap(&Coordinate::new(1.0, 1.0)), Some("First"));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn empty_index_never_snaps() {
        let index = BuildingIndex::new(1e-7);
        assert!(index.is_empty());
        assert_eq!(index.snap(&Coordinate::new(0.0, 0.0)), None);
    }
}
