//! Typed view over a GeoJSON feature collection describing the campus.
//!
//! Only the parts the graph builder needs are modelled: point features (with
//! their properties, from which building names are read) and line features.
//! Any other geometry type is kept as [`Geometry::Unsupported`] so the builder
//! can skip it without failing.

use std::io::Read;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::geo::Coordinate;

/// Parsed geometric document handed to the graph builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapDocument {
    pub features: Vec<Feature>,
}

/// A single feature of the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub properties: Map<String, Value>,
    /// `None` when the feature carries a `null` geometry.
    pub geometry: Option<Geometry>,
}

/// Geometry variants relevant to the campus graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Coordinate),
    LineString(Vec<Coordinate>),
    MultiLineString(Vec<Vec<Coordinate>>),
    /// Any other GeoJSON geometry type, by name.
    Unsupported(String),
}

impl Feature {
    /// Point feature with an optional `Name` property.
    pub fn point(name: Option<&str>, coordinate: Coordinate) -> Self {
        let mut properties = Map::new();
        if let Some(name) = name {
            properties.insert("Name".to_string(), Value::String(name.to_string()));
        }
        Self {
            properties,
            geometry: Some(Geometry::Point(coordinate)),
        }
    }

    /// Line feature made of a single vertex sequence.
    pub fn line(vertices: Vec<Coordinate>) -> Self {
        Self {
            properties: Map::new(),
            geometry: Some(Geometry::LineString(vertices)),
        }
    }

    /// Line feature made of several vertex sequences.
    pub fn multi_line(segments: Vec<Vec<Coordinate>>) -> Self {
        Self {
            properties: Map::new(),
            geometry: Some(Geometry::MultiLineString(segments)),
        }
    }

    /// String value of a property, if present and a string.
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    fn line_parts(&self) -> &[Vec<Coordinate>] {
        match &self.geometry {
            Some(Geometry::LineString(vertices)) => std::slice::from_ref(vertices),
            Some(Geometry::MultiLineString(segments)) => segments,
            _ => &[],
        }
    }

    fn from_value(index: usize, value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::malformed(format!("feature {index} is not an object")))?;

        let properties = match object.get("properties") {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(map)) => map.clone(),
            Some(_) => {
                return Err(Error::malformed(format!(
                    "feature {index} has non-object properties"
                )))
            }
        };

        let geometry = match object.get("geometry") {
            None | Some(Value::Null) => None,
            Some(geometry) => Some(Geometry::from_value(index, geometry)?),
        };

        Ok(Self {
            properties,
            geometry,
        })
    }
}

impl Geometry {
    fn from_value(index: usize, value: &Value) -> Result<Self> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::malformed(format!("feature {index} geometry has no type")))?;

        let coordinates = || {
            value.get("coordinates").ok_or_else(|| {
                Error::malformed(format!("feature {index} {kind} has no coordinates"))
            })
        };

        match kind {
            "Point" => Ok(Geometry::Point(parse_position(index, coordinates()?)?)),
            "LineString" => Ok(Geometry::LineString(parse_positions(index, coordinates()?)?)),
            "MultiLineString" => {
                let parts = coordinates()?.as_array().ok_or_else(|| {
                    Error::malformed(format!("feature {index} MultiLineString is not an array"))
                })?;
                let segments = parts
                    .iter()
                    .map(|part| parse_positions(index, part))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Geometry::MultiLineString(segments))
            }
            other => Ok(Geometry::Unsupported(other.to_string())),
        }
    }
}

fn parse_positions(index: usize, value: &Value) -> Result<Vec<Coordinate>> {
    value
        .as_array()
        .ok_or_else(|| Error::malformed(format!("feature {index} line coordinates not an array")))?
        .iter()
        .map(|position| parse_position(index, position))
        .collect()
}

fn parse_position(index: usize, value: &Value) -> Result<Coordinate> {
    let malformed = || Error::malformed(format!("feature {index} has an invalid position"));
    let parts = value.as_array().ok_or_else(malformed)?;
    if parts.len() < 2 {
        return Err(malformed());
    }
    // GeoJSON positions may carry an altitude; only lon/lat are used.
    let lon = parts[0].as_f64().ok_or_else(malformed)?;
    let lat = parts[1].as_f64().ok_or_else(malformed)?;
    Ok(Coordinate::new(lon, lat))
}

impl MapDocument {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Interpret an already-parsed JSON value as a feature collection.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::malformed("document root is not an object"))?;

        if let Some(kind) = object.get("type") {
            if kind.as_str() != Some("FeatureCollection") {
                return Err(Error::malformed(format!(
                    "expected a FeatureCollection, found {kind}"
                )));
            }
        }

        let features = object
            .get("features")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::malformed("document has no features array"))?
            .iter()
            .enumerate()
            .map(|(index, feature)| Feature::from_value(index, feature))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { features })
    }

    /// Read and parse a document from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(&value)
    }

    /// Point features paired with their coordinate.
    pub fn points(&self) -> impl Iterator<Item = (&Feature, Coordinate)> {
        self.features
            .iter()
            .filter_map(|feature| match feature.geometry {
                Some(Geometry::Point(coordinate)) => Some((feature, coordinate)),
                _ => None,
            })
    }

    /// Every vertex sequence of every line feature, flattened.
    pub fn line_segments(&self) -> impl Iterator<Item = &[Coordinate]> {
        self.features
            .iter()
            .flat_map(|feature| feature.line_parts().iter().map(Vec::as_slice))
    }

    /// Names of geometry types present in the document that the builder ignores.
    pub fn unsupported_geometries(&self) -> impl Iterator<Item = &str> {
        self.features
            .iter()
            .filter_map(|feature| match &feature.geometry {
                Some(Geometry::Unsupported(kind)) => Some(kind.as_str()),
                _ => None,
            })
    }
}

impl FromStr for MapDocument {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points_lines_and_multilines() {
        let doc: MapDocument = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"Name": "Library"},
                 "geometry": {"type": "Point", "coordinates": [125.1, 7.1, 0.0]}},
                {"type": "Feature", "properties": null,
                 "geometry": {"type": "LineString", "coordinates": [[125.1, 7.1], [125.2, 7.2]]}},
                {"type": "Feature", "properties": {},
                 "geometry": {"type": "MultiLineString",
                              "coordinates": [[[0, 0], [0, 1]], [[1, 1], [2, 2], [3, 3]]]}},
                {"type": "Feature", "properties": {}, "geometry": null}
            ]
        }"#
        .parse()
        .expect("valid document");

        assert_eq!(doc.features.len(), 4);
        let points: Vec<_> = doc.points().collect();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].0.property_str("Name"), Some("Library"));
        assert_eq!(points[0].1, Coordinate::new(125.1, 7.1));

        let segments: Vec<_> = doc.line_segments().map(<[Coordinate]>::len).collect();
        assert_eq!(segments, vec![2, 2, 3]);
        assert!(doc.features[3].geometry.is_none());
    }

    #[test]
    fn polygons_are_kept_as_unsupported() {
        let doc: MapDocument = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {},
             "geometry": {"type": "Polygon", "coordinates": [[[0,0],[0,1],[1,1],[0,0]]]}}
        ]}"#
        .parse()
        .expect("valid document");

        assert_eq!(doc.unsupported_geometries().collect::<Vec<_>>(), vec!["Polygon"]);
        assert_eq!(doc.line_segments().count(), 0);
    }

    #[test]
    fn missing_features_is_malformed() {
        let error = "{\"type\": \"FeatureCollection\"}"
            .parse::<MapDocument>()
            .expect_err("no features");
        assert!(matches!(error, Error::MalformedInput { .. }));
    }

    #[test]
    fn wrong_root_type_is_malformed() {
        let error = r#"{"type": "Feature", "features": []}"#
            .parse::<MapDocument>()
            .expect_err("not a collection");
        assert!(error.to_string().contains("expected a FeatureCollection"));

        let error = "[1, 2, 3]".parse::<MapDocument>().expect_err("array root");
        assert!(matches!(error, Error::MalformedInput { .. }));
    }

    #[test]
    fn short_positions_are_malformed() {
        let error = r#"{"features": [
            {"properties": {}, "geometry": {"type": "Point", "coordinates": [1.0]}}
        ]}"#
        .parse::<MapDocument>()
        .expect_err("one-element position");
        assert!(matches!(error, Error::MalformedInput { .. }));
    }

    #[test]
    fn invalid_json_surfaces_as_json_error() {
        let error = "{not json".parse::<MapDocument>().expect_err("syntax");
        assert!(matches!(error, Error::Json(_)));
    }
}
