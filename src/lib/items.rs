use serde::{Deserialize, Serialize};
use std::fmt;

/// A single vertex. Usually two ordinates, a trailing vertex of an odd-length
/// body carries only one.
pub type Position = Vec<f64>;
pub type Ring = Vec<Position>;
/// Outer boundary first, holes after.
pub type Polygon = Vec<Ring>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiPolygon,
    MultiLineString,
    GeometryCollection,
}

impl GeometryType {
    /// Look up the canonical type for a literal keyword, ignoring case.
    ///
    /// # Example
    ///
    /// ```
    /// use geosparql_to_geojson::items::GeometryType;
    ///
    /// assert_eq!(GeometryType::from_keyword("muLtiline"), Some(GeometryType::MultiLineString));
    /// assert_eq!(GeometryType::from_keyword("circle"), None);
    /// ```
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        use GeometryType::*;

        let tag = match keyword.to_ascii_lowercase().as_str() {
            "point" => Point,
            "linestring" => LineString,
            "polygon" => Polygon,
            "multipoint" => MultiPoint,
            "multipolygon" => MultiPolygon,
            "multiline" | "multilinestring" => MultiLineString,
            "geometrycollection" => GeometryCollection,
            _ => return None,
        };
        Some(tag)
    }

    pub fn as_str(self) -> &'static str {
        use GeometryType::*;

        match self {
            Point => "Point",
            LineString => "LineString",
            Polygon => "Polygon",
            MultiPoint => "MultiPoint",
            MultiPolygon => "MultiPolygon",
            MultiLineString => "MultiLineString",
            GeometryCollection => "GeometryCollection",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
