use self::format::{format, parse_rings, Coordinates};
use self::geojson::{feature_collection, Entity, Properties};
use self::holes::RingMatcher;
use self::items::{GeometryType, Ring};
use indexmap::IndexMap;
use log::debug;
use rayon::prelude::*;
use std::sync::Arc;

pub mod error;
pub mod extract;
pub mod format;
mod geo;
pub mod geojson;
pub mod holes;
pub mod items;
pub mod output;
pub mod rings;

pub use self::error::{Error, Result};

/// Converts GeoSPARQL geometry literals into a GeoJSON feature collection.
///
/// # Example
///
/// ```
/// use geosparql_to_geojson::Converter;
///
/// let collection = Converter::default().convert_str("Point(1.23 9.87)").unwrap();
/// assert_eq!(collection.features().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    properties: Arc<Properties>,
    reverse: bool,
}

impl Converter {
    pub fn new(properties: Properties) -> Self {
        Converter {
            properties: Arc::new(properties),
            reverse: false,
        }
    }

    /// Reverse the ordinate sequence of every geometry, `Point(1 2)` becomes
    /// `[2, 1]`.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn convert_str(&self, text: &str) -> Result<Entity> {
        self.convert(&[text])
    }

    /// Convert an ordered sequence of text fragments into one collection.
    ///
    /// Fragments are scanned independently and merged by geometry type. Any
    /// malformed literal or invalid coordinate fails the whole conversion.
    pub fn convert<S: AsRef<str>>(&self, fragments: &[S]) -> Result<Entity> {
        let store = extract::extract(fragments)?;

        let mut geometries: IndexMap<GeometryType, Vec<Coordinates>> = IndexMap::new();
        let mut rings: Vec<Ring> = vec![];
        for (geometry_type, bodies) in store {
            if geometry_type == GeometryType::Polygon {
                for body in bodies.iter() {
                    rings.extend(parse_rings(body, self.reverse)?);
                }
                // filled in once all rings are known, keeps the first-seen position
                geometries.insert(geometry_type, vec![]);
                continue;
            }
            let formatted = bodies
                .iter()
                .map(|body| format(body, geometry_type, self.reverse))
                .collect::<Result<Vec<_>>>()?;
            geometries.insert(geometry_type, formatted);
        }

        if let Some(polygons) = geometries.get_mut(&GeometryType::Polygon) {
            let matcher = RingMatcher::classify(rings);
            debug!(
                "{} outer rings, {} holes",
                matcher.outers().len(),
                matcher.holes().len()
            );
            *polygons = matcher
                .into_polygons()
                .into_iter()
                .map(Coordinates::Polygon)
                .collect();
        }

        let collection = feature_collection(geometries, &self.properties);
        debug!("converted {} features", collection.features().len());
        Ok(collection)
    }

    /// Convert independent documents in parallel, one collection per document.
    pub fn convert_batch<S: AsRef<str> + Sync>(&self, documents: &[S]) -> Vec<Result<Entity>> {
        documents
            .par_iter()
            .map(|document| self.convert_str(document.as_ref()))
            .collect()
    }
}
