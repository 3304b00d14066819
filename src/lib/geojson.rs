use super::format::Coordinates;
use super::items::GeometryType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

pub type Properties = Map<String, Value>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub geometry_type: GeometryType,
    pub coordinates: Coordinates,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Entity {
    Feature {
        geometry: Geometry,
        properties: Arc<Properties>,
    },
    FeatureCollection {
        features: Vec<Entity>,
    },
}

impl Entity {
    pub fn features(&self) -> &[Entity] {
        match self {
            Entity::FeatureCollection { features } => features,
            Entity::Feature { .. } => std::slice::from_ref(self),
        }
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        match self {
            Entity::Feature { geometry, .. } => Some(geometry),
            Entity::FeatureCollection { .. } => None,
        }
    }
}

/// Wrap every geometry of the store in a feature, in store order. All features
/// share the same properties object.
pub fn feature_collection(
    geometries: IndexMap<GeometryType, Vec<Coordinates>>,
    properties: &Arc<Properties>,
) -> Entity {
    let features = geometries
        .into_iter()
        .flat_map(|(geometry_type, coordinates)| {
            coordinates.into_iter().map(move |coordinates| Entity::Feature {
                geometry: Geometry {
                    geometry_type,
                    coordinates,
                },
                properties: Arc::clone(properties),
            })
        })
        .collect();
    Entity::FeatureCollection { features }
}
