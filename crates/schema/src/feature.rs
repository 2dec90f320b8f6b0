//! GeoJSON-like feature collections, one per floor.
//!
//! Point features (doors, corridor nodes, floor connectors) become graph
//! nodes; edge-bearing features connect them; room features only populate
//! the room index.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: FeatureKind,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Properties,
}

/// Authored feature kinds. Anything unrecognized deserializes to `Unknown`
/// and is ignored during graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum FeatureKind {
    Room,
    DoorNode,
    CorridorNode,
    FloorConnectorNode,
    CorridorEdge,
    DoorConnection,
    CorridorConnection,
    FloorConnectorConnection,
    Unknown,
}

impl From<String> for FeatureKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "room" => FeatureKind::Room,
            "door-node" => FeatureKind::DoorNode,
            "corridor-node" => FeatureKind::CorridorNode,
            "floor-connector-node" => FeatureKind::FloorConnectorNode,
            "corridor-edge" => FeatureKind::CorridorEdge,
            "door-connection" => FeatureKind::DoorConnection,
            "corridor-connection" => FeatureKind::CorridorConnection,
            "floor-connector-connection" => FeatureKind::FloorConnectorConnection,
            _ => FeatureKind::Unknown,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

impl Geometry {
    /// Point coordinates, converted from the authored `[lon, lat]` order.
    pub fn lat_lon(&self) -> Option<(f64, f64)> {
        if self.coordinates.len() >= 2 {
            Some((self.coordinates[1], self.coordinates[0]))
        } else {
            None
        }
    }
}

/// Union of the properties carried by all feature kinds. Absent fields
/// deserialize to `None`; unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub id: Option<String>,

    /// Room display name.
    #[serde(default)]
    pub name: Option<String>,
    /// For door nodes: id of the room this door belongs to.
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub special: bool,
    #[serde(default)]
    pub special_type: Option<String>,

    /// For floor-connector nodes: base name of the physical device group.
    #[serde(default)]
    pub connector: Option<String>,
    #[serde(default)]
    pub connector_type: Option<String>,
    /// Travel direction for connector nodes, compass direction for edges.
    #[serde(default)]
    pub direction: Option<String>,
    /// entry / exit role of a connector node.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub from_floor: Option<i32>,
    #[serde(default)]
    pub to_floor: Option<i32>,

    // Edge-bearing features.
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
}
