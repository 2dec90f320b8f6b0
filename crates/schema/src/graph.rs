//! The unified navigation graph built from per-floor feature data.
//!
//! Node ids are floor-namespaced (`f<floor>-<raw id>`) so identical raw ids
//! on different floors never collide. Nodes are addressed through a string
//! key map with adjacency lists of keys; there are no reference cycles and
//! the whole snapshot serializes as-is.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefixes a raw per-floor feature id with its floor index.
pub fn namespaced_id(floor: i32, raw: &str) -> String {
    format!("f{}-{}", floor, raw)
}

/// Splits a namespaced id back into its floor index and raw id. Handles
/// negative floor indices (`f-1-parking`).
pub fn split_floor_id(id: &str) -> Option<(i32, &str)> {
    let rest = id.strip_prefix('f')?;
    let skip = if rest.starts_with('-') { 1 } else { 0 };
    let dash = rest[skip..].find('-')? + skip;
    let floor = rest[..dash].parse::<i32>().ok()?;
    Some((floor, &rest[dash + 1..]))
}

/// Edge and travel directions: the eight compass points plus vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
    Up,
    Down,
}

impl Direction {
    pub fn parse(s: &str) -> Option<Direction> {
        match s {
            "north" => Some(Direction::North),
            "northeast" => Some(Direction::Northeast),
            "east" => Some(Direction::East),
            "southeast" => Some(Direction::Southeast),
            "south" => Some(Direction::South),
            "southwest" => Some(Direction::Southwest),
            "west" => Some(Direction::West),
            "northwest" => Some(Direction::Northwest),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Compass opposite for horizontal directions, vertical flip for up/down.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::Northeast => Direction::Southwest,
            Direction::East => Direction::West,
            Direction::Southeast => Direction::Northwest,
            Direction::South => Direction::North,
            Direction::Southwest => Direction::Northeast,
            Direction::West => Direction::East,
            Direction::Northwest => Direction::Southeast,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::Northeast => "northeast",
            Direction::East => "east",
            Direction::Southeast => "southeast",
            Direction::South => "south",
            Direction::Southwest => "southwest",
            Direction::West => "west",
            Direction::Northwest => "northwest",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        write!(f, "{}", name)
    }
}

/// Vertical transport device kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorKind {
    Escalator,
    Elevator,
}

impl ConnectorKind {
    pub fn parse(s: &str) -> Option<ConnectorKind> {
        match s {
            "escalator" => Some(ConnectorKind::Escalator),
            "elevator" => Some(ConnectorKind::Elevator),
            _ => None,
        }
    }

    pub fn other(self) -> ConnectorKind {
        match self {
            ConnectorKind::Escalator => ConnectorKind::Elevator,
            ConnectorKind::Elevator => ConnectorKind::Escalator,
        }
    }
}

impl fmt::Display for ConnectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectorKind::Escalator => write!(f, "escalator"),
            ConnectorKind::Elevator => write!(f, "elevator"),
        }
    }
}

/// Authored travel direction of one connector node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorDirection {
    Up,
    Down,
    Bidirectional,
}

impl ConnectorDirection {
    pub fn parse(s: &str) -> Option<ConnectorDirection> {
        match s {
            "up" => Some(ConnectorDirection::Up),
            "down" => Some(ConnectorDirection::Down),
            "bidirectional" => Some(ConnectorDirection::Bidirectional),
            _ => None,
        }
    }
}

/// Which end of a connector traversal a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Entry,
    Exit,
}

impl NodeRole {
    pub fn parse(s: &str) -> Option<NodeRole> {
        match s {
            "entry" => Some(NodeRole::Entry),
            "exit" => Some(NodeRole::Exit),
            _ => None,
        }
    }
}

/// Vertical direction a route must travel, derived from floor indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelDirection {
    Up,
    Down,
}

impl TravelDirection {
    /// `None` when both floors are the same.
    pub fn between(from: i32, to: i32) -> Option<TravelDirection> {
        match to.cmp(&from) {
            Ordering::Greater => Some(TravelDirection::Up),
            Ordering::Less => Some(TravelDirection::Down),
            Ordering::Equal => None,
        }
    }

    /// Floor delta of one hop in this direction.
    pub fn step(self) -> i32 {
        match self {
            TravelDirection::Up => 1,
            TravelDirection::Down => -1,
        }
    }
}

impl fmt::Display for TravelDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelDirection::Up => write!(f, "up"),
            TravelDirection::Down => write!(f, "down"),
        }
    }
}

/// Structured descriptor of one floor-connector node, populated at graph
/// construction time from feature attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorMeta {
    /// Stable name of the physical device group across floors.
    pub base_name: String,
    pub kind: ConnectorKind,
    /// `None` means the authored direction was unusable; such a node is
    /// incompatible with any directional request.
    pub direction: Option<ConnectorDirection>,
    /// `None` marks a legacy node, routable only as corridor pass-through.
    pub role: Option<NodeRole>,
    /// Authored from/to floor pair. `None` means unresolved span.
    pub span: Option<(i32, i32)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Door,
    Corridor,
    FloorConnector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    CorridorEdge,
    DoorConnection,
    CorridorConnection,
    FloorConnectorConnection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Namespaced id of the target node.
    pub to: String,
    /// Positive walking cost in meters-equivalent units.
    pub weight: f64,
    pub direction: Option<Direction>,
    pub kind: EdgeKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub floor: i32,
    pub kind: NodeKind,
    pub neighbors: Vec<Edge>,
    /// Present only for floor-connector nodes with a resolvable device kind.
    pub connector: Option<ConnectorMeta>,
}

impl GraphNode {
    pub fn edge_to(&self, to: &str) -> Option<&Edge> {
        self.neighbors.iter().find(|edge| edge.to == to)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Namespaced room id.
    pub id: String,
    pub name: String,
    /// Namespaced id of the owning door node. `None` = orphan room, which
    /// is unroutable.
    pub door: Option<String>,
    pub floor: i32,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub special: bool,
    pub special_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    /// Namespaced door node id.
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub floor: i32,
    /// Raw id of the owning room, as authored. `None` = orphan door.
    pub room: Option<String>,
}

/// The complete navigable snapshot for one venue. Rebuilt in full whenever
/// floor data changes; route computations are read-only queries over it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueGraph {
    pub nodes: HashMap<String, GraphNode>,
    /// Rooms keyed by namespaced room id.
    pub rooms: HashMap<String, Room>,
    /// Doors keyed by namespaced door node id.
    pub doors: HashMap<String, Door>,
    /// Floor-connector node ids grouped by floor, in ingest order.
    pub connectors: HashMap<i32, Vec<String>>,
    /// All ingested floor indices, ascending.
    pub floors: Vec<i32>,
    /// Sorted, deduplicated room display names.
    pub store_names: Vec<String>,
}

impl VenueGraph {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    pub fn connectors_on(&self, floor: i32) -> &[String] {
        self.connectors.get(&floor).map(Vec::as_slice).unwrap_or(&[])
    }
}
