//! Builds the unified venue navigation graph from per-floor feature data.
//!
//! Each floor's feature collection is ingested independently (point features
//! become namespaced nodes, edge-bearing features become mirrored edges),
//! then a second pass wires the authored cross-floor connector edges.
//! Malformed features are skipped and logged, never fatal; a floor with no
//! valid features still produces a consistent empty graph.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};
use rayon::prelude::*;
use schema::feature::{Feature, FeatureCollection, FeatureKind};
use schema::graph::{
    namespaced_id, ConnectorDirection, ConnectorKind, ConnectorMeta, Direction, Door, Edge,
    EdgeKind, GraphNode, NodeKind, NodeRole, Room, VenueGraph,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphBuildError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    ProcessingError(String),
}

pub type StatusOr<T> = Result<T, GraphBuildError>;

/// Builds the complete navigation graph from one feature collection per
/// floor.
///
/// Floors are ingested in parallel (they are independent until the
/// cross-floor pass), merged, and then the authored
/// `floor-connector-connection` features are inserted in both directions
/// with the vertical opposite on the mirror edge.
pub fn build_graph(floors: &BTreeMap<i32, FeatureCollection>) -> VenueGraph {
    let started = Instant::now();

    let ingests: Vec<FloorIngest> = floors
        .par_iter()
        .map(|(floor, collection)| ingest_floor(*floor, collection))
        .collect();

    let mut graph = VenueGraph::default();
    let mut cross_edges: Vec<(i32, Feature)> = Vec::new();

    for ingest in ingests {
        let floor = ingest.floor;
        info!(
            "floor {}: {} nodes, {} rooms, {} doors, {} connectors ({} features skipped)",
            floor,
            ingest.nodes.len(),
            ingest.rooms.len(),
            ingest.doors.len(),
            ingest.connector_ids.len(),
            ingest.skipped
        );

        graph.nodes.extend(ingest.nodes);
        for room in ingest.rooms {
            if !room.name.is_empty() {
                graph.store_names.push(room.name.clone());
            }
            graph.rooms.insert(room.id.clone(), room);
        }
        for door in ingest.doors {
            graph.doors.insert(door.id.clone(), door);
        }
        graph
            .connectors
            .entry(floor)
            .or_default()
            .extend(ingest.connector_ids);
        graph.floors.push(floor);
        cross_edges.extend(ingest.cross_edges.into_iter().map(|f| (floor, f)));
    }
    graph.floors.sort_unstable();

    // Second pass: authored vertical edges between floors. The mirror edge
    // gets the vertical opposite (up <-> down), not a compass flip.
    for (floor, feature) in cross_edges {
        let props = &feature.properties;
        let (Some(from), Some(to), Some(weight)) =
            (props.from.as_deref(), props.to.as_deref(), props.weight)
        else {
            warn!(
                "floor {}: skipping floor-connector-connection with missing from/to/weight",
                floor
            );
            continue;
        };
        let Some(from_id) = resolve_node_id(&graph, floor, from) else {
            warn!("floor {}: connector connection endpoint {} not found", floor, from);
            continue;
        };
        let Some(to_id) = resolve_node_id(&graph, floor, to) else {
            warn!("floor {}: connector connection endpoint {} not found", floor, to);
            continue;
        };
        let direction = props.direction.as_deref().and_then(Direction::parse);
        add_edge(
            &mut graph.nodes,
            &from_id,
            &to_id,
            weight,
            direction,
            EdgeKind::FloorConnectorConnection,
        );
    }

    graph.store_names.sort();
    graph.store_names.dedup();

    info!(
        "graph built: {} nodes, {} rooms, {} doors across {} floors (took {:?})",
        graph.nodes.len(),
        graph.rooms.len(),
        graph.doors.len(),
        graph.floors.len(),
        started.elapsed()
    );
    graph
}

/// Reads `floor_<n>.json` feature collections from a directory. Files that
/// do not match the naming pattern are ignored.
pub fn load_floors<P: AsRef<Path>>(dir: P) -> StatusOr<BTreeMap<i32, FeatureCollection>> {
    let mut floors = BTreeMap::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        let path = entry.path();
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        let Some(stem) = name
            .strip_prefix("floor_")
            .and_then(|rest| rest.strip_suffix(".json"))
        else {
            continue;
        };
        let Ok(floor) = stem.parse::<i32>() else {
            warn!("ignoring {}: floor index is not an integer", name);
            continue;
        };
        let data = fs::read(&path)?;
        let collection: FeatureCollection = serde_json::from_slice(&data)?;
        floors.insert(floor, collection);
    }
    Ok(floors)
}

struct FloorIngest {
    floor: i32,
    nodes: HashMap<String, GraphNode>,
    rooms: Vec<Room>,
    doors: Vec<Door>,
    connector_ids: Vec<String>,
    cross_edges: Vec<Feature>,
    skipped: usize,
}

fn ingest_floor(floor: i32, collection: &FeatureCollection) -> FloorIngest {
    let mut nodes: HashMap<String, GraphNode> = HashMap::new();
    let mut rooms = Vec::new();
    let mut doors: Vec<Door> = Vec::new();
    let mut connector_ids = Vec::new();
    let mut cross_edges = Vec::new();
    let mut skipped = 0usize;

    // Point features first so edges can resolve their endpoints.
    for feature in &collection.features {
        let node_kind = match feature.kind {
            FeatureKind::DoorNode => NodeKind::Door,
            FeatureKind::CorridorNode => NodeKind::Corridor,
            FeatureKind::FloorConnectorNode => NodeKind::FloorConnector,
            _ => continue,
        };
        let Some(raw) = feature.properties.id.as_deref() else {
            warn!("floor {}: skipping {:?} without an id", floor, feature.kind);
            skipped += 1;
            continue;
        };
        let Some((lat, lon)) = feature.geometry.as_ref().and_then(|g| g.lat_lon()) else {
            warn!("floor {}: skipping {} with missing geometry", floor, raw);
            skipped += 1;
            continue;
        };
        let id = namespaced_id(floor, raw);

        if node_kind == NodeKind::Door {
            doors.push(Door {
                id: id.clone(),
                lat,
                lon,
                floor,
                room: feature.properties.room.clone(),
            });
        }

        let connector = if node_kind == NodeKind::FloorConnector {
            connector_ids.push(id.clone());
            resolve_connector(&feature.properties, raw)
        } else {
            None
        };

        nodes.insert(
            id.clone(),
            GraphNode {
                id,
                lat,
                lon,
                floor,
                kind: node_kind,
                neighbors: Vec::new(),
                connector,
            },
        );
    }

    // Rooms attach to the door that names them as owner.
    for feature in &collection.features {
        if feature.kind != FeatureKind::Room {
            continue;
        }
        let props = &feature.properties;
        let Some(raw) = props.id.as_deref() else {
            warn!("floor {}: skipping room without an id", floor);
            skipped += 1;
            continue;
        };
        let door = doors
            .iter()
            .find(|door| door.room.as_deref() == Some(raw))
            .map(|door| door.id.clone());
        if door.is_none() {
            debug!("floor {}: room {} has no door and is unroutable", floor, raw);
        }
        rooms.push(Room {
            id: namespaced_id(floor, raw),
            name: props.name.clone().unwrap_or_else(|| raw.to_string()),
            door,
            floor,
            category: props.category.clone(),
            tags: props.tags.clone(),
            special: props.special,
            special_type: props.special_type.clone(),
        });
    }

    // Intra-floor edges, mirrored with the compass opposite.
    for feature in &collection.features {
        let edge_kind = match feature.kind {
            FeatureKind::CorridorEdge => EdgeKind::CorridorEdge,
            FeatureKind::DoorConnection => EdgeKind::DoorConnection,
            FeatureKind::CorridorConnection => EdgeKind::CorridorConnection,
            FeatureKind::FloorConnectorConnection => {
                cross_edges.push(feature.clone());
                continue;
            }
            _ => continue,
        };
        let props = &feature.properties;
        let (Some(from), Some(to), Some(weight)) =
            (props.from.as_deref(), props.to.as_deref(), props.weight)
        else {
            warn!(
                "floor {}: skipping {:?} with missing from/to/weight",
                floor, feature.kind
            );
            skipped += 1;
            continue;
        };
        let from_id = namespaced_id(floor, from);
        let to_id = namespaced_id(floor, to);
        let direction = props.direction.as_deref().and_then(Direction::parse);
        if !add_edge(&mut nodes, &from_id, &to_id, weight, direction, edge_kind) {
            warn!(
                "floor {}: skipping edge {} -> {}: unresolvable endpoint",
                floor, from, to
            );
            skipped += 1;
        }
    }

    FloorIngest {
        floor,
        nodes,
        rooms,
        doors,
        connector_ids,
        cross_edges,
        skipped,
    }
}

/// Inserts `from -> to` plus the mirror edge with the opposite direction.
/// Returns false when either endpoint is missing from the graph.
fn add_edge(
    nodes: &mut HashMap<String, GraphNode>,
    from: &str,
    to: &str,
    weight: f64,
    direction: Option<Direction>,
    kind: EdgeKind,
) -> bool {
    if !nodes.contains_key(from) || !nodes.contains_key(to) {
        return false;
    }
    if let Some(node) = nodes.get_mut(from) {
        node.neighbors.push(Edge {
            to: to.to_string(),
            weight,
            direction,
            kind,
        });
    }
    if let Some(node) = nodes.get_mut(to) {
        node.neighbors.push(Edge {
            to: from.to_string(),
            weight,
            direction: direction.map(Direction::opposite),
            kind,
        });
    }
    true
}

/// Endpoints of cross-floor features may be authored namespaced or raw.
/// Raw ids resolve against the owning floor first, then ascending floors.
fn resolve_node_id(graph: &VenueGraph, floor: i32, raw: &str) -> Option<String> {
    if graph.nodes.contains_key(raw) {
        return Some(raw.to_string());
    }
    let same_floor = namespaced_id(floor, raw);
    if graph.nodes.contains_key(&same_floor) {
        return Some(same_floor);
    }
    for other in &graph.floors {
        let id = namespaced_id(*other, raw);
        if graph.nodes.contains_key(&id) {
            return Some(id);
        }
    }
    None
}

/// Builds the structured descriptor for one floor-connector node.
///
/// Explicit feature attributes are the source of truth; tokens embedded in
/// the raw id are consulted only for legacy data that lacks them. Returns
/// `None` when not even the device kind can be determined, in which case
/// the node stays routable as plain corridor pass-through.
pub fn resolve_connector(props: &schema::feature::Properties, raw_id: &str) -> Option<ConnectorMeta> {
    let kind = props
        .connector_type
        .as_deref()
        .and_then(ConnectorKind::parse)
        .or_else(|| kind_from_id(raw_id))?;

    let base_name = props
        .connector
        .clone()
        .unwrap_or_else(|| base_from_id(raw_id));

    // An authored but unparseable direction stays None: such a node is
    // incompatible with every directional request.
    let direction = match props.direction.as_deref() {
        Some(value) => ConnectorDirection::parse(value),
        None => direction_from_id(raw_id),
    };

    let role = match props.role.as_deref() {
        Some(value) => NodeRole::parse(value),
        None => role_from_id(raw_id),
    };

    let span = match (props.from_floor, props.to_floor) {
        (Some(from), Some(to)) => Some((from, to)),
        _ => span_from_name(&base_name),
    };

    Some(ConnectorMeta {
        base_name,
        kind,
        direction,
        role,
        span,
    })
}

fn kind_from_id(id: &str) -> Option<ConnectorKind> {
    let id = id.to_ascii_lowercase();
    if id.contains("esc") {
        Some(ConnectorKind::Escalator)
    } else if id.contains("elev") || id.contains("lift") {
        Some(ConnectorKind::Elevator)
    } else {
        None
    }
}

fn direction_from_id(id: &str) -> Option<ConnectorDirection> {
    id.split('-').find_map(ConnectorDirection::parse)
}

fn role_from_id(id: &str) -> Option<NodeRole> {
    id.split('-').find_map(NodeRole::parse)
}

/// Strips direction/role noise from a legacy id, leaving the device group
/// name, e.g. `esc-a-up-entry-node` -> `esc-a`.
fn base_from_id(id: &str) -> String {
    const NOISE: [&str; 6] = ["node", "entry", "exit", "up", "down", "bidirectional"];
    id.split('-')
        .filter(|token| !NOISE.contains(token))
        .collect::<Vec<_>>()
        .join("-")
}

/// Recovers an authored floor span from a base name ending in two floor
/// indices, e.g. `lift-2-3` -> `(2, 3)`.
fn span_from_name(base_name: &str) -> Option<(i32, i32)> {
    let tokens: Vec<&str> = base_name.split('-').collect();
    if tokens.len() < 2 {
        return None;
    }
    let from = tokens[tokens.len() - 2].parse::<i32>().ok()?;
    let to = tokens[tokens.len() - 1].parse::<i32>().ok()?;
    Some((from, to))
}
