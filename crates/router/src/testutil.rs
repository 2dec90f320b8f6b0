//! Hand-built venue fixtures shared across the planner tests.

use std::collections::BTreeMap;

use graphbuild::build_graph;
use schema::feature::FeatureCollection;
use schema::graph::VenueGraph;
use serde_json::{json, Value};

pub fn venue(floors: Vec<(i32, Value)>) -> VenueGraph {
    let mut map = BTreeMap::new();
    for (floor, features) in floors {
        let collection: FeatureCollection =
            serde_json::from_value(json!({ "features": features })).expect("fixture should parse");
        map.insert(floor, collection);
    }
    build_graph(&map)
}

/// Two floors joined by the `esc-a` escalator bank: an up pair
/// (entry on floor 0, exit on floor 1) and a down pair (entry on floor 1,
/// exit on floor 0). No authored vertical edges, so floor transitions are
/// implicit. Includes an orphan room and an isolated corridor node.
pub fn two_floor_venue() -> VenueGraph {
    venue(vec![
        (
            0,
            json!([
                { "type": "corridor-node", "geometry": { "type": "Point", "coordinates": [29.001, 41.001] },
                  "properties": { "id": "corridor-1" } },
                { "type": "corridor-node", "geometry": { "type": "Point", "coordinates": [29.002, 41.001] },
                  "properties": { "id": "corridor-2" } },
                { "type": "corridor-node", "geometry": { "type": "Point", "coordinates": [29.003, 41.001] },
                  "properties": { "id": "corridor-3" } },
                { "type": "corridor-node", "geometry": { "type": "Point", "coordinates": [29.009, 41.009] },
                  "properties": { "id": "corridor-iso" } },
                { "type": "door-node", "geometry": { "type": "Point", "coordinates": [29.001, 41.000] },
                  "properties": { "id": "d1", "room": "r1" } },
                { "type": "door-node", "geometry": { "type": "Point", "coordinates": [29.002, 41.000] },
                  "properties": { "id": "d2", "room": "r2" } },
                { "type": "room", "geometry": { "type": "Point", "coordinates": [29.001, 40.999] },
                  "properties": { "id": "r1", "name": "Coffee Corner" } },
                { "type": "room", "geometry": { "type": "Point", "coordinates": [29.002, 40.999] },
                  "properties": { "id": "r2", "name": "Pharmacy" } },
                { "type": "room", "geometry": { "type": "Point", "coordinates": [29.005, 40.999] },
                  "properties": { "id": "r-orphan", "name": "Storage" } },
                { "type": "floor-connector-node", "geometry": { "type": "Point", "coordinates": [29.004, 41.001] },
                  "properties": { "id": "esc-a-entry", "connector": "esc-a", "connector_type": "escalator",
                                  "direction": "up", "role": "entry", "from_floor": 0, "to_floor": 1 } },
                { "type": "floor-connector-node", "geometry": { "type": "Point", "coordinates": [29.004, 41.002] },
                  "properties": { "id": "esc-a-exit", "connector": "esc-a", "connector_type": "escalator",
                                  "direction": "down", "role": "exit", "from_floor": 0, "to_floor": 1 } },
                { "type": "door-connection",
                  "properties": { "from": "d1", "to": "corridor-1", "weight": 2.0, "direction": "east" } },
                { "type": "door-connection",
                  "properties": { "from": "d2", "to": "corridor-2", "weight": 2.0, "direction": "west" } },
                { "type": "corridor-edge",
                  "properties": { "from": "corridor-1", "to": "corridor-2", "weight": 5.0, "direction": "north" } },
                { "type": "corridor-edge",
                  "properties": { "from": "corridor-2", "to": "corridor-3", "weight": 5.0, "direction": "north" } },
                { "type": "corridor-edge",
                  "properties": { "from": "corridor-3", "to": "esc-a-entry", "weight": 3.0, "direction": "east" } },
                { "type": "corridor-edge",
                  "properties": { "from": "corridor-3", "to": "esc-a-exit", "weight": 3.0, "direction": "northeast" } }
            ]),
        ),
        (
            1,
            json!([
                { "type": "corridor-node", "geometry": { "type": "Point", "coordinates": [29.004, 41.002] },
                  "properties": { "id": "corridor-4" } },
                { "type": "door-node", "geometry": { "type": "Point", "coordinates": [29.005, 41.002] },
                  "properties": { "id": "d3", "room": "r3" } },
                { "type": "room", "geometry": { "type": "Point", "coordinates": [29.005, 41.003] },
                  "properties": { "id": "r3", "name": "Bookstore" } },
                { "type": "floor-connector-node", "geometry": { "type": "Point", "coordinates": [29.004, 41.001] },
                  "properties": { "id": "esc-a-exit", "connector": "esc-a", "connector_type": "escalator",
                                  "direction": "up", "role": "exit", "from_floor": 0, "to_floor": 1 } },
                { "type": "floor-connector-node", "geometry": { "type": "Point", "coordinates": [29.004, 41.000] },
                  "properties": { "id": "esc-a-entry", "connector": "esc-a", "connector_type": "escalator",
                                  "direction": "down", "role": "entry", "from_floor": 0, "to_floor": 1 } },
                { "type": "corridor-edge",
                  "properties": { "from": "esc-a-exit", "to": "corridor-4", "weight": 4.0, "direction": "east" } },
                { "type": "corridor-edge",
                  "properties": { "from": "esc-a-entry", "to": "corridor-4", "weight": 4.0, "direction": "west" } },
                { "type": "door-connection",
                  "properties": { "from": "corridor-4", "to": "d3", "weight": 2.0, "direction": "north" } }
            ]),
        ),
    ])
}

/// One floor where a door sits on the direct line between two corridors:
/// the only legal corridor-to-corridor walk is the longer loop.
pub fn door_shortcut_venue() -> VenueGraph {
    venue(vec![(
        0,
        json!([
            { "type": "corridor-node", "geometry": { "type": "Point", "coordinates": [29.001, 41.001] },
              "properties": { "id": "corridor-a" } },
            { "type": "corridor-node", "geometry": { "type": "Point", "coordinates": [29.003, 41.001] },
              "properties": { "id": "corridor-b" } },
            { "type": "corridor-node", "geometry": { "type": "Point", "coordinates": [29.002, 41.002] },
              "properties": { "id": "corridor-c" } },
            { "type": "door-node", "geometry": { "type": "Point", "coordinates": [29.002, 41.001] },
              "properties": { "id": "dx" } },
            { "type": "door-connection",
              "properties": { "from": "corridor-a", "to": "dx", "weight": 1.0, "direction": "east" } },
            { "type": "door-connection",
              "properties": { "from": "dx", "to": "corridor-b", "weight": 1.0, "direction": "east" } },
            { "type": "corridor-edge",
              "properties": { "from": "corridor-a", "to": "corridor-c", "weight": 2.0, "direction": "northeast" } },
            { "type": "corridor-edge",
              "properties": { "from": "corridor-c", "to": "corridor-b", "weight": 2.0, "direction": "southeast" } }
        ]),
    )])
}

/// Three floors chained by two escalator banks, plus decoys on the middle
/// floor: a down-direction entry and a much farther up entry.
pub fn three_floor_venue() -> VenueGraph {
    venue(vec![
        (
            0,
            json!([
                { "type": "corridor-node", "geometry": { "type": "Point", "coordinates": [29.001, 41.001] },
                  "properties": { "id": "corridor-1" } },
                { "type": "door-node", "geometry": { "type": "Point", "coordinates": [29.000, 41.001] },
                  "properties": { "id": "d1", "room": "r1" } },
                { "type": "room", "geometry": { "type": "Point", "coordinates": [29.000, 41.000] },
                  "properties": { "id": "r1", "name": "Coffee Corner" } },
                { "type": "floor-connector-node", "geometry": { "type": "Point", "coordinates": [29.002, 41.001] },
                  "properties": { "id": "esc-a-entry", "connector": "esc-a", "connector_type": "escalator",
                                  "direction": "up", "role": "entry", "from_floor": 0, "to_floor": 1 } },
                { "type": "door-connection",
                  "properties": { "from": "d1", "to": "corridor-1", "weight": 2.0, "direction": "east" } },
                { "type": "corridor-edge",
                  "properties": { "from": "corridor-1", "to": "esc-a-entry", "weight": 3.0, "direction": "east" } }
            ]),
        ),
        (
            1,
            json!([
                { "type": "corridor-node", "geometry": { "type": "Point", "coordinates": [29.002, 41.002] },
                  "properties": { "id": "corridor-5" } },
                { "type": "corridor-node", "geometry": { "type": "Point", "coordinates": [29.006, 41.002] },
                  "properties": { "id": "corridor-7" } },
                { "type": "floor-connector-node", "geometry": { "type": "Point", "coordinates": [29.002, 41.001] },
                  "properties": { "id": "esc-a-exit", "connector": "esc-a", "connector_type": "escalator",
                                  "direction": "up", "role": "exit", "from_floor": 0, "to_floor": 1 } },
                { "type": "floor-connector-node", "geometry": { "type": "Point", "coordinates": [29.003, 41.002] },
                  "properties": { "id": "esc-b-entry", "connector": "esc-b", "connector_type": "escalator",
                                  "direction": "up", "role": "entry", "from_floor": 1, "to_floor": 2 } },
                { "type": "floor-connector-node", "geometry": { "type": "Point", "coordinates": [29.007, 41.002] },
                  "properties": { "id": "esc-c-entry", "connector": "esc-c", "connector_type": "escalator",
                                  "direction": "up", "role": "entry", "from_floor": 1, "to_floor": 2 } },
                { "type": "floor-connector-node", "geometry": { "type": "Point", "coordinates": [29.001, 41.002] },
                  "properties": { "id": "esc-z-entry", "connector": "esc-z", "connector_type": "escalator",
                                  "direction": "down", "role": "entry", "from_floor": 0, "to_floor": 1 } },
                { "type": "corridor-edge",
                  "properties": { "from": "esc-a-exit", "to": "corridor-5", "weight": 2.0, "direction": "north" } },
                { "type": "corridor-edge",
                  "properties": { "from": "corridor-5", "to": "esc-b-entry", "weight": 2.0, "direction": "east" } },
                { "type": "corridor-edge",
                  "properties": { "from": "corridor-5", "to": "corridor-7", "weight": 16.0, "direction": "east" } },
                { "type": "corridor-edge",
                  "properties": { "from": "corridor-7", "to": "esc-c-entry", "weight": 2.0, "direction": "east" } },
                { "type": "corridor-edge",
                  "properties": { "from": "corridor-5", "to": "esc-z-entry", "weight": 1.0, "direction": "west" } }
            ]),
        ),
        (
            2,
            json!([
                { "type": "corridor-node", "geometry": { "type": "Point", "coordinates": [29.003, 41.003] },
                  "properties": { "id": "corridor-6" } },
                { "type": "door-node", "geometry": { "type": "Point", "coordinates": [29.004, 41.003] },
                  "properties": { "id": "d4", "room": "r4" } },
                { "type": "room", "geometry": { "type": "Point", "coordinates": [29.004, 41.004] },
                  "properties": { "id": "r4", "name": "Cinema" } },
                { "type": "floor-connector-node", "geometry": { "type": "Point", "coordinates": [29.003, 41.002] },
                  "properties": { "id": "esc-b-exit", "connector": "esc-b", "connector_type": "escalator",
                                  "direction": "up", "role": "exit", "from_floor": 1, "to_floor": 2 } },
                { "type": "floor-connector-node", "geometry": { "type": "Point", "coordinates": [29.007, 41.003] },
                  "properties": { "id": "esc-c-exit", "connector": "esc-c", "connector_type": "escalator",
                                  "direction": "up", "role": "exit", "from_floor": 1, "to_floor": 2 } },
                { "type": "corridor-edge",
                  "properties": { "from": "esc-b-exit", "to": "corridor-6", "weight": 3.0, "direction": "north" } },
                { "type": "corridor-edge",
                  "properties": { "from": "esc-c-exit", "to": "corridor-6", "weight": 9.0, "direction": "west" } },
                { "type": "door-connection",
                  "properties": { "from": "corridor-6", "to": "d4", "weight": 2.0, "direction": "east" } }
            ]),
        ),
    ])
}

/// Floor 0 offers only an elevator toward floor 1; escalator requests must
/// fall back to it.
pub fn elevator_only_venue() -> VenueGraph {
    venue(vec![
        (
            0,
            json!([
                { "type": "corridor-node", "geometry": { "type": "Point", "coordinates": [29.001, 41.001] },
                  "properties": { "id": "corridor-1" } },
                { "type": "door-node", "geometry": { "type": "Point", "coordinates": [29.000, 41.001] },
                  "properties": { "id": "d1", "room": "r1" } },
                { "type": "room", "geometry": { "type": "Point", "coordinates": [29.000, 41.000] },
                  "properties": { "id": "r1", "name": "Coffee Corner" } },
                { "type": "floor-connector-node", "geometry": { "type": "Point", "coordinates": [29.002, 41.001] },
                  "properties": { "id": "lift-a-entry", "connector": "lift-a", "connector_type": "elevator",
                                  "direction": "bidirectional", "role": "entry", "from_floor": 0, "to_floor": 1 } },
                { "type": "door-connection",
                  "properties": { "from": "d1", "to": "corridor-1", "weight": 2.0, "direction": "east" } },
                { "type": "corridor-edge",
                  "properties": { "from": "corridor-1", "to": "lift-a-entry", "weight": 3.0, "direction": "east" } }
            ]),
        ),
        (
            1,
            json!([
                { "type": "corridor-node", "geometry": { "type": "Point", "coordinates": [29.002, 41.002] },
                  "properties": { "id": "corridor-4" } },
                { "type": "door-node", "geometry": { "type": "Point", "coordinates": [29.003, 41.002] },
                  "properties": { "id": "d3", "room": "r3" } },
                { "type": "room", "geometry": { "type": "Point", "coordinates": [29.003, 41.003] },
                  "properties": { "id": "r3", "name": "Bookstore" } },
                { "type": "floor-connector-node", "geometry": { "type": "Point", "coordinates": [29.002, 41.001] },
                  "properties": { "id": "lift-a-exit", "connector": "lift-a", "connector_type": "elevator",
                                  "direction": "bidirectional", "role": "exit", "from_floor": 0, "to_floor": 1 } },
                { "type": "corridor-edge",
                  "properties": { "from": "lift-a-exit", "to": "corridor-4", "weight": 4.0, "direction": "east" } },
                { "type": "door-connection",
                  "properties": { "from": "corridor-4", "to": "d3", "weight": 2.0, "direction": "north" } }
            ]),
        ),
    ])
}
