//! Cross-floor route planning.
//!
//! The planner walks to the closest usable entry connector, hops floor by
//! floor by pairing each entry with the matching exit of the same physical
//! device on the adjacent floor, walks to the next entry while vertical
//! travel remains, and finishes with a walk to the destination node.

use log::debug;
use schema::graph::{
    namespaced_id, split_floor_id, ConnectorKind, NodeRole, TravelDirection, VenueGraph,
};

use crate::{connector, dijkstra, distance, RouteError, RouteResult, RouterConfig};

/// Computes the full namespaced node path between two graph nodes,
/// crossing floors as needed.
///
/// "Closest" is always measured by cumulative walked edge weight, never
/// straight-line distance; ties fall to enumeration order. Every connector
/// hop moves exactly one floor toward the destination.
pub fn find_route(
    graph: &VenueGraph,
    start: &str,
    end: &str,
    preferred: ConnectorKind,
    config: &RouterConfig,
) -> RouteResult<Vec<String>> {
    let start_node = graph
        .nodes
        .get(start)
        .ok_or_else(|| RouteError::UnknownEndpoint(start.to_string()))?;
    let end_node = graph
        .nodes
        .get(end)
        .ok_or_else(|| RouteError::UnknownEndpoint(end.to_string()))?;
    let end_floor = end_node.floor;

    // Same floor: plain single-floor search.
    let Some(needed) = TravelDirection::between(start_node.floor, end_floor) else {
        let path = dijkstra::find_path(graph, start, end);
        if path.is_empty() {
            return Err(RouteError::NoPath {
                from: start.to_string(),
                to: end.to_string(),
            });
        }
        return Ok(path);
    };

    // Entry candidates on the start floor; availability beats transport
    // preference, so an empty enumeration retries with the other kind.
    let mut kind = preferred;
    let mut candidates = entry_candidates(graph, start_node.floor, end_floor, needed, kind, config, None);
    if candidates.is_empty() {
        kind = preferred.other();
        candidates = entry_candidates(graph, start_node.floor, end_floor, needed, kind, config, None);
        if !candidates.is_empty() {
            debug!(
                "no {} entry on floor {}, falling back to {}",
                preferred, start_node.floor, kind
            );
        }
    }
    if candidates.is_empty() {
        return Err(RouteError::NoUsableConnector {
            floor: start_node.floor,
            kind: preferred,
        });
    }

    let (mut path, mut current) = closest_walk(graph, start, &candidates, config).ok_or(
        RouteError::NoReachableConnector {
            floor: start_node.floor,
            kind,
        },
    )?;
    let mut floor = start_node.floor;

    while floor != end_floor {
        let next_floor = floor + needed.step();

        let Some(exit) = find_exit(graph, &current, next_floor, needed) else {
            return Err(RouteError::NoExitCounterpart {
                base: base_name_of(graph, &current),
                floor: next_floor,
            });
        };
        path.push(exit.clone());
        current = exit;
        floor = next_floor;
        if floor == end_floor {
            break;
        }

        // More vertical travel remains: walk to the closest next entry,
        // excluding the exit just arrived at.
        let candidates = entry_candidates(
            graph,
            floor,
            end_floor,
            needed,
            kind,
            config,
            Some(current.as_str()),
        );
        if candidates.is_empty() {
            return Err(RouteError::NoUsableConnector { floor, kind });
        }
        let (walk, entry) = closest_walk(graph, &current, &candidates, config)
            .ok_or(RouteError::NoReachableConnector { floor, kind })?;
        append_segment(&mut path, walk);
        current = entry;
    }

    let tail = dijkstra::find_path(graph, &current, end);
    if tail.is_empty() {
        return Err(RouteError::NoPath {
            from: current.clone(),
            to: end.to_string(),
        });
    }
    append_segment(&mut path, tail);
    Ok(path)
}

/// Entry-role connector nodes on `floor` usable toward `end_floor` with the
/// given device kind, in ingest order.
fn entry_candidates(
    graph: &VenueGraph,
    floor: i32,
    end_floor: i32,
    needed: TravelDirection,
    kind: ConnectorKind,
    config: &RouterConfig,
    exclude: Option<&str>,
) -> Vec<String> {
    let mut candidates = Vec::new();
    for id in graph.connectors_on(floor) {
        if exclude == Some(id.as_str()) {
            continue;
        }
        let Some(node) = graph.nodes.get(id) else {
            continue;
        };
        let Some(meta) = node.connector.as_ref() else {
            continue;
        };
        if meta.role != Some(NodeRole::Entry) {
            continue;
        }
        if meta.kind != kind {
            continue;
        }
        if !connector::direction_ok(meta, needed) {
            continue;
        }
        if !connector::span_ok(meta, floor, end_floor, config) {
            continue;
        }
        candidates.push(id.clone());
    }
    candidates
}

/// Walks from `from` to each candidate and keeps the cheapest walk; ties
/// keep the earlier candidate. `None` when no candidate is reachable.
fn closest_walk(
    graph: &VenueGraph,
    from: &str,
    candidates: &[String],
    config: &RouterConfig,
) -> Option<(Vec<String>, String)> {
    let mut best: Option<(Vec<String>, String, f64)> = None;
    for candidate in candidates {
        let walk = dijkstra::find_path(graph, from, candidate);
        if walk.is_empty() {
            continue;
        }
        let cost = distance::path_distance(graph, &walk, config);
        let better = match &best {
            Some((_, _, best_cost)) => cost < *best_cost,
            None => true,
        };
        if better {
            best = Some((walk, candidate.clone(), cost));
        }
    }
    best.map(|(walk, candidate, _)| (walk, candidate))
}

/// Finds the exit-role node paired with `entry_id` on `next_floor`: the
/// exactly-named counterpart first, then any exit of the same device group
/// that carries the needed direction.
fn find_exit(
    graph: &VenueGraph,
    entry_id: &str,
    next_floor: i32,
    needed: TravelDirection,
) -> Option<String> {
    let entry = graph.nodes.get(entry_id)?;
    let meta = entry.connector.as_ref()?;

    if let Some((_, raw)) = split_floor_id(entry_id) {
        let twin = namespaced_id(next_floor, &raw.replace("entry", "exit"));
        if let Some(node) = graph.nodes.get(&twin) {
            if let Some(twin_meta) = node.connector.as_ref() {
                if twin_meta.role == Some(NodeRole::Exit)
                    && twin_meta.kind == meta.kind
                    && twin_meta.base_name == meta.base_name
                {
                    return Some(twin);
                }
            }
        }
    }

    for id in graph.connectors_on(next_floor) {
        let Some(node) = graph.nodes.get(id) else {
            continue;
        };
        let Some(other) = node.connector.as_ref() else {
            continue;
        };
        if other.role == Some(NodeRole::Exit)
            && other.kind == meta.kind
            && other.base_name == meta.base_name
            && connector::direction_ok(other, needed)
        {
            return Some(id.clone());
        }
    }
    None
}

/// Concatenates a walk whose first node duplicates the path's last node.
fn append_segment(path: &mut Vec<String>, mut segment: Vec<String>) {
    if path.last().is_some() && path.last() == segment.first() {
        segment.remove(0);
    }
    path.append(&mut segment);
}

fn base_name_of(graph: &VenueGraph, id: &str) -> String {
    graph
        .nodes
        .get(id)
        .and_then(|node| node.connector.as_ref())
        .map(|meta| meta.base_name.clone())
        .unwrap_or_else(|| id.to_string())
}
