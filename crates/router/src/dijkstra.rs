//! Shortest-path search within one floor's subgraph.
//!
//! The search itself is not floor-filtered; callers hand it a graph where
//! the relevant nodes are reachable and the edge weights keep it on one
//! floor in practice.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use ordered_float::OrderedFloat;
use schema::graph::{NodeKind, VenueGraph};

/// Classic Dijkstra over node ids with one domain rule: a door node is
/// terminal and only enters the frontier when it is the requested `end`,
/// so a search can never cut through a room via its door.
///
/// Returns the node ids from `start` to `end` inclusive, or an empty vec
/// when `end` is unreachable.
pub fn find_path<'a>(graph: &'a VenueGraph, start: &'a str, end: &'a str) -> Vec<String> {
    if !graph.nodes.contains_key(start) || !graph.nodes.contains_key(end) {
        return Vec::new();
    }

    let mut distances: HashMap<&'a str, f64> = HashMap::new();
    let mut prev: HashMap<&'a str, &'a str> = HashMap::new();
    let mut frontier: BinaryHeap<(Reverse<OrderedFloat<f64>>, &'a str)> = BinaryHeap::new();

    distances.insert(start, 0.0);
    frontier.push((Reverse(OrderedFloat(0.0)), start));

    while let Some((Reverse(OrderedFloat(cost)), current)) = frontier.pop() {
        if current == end {
            return reconstruct_path(start, end, &prev);
        }
        // Stale frontier entry.
        if let Some(&best) = distances.get(current) {
            if cost > best {
                continue;
            }
        }
        let Some(node) = graph.nodes.get(current) else {
            continue;
        };
        for edge in &node.neighbors {
            let Some(next) = graph.nodes.get(edge.to.as_str()) else {
                continue;
            };
            if next.kind == NodeKind::Door && edge.to != end {
                continue;
            }
            let next_cost = cost + edge.weight;
            let is_better = match distances.get(edge.to.as_str()) {
                Some(&existing) => next_cost < existing,
                None => true,
            };
            if is_better {
                distances.insert(&edge.to, next_cost);
                prev.insert(&edge.to, current);
                frontier.push((Reverse(OrderedFloat(next_cost)), &edge.to));
            }
        }
    }

    Vec::new()
}

fn reconstruct_path(start: &str, end: &str, prev: &HashMap<&str, &str>) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = end;

    while current != start {
        path.push(current.to_string());
        match prev.get(current) {
            Some(&previous) => current = previous,
            None => return Vec::new(),
        }
    }

    path.push(start.to_string());
    path.reverse();
    path
}
