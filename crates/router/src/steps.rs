//! Turns a raw node path into renderable directional steps and strips the
//! noise near-colocated corridor nodes leave behind.

use schema::graph::{Direction, VenueGraph};
use serde::Serialize;

use crate::RouterConfig;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStep {
    pub from: String,
    pub to: String,
    pub direction: Option<Direction>,
    pub distance: f64,
    pub is_floor_change: bool,
}

/// One floor's share of the path, as renderable coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorPolyline {
    pub floor: i32,
    /// `(lat, lon)` pairs in walk order.
    pub points: Vec<(f64, f64)>,
}

/// Builds one step per consecutive node pair. A pair on different floors
/// without an explicit edge becomes a virtual transition step.
pub fn build_steps(graph: &VenueGraph, path: &[String], config: &RouterConfig) -> Vec<RouteStep> {
    let mut steps = Vec::new();
    for pair in path.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let (Some(from_node), Some(to_node)) = (graph.nodes.get(from), graph.nodes.get(to)) else {
            continue;
        };
        let is_floor_change = from_node.floor != to_node.floor;
        let (direction, distance) = match from_node.edge_to(to) {
            Some(edge) => (edge.direction, edge.weight),
            None if is_floor_change => {
                let direction = if to_node.floor > from_node.floor {
                    Direction::Up
                } else {
                    Direction::Down
                };
                (Some(direction), config.virtual_transition_cost)
            }
            None => (None, 0.0),
        };
        steps.push(RouteStep {
            from: from.clone(),
            to: to.clone(),
            direction,
            distance,
            is_floor_change,
        });
    }
    steps
}

/// Drops zero-length steps unconditionally, then removes short corridor
/// bounces until nothing changes, so an already filtered list passes
/// through untouched.
pub fn filter_steps(mut steps: Vec<RouteStep>, config: &RouterConfig) -> Vec<RouteStep> {
    steps.retain(|step| step.distance != 0.0);
    loop {
        let before = steps.len();
        steps = drop_bounces(steps, config);
        if steps.len() == before {
            break;
        }
    }
    steps
}

/// One removal pass. A short step is a bounce when its surrounding steps
/// agree on a corridor the step itself leaves: the immediate A-B-A shape,
/// and the wider A-A-B-A-A shape around a short excursion.
fn drop_bounces(steps: Vec<RouteStep>, config: &RouterConfig) -> Vec<RouteStep> {
    let refs: Vec<Option<String>> = steps.iter().map(step_corridor).collect();
    let mut keep = vec![true; steps.len()];

    for i in 0..steps.len() {
        if steps[i].distance >= config.bounce_threshold {
            continue;
        }
        let Some(current) = &refs[i] else {
            continue;
        };
        if i >= 1 && i + 1 < steps.len() {
            if let (Some(prev), Some(next)) = (&refs[i - 1], &refs[i + 1]) {
                if prev == next && current != prev {
                    keep[i] = false;
                    continue;
                }
            }
        }
        if i >= 2 && i + 2 < steps.len() {
            if let (Some(p2), Some(p1), Some(n1), Some(n2)) =
                (&refs[i - 2], &refs[i - 1], &refs[i + 1], &refs[i + 2])
            {
                if p2 == p1 && p1 == n1 && n1 == n2 && current != p1 {
                    keep[i] = false;
                }
            }
        }
    }

    steps
        .into_iter()
        .zip(keep)
        .filter_map(|(step, kept)| kept.then_some(step))
        .collect()
}

/// The corridor a step references: extracted from its destination id,
/// falling back to its origin.
fn step_corridor(step: &RouteStep) -> Option<String> {
    corridor_base(&step.to).or_else(|| corridor_base(&step.from))
}

/// Extracts the `corridor-<n>` base from a node id,
/// e.g. `f2-corridor-14-b` -> `corridor-14`.
fn corridor_base(id: &str) -> Option<String> {
    let start = id.find("corridor-")?;
    let digits: String = id[start + "corridor-".len()..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    Some(format!("corridor-{}", digits))
}

/// Splits a path into per-floor coordinate polylines for rendering.
pub fn floor_polylines(graph: &VenueGraph, path: &[String]) -> Vec<FloorPolyline> {
    let mut polylines: Vec<FloorPolyline> = Vec::new();
    for id in path {
        let Some(node) = graph.nodes.get(id) else {
            continue;
        };
        match polylines.last_mut() {
            Some(polyline) if polyline.floor == node.floor => {
                polyline.points.push((node.lat, node.lon));
            }
            _ => polylines.push(FloorPolyline {
                floor: node.floor,
                points: vec![(node.lat, node.lon)],
            }),
        }
    }
    polylines
}

/// Human-readable turn instructions, one per step.
pub fn instructions(graph: &VenueGraph, steps: &[RouteStep]) -> Vec<String> {
    steps.iter().map(|step| describe_step(graph, step)).collect()
}

fn describe_step(graph: &VenueGraph, step: &RouteStep) -> String {
    if step.is_floor_change {
        let device = graph
            .nodes
            .get(&step.from)
            .and_then(|node| node.connector.as_ref())
            .map(|meta| meta.kind.to_string())
            .unwrap_or_else(|| "connector".to_string());
        let verb = match step.direction {
            Some(Direction::Down) => "down",
            _ => "up",
        };
        return match graph.nodes.get(&step.to).map(|node| node.floor) {
            Some(floor) => format!("Take the {} {} to floor {}", device, verb, floor),
            None => format!("Take the {} {}", device, verb),
        };
    }
    match step.direction {
        Some(direction) => format!("Head {} for {:.0} m", direction, step.distance),
        None => format!("Continue for {:.0} m", step.distance),
    }
}
