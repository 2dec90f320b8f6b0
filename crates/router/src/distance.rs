//! Path cost evaluation.

use log::warn;
use schema::graph::VenueGraph;

use crate::RouterConfig;

/// Sums the outgoing edge weight of every consecutive pair in `path`.
///
/// A pair on different floors without an explicit edge is charged the
/// fixed virtual transition cost: connector pairings are often established
/// structurally rather than by an authored edge. A same-floor pair without
/// an edge contributes nothing and is logged.
pub fn path_distance(graph: &VenueGraph, path: &[String], config: &RouterConfig) -> f64 {
    let mut total = 0.0;
    for pair in path.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let Some(from_node) = graph.nodes.get(from) else {
            continue;
        };
        if let Some(edge) = from_node.edge_to(to) {
            total += edge.weight;
            continue;
        }
        match graph.nodes.get(to) {
            Some(to_node) if to_node.floor != from_node.floor => {
                total += config.virtual_transition_cost;
            }
            _ => warn!("no edge between {} and {} on the same floor", from, to),
        }
    }
    total
}
