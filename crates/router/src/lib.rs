//! Route planning over the venue navigation graph.
//!
//! The planner is pure computation over an immutable graph snapshot: each
//! call takes the full graph and the request parameters and returns a fresh
//! result, so concurrent calls with different endpoints are inherently safe.
//! Failures are returned as structured causes, never panics.

pub mod connector;
pub mod dijkstra;
pub mod distance;
pub mod planner;
pub mod steps;

#[cfg(test)]
mod testutil;

use schema::graph::{ConnectorKind, VenueGraph};
use thiserror::Error;

use crate::steps::RouteStep;

/// Why a route computation failed. Every variant maps to an empty result
/// for the caller's UI; the distinction exists for diagnostics and tests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("room {0} has no door")]
    RoomWithoutDoor(String),

    #[error("endpoint {0} does not resolve to a graph node")]
    UnknownEndpoint(String),

    #[error("no path from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("no usable {kind} connector on floor {floor}")]
    NoUsableConnector { floor: i32, kind: ConnectorKind },

    #[error("no reachable {kind} connector on floor {floor}")]
    NoReachableConnector { floor: i32, kind: ConnectorKind },

    #[error("no exit for connector {base} on floor {floor}")]
    NoExitCounterpart { base: String, floor: i32 },
}

pub type RouteResult<T> = Result<T, RouteError>;

/// Engine tunables. The defaults match the authored data's distance units.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Cost charged for a floor transition that has no explicit edge.
    pub virtual_transition_cost: f64,
    /// Steps shorter than this are candidates for bounce removal.
    pub bounce_threshold: f64,
    /// Reject connectors whose floor span cannot be resolved instead of
    /// treating them as usable everywhere.
    pub strict_spans: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            virtual_transition_cost: 10.0,
            bounce_threshold: 5.0,
            strict_spans: false,
        }
    }
}

/// A computed route: the full namespaced node path, its total cost, and the
/// filtered directional steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub path: Vec<String>,
    pub distance: f64,
    pub steps: Vec<RouteStep>,
}

/// Plans a route between two endpoints, each a namespaced room or node id.
///
/// Room endpoints are resolved through their owning door before any search
/// runs; a room without a door fails immediately with a distinct cause.
pub fn plan_route(
    graph: &VenueGraph,
    start: &str,
    end: &str,
    preferred: ConnectorKind,
    config: &RouterConfig,
) -> RouteResult<Route> {
    let start_id = resolve_endpoint(graph, start)?;
    let end_id = resolve_endpoint(graph, end)?;

    let path = planner::find_route(graph, &start_id, &end_id, preferred, config)?;
    let distance = distance::path_distance(graph, &path, config);
    let steps = steps::filter_steps(steps::build_steps(graph, &path, config), config);

    Ok(Route {
        path,
        distance,
        steps,
    })
}

/// Maps a requested endpoint to the graph node the search starts or ends
/// on: rooms resolve through their owning door, everything else must be a
/// node id.
pub fn resolve_endpoint(graph: &VenueGraph, id: &str) -> RouteResult<String> {
    if let Some(room) = graph.rooms.get(id) {
        let door = room
            .door
            .as_ref()
            .ok_or_else(|| RouteError::RoomWithoutDoor(id.to_string()))?;
        if !graph.nodes.contains_key(door) {
            return Err(RouteError::UnknownEndpoint(door.clone()));
        }
        return Ok(door.clone());
    }
    if graph.nodes.contains_key(id) {
        return Ok(id.to_string());
    }
    Err(RouteError::UnknownEndpoint(id.to_string()))
}
