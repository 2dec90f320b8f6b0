//! Validity predicates for vertical connectors.

use schema::graph::{ConnectorDirection, ConnectorMeta, TravelDirection};

use crate::RouterConfig;

/// Whether the connector can carry the required vertical direction.
/// Bidirectional devices carry both; a connector with no usable authored
/// direction carries neither.
pub fn direction_ok(meta: &ConnectorMeta, needed: TravelDirection) -> bool {
    match meta.direction {
        Some(ConnectorDirection::Bidirectional) => true,
        Some(ConnectorDirection::Up) => needed == TravelDirection::Up,
        Some(ConnectorDirection::Down) => needed == TravelDirection::Down,
        None => false,
    }
}

/// Whether the connector's authored floor span applies when standing on
/// `floor` heading toward `target_floor`: the current floor must be one of
/// the span's endpoints and the other endpoint must lie one step closer to
/// the target.
///
/// An unresolved span is accepted unless `strict_spans` is set; incomplete
/// authoring would otherwise reject whole connector banks.
pub fn span_ok(meta: &ConnectorMeta, floor: i32, target_floor: i32, config: &RouterConfig) -> bool {
    let Some((from, to)) = meta.span else {
        return !config.strict_spans;
    };
    if floor != from && floor != to {
        return false;
    }
    let other = if floor == from { to } else { from };
    other == floor + (target_floor - floor).signum()
}
