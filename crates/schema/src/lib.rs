//! Shared data model for the venue navigation pipeline.
//!
//! `feature` holds the GeoJSON-like input types authored per floor;
//! `graph` holds the unified navigation graph those features build into.

pub mod feature;
pub mod graph;
