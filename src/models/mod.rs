//! Domain model types for route sequencing.
//!
//! Provides the core records: geocoded waypoints, per-route groups keyed by
//! route identifier, and the ephemeral tour an optimization pass produces.

mod group;
mod tour;
mod waypoint;

pub use group::RouteGroup;
pub use tour::Tour;
pub use waypoint::Waypoint;
