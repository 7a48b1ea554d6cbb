//! Grouping waypoints by route identifier.
//!
//! - [`group_by_route`] — lossless first-seen-order partition into [`RouteGroup`]s
//! - [`BatchSummary`] — waypoint and distinct-route counts for a batch
//!
//! [`RouteGroup`]: crate::models::RouteGroup

mod by_route;
mod summary;

pub use by_route::group_by_route;
pub use summary::BatchSummary;
