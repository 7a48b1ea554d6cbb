//! Route group type.

use serde::Serialize;

use super::Waypoint;

/// The waypoints sharing one route identifier, in a defined order.
///
/// Produced by [`group_by_route`](crate::grouping::group_by_route) with
/// waypoints in input encounter order; the orchestrator may later replace
/// that sequence with an optimized tour order. Whatever the order, a set of
/// groups built from one input list always partitions it exactly: no
/// waypoint duplicated, none dropped.
///
/// Serializes to the response shape the surrounding service emits:
/// `{"route": …, "directions": […]}`.
///
/// # Examples
///
/// ```
/// use route_sequencer::models::{RouteGroup, Waypoint};
///
/// let mut group = RouteGroup::new("R1");
/// group.push(Waypoint::new(1, "R1", 11.5, 104.9, "Depot").unwrap());
/// assert_eq!(group.route(), "R1");
/// assert_eq!(group.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteGroup {
    route: String,
    #[serde(rename = "directions")]
    waypoints: Vec<Waypoint>,
}

impl RouteGroup {
    /// Creates an empty group for the given route identifier.
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            waypoints: Vec::new(),
        }
    }

    /// Appends a waypoint to the end of this group.
    pub fn push(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
    }

    /// Route identifier shared by every waypoint in this group.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// The ordered waypoint sequence.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Replaces the waypoint sequence (used when re-sequencing a group).
    pub fn set_waypoints(&mut self, waypoints: Vec<Waypoint>) {
        self.waypoints = waypoints;
    }

    /// Number of waypoints in this group.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Returns `true` if this group has no waypoints.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}
