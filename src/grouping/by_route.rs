//! Partitioning waypoints into per-route groups.

use std::collections::HashMap;

use crate::models::{RouteGroup, Waypoint};

/// Partitions a flat waypoint list into per-route groups.
///
/// Groups are keyed by exact string equality of the route identifier and
/// appear in the order each distinct route is first encountered scanning
/// left to right — not alphabetical, not by size. Within a group, waypoints
/// keep their input order. Both orders are load-bearing: the sequencer's
/// tie-breaks and the response layout depend on them.
///
/// Every input waypoint lands in exactly one group; the groups together are
/// a lossless partition of the input. Empty input yields an empty vec —
/// this operation cannot fail.
///
/// # Examples
///
/// ```
/// use route_sequencer::grouping::group_by_route;
/// use route_sequencer::models::Waypoint;
///
/// let waypoints = vec![
///     Waypoint::new(1, "B", 0.0, 0.0, "b1").unwrap(),
///     Waypoint::new(2, "A", 0.0, 1.0, "a1").unwrap(),
///     Waypoint::new(3, "B", 0.0, 2.0, "b2").unwrap(),
/// ];
/// let groups = group_by_route(&waypoints);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].route(), "B"); // first seen first
/// assert_eq!(groups[0].len(), 2);
/// assert_eq!(groups[1].route(), "A");
/// ```
pub fn group_by_route(waypoints: &[Waypoint]) -> Vec<RouteGroup> {
    let mut groups: Vec<RouteGroup> = Vec::new();
    // The vec carries the first-seen order; the map is only an O(1) index
    // into it.
    let mut index: HashMap<String, usize> = HashMap::new();

    for waypoint in waypoints {
        let slot = match index.get(waypoint.route()) {
            Some(&slot) => slot,
            None => {
                index.insert(waypoint.route().to_string(), groups.len());
                groups.push(RouteGroup::new(waypoint.route()));
                groups.len() - 1
            }
        };
        groups[slot].push(waypoint.clone());
    }

    groups
}
