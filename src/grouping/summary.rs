//! Batch summary counts.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::Waypoint;

/// Headline counts for one ingested waypoint batch.
///
/// The listing view of the surrounding service shows, per batch, how many
/// waypoints it holds and how many distinct routes they span; this is that
/// computation.
///
/// # Examples
///
/// ```
/// use route_sequencer::grouping::BatchSummary;
/// use route_sequencer::models::Waypoint;
///
/// let waypoints = vec![
///     Waypoint::new(1, "R1", 0.0, 0.0, "a").unwrap(),
///     Waypoint::new(2, "R2", 0.0, 1.0, "b").unwrap(),
///     Waypoint::new(3, "R1", 0.0, 2.0, "c").unwrap(),
/// ];
/// let summary = BatchSummary::from_waypoints(&waypoints);
/// assert_eq!(summary.waypoint_count, 3);
/// assert_eq!(summary.route_count, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Total number of waypoints in the batch.
    pub waypoint_count: usize,
    /// Number of distinct route identifiers in the batch.
    pub route_count: usize,
}

impl BatchSummary {
    /// Counts waypoints and distinct routes in one pass.
    pub fn from_waypoints(waypoints: &[Waypoint]) -> Self {
        let routes: HashSet<&str> = waypoints.iter().map(Waypoint::route).collect();
        Self {
            waypoint_count: waypoints.len(),
            route_count: routes.len(),
        }
    }
}
