//! Tour type.

use super::Waypoint;

/// An ordered visiting sequence for one route group, with its open-path
/// length.
///
/// The total is the sum of consecutive-pair great-circle distances; there is
/// no closing edge back to the start. Tours are ephemeral: built by the
/// sequencer, then consumed (or unwrapped with [`into_waypoints`]) within
/// the same request rather than persisted.
///
/// [`into_waypoints`]: Tour::into_waypoints
///
/// # Examples
///
/// ```
/// use route_sequencer::models::{Tour, Waypoint};
///
/// let stops = vec![
///     Waypoint::new(1, "R1", 0.0, 0.0, "a").unwrap(),
///     Waypoint::new(2, "R1", 0.0, 1.0, "b").unwrap(),
/// ];
/// let tour = Tour::new(stops, 111.2);
/// assert_eq!(tour.len(), 2);
/// assert!((tour.total_distance() - 111.2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    waypoints: Vec<Waypoint>,
    total_distance: f64,
}

impl Tour {
    /// Creates a tour from an ordered sequence and its open-path length.
    pub fn new(waypoints: Vec<Waypoint>, total_distance: f64) -> Self {
        Self {
            waypoints,
            total_distance,
        }
    }

    /// The visiting order.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Sum of consecutive-pair distances in kilometers.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Number of waypoints in the tour.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Returns `true` if the tour visits nothing.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Consumes the tour, yielding the visiting order.
    pub fn into_waypoints(self) -> Vec<Waypoint> {
        self.waypoints
    }
}
