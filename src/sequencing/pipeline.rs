//! Batch pipeline: group a waypoint batch by route, then optionally
//! sequence each group.
//!
//! Grouping always happens; sequencing is opt-in through
//! [`OrderingDirective`]. When sequencing is off the pipeline computes no
//! distances at all, so a batch that would fail the finiteness check still
//! passes through untouched.

use super::multi_start::multi_start_nearest_neighbor;
use crate::error::SequencingError;
use crate::grouping::group_by_route;
use crate::models::{RouteGroup, Waypoint};

/// Whether a batch should be sequenced or passed through in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderingDirective {
    /// Re-order each group's waypoints into a near-minimal travel path.
    Optimize,
    /// Keep every group's waypoints in first-seen input order.
    #[default]
    Preserve,
}

impl OrderingDirective {
    /// Maps the optional `order` query parameter to a directive.
    ///
    /// Only a parameter present with an empty value turns sequencing on;
    /// any non-empty value, and an absent parameter, leave input order
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_sequencer::sequencing::OrderingDirective;
    ///
    /// assert_eq!(OrderingDirective::from_order_param(Some("")), OrderingDirective::Optimize);
    /// assert_eq!(OrderingDirective::from_order_param(Some("true")), OrderingDirective::Preserve);
    /// assert_eq!(OrderingDirective::from_order_param(None), OrderingDirective::Preserve);
    /// ```
    pub fn from_order_param(value: Option<&str>) -> Self {
        match value {
            Some("") => Self::Optimize,
            _ => Self::Preserve,
        }
    }
}

/// Groups a waypoint batch by route and, when directed, sequences each
/// group.
///
/// Route groups come back in first-seen order either way; the directive
/// only controls the order of waypoints inside each group. Sequencing
/// fails on the first group containing a non-finite coordinate and the
/// error names the offending waypoint.
///
/// # Examples
///
/// ```
/// use route_sequencer::models::Waypoint;
/// use route_sequencer::sequencing::{sequence_routes, OrderingDirective};
///
/// let batch = vec![
///     Waypoint::new(1, "R2", 0.0, 1.0, "b").unwrap(),
///     Waypoint::new(2, "R1", 0.0, 0.0, "a").unwrap(),
///     Waypoint::new(3, "R2", 0.0, 0.0, "a").unwrap(),
/// ];
///
/// let groups = sequence_routes(&batch, OrderingDirective::Preserve).unwrap();
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].route(), "R2");
/// assert_eq!(groups[1].route(), "R1");
/// ```
pub fn sequence_routes(
    waypoints: &[Waypoint],
    directive: OrderingDirective,
) -> Result<Vec<RouteGroup>, SequencingError> {
    let mut groups = group_by_route(waypoints);
    if directive == OrderingDirective::Optimize {
        for group in &mut groups {
            let tour = multi_start_nearest_neighbor(group)?;
            group.set_waypoints(tour.into_waypoints());
        }
    }
    Ok(groups)
}
