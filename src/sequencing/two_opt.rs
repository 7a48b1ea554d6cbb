//! 2-opt refinement for open paths.
//!
//! Repeatedly reverses the path segment between two positions whenever the
//! reversal shortens the path, until no improving reversal remains. On an
//! open path only the edges entering and leaving the reversed segment
//! change, so the improvement test is two lookups per boundary; a segment
//! touching either end of the path has only one boundary edge.
//!
//! # Complexity
//!
//! O(n²) per sweep; the number of sweeps depends on the input but is small
//! in practice.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling-salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::{ensure_finite, DistanceMatrix};
use crate::error::SequencingError;
use crate::models::{Tour, Waypoint};

const IMPROVEMENT_EPSILON: f64 = 1e-10;

/// Refines an ordered path by 2-opt segment reversal.
///
/// The result visits the same waypoints and is never longer than the
/// input. Paths of zero or one waypoint are returned unchanged; larger
/// paths are first checked for non-finite coordinates.
///
/// # Examples
///
/// ```
/// use route_sequencer::models::Waypoint;
/// use route_sequencer::sequencing::two_opt_improve;
///
/// // A self-crossing west-east-west path straightens into a sweep.
/// let path = vec![
///     Waypoint::new(1, "R1", 0.0, 0.0, "a").unwrap(),
///     Waypoint::new(2, "R1", 0.0, 2.0, "c").unwrap(),
///     Waypoint::new(3, "R1", 0.0, 1.0, "b").unwrap(),
///     Waypoint::new(4, "R1", 0.0, 3.0, "d").unwrap(),
/// ];
/// let tour = two_opt_improve(&path).unwrap();
/// let ids: Vec<i64> = tour.waypoints().iter().map(|w| w.id()).collect();
/// assert_eq!(ids, vec![1, 3, 2, 4]);
/// ```
pub fn two_opt_improve(path: &[Waypoint]) -> Result<Tour, SequencingError> {
    let n = path.len();
    if n <= 1 {
        return Ok(Tour::new(path.to_vec(), 0.0));
    }

    ensure_finite(path)?;
    let distances = DistanceMatrix::from_waypoints(path);
    let mut order: Vec<usize> = (0..n).collect();

    let mut improved = true;
    while improved {
        improved = false;
        for i in 0..n - 1 {
            for j in (i + 1)..n {
                if reversal_delta(&order, &distances, i, j) < -IMPROVEMENT_EPSILON {
                    order[i..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    let total = order.windows(2).map(|pair| distances.get(pair[0], pair[1])).sum();
    let sequence = order.iter().map(|&i| path[i].clone()).collect();
    Ok(Tour::new(sequence, total))
}

/// Length change from reversing `order[i..=j]` in place.
///
/// Only the boundary edges contribute; edges inside the segment keep their
/// lengths under reversal. A boundary at the start or end of the path has
/// no edge and contributes nothing.
fn reversal_delta(order: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let mut delta = 0.0;
    if i > 0 {
        let before = order[i - 1];
        delta += distances.get(before, order[j]) - distances.get(before, order[i]);
    }
    if j + 1 < order.len() {
        let after = order[j + 1];
        delta += distances.get(order[i], after) - distances.get(order[j], after);
    }
    delta
}
