//! Multi-start nearest-neighbor sequencing.
//!
//! # Algorithm
//!
//! For every waypoint in the group, build one greedy open tour starting
//! there: repeatedly hop to the unvisited waypoint nearest the tour's
//! current end. Keep the candidate tour with the smallest total length.
//! Ties — between equally-near candidates within a tour and between
//! equal-total tours across starts — go to the earliest in input order, so
//! identical input always yields identical output.
//!
//! # Complexity
//!
//! O(n³) per group: n starts × n extension steps × up to n candidate scans
//! (distances come from a precomputed matrix, so the cubic part is lookups
//! and compares only). This is the dominant cost of the engine and the
//! scaling limit for very large groups; cap group sizes upstream or refine
//! a cheaper initial order with
//! [`two_opt_improve`](super::two_opt_improve) if it becomes a bottleneck.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E., Lewis, P.M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use crate::distance::{ensure_finite, DistanceMatrix};
use crate::error::SequencingError;
use crate::models::{RouteGroup, Tour};

/// Finds a near-minimal open visiting order for one route group.
///
/// Groups of zero or one waypoint are returned unchanged with total
/// distance zero (no distance is computed, so they cannot fail). Larger
/// groups are first checked for non-finite coordinates
/// ([`SequencingError::NonFiniteCoordinate`]), then sequenced.
///
/// The result is a heuristic: not guaranteed optimal for more than four
/// waypoints, but never worse than the single greedy tour starting at the
/// group's first waypoint, because that tour is always among the evaluated
/// candidates.
///
/// # Examples
///
/// ```
/// use route_sequencer::models::{RouteGroup, Waypoint};
/// use route_sequencer::sequencing::multi_start_nearest_neighbor;
///
/// // Colinear stops supplied out of order.
/// let mut group = RouteGroup::new("R1");
/// group.push(Waypoint::new(1, "R1", 0.0, 2.0, "c").unwrap());
/// group.push(Waypoint::new(2, "R1", 0.0, 0.0, "a").unwrap());
/// group.push(Waypoint::new(3, "R1", 0.0, 3.0, "d").unwrap());
/// group.push(Waypoint::new(4, "R1", 0.0, 1.0, "b").unwrap());
///
/// let tour = multi_start_nearest_neighbor(&group).unwrap();
/// let ids: Vec<i64> = tour.waypoints().iter().map(|w| w.id()).collect();
/// assert_eq!(ids, vec![2, 4, 1, 3]); // west-to-east sweep
/// assert!((tour.total_distance() - 333.6).abs() < 1.5);
/// ```
pub fn multi_start_nearest_neighbor(group: &RouteGroup) -> Result<Tour, SequencingError> {
    let waypoints = group.waypoints();
    let n = waypoints.len();
    if n <= 1 {
        return Ok(Tour::new(waypoints.to_vec(), 0.0));
    }

    ensure_finite(waypoints)?;
    let distances = DistanceMatrix::from_waypoints(waypoints);

    let mut best_order: Vec<usize> = Vec::new();
    let mut best_total = f64::INFINITY;

    for start in 0..n {
        let (order, total) = greedy_tour(start, &distances);
        // Strictly-smaller comparison: the first start reaching the minimum
        // total is the one that wins.
        if total < best_total {
            best_total = total;
            best_order = order;
        }
    }

    let sequence = best_order.iter().map(|&i| waypoints[i].clone()).collect();
    Ok(Tour::new(sequence, best_total))
}

/// Builds one greedy open tour from the given start index.
///
/// Returns the visiting order (as indices into the matrix) and its total
/// length. Candidates are scanned in index order and the incumbent is only
/// replaced on a strictly smaller distance, so equally-near candidates
/// resolve to the earliest index.
fn greedy_tour(start: usize, distances: &DistanceMatrix) -> (Vec<usize>, f64) {
    let n = distances.size();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut total = 0.0;
    let mut current = start;

    visited[start] = true;
    order.push(start);

    while order.len() < n {
        let mut best: Option<(usize, f64)> = None;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let d = distances.get(current, candidate);
            if best.is_none() || d < best.expect("checked is_none").1 {
                best = Some((candidate, d));
            }
        }

        let (next, d) = best.expect("an unvisited waypoint remains");
        visited[next] = true;
        order.push(next);
        total += d;
        current = next;
    }

    (order, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Waypoint;
    use proptest::prelude::*;

    fn group_of(points: &[(i64, f64, f64)]) -> RouteGroup {
        let mut group = RouteGroup::new("R1");
        for &(id, lat, long) in points {
            group.push(Waypoint::new(id, "R1", lat, long, format!("stop {id}")).expect("valid"));
        }
        group
    }

    fn ids(tour: &Tour) -> Vec<i64> {
        tour.waypoints().iter().map(Waypoint::id).collect()
    }

    /// Single greedy tour from the first waypoint, written the splice-out
    /// way as an independent reference for the lower-bound guarantee.
    fn greedy_from_first_total(waypoints: &[Waypoint]) -> f64 {
        let mut remaining: Vec<&Waypoint> = waypoints[1..].iter().collect();
        let mut current = &waypoints[0];
        let mut total = 0.0;
        while !remaining.is_empty() {
            let mut best = 0;
            let mut best_d = current.distance_to(remaining[0]);
            for (i, candidate) in remaining.iter().enumerate().skip(1) {
                let d = current.distance_to(candidate);
                if d < best_d {
                    best = i;
                    best_d = d;
                }
            }
            total += best_d;
            current = remaining.remove(best);
        }
        total
    }

    #[test]
    fn test_empty_group_unchanged() {
        let tour = multi_start_nearest_neighbor(&RouteGroup::new("R1")).expect("trivial");
        assert!(tour.is_empty());
        assert_eq!(tour.total_distance(), 0.0);
    }

    #[test]
    fn test_single_waypoint_unchanged() {
        let group = group_of(&[(7, 11.5, 104.9)]);
        let tour = multi_start_nearest_neighbor(&group).expect("trivial");
        assert_eq!(ids(&tour), vec![7]);
        assert_eq!(tour.total_distance(), 0.0);
    }

    #[test]
    fn test_two_waypoints_keep_input_order() {
        // Both directions have equal totals; the first start index wins.
        let group = group_of(&[(1, 10.0, 10.0), (2, 11.0, 11.0)]);
        let tour = multi_start_nearest_neighbor(&group).expect("sequenced");
        assert_eq!(ids(&tour), vec![1, 2]);
        let expected = group.waypoints()[0].distance_to(&group.waypoints()[1]);
        assert!((tour.total_distance() - expected).abs() < 1e-10);
    }

    #[test]
    fn test_colinear_shuffle_recovers_sweep() {
        let group = group_of(&[(1, 0.0, 2.0), (2, 0.0, 0.0), (3, 0.0, 3.0), (4, 0.0, 1.0)]);
        let tour = multi_start_nearest_neighbor(&group).expect("sequenced");
        assert_eq!(ids(&tour), vec![2, 4, 1, 3]);
        assert!((tour.total_distance() - 333.6).abs() < 1.5);
    }

    #[test]
    fn test_multi_start_beats_first_start() {
        // First waypoint sits mid-line, so the greedy tour from it doubles
        // back; starting from an endpoint does not.
        let group = group_of(&[(1, 0.0, 1.0), (2, 0.0, 0.0), (3, 0.0, 2.0), (4, 0.0, 3.0)]);
        let tour = multi_start_nearest_neighbor(&group).expect("sequenced");
        let single_start = greedy_from_first_total(group.waypoints());
        assert!(tour.total_distance() < single_start - 50.0, "multi-start should win clearly");
        assert_eq!(ids(&tour), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_equal_total_starts_resolve_to_first_index() {
        // Right angle: starting from either leg end gives the same total;
        // the earlier start index must win.
        let group = group_of(&[(1, 0.0, 0.0), (3, 1.0, 0.0), (2, 0.0, 1.0)]);
        let tour = multi_start_nearest_neighbor(&group).expect("sequenced");
        assert_eq!(ids(&tour), vec![3, 1, 2]);
    }

    #[test]
    fn test_equidistant_candidates_resolve_to_input_order() {
        // From the corner stop, the two arms are exactly equidistant; the
        // greedy step must take whichever comes first in the input.
        let corner = (20, 0.0, 1.0);
        let start = (10, 0.0, 0.0);
        let east = (30, 0.0, 2.0);
        let north = (40, 1.0, 1.0);

        let tour_a = multi_start_nearest_neighbor(&group_of(&[corner, start, east, north]))
            .expect("sequenced");
        assert_eq!(ids(&tour_a), vec![10, 20, 30, 40]);

        let tour_b = multi_start_nearest_neighbor(&group_of(&[corner, start, north, east]))
            .expect("sequenced");
        assert_eq!(ids(&tour_b), vec![10, 20, 40, 30]);

        assert!((tour_a.total_distance() - tour_b.total_distance()).abs() < 1e-9);
    }

    #[test]
    fn test_deterministic_repeat() {
        let group = group_of(&[
            (1, 11.55, 104.92),
            (2, 11.57, 104.88),
            (3, 11.54, 104.95),
            (4, 11.60, 104.90),
            (5, 11.52, 104.87),
        ]);
        let first = multi_start_nearest_neighbor(&group).expect("sequenced");
        let second = multi_start_nearest_neighbor(&group).expect("sequenced");
        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffled_line_always_recovers_a_sweep() {
        use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

        // Colinear stops: whatever order they arrive in, the winning tour
        // is a monotonic sweep from one endpoint at the straight-line total.
        let mut points: Vec<(i64, f64, f64)> = (0..6).map(|i| (i + 1, 0.0, i as f64)).collect();
        let straight = 5.0 * crate::distance::haversine_km(0.0, 0.0, 0.0, 1.0);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            points.shuffle(&mut rng);
            let tour = multi_start_nearest_neighbor(&group_of(&points)).expect("sequenced");
            assert!((tour.total_distance() - straight).abs() < 1e-9);

            let longs: Vec<f64> = tour.waypoints().iter().map(Waypoint::long).collect();
            let ascending = longs.windows(2).all(|pair| pair[0] < pair[1]);
            let descending = longs.windows(2).all(|pair| pair[0] > pair[1]);
            assert!(ascending || descending, "not a sweep: {longs:?}");
        }
    }

    #[test]
    fn test_non_finite_coordinate_is_a_fault() {
        let mut group = group_of(&[(1, 0.0, 0.0)]);
        let bad: Waypoint =
            serde_json::from_str(r#"{"id":99,"route":"R1","lat":1e999,"long":0.5,"name":"bad"}"#)
                .expect("deserializable");
        group.push(bad);
        assert_eq!(
            multi_start_nearest_neighbor(&group).unwrap_err(),
            SequencingError::NonFiniteCoordinate {
                id: 99,
                route: "R1".to_string(),
            }
        );
    }

    fn arb_group() -> impl Strategy<Value = RouteGroup> {
        prop::collection::vec((0.0f64..5.0, 100.0f64..105.0), 2..9).prop_map(|coords| {
            let points: Vec<(i64, f64, f64)> = coords
                .into_iter()
                .enumerate()
                .map(|(i, (lat, long))| (i as i64 + 1, lat, long))
                .collect();
            group_of(&points)
        })
    }

    proptest! {
        #[test]
        fn prop_never_worse_than_first_start_greedy(group in arb_group()) {
            let tour = multi_start_nearest_neighbor(&group).expect("sequenced");
            let reference = greedy_from_first_total(group.waypoints());
            prop_assert!(tour.total_distance() <= reference + 1e-9);
        }

        #[test]
        fn prop_tour_is_a_permutation(group in arb_group()) {
            let tour = multi_start_nearest_neighbor(&group).expect("sequenced");
            let mut tour_ids = ids(&tour);
            tour_ids.sort_unstable();
            let mut input_ids: Vec<i64> =
                group.waypoints().iter().map(Waypoint::id).collect();
            input_ids.sort_unstable();
            prop_assert_eq!(tour_ids, input_ids);
        }

        #[test]
        fn prop_total_matches_path_length(group in arb_group()) {
            let tour = multi_start_nearest_neighbor(&group).expect("sequenced");
            let recomputed = crate::distance::path_length(tour.waypoints());
            prop_assert!((tour.total_distance() - recomputed).abs() < 1e-6);
        }
    }
}
