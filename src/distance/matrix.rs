//! Dense distance matrix.

use super::haversine_km;
use crate::models::Waypoint;

/// A dense n×n haversine distance matrix stored in row-major order.
///
/// The sequencing passes are O(n³) in distance lookups but only O(n²)
/// distinct pairs exist, so each optimization call precomputes the matrix
/// once and reads from it thereafter. Waypoint coordinates must be finite
/// (see [`ensure_finite`](super::ensure_finite)); the matrix does not
/// re-check.
///
/// # Examples
///
/// ```
/// use route_sequencer::distance::DistanceMatrix;
/// use route_sequencer::models::Waypoint;
///
/// let stops = vec![
///     Waypoint::new(1, "R1", 0.0, 0.0, "a").unwrap(),
///     Waypoint::new(2, "R1", 0.0, 1.0, "b").unwrap(),
/// ];
/// let dm = DistanceMatrix::from_waypoints(&stops);
/// assert_eq!(dm.size(), 2);
/// assert!((dm.get(0, 1) - 111.2).abs() < 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the pairwise haversine matrix for a waypoint slice.
    ///
    /// The diagonal is zero and the off-diagonal entries are filled
    /// symmetrically, each pair computed once.
    pub fn from_waypoints(waypoints: &[Waypoint]) -> Self {
        let n = waypoints.len();
        let mut dm = Self {
            data: vec![0.0; n * n],
            size: n,
        };
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine_km(
                    waypoints[i].lat(),
                    waypoints[i].long(),
                    waypoints[j].lat(),
                    waypoints[j].long(),
                );
                dm.data[i * n + j] = d;
                dm.data[j * n + i] = d;
            }
        }
        dm
    }

    /// Returns the distance from waypoint index `from` to index `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of waypoints this matrix covers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix covers no waypoints.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
