//! Great-circle distance over a spherical Earth.

use crate::error::SequencingError;
use crate::models::Waypoint;

/// Degrees-to-radians factor.
const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Earth diameter in kilometers (2 × 6371 km mean radius).
const EARTH_DIAMETER_KM: f64 = 12_742.0;

/// Haversine distance between two coordinates, in kilometers.
///
/// Non-negative, symmetric, and exactly zero when both coordinates are
/// equal. Inputs must be finite and within range (latitude `[-90, 90]`,
/// longitude `[-180, 180]`); callers that cannot guarantee this run
/// [`ensure_finite`] first. Range violations are not re-checked here; the
/// ingestion layer owns that contract.
///
/// # Examples
///
/// ```
/// use route_sequencer::distance::haversine_km;
///
/// // One degree of longitude at the equator.
/// let d = haversine_km(0.0, 0.0, 0.0, 1.0);
/// assert!((d - 111.2).abs() < 0.5);
/// ```
pub fn haversine_km(lat1: f64, long1: f64, lat2: f64, long2: f64) -> f64 {
    let a = 0.5 - ((lat2 - lat1) * DEG_TO_RAD).cos() / 2.0
        + (lat1 * DEG_TO_RAD).cos()
            * (lat2 * DEG_TO_RAD).cos()
            * (1.0 - ((long2 - long1) * DEG_TO_RAD).cos())
            / 2.0;
    // Rounding can push `a` a hair outside [0, 1] at the identical and
    // antipodal extremes, which would turn the sqrt/asin into NaN.
    EARTH_DIAMETER_KM * a.clamp(0.0, 1.0).sqrt().asin()
}

/// Total open-path length of an ordered waypoint slice, in kilometers.
///
/// Sums the haversine distance of each consecutive pair; slices of fewer
/// than two waypoints have length zero. Same finiteness precondition as
/// [`haversine_km`].
///
/// # Examples
///
/// ```
/// use route_sequencer::distance::path_length;
/// use route_sequencer::models::Waypoint;
///
/// let stops = vec![
///     Waypoint::new(1, "R1", 0.0, 0.0, "a").unwrap(),
///     Waypoint::new(2, "R1", 0.0, 1.0, "b").unwrap(),
///     Waypoint::new(3, "R1", 0.0, 2.0, "c").unwrap(),
/// ];
/// assert!((path_length(&stops) - 222.4).abs() < 1.0);
/// ```
pub fn path_length(waypoints: &[Waypoint]) -> f64 {
    waypoints
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .sum()
}

/// Checks that every waypoint has finite coordinates.
///
/// Returns the first offender as
/// [`SequencingError::NonFiniteCoordinate`]. The distance-consuming
/// operations run this once up front instead of branching on every lookup;
/// it is public so the surrounding service can pre-flight a batch cheaply.
pub fn ensure_finite(waypoints: &[Waypoint]) -> Result<(), SequencingError> {
    match waypoints.iter().find(|w| !w.has_finite_coords()) {
        Some(w) => Err(SequencingError::NonFiniteCoordinate {
            id: w.id(),
            route: w.route().to_string(),
        }),
        None => Ok(()),
    }
}
