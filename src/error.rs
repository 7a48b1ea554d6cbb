//! Error type for waypoint construction and sequencing faults.

use thiserror::Error;

/// Errors produced by waypoint construction and the sequencing engine.
///
/// The range variants are raised at construction time by
/// [`Waypoint::new`](crate::models::Waypoint::new); the non-finite variant is
/// the engine-side fault raised when a NaN or infinite coordinate reaches a
/// distance-computing operation (for example through a deserialized record
/// that bypassed upstream validation). Bad coordinates are never coerced or
/// skipped; sequencing such a group fails instead of producing a NaN total.
///
/// # Examples
///
/// ```
/// use route_sequencer::error::SequencingError;
/// use route_sequencer::models::Waypoint;
///
/// let err = Waypoint::new(1, "R1", 95.0, 10.0, "Depot").unwrap_err();
/// assert_eq!(err, SequencingError::LatitudeOutOfRange(95.0));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequencingError {
    /// Latitude outside `[-90, 90]` (NaN included) at construction.
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    /// Longitude outside `[-180, 180]` (NaN included) at construction.
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    /// A NaN or infinite coordinate reached a distance computation.
    #[error("waypoint {id} on route {route} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// ID of the offending waypoint.
        id: i64,
        /// Route the waypoint belongs to.
        route: String,
    },
}
