//! Waypoint record type.

use serde::{Deserialize, Serialize};

use crate::distance::haversine_km;
use crate::error::SequencingError;

/// A single geocoded delivery stop.
///
/// Waypoints arrive from the ingestion layer with their coordinates already
/// validated; [`Waypoint::new`] re-states that contract for records built in
/// process (latitude in `[-90, 90]`, longitude in `[-180, 180]`, both
/// finite). A waypoint is immutable once constructed; the engine borrows
/// slices of them read-only and clones into its output.
///
/// The `status` and `kind` columns are optional upstream and default to the
/// empty string, both here and when deserializing records where the column
/// is absent. `kind` maps to the `type` key on the wire.
///
/// # Examples
///
/// ```
/// use route_sequencer::models::Waypoint;
///
/// let w = Waypoint::new(1, "R1", 11.562108, 104.888535, "Phnom Penh depot")
///     .unwrap()
///     .with_status("pending")
///     .with_kind("dropoff");
/// assert_eq!(w.route(), "R1");
/// assert_eq!(w.status(), "pending");
/// assert_eq!(w.kind(), "dropoff");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    id: i64,
    route: String,
    lat: f64,
    long: f64,
    name: String,
    #[serde(default)]
    status: String,
    #[serde(default, rename = "type")]
    kind: String,
}

impl Waypoint {
    /// Creates a waypoint, validating the coordinate ranges.
    ///
    /// Returns [`SequencingError::LatitudeOutOfRange`] or
    /// [`SequencingError::LongitudeOutOfRange`] for out-of-range or
    /// non-finite values (NaN fails both range checks).
    pub fn new(
        id: i64,
        route: impl Into<String>,
        lat: f64,
        long: f64,
        name: impl Into<String>,
    ) -> Result<Self, SequencingError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(SequencingError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&long) {
            return Err(SequencingError::LongitudeOutOfRange(long));
        }
        Ok(Self {
            id,
            route: route.into(),
            lat,
            long,
            name: name.into(),
            status: String::new(),
            kind: String::new(),
        })
    }

    /// Sets the delivery status column.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the stop type column (`type` on the wire).
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Record ID assigned by the persistence layer.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Route identifier this waypoint belongs to.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn long(&self) -> f64 {
        self.long
    }

    /// Human-readable stop name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Delivery status column (empty when the upstream column was blank).
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Stop type column (empty when the upstream column was blank).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns `true` if both coordinates are finite.
    ///
    /// Deserialized records bypass [`Waypoint::new`], so the engine checks
    /// this before any distance computation.
    pub fn has_finite_coords(&self) -> bool {
        self.lat.is_finite() && self.long.is_finite()
    }

    /// Great-circle distance to another waypoint in kilometers.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_sequencer::models::Waypoint;
    ///
    /// let a = Waypoint::new(1, "R1", 0.0, 0.0, "a").unwrap();
    /// let b = Waypoint::new(2, "R1", 0.0, 1.0, "b").unwrap();
    /// assert!((a.distance_to(&b) - 111.2).abs() < 0.5);
    /// ```
    pub fn distance_to(&self, other: &Waypoint) -> f64 {
        haversine_km(self.lat, self.long, other.lat, other.long)
    }
}
