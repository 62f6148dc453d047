//! Geographic type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Canonical longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Degrees in one full rotation around the globe.
pub const FULL_CIRCLE_DEG: f64 = 360.0;

/// Tolerance for longitudes that should coincide at the ±180° seam.
///
/// A full-circle pan normalizes both viewport bounds onto the same
/// longitude, but floating-point rounding can leave them apart by noise.
/// Differences at or below this tolerance are treated as equal.
pub const SEAM_EPSILON: f64 = 1e-12;

/// A longitude/latitude position in decimal degrees.
///
/// Longitude is canonical in `[-180, 180)`, latitude in `[-90, 90]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Longitude in decimal degrees, 0 at Greenwich, positive east.
    #[serde(rename = "longitude")]
    pub lon: f64,
    /// Latitude in decimal degrees, 0 at the equator, positive north.
    #[serde(rename = "latitude")]
    pub lat: f64,
}

impl GeoPoint {
    /// Create a new point.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lon, self.lat)
    }
}

/// An axis-aligned rectangle in longitude/latitude space.
///
/// Two forms share this type:
///
/// - **raw**: as reported by the map view. Longitude bounds may lie
///   outside `[-180, 180)` and may wrap past the antimeridian.
/// - **canonical**: both longitude bounds in `[-180, 180]` with
///   `min_lon <= max_lon`, never wrapping.
///
/// [`crate::coord::split_extent`] converts raw to one or two canonical
/// extents covering the same longitudes modulo 360°.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Western bound in decimal degrees.
    pub min_lon: f64,
    /// Southern bound in decimal degrees.
    pub min_lat: f64,
    /// Eastern bound in decimal degrees.
    pub max_lon: f64,
    /// Northern bound in decimal degrees.
    pub max_lat: f64,
}

impl Extent {
    /// Create a new extent from its four bounds.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Longitudinal span in degrees (raw, no wrap handling).
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Latitudinal span in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.4}, {:.4}, {:.4}, {:.4}]",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}
