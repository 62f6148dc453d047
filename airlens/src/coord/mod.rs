//! Geographic primitives for viewport queries
//!
//! Provides longitude normalization, antimeridian-aware extent splitting,
//! and point-in-extent containment on the longitude/latitude plane.

mod types;

pub use types::{
    Extent, GeoPoint, FULL_CIRCLE_DEG, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON, SEAM_EPSILON,
};

/// Normalizes a longitude into the canonical half-open range `[-180, 180)`.
///
/// Total over all finite inputs; values a full rotation apart collapse
/// onto the same canonical longitude.
///
/// # Examples
///
/// - `180` → `-180`
/// - `-180` → `-180`
/// - `540` → `-180`
/// - `359.9` → `179.9` (within float precision)
#[inline]
pub fn normalize_lon(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(FULL_CIRCLE_DEG) - 180.0
}

/// Splits a raw viewport extent into one or two canonical extents.
///
/// Longitude bounds are normalized independently. When the normalized
/// minimum exceeds the maximum the viewport crosses the antimeridian and
/// is split into a pair of non-wrapping rectangles meeting at ±180°.
/// Latitude bounds pass through unmodified in every branch.
///
/// Bounds that normalize onto the same longitude (within
/// [`SEAM_EPSILON`]) while the viewport actually wrapped describe a
/// full-circle pan whose width collapsed to rounding noise; that case
/// widens to the full longitude range instead of a zero-width sliver.
pub fn split_extent(raw: &Extent) -> Vec<Extent> {
    let min_lon = normalize_lon(raw.min_lon);
    let max_lon = normalize_lon(raw.max_lon);

    // Seam distance is circular: bounds rounding onto opposite sides of
    // ±180° are coincident even though they are ~360 apart linearly.
    let seam_distance = (min_lon - max_lon).abs();
    let seam_equal =
        seam_distance <= SEAM_EPSILON || seam_distance >= FULL_CIRCLE_DEG - SEAM_EPSILON;
    let wrapped = min_lon > max_lon || raw.width().abs() >= FULL_CIRCLE_DEG - SEAM_EPSILON;

    if seam_equal && wrapped {
        return vec![Extent::new(MIN_LON, raw.min_lat, MAX_LON, raw.max_lat)];
    }

    if min_lon <= max_lon {
        vec![Extent::new(min_lon, raw.min_lat, max_lon, raw.max_lat)]
    } else {
        vec![
            Extent::new(min_lon, raw.min_lat, MAX_LON, raw.max_lat),
            Extent::new(MIN_LON, raw.min_lat, max_lon, raw.max_lat),
        ]
    }
}

/// Tests whether a point lies inside a canonical extent.
///
/// Bounds are inclusive on all four sides. Non-finite point coordinates
/// fail every comparison, so a NaN airport is never contained.
#[inline]
pub fn point_in_extent(p: &GeoPoint, e: &Extent) -> bool {
    p.lon >= e.min_lon && p.lon <= e.max_lon && p.lat >= e.min_lat && p.lat <= e.max_lat
}
