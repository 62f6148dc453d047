//! Containment scan of the airport collection against canonical extents.

use std::collections::HashSet;

use crate::airport::Airport;
use crate::coord::{point_in_extent, Extent};

/// Filters airports to those inside any of the given canonical extents.
///
/// A linear scan; suitable for the small-to-medium catalogs the
/// dashboard works with. Airports keep their input order and appear at
/// most once even when they satisfy both halves of an antimeridian
/// split, which is only possible on the shared ±180° boundary. The
/// input is never mutated.
pub fn filter_by_extents(airports: &[Airport], extents: &[Extent]) -> Vec<Airport> {
    let mut seen = HashSet::with_capacity(airports.len());

    airports
        .iter()
        .filter(|airport| {
            extents
                .iter()
                .any(|extent| point_in_extent(&airport.position, extent))
                && seen.insert(airport.id)
        })
        .cloned()
        .collect()
}
