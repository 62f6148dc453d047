//! Airport records for the map-and-list dashboard.
//!
//! Airports are read-only to the spatial core: the catalog supplies them,
//! the viewport module filters them, and the list view renders them. The
//! core only ever reads `id` (stable identity) and `position`; everything
//! else is display data carried along for consumers.
//!
//! # Identity
//!
//! Two airport values denote the same real-world airport iff their ids
//! match, independent of attribute values. Change detection in
//! [`crate::viewport`] relies on this, never on structural equality.

mod catalog;

pub use catalog::{AirportCatalog, CatalogError};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::GeoPoint;

/// Airport classification, used for marker styling in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AirportType {
    International,
    Domestic,
    Regional,
    Private,
}

impl fmt::Display for AirportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AirportType::International => "international",
            AirportType::Domestic => "domestic",
            AirportType::Regional => "regional",
            AirportType::Private => "private",
        };
        write!(f, "{}", label)
    }
}

/// An airport with stable identity, location, and display attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// Stable unique identifier. Identity equality for change detection.
    pub id: u32,
    /// Display code (e.g., "JFK", "LAX").
    pub code: String,
    /// Airport name.
    pub name: String,
    /// City served.
    pub city: String,
    /// Country.
    pub country: String,
    /// Classification.
    #[serde(rename = "type")]
    pub airport_type: AirportType,
    /// Number of runways.
    pub runways: u8,
    /// Field elevation in feet.
    pub elevation: i32,
    /// Position on the map.
    #[serde(rename = "coordinates")]
    pub position: GeoPoint,
}

impl Airport {
    /// Create a new airport.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        code: &str,
        name: &str,
        city: &str,
        country: &str,
        airport_type: AirportType,
        runways: u8,
        elevation: i32,
        position: GeoPoint,
    ) -> Self {
        Self {
            id,
            code: code.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            country: country.to_string(),
            airport_type,
            runways,
            elevation,
            position,
        }
    }
}
