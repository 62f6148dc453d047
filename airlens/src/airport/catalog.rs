//! Airport catalog loading and O(1) id lookup.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::Airport;

/// Error type for catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog not found at: {0}")]
    NotFound(PathBuf),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// Stable identity underpins change detection, so colliding ids are
    /// rejected at load time rather than silently deduplicated.
    #[error("duplicate airport id {0} in catalog")]
    DuplicateId(u32),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Immutable airport catalog with stable ordering and O(1) id lookup.
///
/// Airports keep their catalog-file order; viewport filtering preserves
/// it so the list view stays deterministic across queries.
#[derive(Debug, Default)]
pub struct AirportCatalog {
    airports: Vec<Airport>,
    by_id: HashMap<u32, usize>,
}

impl AirportCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from an already-deserialized airport list.
    pub fn from_airports(airports: Vec<Airport>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(airports.len());
        for (idx, airport) in airports.iter().enumerate() {
            if by_id.insert(airport.id, idx).is_some() {
                return Err(CatalogError::DuplicateId(airport.id));
            }
        }
        Ok(Self { airports, by_id })
    }

    /// Build a catalog from a JSON reader.
    ///
    /// Expects a top-level array of airport objects in the dashboard's
    /// wire form (`type`, `coordinates.longitude`, ...).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let airports: Vec<Airport> = serde_json::from_reader(reader)?;
        let catalog = Self::from_airports(airports)?;

        tracing::info!(count = catalog.len(), "Loaded airport catalog");

        Ok(catalog)
    }

    /// Build a catalog from a JSON file on disk.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Get an airport by id.
    ///
    /// Returns `None` if the airport is not in the catalog.
    pub fn get(&self, id: u32) -> Option<&Airport> {
        self.by_id.get(&id).map(|&idx| &self.airports[idx])
    }

    /// All airports in catalog order.
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    /// Returns the number of airports in the catalog.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Returns an iterator over all airports in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.airports.iter()
    }
}
