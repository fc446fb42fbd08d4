//! Loaded reference data.
//!
//! A [`Dataset`] is everything a route query reads: the flight catalog, the
//! coordinate heuristic and the city directory. It is loaded in one go and
//! shared read-only; reloading builds a fresh one.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::airports::{AirportDataError, AirportDirectory, read_coordinates_from_path};
use crate::catalog::{CatalogError, FlightCatalog, read_records_from_path};
use crate::domain::AirportCode;
use crate::planner::{GeoHeuristic, SearchConfig};

/// Where the three data files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub flights: PathBuf,
    pub coordinates: PathBuf,
    pub airports: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            flights: PathBuf::from("data/all_flights.csv"),
            coordinates: PathBuf::from("data/airport_coordinates.csv"),
            airports: PathBuf::from("data/airports.csv"),
        }
    }
}

/// Error loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to load flights: {0}")]
    Catalog(#[from] CatalogError),

    #[error("failed to load airport data: {0}")]
    Airports(#[from] AirportDataError),

    /// The background load task panicked or was aborted
    #[error("load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// An immutable snapshot of the reference data.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub catalog: FlightCatalog,
    pub geo: GeoHeuristic,
    pub directory: AirportDirectory,
}

impl Dataset {
    pub fn new(catalog: FlightCatalog, geo: GeoHeuristic, directory: AirportDirectory) -> Self {
        Self {
            catalog,
            geo,
            directory,
        }
    }

    /// Load all three files. Any failure rejects the whole dataset.
    ///
    /// The heuristic's cruise speed comes from `config`.
    pub fn load(paths: &DataPaths, config: &SearchConfig) -> Result<Self, LoadError> {
        let records = read_records_from_path(&paths.flights)?;
        let catalog = FlightCatalog::build(records)?;

        let coords = read_coordinates_from_path(&paths.coordinates)?;
        let geo = GeoHeuristic::new(coords).with_cruise_speed(config.max_cruise_speed_kmh);

        let directory = AirportDirectory::read_from_path(&paths.airports)?;

        info!(
            flights = catalog.len(),
            coordinates = geo.len(),
            cities = directory.len(),
            "Loaded dataset"
        );

        let dataset = Self::new(catalog, geo, directory);
        let unplaced = dataset.airports_without_coordinates();
        if !unplaced.is_empty() {
            warn!(
                count = unplaced.len(),
                airports = ?unplaced,
                "Departure airports without coordinates, heuristic uses (0, 0)"
            );
        }
        Ok(dataset)
    }

    /// Departure airports the heuristic has no position for, sorted.
    pub fn airports_without_coordinates(&self) -> Vec<&AirportCode> {
        self.catalog
            .airports()
            .into_iter()
            .filter(|airport| self.geo.coordinates(airport).is_none())
            .collect()
    }
}
