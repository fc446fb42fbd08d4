//! Airport reference data.
//!
//! Provides the city name ↔ airport code directory used to resolve user
//! input and label itinerary legs, and the coordinate table behind the
//! earliest-arrival search heuristic.

mod coords;
mod directory;
mod error;

pub use coords::{GeoPoint, read_coordinates, read_coordinates_from_path};
pub use directory::{AirportDirectory, UNKNOWN_AIRPORT, UNKNOWN_CITY};
pub use error::AirportDataError;
