//! Domain types for the flight route planner.
//!
//! This module contains the core domain model types that represent
//! validated flight data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod airport;
mod criterion;
mod error;
mod flight;
mod itinerary;
mod time;

pub use airport::{AirportCode, InvalidAirportCode};
pub use criterion::Criterion;
pub use error::{FlightError, ItineraryError};
pub use flight::FlightEdge;
pub use itinerary::Itinerary;
pub use time::{TimeError, Timestamp, as_minutes, parse_instant};
