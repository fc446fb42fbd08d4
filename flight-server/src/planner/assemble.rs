//! Turning an airport path back into flights.
//!
//! The fewest-stops search returns airports only. To report flights and
//! totals we pick, for each consecutive pair, the first flight between them
//! in ingestion order. This ignores schedules just as that search does.

use chrono::Duration;

use crate::catalog::FlightCatalog;
use crate::domain::{AirportCode, FlightEdge};

use super::search::SearchError;

/// The first-ingested flight for each hop of `path`.
///
/// Fails with [`SearchError::Disconnected`] if some consecutive pair has no
/// flight, which cannot happen for a path produced by a search over the
/// same catalog.
pub fn assemble<'a>(
    path: &[AirportCode],
    catalog: &'a FlightCatalog,
) -> Result<Vec<&'a FlightEdge>, SearchError> {
    path.windows(2)
        .map(|pair| {
            catalog
                .flights_between(&pair[0], &pair[1])
                .next()
                .ok_or_else(|| SearchError::Disconnected {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                })
        })
        .collect()
}

/// Sum of the scheduled flight times, layovers excluded.
pub fn total_duration(legs: &[&FlightEdge]) -> Duration {
    legs.iter()
        .fold(Duration::zero(), |total, leg| total + leg.duration())
}

/// Sum of the fares.
pub fn total_cost(legs: &[&FlightEdge]) -> f64 {
    legs.iter().map(|leg| leg.cost()).sum()
}

/// Total flight time along `path`, using the first flight for each hop.
pub fn path_duration(
    path: &[AirportCode],
    catalog: &FlightCatalog,
) -> Result<Duration, SearchError> {
    assemble(path, catalog).map(|legs| total_duration(&legs))
}

/// Total fare along `path`, using the first flight for each hop.
pub fn path_cost(path: &[AirportCode], catalog: &FlightCatalog) -> Result<f64, SearchError> {
    assemble(path, catalog).map(|legs| total_cost(&legs))
}
