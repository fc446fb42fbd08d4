//! Route planner front door.
//!
//! Dispatches a query to the search for its criterion and turns the raw
//! result into an [`Itinerary`] with legs and totals.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, error};

use crate::catalog::FlightCatalog;
use crate::domain::{AirportCode, Criterion, FlightEdge, Itinerary, ItineraryError};

use super::assemble::{assemble, total_cost, total_duration};
use super::config::SearchConfig;
use super::cost::cheapest;
use super::fastest::fastest;
use super::geo::GeoHeuristic;
use super::stops::fewest_stops;

/// Error from route search.
///
/// "No route" is not an error; see [`SearchResult::itinerary`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// The search was cancelled before it finished
    #[error("search cancelled")]
    Cancelled,

    /// A path hop has no flight in the catalog
    #[error("no flight from {from} to {to} in catalog")]
    Disconnected { from: AirportCode, to: AirportCode },

    /// Search output did not form a valid itinerary
    #[error("inconsistent search result: {0}")]
    Inconsistent(#[from] ItineraryError),
}

/// Cooperative cancellation for a running search.
///
/// Clones share the flag. Searches poll it once per queue pop.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask any search holding this flag to stop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub(crate) fn check(&self) -> Result<(), SearchError> {
        if self.is_cancelled() {
            Err(SearchError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Outcome of a single search algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct Explored<T> {
    /// The result, or `None` if the destination is unreachable.
    pub found: Option<T>,

    /// Number of states popped from the frontier.
    pub states_explored: usize,
}

impl<T> Explored<T> {
    pub fn found(value: T, states_explored: usize) -> Self {
        Self {
            found: Some(value),
            states_explored,
        }
    }

    pub fn not_found(states_explored: usize) -> Self {
        Self {
            found: None,
            states_explored,
        }
    }
}

/// Result of a route query.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best itinerary, or `None` if no route exists.
    pub itinerary: Option<Itinerary>,

    /// Number of states explored during search.
    pub states_explored: usize,
}

impl SearchResult {
    /// A result with no route.
    pub fn not_found(states_explored: usize) -> Self {
        Self {
            itinerary: None,
            states_explored,
        }
    }
}

/// Route planner over one catalog snapshot.
pub struct Planner<'a> {
    catalog: &'a FlightCatalog,
    geo: &'a GeoHeuristic,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(
        catalog: &'a FlightCatalog,
        geo: &'a GeoHeuristic,
        config: &'a SearchConfig,
    ) -> Self {
        Self {
            catalog,
            geo,
            config,
        }
    }

    /// Find the best route from `source` to `destination` under `criterion`.
    ///
    /// Unknown airports are not an error; they simply have no route.
    pub fn route(
        &self,
        source: &AirportCode,
        destination: &AirportCode,
        criterion: Criterion,
        cancel: &CancelFlag,
    ) -> Result<SearchResult, SearchError> {
        if source == destination {
            return Ok(SearchResult {
                itinerary: Some(Itinerary::trivial(criterion, source.clone())),
                states_explored: 0,
            });
        }

        debug!(%source, %destination, %criterion, "Starting route search");

        match criterion {
            Criterion::FewestStops => self.route_fewest_stops(source, destination, cancel),
            Criterion::LowestCost => self.route_lowest_cost(source, destination, cancel),
            Criterion::EarliestArrival => self.route_earliest_arrival(source, destination, cancel),
        }
    }

    fn route_fewest_stops(
        &self,
        source: &AirportCode,
        destination: &AirportCode,
        cancel: &CancelFlag,
    ) -> Result<SearchResult, SearchError> {
        let explored = fewest_stops(self.catalog, source, destination, cancel)?;
        let Some(path) = explored.found else {
            return Ok(SearchResult::not_found(explored.states_explored));
        };

        let legs = assemble(&path, self.catalog).inspect_err(|e| {
            error!(error = %e, "Fewest-stops path does not match catalog");
        })?;
        let itinerary = Itinerary::new(
            Criterion::FewestStops,
            path,
            owned(&legs),
            total_duration(&legs),
            total_cost(&legs),
        )?;

        Ok(SearchResult {
            itinerary: Some(itinerary),
            states_explored: explored.states_explored,
        })
    }

    fn route_lowest_cost(
        &self,
        source: &AirportCode,
        destination: &AirportCode,
        cancel: &CancelFlag,
    ) -> Result<SearchResult, SearchError> {
        let explored = cheapest(self.catalog, source, destination, cancel)?;
        let Some(route) = explored.found else {
            return Ok(SearchResult::not_found(explored.states_explored));
        };

        // Dijkstra's own flights, not the assembler's first-per-pair choice,
        // so the reported cost is the one the search minimised.
        let itinerary = Itinerary::new(
            Criterion::LowestCost,
            route.path,
            owned(&route.flights),
            total_duration(&route.flights),
            route.total_cost,
        )?;

        Ok(SearchResult {
            itinerary: Some(itinerary),
            states_explored: explored.states_explored,
        })
    }

    fn route_earliest_arrival(
        &self,
        source: &AirportCode,
        destination: &AirportCode,
        cancel: &CancelFlag,
    ) -> Result<SearchResult, SearchError> {
        let explored = fastest(
            self.catalog,
            self.geo,
            self.config,
            source,
            destination,
            cancel,
        )?;
        let Some(route) = explored.found else {
            return Ok(SearchResult::not_found(explored.states_explored));
        };

        let itinerary = Itinerary::new(
            Criterion::EarliestArrival,
            route.path,
            owned(&route.flights),
            route.elapsed,
            total_cost(&route.flights),
        )?;

        Ok(SearchResult {
            itinerary: Some(itinerary),
            states_explored: explored.states_explored,
        })
    }
}

fn owned(legs: &[&FlightEdge]) -> Vec<FlightEdge> {
    legs.iter().map(|leg| (*leg).clone()).collect()
}
