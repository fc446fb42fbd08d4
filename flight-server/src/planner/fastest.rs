//! Earliest-arrival search.
//!
//! The only schedule-aware search. A flight can be taken from an airport
//! only if it departs at least the minimum connection time after the
//! traveller landed there, so the cost of an edge depends on when we reach
//! its origin. States therefore carry the last arrival instant and the
//! flights taken so far, not just the airport.
//!
//! The search is A*: priority is elapsed time (waiting plus flying) plus the
//! great-circle lower bound on the time left to fly.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use chrono::Duration;
use tracing::{debug, trace};

use crate::catalog::FlightCatalog;
use crate::domain::{AirportCode, FlightEdge, Timestamp, as_minutes};

use super::config::SearchConfig;
use super::geo::GeoHeuristic;
use super::search::{CancelFlag, Explored, SearchError};

/// The fastest feasible route found.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedRoute<'a> {
    /// Airports visited, origin first.
    pub path: Vec<AirportCode>,

    /// The exact flights taken. Several flights may connect the same pair of
    /// airports, so these cannot be re-derived from `path`.
    pub flights: Vec<&'a FlightEdge>,

    /// Time from the first departure to the final arrival, layovers included.
    pub elapsed: Duration,
}

/// A* state.
#[derive(Debug)]
struct TimeState<'a> {
    /// `elapsed` in minutes plus the heuristic estimate.
    priority: f64,
    elapsed: Duration,
    airport: AirportCode,
    seq: usize,
    /// Arrival at `airport`, or `None` before the first flight.
    last_arrival: Option<Timestamp>,
    path: Vec<AirportCode>,
    flights: Vec<&'a FlightEdge>,
}

impl Ord for TimeState<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap: priority, elapsed, airport code, push order
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.elapsed.cmp(&self.elapsed))
            .then_with(|| other.airport.cmp(&self.airport))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for TimeState<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for TimeState<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TimeState<'_> {}

/// Key of the visited map: the airport, plus the last-arrival bucket when
/// bucketing is configured.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct VisitKey {
    airport: AirportCode,
    bucket: Option<i64>,
}

impl VisitKey {
    fn of(state: &TimeState<'_>, bucket: Option<Duration>) -> Self {
        let bucket = match (bucket, state.last_arrival) {
            (Some(size), Some(arrival)) => {
                Some(arrival.timestamp().div_euclid(size.num_seconds().max(1)))
            }
            _ => None,
        };
        Self {
            airport: state.airport.clone(),
            bucket,
        }
    }
}

/// Find the feasible route from `source` to `destination` with the least
/// elapsed time.
///
/// A flight leaving `current` is skipped when it departs earlier than the
/// previous arrival plus `config.min_connection()`. The first flight has no
/// connection constraint and no wait.
///
/// A state is dropped when its visited key already holds an elapsed time
/// no greater than its own. With the default airport-only key this can prune
/// a slower arrival that would have caught a connection the faster one
/// could not; set `arrival_bucket_mins` to keep such states apart.
pub fn fastest<'a>(
    catalog: &'a FlightCatalog,
    geo: &GeoHeuristic,
    config: &SearchConfig,
    source: &AirportCode,
    destination: &AirportCode,
    cancel: &CancelFlag,
) -> Result<Explored<TimedRoute<'a>>, SearchError> {
    let min_connection = config.min_connection();
    let bucket = config.arrival_bucket();

    let mut heap = BinaryHeap::new();
    let mut visited: HashMap<VisitKey, Duration> = HashMap::new();
    let mut seq = 0;
    let mut explored = 0;

    heap.push(TimeState {
        priority: 0.0,
        elapsed: Duration::zero(),
        airport: source.clone(),
        seq,
        last_arrival: None,
        path: vec![source.clone()],
        flights: Vec::new(),
    });

    while let Some(state) = heap.pop() {
        cancel.check()?;
        explored += 1;

        if &state.airport == destination {
            debug!(
                elapsed_mins = state.elapsed.num_minutes(),
                hops = state.flights.len(),
                explored,
                "Earliest-arrival search found a route"
            );
            return Ok(Explored::found(
                TimedRoute {
                    path: state.path,
                    flights: state.flights,
                    elapsed: state.elapsed,
                },
                explored,
            ));
        }

        let key = VisitKey::of(&state, bucket);
        if visited.get(&key).is_some_and(|best| *best <= state.elapsed) {
            continue;
        }
        visited.insert(key, state.elapsed);

        trace!(
            airport = %state.airport,
            elapsed_mins = state.elapsed.num_minutes(),
            "A* expanding airport"
        );

        for edge in catalog.outbound(&state.airport) {
            let wait = match state.last_arrival {
                Some(arrival) => {
                    if edge.departure() < arrival + min_connection {
                        continue;
                    }
                    edge.departure()
                        .signed_duration_since(arrival)
                        .max(Duration::zero())
                }
                None => Duration::zero(),
            };

            let elapsed = state.elapsed + wait + edge.duration();
            let estimate = if config.use_heuristic {
                geo.estimate_minutes(edge.to(), destination)
            } else {
                0.0
            };

            let mut path = state.path.clone();
            path.push(edge.to().clone());
            let mut flights = state.flights.clone();
            flights.push(edge);

            seq += 1;
            heap.push(TimeState {
                priority: as_minutes(elapsed) + estimate,
                elapsed,
                airport: edge.to().clone(),
                seq,
                last_arrival: Some(edge.arrival()),
                path,
                flights,
            });
        }
    }

    debug!(explored, "Earliest-arrival search found no feasible route");
    Ok(Explored::not_found(explored))
}
