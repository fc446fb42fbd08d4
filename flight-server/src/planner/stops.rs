//! Fewest-stops search.
//!
//! Breadth-first search over the catalog with every flight counted as one
//! hop. Schedules are ignored: a returned path may "connect" onto a flight
//! that leaves before the previous one lands. Only the earliest-arrival
//! search checks connections.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::catalog::FlightCatalog;
use crate::domain::AirportCode;

use super::search::{CancelFlag, Explored, SearchError};

/// BFS state: an airport and the path that reached it.
#[derive(Debug, Clone)]
struct StopState {
    airport: AirportCode,
    path: Vec<AirportCode>,
}

/// Find the path from `source` to `destination` with the fewest flights.
///
/// An airport is marked visited when dequeued, so several paths to the same
/// airport can sit in the queue at once; BFS dequeues in non-decreasing hop
/// order, so the first path to reach the destination is a shortest one.
/// A path never revisits an airport. Ties go to the path using
/// earlier-ingested flights.
pub fn fewest_stops(
    catalog: &FlightCatalog,
    source: &AirportCode,
    destination: &AirportCode,
    cancel: &CancelFlag,
) -> Result<Explored<Vec<AirportCode>>, SearchError> {
    let mut queue = VecDeque::from([StopState {
        airport: source.clone(),
        path: vec![source.clone()],
    }]);
    let mut visited: HashSet<AirportCode> = HashSet::new();
    let mut explored = 0;

    while let Some(state) = queue.pop_front() {
        cancel.check()?;
        explored += 1;

        if &state.airport == destination {
            debug!(
                hops = state.path.len() - 1,
                explored, "Fewest-stops search found a path"
            );
            return Ok(Explored::found(state.path, explored));
        }

        if !visited.insert(state.airport.clone()) {
            continue;
        }

        trace!(
            airport = %state.airport,
            depth = state.path.len() - 1,
            "BFS expanding airport"
        );

        for edge in catalog.outbound(&state.airport) {
            let next = edge.to();
            if state.path.contains(next) || visited.contains(next) {
                continue;
            }

            let mut path = state.path.clone();
            path.push(next.clone());
            queue.push_back(StopState {
                airport: next.clone(),
                path,
            });
        }
    }

    debug!(explored, "Fewest-stops search found no path");
    Ok(Explored::not_found(explored))
}
