//! Lowest-cost search.
//!
//! Dijkstra over the catalog with each flight weighted by its fare.
//! Timestamps are ignored, exactly as in the fewest-stops search.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use tracing::{debug, trace};

use crate::catalog::FlightCatalog;
use crate::domain::{AirportCode, FlightEdge};

use super::search::{CancelFlag, Explored, SearchError};

/// The cheapest route found, with the flights that make up its cost.
#[derive(Debug, Clone, PartialEq)]
pub struct CheapestRoute<'a> {
    /// Airports visited, origin first.
    pub path: Vec<AirportCode>,

    /// The flight used for each hop.
    pub flights: Vec<&'a FlightEdge>,

    /// Sum of the fares of `flights`.
    pub total_cost: f64,
}

/// Frontier entry, ordered so that `BinaryHeap` pops the cheapest first.
#[derive(Debug)]
struct CostEntry<'a> {
    cost: f64,
    airport: AirportCode,
    /// Push order, the final tie-break.
    seq: usize,
    path: Vec<AirportCode>,
    flights: Vec<&'a FlightEdge>,
}

impl Ord for CostEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: lowest cost, then lowest airport code, then earliest push
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.airport.cmp(&self.airport))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for CostEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CostEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CostEntry<'_> {}

/// Find the cheapest path from `source` to `destination`.
///
/// Once an airport is popped at its lowest cost it is never expanded again.
/// Equal-cost frontier entries are taken in airport-code order, then in the
/// order they were discovered, so results are deterministic.
pub fn cheapest<'a>(
    catalog: &'a FlightCatalog,
    source: &AirportCode,
    destination: &AirportCode,
    cancel: &CancelFlag,
) -> Result<Explored<CheapestRoute<'a>>, SearchError> {
    let mut heap = BinaryHeap::new();
    let mut visited: HashSet<AirportCode> = HashSet::new();
    let mut seq = 0;
    let mut explored = 0;

    heap.push(CostEntry {
        cost: 0.0,
        airport: source.clone(),
        seq,
        path: vec![source.clone()],
        flights: Vec::new(),
    });

    while let Some(entry) = heap.pop() {
        cancel.check()?;
        explored += 1;

        if &entry.airport == destination {
            debug!(
                cost = entry.cost,
                hops = entry.flights.len(),
                explored,
                "Lowest-cost search found a path"
            );
            return Ok(Explored::found(
                CheapestRoute {
                    path: entry.path,
                    flights: entry.flights,
                    total_cost: entry.cost,
                },
                explored,
            ));
        }

        if !visited.insert(entry.airport.clone()) {
            continue;
        }

        trace!(airport = %entry.airport, cost = entry.cost, "Dijkstra settling airport");

        for edge in catalog.outbound(&entry.airport) {
            if visited.contains(edge.to()) {
                continue;
            }

            let mut path = entry.path.clone();
            path.push(edge.to().clone());
            let mut flights = entry.flights.clone();
            flights.push(edge);

            seq += 1;
            heap.push(CostEntry {
                cost: entry.cost + edge.cost(),
                airport: edge.to().clone(),
                seq,
                path,
                flights,
            });
        }
    }

    debug!(explored, "Lowest-cost search found no path");
    Ok(Explored::not_found(explored))
}
