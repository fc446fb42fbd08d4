//! Itinerary types.
//!
//! An `Itinerary` is the answer to a route query: the airports visited, the
//! concrete flights taken between them, and the totals reported to the user.
//! It is built fresh for each query and never mutated afterwards.

use chrono::Duration;

use super::{AirportCode, Criterion, FlightEdge, ItineraryError, as_minutes};

/// A complete route from origin to destination.
///
/// # Invariants
///
/// - `path` has at least one airport
/// - `legs.len() == path.len() - 1`
/// - leg `i` flies from `path[i]` to `path[i + 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    criterion: Criterion,
    path: Vec<AirportCode>,
    legs: Vec<FlightEdge>,
    total_duration: Duration,
    total_cost: f64,
}

impl Itinerary {
    /// Constructs an itinerary, checking that legs and path agree.
    ///
    /// The totals are supplied by the caller because their meaning depends
    /// on the criterion: the earliest-arrival search counts layovers in the
    /// duration, the schedule-agnostic searches count flight time only.
    pub fn new(
        criterion: Criterion,
        path: Vec<AirportCode>,
        legs: Vec<FlightEdge>,
        total_duration: Duration,
        total_cost: f64,
    ) -> Result<Self, ItineraryError> {
        if path.is_empty() {
            return Err(ItineraryError::EmptyPath);
        }

        let hops = path.len() - 1;
        if legs.len() != hops {
            return Err(ItineraryError::LegCountMismatch {
                hops,
                legs: legs.len(),
            });
        }

        for (index, (leg, pair)) in legs.iter().zip(path.windows(2)).enumerate() {
            if !leg.connects(&pair[0], &pair[1]) {
                return Err(ItineraryError::LegMismatch {
                    index,
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                });
            }
        }

        Ok(Self {
            criterion,
            path,
            legs,
            total_duration,
            total_cost,
        })
    }

    /// The degenerate itinerary for a query whose origin is its destination.
    pub fn trivial(criterion: Criterion, airport: AirportCode) -> Self {
        Self {
            criterion,
            path: vec![airport],
            legs: Vec::new(),
            total_duration: Duration::zero(),
            total_cost: 0.0,
        }
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    /// Airports visited, origin first.
    pub fn path(&self) -> &[AirportCode] {
        &self.path
    }

    /// Flights taken, in order.
    pub fn legs(&self) -> &[FlightEdge] {
        &self.legs
    }

    pub fn origin(&self) -> &AirportCode {
        &self.path[0]
    }

    pub fn destination(&self) -> &AirportCode {
        &self.path[self.path.len() - 1]
    }

    /// Number of connections (hops).
    pub fn stops(&self) -> usize {
        self.path.len() - 1
    }

    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    /// Total duration in fractional minutes.
    pub fn duration_minutes(&self) -> f64 {
        as_minutes(self.total_duration)
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }
}
