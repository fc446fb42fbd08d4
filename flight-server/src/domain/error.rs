//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from ingestion and API errors, which wrap them with context.

use super::AirportCode;

/// Reasons a flight cannot be represented as a graph edge.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FlightError {
    /// Arrival is not strictly after departure
    #[error("arrival must be after departure")]
    NonPositiveDuration,

    /// Fare is negative, NaN or infinite
    #[error("cost must be a non-negative number, got {0}")]
    InvalidCost(f64),
}

/// Reasons a set of legs does not form a valid itinerary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItineraryError {
    /// Itinerary has no airports
    #[error("itinerary path must contain at least one airport")]
    EmptyPath,

    /// Path and legs disagree on the number of hops
    #[error("path has {hops} hops but {legs} legs were given")]
    LegCountMismatch { hops: usize, legs: usize },

    /// A leg does not fly between the airports the path says it does
    #[error("leg {index} does not connect {from} to {to}")]
    LegMismatch {
        index: usize,
        from: AirportCode,
        to: AirportCode,
    },
}
