//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::airports::GeoPoint;
use crate::dataset::Dataset;
use crate::domain::{Criterion, FlightEdge, Itinerary};

/// Route query.
///
/// Every field is optional at the parsing stage so that a missing field can
/// be reported with its own message rather than as a JSON error.
#[derive(Debug, Default, Deserialize)]
pub struct ShortestPathRequest {
    /// City name or airport code
    pub source: Option<String>,

    /// City name or airport code
    pub destination: Option<String>,

    /// One of `minimum_stops`, `minimum_cost`, `minimum_time`
    pub filter: Option<String>,
}

/// A flight in a route response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightLeg {
    pub from: String,
    pub to: String,
    pub from_city: String,
    pub to_city: String,

    /// Full airport names, `Unknown Airport` when missing
    pub from_airport: String,
    pub to_airport: String,

    /// `[latitude, longitude]`, or null when the airport has no coordinates
    pub from_coords: Option<[f64; 2]>,
    pub to_coords: Option<[f64; 2]>,

    /// RFC 3339, in the offset the flight was ingested with
    pub departure: String,
    pub arrival: String,

    /// Flight number
    pub flight: String,
    pub cost: f64,
}

impl FlightLeg {
    pub fn from_edge(edge: &FlightEdge, dataset: &Dataset) -> Self {
        let directory = &dataset.directory;
        let coords = |point: Option<GeoPoint>| point.map(|p| [p.latitude, p.longitude]);
        Self {
            from: edge.from().to_string(),
            to: edge.to().to_string(),
            from_city: directory.display_name(edge.from()).to_string(),
            to_city: directory.display_name(edge.to()).to_string(),
            from_airport: directory.airport_name(edge.from()).to_string(),
            to_airport: directory.airport_name(edge.to()).to_string(),
            from_coords: coords(dataset.geo.coordinates(edge.from())),
            to_coords: coords(dataset.geo.coordinates(edge.to())),
            departure: edge.departure().to_rfc3339(),
            arrival: edge.arrival().to_rfc3339(),
            flight: edge.flight_number().to_string(),
            cost: edge.cost(),
        }
    }
}

/// Route response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathResponse {
    /// Airport codes, origin first
    pub path: Vec<String>,

    pub duration_minutes: f64,

    pub flights: Vec<FlightLeg>,

    /// Number of flights; fewest-stops queries only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stops: Option<usize>,

    /// Sum of fares; lowest-cost and earliest-arrival queries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

impl ShortestPathResponse {
    pub fn from_itinerary(itinerary: &Itinerary, dataset: &Dataset) -> Self {
        let (stops, total_cost) = match itinerary.criterion() {
            Criterion::FewestStops => (Some(itinerary.stops()), None),
            Criterion::LowestCost | Criterion::EarliestArrival => {
                (None, Some(itinerary.total_cost()))
            }
        };

        Self {
            path: itinerary.path().iter().map(|a| a.to_string()).collect(),
            duration_minutes: itinerary.duration_minutes(),
            flights: itinerary
                .legs()
                .iter()
                .map(|leg| FlightLeg::from_edge(leg, dataset))
                .collect(),
            stops,
            total_cost,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
