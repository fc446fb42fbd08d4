//! The flight catalog: every scheduled flight, indexed by origin airport.
//!
//! A catalog is built once from ingested rows and never mutated. Reloading
//! data means building a new catalog and swapping it in wholesale, so
//! searches can share one freely across threads.

mod error;
mod record;

use std::collections::HashMap;

use tracing::info;

use crate::domain::{AirportCode, FlightEdge, parse_instant};

pub use error::CatalogError;
pub use record::{FlightRecord, read_records, read_records_from_path};

/// Immutable adjacency structure over scheduled flights.
///
/// Outbound flights for each airport keep their ingestion order; the
/// searches rely on that order to break ties deterministically.
#[derive(Debug, Clone, Default)]
pub struct FlightCatalog {
    outbound: HashMap<AirportCode, Vec<FlightEdge>>,
    flight_count: usize,
}

impl FlightCatalog {
    /// Build a catalog from ingested rows.
    ///
    /// Airport codes are normalized to uppercase. The first malformed row
    /// fails the whole build.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MalformedRecord`] if a row has an invalid
    /// airport code, an unparseable timestamp, a non-positive duration, or a
    /// negative or non-finite cost.
    pub fn build<I>(records: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = FlightRecord>,
    {
        let mut outbound: HashMap<AirportCode, Vec<FlightEdge>> = HashMap::new();
        let mut flight_count = 0;

        for (idx, record) in records.into_iter().enumerate() {
            let edge = parse_record(&record).map_err(|reason| CatalogError::MalformedRecord {
                row: idx + 1,
                reason,
            })?;
            outbound.entry(edge.from().clone()).or_default().push(edge);
            flight_count += 1;
        }

        info!(
            flights = flight_count,
            airports = outbound.len(),
            "Built flight catalog"
        );

        Ok(Self {
            outbound,
            flight_count,
        })
    }

    /// Flights departing `airport`, in ingestion order.
    ///
    /// Unknown airports have no flights; that is not an error.
    pub fn outbound(&self, airport: &AirportCode) -> &[FlightEdge] {
        self.outbound
            .get(airport)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Flights from `from` to `to`, in ingestion order.
    pub fn flights_between<'a, 'b>(
        &'a self,
        from: &AirportCode,
        to: &'b AirportCode,
    ) -> impl Iterator<Item = &'a FlightEdge> + use<'a, 'b> {
        self.outbound(from).iter().filter(move |e| e.to() == to)
    }

    /// Airports with at least one departing flight, sorted.
    pub fn airports(&self) -> Vec<&AirportCode> {
        let mut airports: Vec<_> = self.outbound.keys().collect();
        airports.sort();
        airports
    }

    /// Total number of flights.
    pub fn len(&self) -> usize {
        self.flight_count
    }

    pub fn is_empty(&self) -> bool {
        self.flight_count == 0
    }
}

/// Validate one row into an edge, describing the first problem found.
fn parse_record(record: &FlightRecord) -> Result<FlightEdge, String> {
    let from = AirportCode::parse_normalized(&record.from)
        .map_err(|e| format!("origin {:?}: {e}", record.from))?;
    let to = AirportCode::parse_normalized(&record.to)
        .map_err(|e| format!("destination {:?}: {e}", record.to))?;
    let departure = parse_instant(&record.departure).map_err(|e| format!("departure: {e}"))?;
    let arrival = parse_instant(&record.arrival).map_err(|e| format!("arrival: {e}"))?;

    FlightEdge::new(
        from,
        to,
        departure,
        arrival,
        record.flight_number.trim().to_string(),
        record.cost,
    )
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn record(from: &str, to: &str, dep: &str, arr: &str, flight: &str, cost: f64) -> FlightRecord {
        FlightRecord::new(from, to, dep, arr, flight, cost)
    }

    fn sample() -> Vec<FlightRecord> {
        vec![
            record("DEL", "BOM", "2024-03-15T09:00Z", "2024-03-15T11:00Z", "AI1", 100.0),
            record("DEL", "BLR", "2024-03-15T10:00Z", "2024-03-15T12:45Z", "AI2", 120.0),
            record("BOM", "BLR", "2024-03-15T13:00Z", "2024-03-15T14:30Z", "AI3", 60.0),
            record("DEL", "BOM", "2024-03-16T09:00Z", "2024-03-16T11:00Z", "AI1", 90.0),
        ]
    }

    #[test]
    fn groups_by_origin_preserving_order() {
        let catalog = FlightCatalog::build(sample()).unwrap();

        assert_eq!(catalog.len(), 4);
        let from_del: Vec<_> = catalog
            .outbound(&code("DEL"))
            .iter()
            .map(|e| (e.to().as_str(), e.cost()))
            .collect();
        assert_eq!(from_del, vec![("BOM", 100.0), ("BLR", 120.0), ("BOM", 90.0)]);
    }

    #[test]
    fn unknown_airport_has_no_flights() {
        let catalog = FlightCatalog::build(sample()).unwrap();
        assert!(catalog.outbound(&code("XYZ")).is_empty());
        // BLR only ever appears as a destination
        assert!(catalog.outbound(&code("BLR")).is_empty());
    }

    #[test]
    fn same_flight_number_on_different_days_are_distinct_edges() {
        let catalog = FlightCatalog::build(sample()).unwrap();
        let del_bom: Vec<_> = catalog
            .flights_between(&code("DEL"), &code("BOM"))
            .collect();
        assert_eq!(del_bom.len(), 2);
        assert_eq!(del_bom[0].flight_number(), "AI1");
        assert_eq!(del_bom[1].flight_number(), "AI1");
        assert_ne!(del_bom[0].departure(), del_bom[1].departure());
    }

    #[test]
    fn airports_are_sorted() {
        let catalog = FlightCatalog::build(sample()).unwrap();
        let airports: Vec<_> = catalog.airports().iter().map(|a| a.as_str()).collect();
        assert_eq!(airports, vec!["BOM", "DEL"]);
    }

    #[test]
    fn codes_are_normalized() {
        let catalog = FlightCatalog::build(vec![record(
            " del",
            "bom ",
            "2024-03-15T09:00Z",
            "2024-03-15T11:00Z",
            " AI1 ",
            100.0,
        )])
        .unwrap();
        let edges = catalog.outbound(&code("DEL"));
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].to(), &code("BOM"));
        assert_eq!(edges[0].flight_number(), "AI1");
    }

    #[test]
    fn empty_catalog() {
        let catalog = FlightCatalog::build(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.airports().is_empty());
    }

    #[test]
    fn reject_non_positive_duration() {
        let mut rows = sample();
        rows.push(record(
            "BOM",
            "DEL",
            "2024-03-15T13:00Z",
            "2024-03-15T13:00Z",
            "BAD",
            10.0,
        ));

        match FlightCatalog::build(rows) {
            Err(CatalogError::MalformedRecord { row, reason }) => {
                assert_eq!(row, 5);
                assert_eq!(reason, "arrival must be after departure");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn reject_unparseable_timestamp() {
        let rows = vec![record("DEL", "BOM", "yesterday", "2024-03-15T11:00Z", "AI1", 1.0)];
        match FlightCatalog::build(rows) {
            Err(CatalogError::MalformedRecord { row, reason }) => {
                assert_eq!(row, 1);
                assert!(reason.starts_with("departure:"));
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn reject_missing_airport_code() {
        let rows = vec![record("", "BOM", "2024-03-15T09:00Z", "2024-03-15T11:00Z", "AI1", 1.0)];
        assert!(matches!(
            FlightCatalog::build(rows),
            Err(CatalogError::MalformedRecord { row: 1, .. })
        ));
    }

    #[test]
    fn reject_negative_cost() {
        let rows = vec![record(
            "DEL",
            "BOM",
            "2024-03-15T09:00Z",
            "2024-03-15T11:00Z",
            "AI1",
            -1.0,
        )];
        assert!(matches!(
            FlightCatalog::build(rows),
            Err(CatalogError::MalformedRecord { row: 1, .. })
        ));
    }

    #[test]
    fn build_from_csv() {
        let csv = "\
FromAirport,To,DepartureTime,ArrivalTime,Flight,Cost
DEL,BOM,2024-03-15T09:00:00Z,2024-03-15T11:00:00Z,AI101,4500
";
        let catalog = FlightCatalog::build(read_records(csv.as_bytes()).unwrap()).unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
