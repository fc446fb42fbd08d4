//! Raw flight rows as ingested from CSV.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::error::CatalogError;

/// One ingested flight row, before validation.
///
/// Field names follow the flights dataset header:
/// `FromAirport,To,DepartureTime,ArrivalTime,Flight,Cost`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlightRecord {
    #[serde(rename = "FromAirport")]
    pub from: String,

    #[serde(rename = "To")]
    pub to: String,

    /// ISO-8601 instant
    #[serde(rename = "DepartureTime")]
    pub departure: String,

    /// ISO-8601 instant
    #[serde(rename = "ArrivalTime")]
    pub arrival: String,

    #[serde(rename = "Flight")]
    pub flight_number: String,

    #[serde(rename = "Cost")]
    pub cost: f64,
}

impl FlightRecord {
    /// Convenience constructor, mostly for tests and fixtures.
    pub fn new(
        from: &str,
        to: &str,
        departure: &str,
        arrival: &str,
        flight_number: &str,
        cost: f64,
    ) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            departure: departure.to_string(),
            arrival: arrival.to_string(),
            flight_number: flight_number.to_string(),
            cost,
        }
    }
}

/// Read flight records from CSV, preserving row order.
///
/// Extra columns are ignored. A missing column or a non-numeric cost fails
/// the whole read.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<FlightRecord>, CatalogError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: FlightRecord = result?;
        records.push(record);
    }
    Ok(records)
}

/// Read flight records from a CSV file on disk.
pub fn read_records_from_path(path: &Path) -> Result<Vec<FlightRecord>, CatalogError> {
    let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_records(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CSV: &str = "\
FromAirport,To,DepartureTime,ArrivalTime,Flight,Cost
DEL,BOM,2024-03-15T09:00:00Z,2024-03-15T11:00:00Z,AI101,4500
BOM, BLR ,2024-03-15T13:00:00Z,2024-03-15T14:30:00Z,6E202,3200.50
";

    #[test]
    fn reads_rows_in_order() {
        let records = read_records(CSV.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            FlightRecord::new(
                "DEL",
                "BOM",
                "2024-03-15T09:00:00Z",
                "2024-03-15T11:00:00Z",
                "AI101",
                4500.0
            )
        );
        assert_eq!(records[1].to, "BLR");
        assert_eq!(records[1].cost, 3200.5);
    }

    #[test]
    fn ignores_extra_columns() {
        let csv = "\
Airline,FromAirport,To,DepartureTime,ArrivalTime,Flight,Cost
Air India,DEL,BOM,2024-03-15T09:00:00Z,2024-03-15T11:00:00Z,AI101,4500
";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].flight_number, "AI101");
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "\
FromAirport,To,DepartureTime,ArrivalTime,Flight
DEL,BOM,2024-03-15T09:00:00Z,2024-03-15T11:00:00Z,AI101
";
        assert!(matches!(
            read_records(csv.as_bytes()),
            Err(CatalogError::Csv(_))
        ));
    }

    #[test]
    fn non_numeric_cost_is_an_error() {
        let csv = "\
FromAirport,To,DepartureTime,ArrivalTime,Flight,Cost
DEL,BOM,2024-03-15T09:00:00Z,2024-03-15T11:00:00Z,AI101,cheap
";
        assert!(matches!(
            read_records(csv.as_bytes()),
            Err(CatalogError::Csv(_))
        ));
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flights.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(CSV.as_bytes()).unwrap();

        let records = read_records_from_path(&path).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_records_from_path(&dir.path().join("nope.csv"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
