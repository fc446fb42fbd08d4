//! Airport coordinates.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::domain::AirportCode;

use super::error::AirportDataError;

/// A position on the Earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point, or `None` if it is off the globe.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        valid.then_some(Self {
            latitude,
            longitude,
        })
    }

    /// The point used for airports with no known position.
    pub const ORIGIN: GeoPoint = GeoPoint {
        latitude: 0.0,
        longitude: 0.0,
    };
}

/// Coordinate CSV row: `iata,latitude,longitude`.
#[derive(Debug, Deserialize)]
struct CoordinateRow {
    iata: String,
    latitude: f64,
    longitude: f64,
}

/// Read airport coordinates from CSV.
///
/// Coordinates only guide the search heuristic, so rows with a bad code or
/// an impossible position are skipped with a warning rather than failing
/// the load. Later rows for the same code win.
pub fn read_coordinates<R: Read>(
    reader: R,
) -> Result<HashMap<AirportCode, GeoPoint>, AirportDataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut coords = HashMap::new();
    let mut skipped = 0usize;

    for result in rdr.deserialize() {
        let row: CoordinateRow = result?;
        let Ok(code) = AirportCode::parse_normalized(&row.iata) else {
            skipped += 1;
            continue;
        };
        let Some(point) = GeoPoint::new(row.latitude, row.longitude) else {
            skipped += 1;
            continue;
        };
        coords.insert(code, point);
    }

    if skipped > 0 {
        warn!(skipped, "Skipped coordinate rows with invalid code or position");
    }

    Ok(coords)
}

/// Read airport coordinates from a CSV file on disk.
pub fn read_coordinates_from_path(
    path: &Path,
) -> Result<HashMap<AirportCode, GeoPoint>, AirportDataError> {
    let file = std::fs::File::open(path).map_err(|e| AirportDataError::io(path, e))?;
    read_coordinates(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    #[test]
    fn reads_coordinates() {
        let csv = "\
iata,latitude,longitude
DEL,28.5665,77.1031
bom,19.0896,72.8656
";
        let coords = read_coordinates(csv.as_bytes()).unwrap();
        assert_eq!(coords.len(), 2);
        assert_eq!(
            coords.get(&code("DEL")),
            Some(&GeoPoint {
                latitude: 28.5665,
                longitude: 77.1031
            })
        );
        assert!(coords.contains_key(&code("BOM")));
    }

    #[test]
    fn skips_bad_rows() {
        let csv = "\
iata,latitude,longitude
,28.5,77.1
BLR,95.0,77.7
MAA,12.99,80.17
";
        let coords = read_coordinates(csv.as_bytes()).unwrap();
        assert_eq!(coords.len(), 1);
        assert!(coords.contains_key(&code("MAA")));
    }

    #[test]
    fn non_numeric_latitude_is_an_error() {
        let csv = "\
iata,latitude,longitude
DEL,north,77.1
";
        assert!(matches!(
            read_coordinates(csv.as_bytes()),
            Err(AirportDataError::Csv(_))
        ));
    }

    #[test]
    fn geo_point_bounds() {
        assert!(GeoPoint::new(0.0, 0.0).is_some());
        assert!(GeoPoint::new(-90.0, 180.0).is_some());
        assert!(GeoPoint::new(90.1, 0.0).is_none());
        assert!(GeoPoint::new(0.0, -180.5).is_none());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_none());
    }
}
