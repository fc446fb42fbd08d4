//! City name ↔ airport code lookup.

use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::domain::AirportCode;

use super::error::AirportDataError;

/// Display name used when an airport has no known city.
pub const UNKNOWN_CITY: &str = "Unknown";

/// Display name used when an airport has no known name.
pub const UNKNOWN_AIRPORT: &str = "Unknown Airport";

/// Directory CSV row: `City,IATA[,Airport Name]`.
#[derive(Debug, Deserialize)]
struct DirectoryRow {
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "IATA")]
    iata: String,
    #[serde(rename = "Airport Name", default)]
    airport_name: Option<String>,
}

/// Resolves user input (a city name or an airport code) to an airport code,
/// and airport codes back to city names for display.
#[derive(Debug, Clone, Default)]
pub struct AirportDirectory {
    /// Lowercased city name → code
    by_city: HashMap<String, AirportCode>,
    /// Code → city name as written in the source data
    by_code: HashMap<AirportCode, String>,
    /// Code → airport name, where the data has one
    names: HashMap<AirportCode, String>,
}

impl AirportDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a city and its airport.
    pub fn add(&mut self, city: &str, code: AirportCode) {
        let city = city.trim();
        self.by_city.insert(city.to_lowercase(), code.clone());
        self.by_code.insert(code, city.to_string());
    }

    /// Record the full name of an airport. Blank names are ignored.
    pub fn set_airport_name(&mut self, code: AirportCode, name: &str) {
        let name = name.trim();
        if !name.is_empty() {
            self.names.insert(code, name.to_string());
        }
    }

    /// Read a directory from `City,IATA` CSV, with an optional
    /// `Airport Name` column.
    ///
    /// Rows whose code is not a valid airport code are skipped.
    pub fn read<R: Read>(reader: R) -> Result<Self, AirportDataError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut directory = Self::new();
        for result in rdr.deserialize() {
            let row: DirectoryRow = result?;
            if row.city.is_empty() {
                continue;
            }
            if let Ok(code) = AirportCode::parse_normalized(&row.iata) {
                if let Some(name) = &row.airport_name {
                    directory.set_airport_name(code.clone(), name);
                }
                directory.add(&row.city, code);
            }
        }
        Ok(directory)
    }

    /// Read a directory from a CSV file on disk.
    pub fn read_from_path(path: &Path) -> Result<Self, AirportDataError> {
        let file = std::fs::File::open(path).map_err(|e| AirportDataError::io(path, e))?;
        Self::read(file)
    }

    /// Resolve user input to an airport code.
    ///
    /// A known airport code (any case) wins; otherwise the input is looked
    /// up as a city name, case-insensitively. Blank input resolves to
    /// nothing.
    pub fn resolve(&self, input: &str) -> Option<AirportCode> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Ok(code) = AirportCode::parse_normalized(input) {
            if self.by_code.contains_key(&code) {
                return Some(code);
            }
        }

        self.by_city.get(&input.to_lowercase()).cloned()
    }

    /// City name for an airport, if known.
    pub fn city_name(&self, code: &AirportCode) -> Option<&str> {
        self.by_code.get(code).map(String::as_str)
    }

    /// City name for an airport, or [`UNKNOWN_CITY`].
    pub fn display_name(&self, code: &AirportCode) -> &str {
        self.city_name(code).unwrap_or(UNKNOWN_CITY)
    }

    /// Full airport name, or [`UNKNOWN_AIRPORT`].
    pub fn airport_name(&self, code: &AirportCode) -> &str {
        self.names
            .get(code)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_AIRPORT)
    }

    /// Lowercased city → code, sorted by city.
    pub fn mapping(&self) -> BTreeMap<&str, &AirportCode> {
        self.by_city
            .iter()
            .map(|(city, code)| (city.as_str(), code))
            .collect()
    }

    /// Number of airports in the directory.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
