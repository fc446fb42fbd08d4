//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::dataset::DataPaths;
use crate::planner::SearchConfig;

/// Error reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid value {value:?} for {name}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub data: DataPaths,
    pub bind_addr: SocketAddr,

    /// How often to reload the data files. `None` loads once at startup.
    pub reload_interval: Option<Duration>,

    /// Deadline for a single route search.
    pub search_timeout: Duration,

    pub search: SearchConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data: DataPaths::default(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            reload_interval: None,
            search_timeout: Duration::from_millis(2000),
            search: SearchConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if it is set.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `FLIGHTS_CSV` | `data/all_flights.csv` |
    /// | `COORDINATES_CSV` | `data/airport_coordinates.csv` |
    /// | `AIRPORTS_CSV` | `data/airports.csv` |
    /// | `BIND_ADDR` | `127.0.0.1:3000` |
    /// | `RELOAD_INTERVAL_SECS` | unset (no reload) |
    /// | `SEARCH_TIMEOUT_MS` | `2000` |
    /// | `MIN_CONNECTION_MINS` | `90` |
    /// | `ARRIVAL_BUCKET_MINS` | unset (airport-only visited map) |
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let data = DataPaths {
            flights: var("FLIGHTS_CSV")
                .map(PathBuf::from)
                .unwrap_or(defaults.data.flights),
            coordinates: var("COORDINATES_CSV")
                .map(PathBuf::from)
                .unwrap_or(defaults.data.coordinates),
            airports: var("AIRPORTS_CSV")
                .map(PathBuf::from)
                .unwrap_or(defaults.data.airports),
        };

        let bind_addr = parse_var(&var, "BIND_ADDR")?.unwrap_or(defaults.bind_addr);

        let reload_interval = parse_var::<u64>(&var, "RELOAD_INTERVAL_SECS")?
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let search_timeout = parse_var::<u64>(&var, "SEARCH_TIMEOUT_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.search_timeout);

        let min_connection_mins = parse_var::<i64>(&var, "MIN_CONNECTION_MINS")?
            .unwrap_or(defaults.search.min_connection_mins);
        if min_connection_mins < 0 {
            return Err(ConfigError::Invalid {
                name: "MIN_CONNECTION_MINS",
                value: min_connection_mins.to_string(),
                reason: "must not be negative".to_string(),
            });
        }

        let arrival_bucket_mins = parse_var::<i64>(&var, "ARRIVAL_BUCKET_MINS")?;

        Ok(Self {
            data,
            bind_addr,
            reload_interval,
            search_timeout,
            search: SearchConfig {
                min_connection_mins,
                arrival_bucket_mins,
                ..defaults.search
            },
        })
    }
}

/// Parse an optional variable, failing if it is set but malformed.
fn parse_var<T>(
    var: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    var(name)
        .map(|value| {
            value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                name,
                reason: e.to_string(),
                value,
            })
        })
        .transpose()
}
