//! Search configuration for the route planner.

use chrono::Duration;

/// Configuration parameters for route search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Minimum time required between an arrival and the next departure
    /// (minutes). Tighter connections are rejected by the earliest-arrival
    /// search.
    pub min_connection_mins: i64,

    /// Assumed maximum cruise speed for the distance heuristic (km/h).
    pub max_cruise_speed_kmh: f64,

    /// Whether the earliest-arrival search is guided by great-circle
    /// distance. Without it the search degrades to plain Dijkstra.
    pub use_heuristic: bool,

    /// Granularity of the earliest-arrival search's visited map.
    ///
    /// `None` tracks the best elapsed time per airport only, which can prune
    /// a later arrival that would have made a connection an earlier one
    /// missed. `Some(n)` tracks (airport, last arrival rounded down to `n`
    /// minutes) instead, keeping such states alive.
    pub arrival_bucket_mins: Option<i64>,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        min_connection_mins: i64,
        max_cruise_speed_kmh: f64,
        use_heuristic: bool,
        arrival_bucket_mins: Option<i64>,
    ) -> Self {
        Self {
            min_connection_mins,
            max_cruise_speed_kmh,
            use_heuristic,
            arrival_bucket_mins,
        }
    }

    /// Returns the minimum connection time as a Duration.
    pub fn min_connection(&self) -> Duration {
        Duration::minutes(self.min_connection_mins)
    }

    /// Returns the arrival bucket size as a Duration, if bucketing is on.
    pub fn arrival_bucket(&self) -> Option<Duration> {
        self.arrival_bucket_mins
            .filter(|mins| *mins > 0)
            .map(Duration::minutes)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_connection_mins: 90,
            max_cruise_speed_kmh: 900.0,
            use_heuristic: true,
            arrival_bucket_mins: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.min_connection_mins, 90);
        assert_eq!(config.max_cruise_speed_kmh, 900.0);
        assert!(config.use_heuristic);
        assert_eq!(config.arrival_bucket_mins, None);
    }

    #[test]
    fn duration_methods() {
        let config = SearchConfig::default();

        assert_eq!(config.min_connection(), Duration::minutes(90));
        assert_eq!(config.arrival_bucket(), None);
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(45, 800.0, false, Some(30));

        assert_eq!(config.min_connection_mins, 45);
        assert_eq!(config.max_cruise_speed_kmh, 800.0);
        assert!(!config.use_heuristic);
        assert_eq!(config.arrival_bucket(), Some(Duration::minutes(30)));
    }

    #[test]
    fn non_positive_bucket_disables_bucketing() {
        let config = SearchConfig::new(90, 900.0, true, Some(0));
        assert_eq!(config.arrival_bucket(), None);
    }
}
