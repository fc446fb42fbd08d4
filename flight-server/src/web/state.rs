//! Application state for the web layer.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::info;

use crate::dataset::{DataPaths, Dataset, LoadError};
use crate::planner::SearchConfig;

/// Shared application state.
///
/// Handlers clone the current [`Dataset`] snapshot out of the lock and
/// search against it without holding the lock. A reload builds a new
/// snapshot and swaps it in; searches already running finish against the
/// old one.
#[derive(Clone)]
pub struct AppState {
    dataset: Arc<RwLock<Arc<Dataset>>>,

    /// Where to reload data from
    pub paths: Arc<DataPaths>,

    /// Route search configuration
    pub config: Arc<SearchConfig>,

    /// Deadline for a single route search
    pub search_timeout: Duration,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        dataset: Dataset,
        paths: DataPaths,
        config: SearchConfig,
        search_timeout: Duration,
    ) -> Self {
        Self {
            dataset: Arc::new(RwLock::new(Arc::new(dataset))),
            paths: Arc::new(paths),
            config: Arc::new(config),
            search_timeout,
        }
    }

    /// The current data snapshot.
    pub async fn dataset(&self) -> Arc<Dataset> {
        self.dataset.read().await.clone()
    }

    /// Replace the data snapshot wholesale.
    pub async fn replace(&self, dataset: Dataset) {
        *self.dataset.write().await = Arc::new(dataset);
    }

    /// Reload all data files and swap the result in.
    ///
    /// On failure the current snapshot is kept. Returns the number of flights
    /// in the new catalog.
    pub async fn reload(&self) -> Result<usize, LoadError> {
        let paths = self.paths.clone();
        let config = self.config.clone();
        let dataset =
            tokio::task::spawn_blocking(move || Dataset::load(&paths, &config)).await??;

        let flights = dataset.catalog.len();
        self.replace(dataset).await;
        info!(flights, "Swapped in reloaded dataset");
        Ok(flights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FlightCatalog, FlightRecord};
    use crate::planner::GeoHeuristic;
    use crate::airports::AirportDirectory;

    fn one_flight() -> Dataset {
        let catalog = FlightCatalog::build(vec![FlightRecord::new(
            "DEL",
            "BOM",
            "2024-03-15T09:00:00Z",
            "2024-03-15T11:00:00Z",
            "AI1",
            100.0,
        )])
        .unwrap();
        Dataset::new(catalog, GeoHeuristic::empty(), AirportDirectory::new())
    }

    fn state(dataset: Dataset, paths: DataPaths) -> AppState {
        AppState::new(dataset, paths, SearchConfig::default(), Duration::from_secs(1))
    }

    #[tokio::test]
    async fn replace_swaps_snapshot() {
        let state = state(Dataset::default(), DataPaths::default());
        let before = state.dataset().await;
        assert!(before.catalog.is_empty());

        state.replace(one_flight()).await;

        assert_eq!(state.dataset().await.catalog.len(), 1);
        // Snapshots taken earlier are unaffected
        assert!(before.catalog.is_empty());
    }

    #[tokio::test]
    async fn failed_reload_keeps_current_snapshot() {
        let paths = DataPaths {
            flights: "/nonexistent/flights.csv".into(),
            ..DataPaths::default()
        };
        let state = state(one_flight(), paths);

        assert!(state.reload().await.is_err());
        assert_eq!(state.dataset().await.catalog.len(), 1);
    }
}
