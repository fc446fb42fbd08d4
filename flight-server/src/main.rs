use flight_server::config::ServerConfig;
use flight_server::dataset::Dataset;
use flight_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    // Load flight data (fail fast on any malformed row)
    info!(
        flights = %config.data.flights.display(),
        coordinates = %config.data.coordinates.display(),
        airports = %config.data.airports.display(),
        "Loading flight data"
    );
    let dataset = Dataset::load(&config.data, &config.search).expect("Failed to load flight data");

    // Build app state
    let state = AppState::new(
        dataset,
        config.data.clone(),
        config.search.clone(),
        config.search_timeout,
    );

    // Spawn background task to reload data periodically
    if let Some(period) = config.reload_interval {
        let reload_state = state.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                match reload_state.reload().await {
                    Ok(count) => info!(flights = count, "Reloaded flight data"),
                    Err(e) => warn!(error = %e, "Failed to reload flight data, keeping previous"),
                }
            }
        });
    }

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = config.bind_addr;
    info!("Flight Route Planner listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health          - Health check");
    info!("  GET  /airport-mapping - City to airport code mapping");
    info!("  POST /shortest-path   - Find a route");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
