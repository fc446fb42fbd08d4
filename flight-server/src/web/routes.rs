//! HTTP route handlers.

use std::collections::BTreeMap;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::domain::Criterion;
use crate::planner::{CancelFlag, Planner, SearchError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/airport-mapping", get(airport_mapping))
        .route("/shortest-path", post(shortest_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let dataset = state.dataset().await;
    let cities = dataset
        .directory
        .mapping()
        .into_iter()
        .map(|(city, code)| CityView {
            city: city.to_string(),
            code: code.to_string(),
        })
        .collect();

    Html(
        IndexTemplate::new(cities)
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// City name to airport code, sorted by city.
async fn airport_mapping(State(state): State<AppState>) -> Json<BTreeMap<String, String>> {
    let dataset = state.dataset().await;
    let mapping = dataset
        .directory
        .mapping()
        .into_iter()
        .map(|(city, code)| (city.to_string(), code.to_string()))
        .collect();
    Json(mapping)
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Find the best route between two cities or airports.
async fn shortest_path(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so a bad body gets our own message
    let req: ShortestPathRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Rejected route request body");
        AppError::bad_request("Invalid or missing JSON data")
    })?;

    let (Some(source), Some(destination)) = (
        req.source.filter(|s| !s.trim().is_empty()),
        req.destination.filter(|s| !s.trim().is_empty()),
    ) else {
        return Err(AppError::bad_request("Missing source or destination"));
    };

    let dataset = state.dataset().await;

    let (Some(source), Some(destination)) = (
        dataset.directory.resolve(&source),
        dataset.directory.resolve(&destination),
    ) else {
        return Err(AppError::bad_request(
            "Invalid city name or IATA code provided",
        ));
    };

    let criterion = req
        .filter
        .as_deref()
        .and_then(Criterion::parse)
        .ok_or_else(|| AppError::bad_request("Invalid filter option"))?;

    // The search is CPU-bound; run it off the async workers with a deadline
    let cancel = CancelFlag::new();
    let search = tokio::task::spawn_blocking({
        let dataset = dataset.clone();
        let config = state.config.clone();
        let cancel = cancel.clone();
        move || {
            Planner::new(&dataset.catalog, &dataset.geo, &config).route(
                &source,
                &destination,
                criterion,
                &cancel,
            )
        }
    });

    let result = match tokio::time::timeout(state.search_timeout, search).await {
        Ok(joined) => joined.map_err(|e| AppError::Internal {
            message: format!("Search task failed: {e}"),
        })??,
        Err(_) => {
            cancel.cancel();
            warn!(
                timeout_ms = state.search_timeout.as_millis() as u64,
                %criterion,
                "Route search timed out"
            );
            return Err(AppError::GatewayTimeout {
                message: "Search timed out".to_string(),
            });
        }
    };

    let itinerary = result.itinerary.ok_or_else(|| AppError::NotFound {
        message: "No path found".to_string(),
    })?;

    debug!(
        states = result.states_explored,
        stops = itinerary.stops(),
        "Route search finished"
    );

    let response = ShortestPathResponse::from_itinerary(&itinerary, &dataset);

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = ItineraryTemplate {
            itinerary: ItineraryView::from_response(&response),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(response).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    GatewayTimeout { message: String },
    Internal { message: String },
}

impl AppError {
    fn bad_request(message: &str) -> Self {
        AppError::BadRequest {
            message: message.to_string(),
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::Cancelled => AppError::GatewayTimeout {
                message: "Search timed out".to_string(),
            },
            SearchError::Disconnected { .. } | SearchError::Inconsistent(_) => {
                error!(error = %e, "Route search produced an inconsistent result");
                AppError::Internal {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::GatewayTimeout { message } => (StatusCode::GATEWAY_TIMEOUT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            warn!(%status, %message, "Request failed");
        } else {
            debug!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
