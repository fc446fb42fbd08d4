//! Web layer for the flight route planner.
//!
//! Provides HTTP endpoints for resolving airports and finding routes.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
