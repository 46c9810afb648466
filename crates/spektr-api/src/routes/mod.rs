//! Route definitions
//!
//! One data route at the root plus health probes.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{actions, health};
use crate::state::AppState;

/// Create the main router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", post(actions::handle_action))
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
