//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the router: one route, one fallback
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/weatherforecast", get(handlers::forecast::weatherforecast))
        .fallback(handlers::forecast::not_found)
        .with_state(state)
}
