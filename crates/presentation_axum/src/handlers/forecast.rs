//! Forecast handlers

use axum::{Json, extract::State};
use domain::ForecastRecord;
use infrastructure::generate;

use crate::{error::ApiError, state::AppState};

/// Generate and return the configured number of forecast records
///
/// Status line, headers, and content-length are axum's concern.
pub async fn weatherforecast(State(state): State<AppState>) -> Json<Vec<ForecastRecord>> {
    Json(generate(state.config.forecast_count))
}

/// Fallback for every unmatched path
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
