//! Framework-mediated benchmark server
//!
//! The same contract as the raw-socket variant, with routing, response
//! framing, and content-length computation delegated to axum. Meant to be
//! driven by an external load generator and compared against the raw
//! variant.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
