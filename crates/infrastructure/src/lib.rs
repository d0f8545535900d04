//! Infrastructure layer - shared plumbing for both server variants
//!
//! Holds the forecast generation service (the only component with a source
//! of randomness) and the benchmark configuration both binaries share.

pub mod config;
pub mod forecast;

pub use config::BenchConfig;
pub use forecast::{generate, generate_forecast};
