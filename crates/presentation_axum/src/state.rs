//! Application state shared across handlers

use std::sync::Arc;

use infrastructure::BenchConfig;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Benchmark configuration
    pub config: Arc<BenchConfig>,
}

impl AppState {
    /// Create state from a configuration
    #[must_use]
    pub fn new(config: BenchConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
