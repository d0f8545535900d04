//! Benchmark configuration.
//!
//! Both server variants read the same defaults so they answer the same
//! contract on the same port with the same record count. There is no
//! external configuration surface: no environment variables, no CLI flags,
//! no config file. The struct is serde-deserializable so tests can override
//! individual fields (notably the read timeout).

use serde::{Deserialize, Serialize};

/// Shared benchmark server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of forecast records per response
    #[serde(default = "default_forecast_count")]
    pub forecast_count: usize,

    /// Per-connection read timeout in seconds (raw-socket variant only)
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    7055
}

const fn default_forecast_count() -> usize {
    50
}

const fn default_read_timeout_secs() -> u64 {
    5
}

impl BenchConfig {
    /// Socket address string to bind the listener to
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Per-connection read timeout
    #[must_use]
    pub const fn read_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.read_timeout_secs)
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            forecast_count: default_forecast_count(),
            read_timeout_secs: default_read_timeout_secs(),
        }
    }
}
