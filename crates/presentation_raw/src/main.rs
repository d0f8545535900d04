//! weatherbench raw-socket server
//!
//! Binds the fixed benchmark address and serves `GET /weatherforecast` with
//! hand-framed HTTP responses.

use infrastructure::BenchConfig;
use presentation_raw::serve;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "presentation_raw=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = BenchConfig::default();

    // Bind failure is fatal; accept failures later are not.
    let listener = TcpListener::bind(config.bind_addr()).await?;

    info!(
        records = config.forecast_count,
        "raw TCP server listening on http://{}",
        config.bind_addr()
    );

    serve(listener, config).await;

    Ok(())
}
