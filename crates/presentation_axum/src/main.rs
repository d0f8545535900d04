//! weatherbench axum server
//!
//! Binds the fixed benchmark address and serves `GET /weatherforecast`
//! through the framework's routing and response machinery.

use infrastructure::BenchConfig;
use presentation_axum::{create_router, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "presentation_axum=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = BenchConfig::default();
    let addr = config.bind_addr();
    let state = AppState::new(config);

    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Bind failure is fatal; everything after is the framework's concern.
    let listener = TcpListener::bind(&addr).await?;

    info!("axum server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutdown complete");

    Ok(())
}

/// Wait for Ctrl+C and let axum drain connections
async fn shutdown_signal() {
    if let Err(error) = signal::ctrl_c().await {
        tracing::error!(%error, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, initiating graceful shutdown...");
}
