//! Accept loop
//!
//! One listener, one spawned task per accepted connection. Workers share
//! nothing and never communicate back; the socket is closed when the task
//! finishes, success or not.

use std::sync::Arc;

use infrastructure::BenchConfig;
use tokio::net::TcpListener;
use tracing::{debug, warn};

use crate::connection::handle_connection;

/// Accept connections forever on an already-bound listener
///
/// Accept failures are logged and skipped; they never take the loop down.
/// Taking the listener as a parameter lets tests bind an ephemeral port
/// first.
pub async fn serve(listener: TcpListener, config: BenchConfig) {
    let config = Arc::new(config);

    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                let config = Arc::clone(&config);
                tokio::spawn(async move {
                    if let Err(error) = handle_connection(stream, &config).await {
                        debug!(%peer, %error, "connection dropped without a response");
                    }
                });
            },
            Err(error) => {
                warn!(%error, "failed to accept connection");
            },
        }
    }
}
