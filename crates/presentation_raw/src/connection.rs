//! Per-connection request handling
//!
//! Reads one newline-terminated request line, matches the route, and writes
//! a hand-framed response. Any failure before the response starts aborts the
//! connection silently; the caller closes the socket on every exit path by
//! dropping it.

use infrastructure::{BenchConfig, generate};
use thiserror::Error;
use tokio::{
    io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader},
    time::timeout,
};

/// Fixed body for unmatched routes
pub const NOT_FOUND_BODY: &[u8] = br#"{"error":"Not found"}"#;

/// Reasons a connection is dropped without a response
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("request line read failed: {0}")]
    Read(#[from] std::io::Error),

    #[error("request line read timed out")]
    Timeout,

    #[error("connection closed before a full request line arrived")]
    Disconnected,

    #[error("request line does not start with GET")]
    NotGet,

    #[error("response body serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Frame a complete HTTP/1.1 response
///
/// The declared `Content-Length` is exactly the body's byte length; the
/// connection is always advertised as closing.
#[must_use]
pub fn frame_response(status: &str, body: &[u8]) -> Vec<u8> {
    let header = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let mut response = Vec::with_capacity(header.len() + body.len());
    response.extend_from_slice(header.as_bytes());
    response.extend_from_slice(body);
    response
}

/// Handle one connection: read the request line, write one response
///
/// Returns an error when the connection is dropped without a response; the
/// caller logs it at debug level and moves on.
pub async fn handle_connection<S>(mut stream: S, config: &BenchConfig) -> Result<(), ConnectionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut line = String::new();
    {
        let mut reader = BufReader::new(&mut stream);
        let read = timeout(config.read_timeout(), reader.read_line(&mut line))
            .await
            .map_err(|_| ConnectionError::Timeout)??;
        if read == 0 || !line.ends_with('\n') {
            return Err(ConnectionError::Disconnected);
        }
    }

    if !line.starts_with("GET ") {
        return Err(ConnectionError::NotGet);
    }

    let response = if line.contains("/weatherforecast") {
        let body = serde_json::to_vec(&generate(config.forecast_count))?;
        frame_response("200 OK", &body)
    } else {
        frame_response("404 Not Found", NOT_FOUND_BODY)
    };

    stream.write_all(&response).await?;
    stream.flush().await?;
    Ok(())
}
