//! Raw-socket benchmark server
//!
//! Hand-rolled TCP accept loop and manual HTTP/1.1 response framing. This is
//! an intentionally incomplete HTTP implementation: one request line is read,
//! everything after it is ignored, and the connection is closed after one
//! response. Meant to be driven by an external load generator and compared
//! against the framework-mediated variant.

pub mod connection;
pub mod server;

pub use connection::{ConnectionError, NOT_FOUND_BODY, frame_response, handle_connection};
pub use server::serve;
