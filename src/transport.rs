//! HTTP transport for single-username fetches.

mod http;

pub use http::{HttpTransport, TransportError, DEFAULT_BASE_URL};
