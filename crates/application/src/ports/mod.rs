//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the client core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure crate, or by a mock in tests.

mod claims_decoder;
mod clock;
mod http_transport;

pub use claims_decoder::{ClaimsDecoder, ClaimsError};
pub use clock::Clock;
pub use http_transport::{HttpTransport, TransportError};
