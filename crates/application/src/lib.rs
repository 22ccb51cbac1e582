//! Passage Application - token lifecycle and request dispatch
//!
//! This crate defines:
//! - Port traits for the external collaborators (HTTP transport, token
//!   claims decoding, current time)
//! - The token cache with its explicit staleness check
//! - The [`AuthenticatedClient`] that obtains, caches, and attaches
//!   bearer tokens to outgoing requests

pub mod auth;
pub mod ports;

pub use auth::{AuthenticatedClient, DEFAULT_STALENESS_MARGIN_SECONDS, TokenCache, TokenState};
pub use ports::{ClaimsDecoder, ClaimsError, Clock, HttpTransport, TransportError};
