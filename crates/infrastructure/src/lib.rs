//! Passage Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: a reqwest-backed transport, the system clock,
//! and unverified JWT claims decoding.

pub mod adapters;

pub use adapters::{ReqwestTransport, SystemClock, UnverifiedJwtDecoder};

use std::sync::Arc;

use passage_application::{AuthenticatedClient, TransportError};
use passage_domain::Credentials;

/// The authenticated client wired with the default adapters.
pub type Client = AuthenticatedClient<ReqwestTransport>;

/// Builds an authenticated client from credentials, using reqwest for
/// transport, the system clock, and unverified JWT decoding for the
/// expiry fallback.
///
/// # Errors
///
/// Returns an error if the underlying HTTP client cannot be constructed.
pub fn client(credentials: Credentials) -> Result<Client, TransportError> {
    Ok(AuthenticatedClient::new(
        credentials,
        Arc::new(ReqwestTransport::new()?),
        Arc::new(SystemClock::new()),
        Arc::new(UnverifiedJwtDecoder),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn test_default_wiring() {
        let credentials = Credentials::new(
            "service-a",
            "s3cret",
            Url::parse("https://auth.example.com/token").unwrap(),
        );
        let client = client(credentials);
        assert!(client.is_ok());
    }
}
