//! Token claims decoding port

use thiserror::Error;

use passage_domain::TokenClaims;

/// Failure to read claims out of a token string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to decode token claims: {0}")]
pub struct ClaimsError(String);

impl ClaimsError {
    /// Creates a decode error with the given description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Port for decoding a token's own claims without verifying it.
///
/// Used as the last-resort source of a token's expiry when the token
/// endpoint does not say. This is a trust-the-issuer shortcut, not a
/// security boundary: implementations must not be assumed to check any
/// signature.
pub trait ClaimsDecoder: Send + Sync {
    /// Decodes the claims carried by `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not in a decodable format.
    fn decode_unverified(&self, token: &str) -> Result<TokenClaims, ClaimsError>;
}
