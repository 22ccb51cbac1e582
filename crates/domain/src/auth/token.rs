//! Cached access token and decoded claim types

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// A cached bearer token together with its expiry.
///
/// The secret and the expiry instant travel as one value, so the cache
/// can never hold one without the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    secret: String,
    expires_at: DateTime<Utc>,
    obtained_at: DateTime<Utc>,
}

impl AccessToken {
    /// Creates a token obtained at the given instant.
    #[must_use]
    pub fn new(secret: impl Into<String>, expires_at: DateTime<Utc>, obtained_at: DateTime<Utc>) -> Self {
        Self {
            secret: secret.into(),
            expires_at,
            obtained_at,
        }
    }

    /// The opaque token string.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// When the issuer declared the token to expire.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// When this token was obtained from the token endpoint.
    #[must_use]
    pub const fn obtained_at(&self) -> DateTime<Utc> {
        self.obtained_at
    }

    /// Whether the token should be refreshed before use.
    ///
    /// A token is stale once `now` is within `margin` of its expiry, so a
    /// refresh happens slightly before the server-side boundary rather
    /// than risking an expiry mid-flight.
    #[must_use]
    pub fn is_stale(&self, margin: Duration, now: DateTime<Utc>) -> bool {
        now + margin >= self.expires_at
    }

    /// The `Authorization` header value for this token.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.secret)
    }
}

/// Claims decoded from a token payload, without signature verification.
///
/// Only the registered claims the client cares about are modelled; the
/// expiry claim is the one that matters for cache staleness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    /// Expiry as seconds since the Unix epoch (`exp`).
    #[serde(default)]
    pub exp: Option<i64>,
    /// Issued-at as seconds since the Unix epoch (`iat`).
    #[serde(default)]
    pub iat: Option<i64>,
    /// Subject (`sub`).
    #[serde(default)]
    pub sub: Option<String>,
    /// Issuer (`iss`).
    #[serde(default)]
    pub iss: Option<String>,
}

impl TokenClaims {
    /// The expiry claim as an absolute instant, when present and valid.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}
