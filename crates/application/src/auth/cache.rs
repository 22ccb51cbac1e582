//! Single-slot token cache with explicit staleness tracking
//!
//! The cache owns at most one token per client instance. It is created
//! empty, populated by the first successful authentication, and silently
//! overwritten on each re-authentication. Staleness is a pure time
//! comparison against a caller-supplied "now", so the decision is
//! auditable in isolation.

use chrono::{DateTime, Duration, Utc};

use passage_domain::AccessToken;

/// Seconds subtracted from expiry so a token is refreshed proactively
/// rather than used right up to the boundary.
pub const DEFAULT_STALENESS_MARGIN_SECONDS: i64 = 60;

/// Observable state of the cache at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenState {
    /// No token has been cached yet.
    Empty,
    /// A token is cached and outside the staleness margin.
    Valid,
    /// A token is cached but within the margin or past expiry.
    Stale,
}

/// Holds the cached token and its staleness margin.
#[derive(Debug, Clone)]
pub struct TokenCache {
    slot: Option<AccessToken>,
    margin_seconds: i64,
}

impl TokenCache {
    /// Creates an empty cache with the default staleness margin.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: None,
            margin_seconds: DEFAULT_STALENESS_MARGIN_SECONDS,
        }
    }

    /// Creates an empty cache with a custom staleness margin.
    #[must_use]
    pub const fn with_margin_seconds(margin_seconds: i64) -> Self {
        Self {
            slot: None,
            margin_seconds,
        }
    }

    /// Returns the cache state at the given instant.
    #[must_use]
    pub fn state(&self, now: DateTime<Utc>) -> TokenState {
        self.slot.as_ref().map_or(TokenState::Empty, |token| {
            if token.is_stale(Duration::seconds(self.margin_seconds), now) {
                TokenState::Stale
            } else {
                TokenState::Valid
            }
        })
    }

    /// Returns the cached token if it is valid at the given instant.
    #[must_use]
    pub fn valid_token(&self, now: DateTime<Utc>) -> Option<&AccessToken> {
        match self.state(now) {
            TokenState::Valid => self.slot.as_ref(),
            TokenState::Empty | TokenState::Stale => None,
        }
    }

    /// Returns the cached token regardless of staleness, for inspection.
    #[must_use]
    pub const fn token(&self) -> Option<&AccessToken> {
        self.slot.as_ref()
    }

    /// Stores a freshly obtained token, replacing any previous one.
    pub fn store(&mut self, token: AccessToken) {
        self.slot = Some(token);
    }

    /// The configured staleness margin in seconds.
    #[must_use]
    pub const fn margin_seconds(&self) -> i64 {
        self.margin_seconds
    }
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new()
    }
}
