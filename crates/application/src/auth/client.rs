//! The authenticated request client
//!
//! [`AuthenticatedClient`] wraps an [`HttpTransport`] with a bearer-token
//! lifecycle: before an authenticated call it refreshes the cached token
//! if stale, attaches `Authorization: Bearer <token>`, dispatches, and
//! classifies every failure into the domain error taxonomy. Nothing is
//! retried and nothing falls back to a stale token: every failure reaches
//! the caller typed by origin.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::debug;

use passage_domain::{
    AccessToken, Credentials, Error, HttpResponse, RequestDescriptor, Result,
};

use crate::auth::TokenCache;
use crate::ports::{ClaimsDecoder, Clock, HttpTransport};

/// Body of a successful token-endpoint response.
///
/// `expires_at` and `expires_in` are both optional because token servers
/// disagree on which one they send; resolution order is handled in
/// [`AuthenticatedClient::resolve_expiry`].
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// A client that transparently authenticates outgoing requests with an
/// OAuth2 client-credentials bearer token.
///
/// Each instance owns its token cache; instances never share tokens. The
/// cache sits behind a mutex held across the staleness-check-and-refresh
/// sequence, so concurrent callers trigger at most one authentication.
pub struct AuthenticatedClient<T: HttpTransport> {
    credentials: Credentials,
    transport: Arc<T>,
    clock: Arc<dyn Clock>,
    claims: Arc<dyn ClaimsDecoder>,
    cache: Mutex<TokenCache>,
}

impl<T: HttpTransport> AuthenticatedClient<T> {
    /// Creates a client with an empty token cache and the default
    /// staleness margin.
    #[must_use]
    pub fn new(
        credentials: Credentials,
        transport: Arc<T>,
        clock: Arc<dyn Clock>,
        claims: Arc<dyn ClaimsDecoder>,
    ) -> Self {
        Self {
            credentials,
            transport,
            clock,
            claims,
            cache: Mutex::new(TokenCache::new()),
        }
    }

    /// Replaces the staleness margin. Meaningful only before the first
    /// authenticated request; the cache is reset to empty.
    #[must_use]
    pub fn with_staleness_margin_seconds(mut self, margin_seconds: i64) -> Self {
        self.cache = Mutex::new(TokenCache::with_margin_seconds(margin_seconds));
        self
    }

    /// The configured credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// A snapshot of the cached token, if any, regardless of staleness.
    ///
    /// Read-only inspection surface; the cache can only be written by the
    /// authentication flow itself.
    pub async fn cached_token(&self) -> Option<AccessToken> {
        self.cache.lock().await.token().cloned()
    }

    /// Performs an HTTP call, authenticating first when the descriptor
    /// asks for it.
    ///
    /// # Errors
    ///
    /// - [`Error::Authentication`] if the token fetch fails in any way
    /// - [`Error::Client`] / [`Error::Server`] for HTTP error statuses
    /// - [`Error::Connection`] / [`Error::Timeout`] / [`Error::Request`]
    ///   for transport failures
    pub async fn request(&self, request: RequestDescriptor) -> Result<HttpResponse> {
        let request = if request.requires_auth() {
            let secret = self.refresh_if_stale().await?;
            request.set_header("Authorization", format!("Bearer {secret}"))
        } else {
            request
        };

        self.dispatch(&request).await
    }

    /// Returns the current token secret, re-authenticating when the cache
    /// is empty or stale.
    ///
    /// Holds the cache lock across the token fetch: concurrent callers
    /// observing a stale cache wait for one refresh instead of each
    /// performing their own.
    async fn refresh_if_stale(&self) -> Result<String> {
        let mut cache = self.cache.lock().await;

        if let Some(token) = cache.valid_token(self.clock.now()) {
            return Ok(token.secret().to_owned());
        }

        debug!("cached token missing or stale, authenticating");
        let token = self.authenticate().await?;
        let secret = token.secret().to_owned();
        cache.store(token);
        Ok(secret)
    }

    /// Fetches a fresh token from the token endpoint.
    ///
    /// Dispatches below the authentication gate, so the token-fetch call
    /// can never trigger another authentication.
    async fn authenticate(&self) -> Result<AccessToken> {
        debug!(endpoint = %self.credentials.token_url(), "requesting access token");

        let request = RequestDescriptor::post(self.credentials.token_url().clone())
            .form([("grant_type", "client_credentials")])
            .header("Content-Type", "application/x-www-form-urlencoded")
            .basic_auth(self.credentials.username(), self.credentials.password())
            .unauthenticated();

        let response = self.dispatch(&request).await.map_err(|err| {
            let err = err.into_authentication();
            debug!(kind = err.kind().as_str(), "token request failed");
            err
        })?;

        let parsed: TokenResponse =
            serde_json::from_str(&response.body).map_err(|err| Error::Authentication {
                status: None,
                message: format!("malformed token response: {err}"),
            })?;

        let now = self.clock.now();
        let expires_at = self.resolve_expiry(&parsed)?;
        debug!(%expires_at, "access token obtained");
        Ok(AccessToken::new(parsed.access_token, expires_at, now))
    }

    /// Resolves the token expiry by sequential fallback.
    ///
    /// Order: the server's absolute `expires_at`, then its relative
    /// `expires_in`, then the token's own unverified `exp` claim. The
    /// claim path does not check any signature; it trusts the issuer the
    /// client just spoke to.
    fn resolve_expiry(&self, response: &TokenResponse) -> Result<DateTime<Utc>> {
        if let Some(expires_at) = response.expires_at {
            return Ok(expires_at);
        }

        if let Some(expires_in) = response.expires_in {
            return i64::try_from(expires_in)
                .ok()
                .and_then(Duration::try_seconds)
                .and_then(|lifetime| self.clock.now().checked_add_signed(lifetime))
                .ok_or_else(|| Error::Authentication {
                    status: None,
                    message: format!("token lifetime out of range: {expires_in} seconds"),
                });
        }

        let claims = self
            .claims
            .decode_unverified(&response.access_token)
            .map_err(|err| Error::Authentication {
                status: None,
                message: err.to_string(),
            })?;

        claims.expires_at().ok_or_else(|| Error::Authentication {
            status: None,
            message: "token response carries no expiry and the token has no exp claim".to_string(),
        })
    }

    /// Executes one call through the transport and classifies the result.
    async fn dispatch(&self, request: &RequestDescriptor) -> Result<HttpResponse> {
        let response = self.transport.execute(request).await?;

        if response.is_client_error() {
            return Err(Error::Client {
                status: response.status,
                message: response.body,
            });
        }

        if response.is_server_error() {
            return Err(Error::Server {
                status: response.status,
                message: response.body,
            });
        }

        Ok(response)
    }
}
