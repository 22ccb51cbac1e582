//! Client-credentials configuration

use url::Url;

/// Immutable credential configuration for the client-credentials grant.
///
/// Set once at construction; the client never mutates it. The token
/// endpoint is a parsed [`Url`] so an invalid endpoint is rejected before
/// any request is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
    token_url: Url,
}

impl Credentials {
    /// Creates a new credential configuration.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>, token_url: Url) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            token_url,
        }
    }

    /// The username presented to the token endpoint via basic auth.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The password presented to the token endpoint via basic auth.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The token endpoint URL.
    #[must_use]
    pub const fn token_url(&self) -> &Url {
        &self.token_url
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_credentials_accessors() {
        let url = Url::parse("https://auth.example.com/token").unwrap();
        let credentials = Credentials::new("service-a", "s3cret", url.clone());

        assert_eq!(credentials.username(), "service-a");
        assert_eq!(credentials.password(), "s3cret");
        assert_eq!(credentials.token_url(), &url);
    }
}
