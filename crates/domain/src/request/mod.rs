//! Request descriptor types
//!
//! A [`RequestDescriptor`] is a transient value describing one outgoing
//! call: method, target URL, optional payload, extra headers, an optional
//! basic-auth override, and whether the authentication gate applies.

mod body;
mod method;

pub use body::RequestBody;
pub use method::HttpMethod;

use url::Url;

/// Basic-auth credentials attached to a single request.
///
/// Used by the client for the token-endpoint call; callers may also set
/// it explicitly on their own requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    /// Creates a basic-auth pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Description of one outgoing HTTP call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    method: HttpMethod,
    url: Url,
    headers: Vec<(String, String)>,
    body: RequestBody,
    basic_auth: Option<BasicAuth>,
    requires_auth: bool,
}

impl RequestDescriptor {
    /// Creates a descriptor with no payload, no extra headers, and the
    /// authentication gate enabled.
    #[must_use]
    pub fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: RequestBody::None,
            basic_auth: None,
            requires_auth: true,
        }
    }

    /// Shorthand for a GET descriptor.
    #[must_use]
    pub fn get(url: Url) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Shorthand for a POST descriptor.
    #[must_use]
    pub fn post(url: Url) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    /// Sets a JSON payload, replacing any existing body.
    #[must_use]
    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = RequestBody::Json(value);
        self
    }

    /// Sets a form-encoded payload, replacing any existing body.
    #[must_use]
    pub fn form<K, V>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.body = RequestBody::Form(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Appends a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets a header, replacing any existing entries with the same name
    /// (compared case-insensitively).
    #[must_use]
    pub fn set_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// Sets a basic-auth override for this request.
    #[must_use]
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some(BasicAuth::new(username, password));
        self
    }

    /// Disables the authentication gate for this request.
    #[must_use]
    pub const fn unauthenticated(mut self) -> Self {
        self.requires_auth = false;
        self
    }

    /// The HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// The target URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// The extra headers, in insertion order.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Looks up a header value by name, case-insensitively.
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The request payload.
    #[must_use]
    pub const fn body(&self) -> &RequestBody {
        &self.body
    }

    /// The basic-auth override, if any.
    #[must_use]
    pub const fn basic_credentials(&self) -> Option<&BasicAuth> {
        self.basic_auth.as_ref()
    }

    /// Whether the authentication gate applies to this request.
    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        self.requires_auth
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn target() -> Url {
        Url::parse("https://api.example.com/things").unwrap()
    }

    #[test]
    fn test_defaults() {
        let request = RequestDescriptor::get(target());

        assert_eq!(request.method(), HttpMethod::Get);
        assert!(request.headers().is_empty());
        assert!(request.body().is_none());
        assert!(request.basic_credentials().is_none());
        assert!(request.requires_auth());
    }

    #[test]
    fn test_builder_chain() {
        let request = RequestDescriptor::post(target())
            .form([("grant_type", "client_credentials")])
            .header("Content-Type", "application/x-www-form-urlencoded")
            .basic_auth("user", "pass")
            .unauthenticated();

        assert_eq!(request.method(), HttpMethod::Post);
        assert_eq!(
            request.body(),
            &RequestBody::Form(vec![(
                "grant_type".to_string(),
                "client_credentials".to_string()
            )])
        );
        assert_eq!(
            request.header_value("content-type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(
            request.basic_credentials().map(BasicAuth::username),
            Some("user")
        );
        assert!(!request.requires_auth());
    }

    #[test]
    fn test_body_is_replaced_not_stacked() {
        let request = RequestDescriptor::post(target())
            .json(serde_json::json!({"a": 1}))
            .form([("k", "v")]);

        assert!(matches!(request.body(), RequestBody::Form(_)));
    }

    #[test]
    fn test_set_header_replaces_existing_entries() {
        let request = RequestDescriptor::get(target())
            .header("Authorization", "Bearer old")
            .header("Accept", "application/json")
            .set_header("authorization", "Bearer new");

        assert_eq!(
            request.headers(),
            &[
                ("Accept".to_string(), "application/json".to_string()),
                ("authorization".to_string(), "Bearer new".to_string()),
            ]
        );
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = RequestDescriptor::get(target()).header("Authorization", "Bearer tok");
        assert_eq!(request.header_value("AUTHORIZATION"), Some("Bearer tok"));
        assert_eq!(request.header_value("X-Missing"), None);
    }
}
