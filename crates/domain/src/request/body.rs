//! Request body variants

/// Payload attached to an outgoing request.
///
/// JSON and form bodies are mutually exclusive by construction; setting
/// one replaces the other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestBody {
    /// No payload.
    #[default]
    None,
    /// A structured JSON payload.
    Json(serde_json::Value),
    /// Form-encoded key/value pairs.
    Form(Vec<(String, String)>),
}

impl RequestBody {
    /// Returns the Content-Type implied by this body, if any.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Json(_) => Some("application/json"),
            Self::Form(_) => Some("application/x-www-form-urlencoded"),
        }
    }

    /// Returns true if there is no payload.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
