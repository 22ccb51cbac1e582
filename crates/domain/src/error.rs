//! Error taxonomy for authenticated requests
//!
//! Every failure surfaced by the client is one of the variants below, so
//! callers can match exhaustively and decide their own remediation
//! (for example retry on `Connection`/`Timeout`, never on `Client`).

use thiserror::Error;

/// Failures surfaced by the authenticated request client.
///
/// Status-bearing variants carry the numeric HTTP status alongside a
/// human-readable message (the response body text for HTTP failures).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The server answered with a status in [400, 500).
    #[error("client error ({status}): {message}")]
    Client {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        message: String,
    },

    /// The server answered with a status of 500 or above.
    #[error("server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        message: String,
    },

    /// The transport could not establish or maintain a connection.
    #[error("connection error: {message}")]
    Connection {
        /// Transport error description.
        message: String,
    },

    /// The transport exceeded its time budget.
    #[error("request timed out: {message}")]
    Timeout {
        /// Transport error description.
        message: String,
    },

    /// Any other transport-level failure.
    #[error("request failed: {message}")]
    Request {
        /// Transport error description.
        message: String,
    },

    /// A failure that occurred during the internal token-fetch call.
    ///
    /// Preserves the originating status code when the token endpoint
    /// answered with an HTTP error, and the original message otherwise.
    #[error("authentication failed: {message}")]
    Authentication {
        /// HTTP status of the token endpoint response, when it answered.
        status: Option<u16>,
        /// Description of the underlying failure.
        message: String,
    },
}

/// Discriminant for [`Error`], usable where only the category matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 4xx response.
    Client,
    /// 5xx response.
    Server,
    /// Connect failure.
    Connection,
    /// Deadline exceeded.
    Timeout,
    /// Other transport failure.
    Request,
    /// Token fetch failure.
    Authentication,
}

impl ErrorKind {
    /// Returns the kind as a static string, suitable for log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
            Self::Connection => "connection",
            Self::Timeout => "timeout",
            Self::Request => "request",
            Self::Authentication => "authentication",
        }
    }
}

impl Error {
    /// Returns the discriminant for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Client { .. } => ErrorKind::Client,
            Self::Server { .. } => ErrorKind::Server,
            Self::Connection { .. } => ErrorKind::Connection,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Request { .. } => ErrorKind::Request,
            Self::Authentication { .. } => ErrorKind::Authentication,
        }
    }

    /// Returns the HTTP status code, for variants that carry one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Client { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::Authentication { status, .. } => *status,
            _ => None,
        }
    }

    /// Returns the human-readable message carried by this error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Client { message, .. }
            | Self::Server { message, .. }
            | Self::Connection { message }
            | Self::Timeout { message }
            | Self::Request { message }
            | Self::Authentication { message, .. } => message,
        }
    }

    /// Returns true if retrying the same call could plausibly succeed.
    ///
    /// Only transient transport failures qualify; HTTP error statuses and
    /// authentication failures are considered permanent.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection { .. } | Self::Timeout { .. })
    }

    /// Re-wraps a failure observed during the token-fetch call.
    ///
    /// Client/Server origins keep their status code and body text; the
    /// transport kinds keep the message only. An already-wrapped
    /// authentication error passes through unchanged.
    #[must_use]
    pub fn into_authentication(self) -> Self {
        match self {
            Self::Client { status, message } | Self::Server { status, message } => {
                Self::Authentication {
                    status: Some(status),
                    message,
                }
            }
            Self::Connection { message } | Self::Timeout { message } | Self::Request { message } => {
                Self::Authentication {
                    status: None,
                    message,
                }
            }
            wrapped @ Self::Authentication { .. } => wrapped,
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_and_status() {
        let err = Error::Client {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Client);
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.message(), "not found");

        let err = Error::Connection {
            message: "refused".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Connection);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_kind_log_field() {
        assert_eq!(ErrorKind::Authentication.as_str(), "authentication");
        assert_eq!(ErrorKind::Timeout.as_str(), "timeout");
    }

    #[test]
    fn test_retryable() {
        assert!(
            Error::Timeout {
                message: "30s elapsed".to_string()
            }
            .is_retryable()
        );
        assert!(
            Error::Connection {
                message: "refused".to_string()
            }
            .is_retryable()
        );
        assert!(
            !Error::Client {
                status: 400,
                message: "bad request".to_string()
            }
            .is_retryable()
        );
        assert!(
            !Error::Authentication {
                status: Some(401),
                message: "invalid_client".to_string()
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_wrap_http_failure_keeps_status() {
        let wrapped = Error::Client {
            status: 401,
            message: "invalid_client".to_string(),
        }
        .into_authentication();

        assert_eq!(
            wrapped,
            Error::Authentication {
                status: Some(401),
                message: "invalid_client".to_string(),
            }
        );
    }

    #[test]
    fn test_wrap_transport_failure_keeps_message_only() {
        let wrapped = Error::Timeout {
            message: "deadline exceeded".to_string(),
        }
        .into_authentication();

        assert_eq!(
            wrapped,
            Error::Authentication {
                status: None,
                message: "deadline exceeded".to_string(),
            }
        );
    }

    #[test]
    fn test_wrap_is_idempotent() {
        let original = Error::Authentication {
            status: Some(503),
            message: "unavailable".to_string(),
        };
        assert_eq!(original.clone().into_authentication(), original);
    }

    #[test]
    fn test_display() {
        let err = Error::Server {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "server error (503): overloaded");

        let err = Error::Authentication {
            status: Some(401),
            message: "invalid_client".to_string(),
        };
        assert_eq!(err.to_string(), "authentication failed: invalid_client");
    }
}
