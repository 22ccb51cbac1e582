//! HTTP transport port

use async_trait::async_trait;
use thiserror::Error;

use passage_domain::{HttpResponse, RequestDescriptor};

/// Transport-level failures, by origin.
///
/// HTTP error statuses are not transport failures: the transport reports
/// whatever status the server answered with, and classification into
/// client/server errors happens above this port.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Could not establish or maintain a connection.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The transport exceeded its time budget.
    #[error("timed out: {0}")]
    Timeout(String),

    /// Any other request-level failure.
    #[error("{0}")]
    Other(String),
}

impl From<TransportError> for passage_domain::Error {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Connection(message) => Self::Connection { message },
            TransportError::Timeout(message) => Self::Timeout { message },
            TransportError::Other(message) => Self::Request { message },
        }
    }
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing the
/// application layer to be independent of specific HTTP libraries.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Executes an HTTP request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport-level failures (connect,
    /// timeout, or other request problems), never for HTTP error
    /// statuses.
    async fn execute(&self, request: &RequestDescriptor)
    -> Result<HttpResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use passage_domain::{Error, ErrorKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_transport_error_mapping() {
        let err: Error = TransportError::Connection("refused".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::Connection);
        assert_eq!(err.message(), "refused");

        let err: Error = TransportError::Timeout("30s elapsed".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::Timeout);

        let err: Error = TransportError::Other("invalid body".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::Request);
    }
}
