//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port with the reqwest
//! library. It handles all HTTP communication for the client and maps
//! reqwest's failure modes onto the transport error taxonomy.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Method};
use tracing::trace;

use passage_application::ports::{HttpTransport, TransportError};
use passage_domain::{HttpMethod, HttpResponse, RequestBody, RequestDescriptor};

/// Default overall time budget per request.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport implementation using reqwest.
///
/// Wraps `reqwest::Client` and implements the `HttpTransport` port from
/// the application layer. HTTP error statuses are reported as responses,
/// never as errors; only transport-level failures become errors here.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with default settings.
    ///
    /// Default configuration:
    /// - Request timeout: 30 seconds
    /// - TLS verification: enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("Passage/", env!("CARGO_PKG_VERSION")))
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a transport around a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts a domain `HttpMethod` to a reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Options => Method::OPTIONS,
        }
    }

    /// Attaches the request payload to the builder.
    fn build_body(
        builder: reqwest::RequestBuilder,
        request: &RequestDescriptor,
    ) -> Result<reqwest::RequestBuilder, TransportError> {
        match request.body() {
            RequestBody::None => Ok(builder),

            RequestBody::Json(value) => Ok(builder.json(value)),

            RequestBody::Form(fields) => {
                let encoded = serde_urlencoded::to_string(fields)
                    .map_err(|e| TransportError::Other(format!("failed to encode form: {e}")))?;
                Ok(builder.body(encoded))
            }
        }
    }

    /// Maps a reqwest error to the transport error taxonomy.
    fn map_error(error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout(error.to_string());
        }

        if error.is_connect() {
            return TransportError::Connection(error.to_string());
        }

        TransportError::Other(error.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        request: &RequestDescriptor,
    ) -> Result<HttpResponse, TransportError> {
        trace!(method = %request.method(), url = %request.url(), "dispatching request");

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method()), request.url().clone());

        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }

        // Content-Type implied by the body, unless the caller set one.
        if let Some(content_type) = request.body().content_type()
            && request.header_value("content-type").is_none()
        {
            builder = builder.header("Content-Type", content_type);
        }

        if let Some(basic) = request.basic_credentials() {
            builder = builder.basic_auth(basic.username(), Some(basic.password()));
        }

        builder = Self::build_body(builder, request)?;

        let started = Instant::now();

        let response = builder.send().await.map_err(|e| Self::map_error(&e))?;

        let status = response.status().as_u16();

        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Other(format!("failed to read body: {e}")))?;

        Ok(HttpResponse::new(
            status,
            headers,
            body.to_vec(),
            started.elapsed(),
        ))
    }
}
