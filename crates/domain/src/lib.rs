//! Passage Domain - Core types for the authenticated request client
//!
//! This crate defines the domain model for Passage: the error taxonomy,
//! credential configuration, cached token types, and the request/response
//! shapes exchanged with the transport. All types here are pure Rust with
//! no I/O dependencies.

pub mod auth;
pub mod error;
pub mod request;
pub mod response;

pub use auth::{AccessToken, Credentials, TokenClaims};
pub use error::{Error, ErrorKind, Result};
pub use request::{BasicAuth, HttpMethod, RequestBody, RequestDescriptor};
pub use response::HttpResponse;
